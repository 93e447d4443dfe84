use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use stockpile_core::{DomainError, DomainResult, Entity, Page, PageRequest};

use crate::store::EntityStore;

/// Generic lifecycle operations shared by every entity service:
/// `find_by_id`, `find_all`, merge-update and soft-delete.
///
/// Implemented once over the store seam; the per-entity services add their
/// creation rules and business operations on top.
pub struct Lifecycle<T, S> {
    store: Arc<S>,
    /// Noun used in `NotFound` errors, e.g. "item".
    entity: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T, S> Lifecycle<T, S>
where
    T: Entity + Clone,
    S: EntityStore<T>,
{
    pub fn new(store: Arc<S>, entity: &'static str) -> Self {
        Self {
            store,
            entity,
            _marker: PhantomData,
        }
    }

    pub fn find_by_id(&self, id: T::Id) -> DomainResult<T> {
        self.store
            .get(id)?
            .ok_or_else(|| DomainError::not_found(self.entity))
    }

    pub fn find_all(&self, request: PageRequest) -> DomainResult<Page<T>> {
        self.store.page(request)
    }

    /// Merge an update onto the stored entity and re-persist it.
    pub fn update_with(
        &self,
        id: T::Id,
        merge: impl FnOnce(&mut T) -> DomainResult<()>,
    ) -> DomainResult<T> {
        let mut entity = self.find_by_id(id)?;
        merge(&mut entity)?;
        self.store.put(entity.clone())?;
        Ok(entity)
    }

    /// Stamp `deleted_at` and re-persist; the row stays in storage.
    pub fn soft_delete(&self, id: T::Id, at: DateTime<Utc>) -> DomainResult<()> {
        let mut entity = self.find_by_id(id)?;
        entity.set_deleted_at(Some(at));
        self.store.put(entity)
    }
}

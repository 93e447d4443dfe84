use std::sync::RwLock;

use stockpile_core::{DomainError, DomainResult, Entity, Page, PageRequest};

use super::EntityStore;

/// In-memory entity store.
///
/// Rows live in a `Vec` in insertion order; soft-deleted rows stay in place
/// and are filtered out of every read path except [`EntityStore::get_raw`].
/// Intended for tests/dev and the single-store deployment model. Not
/// optimized for large row counts.
#[derive(Debug, Default)]
pub struct InMemoryStore<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T> InMemoryStore<T>
where
    T: Entity,
{
    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, Vec<T>>> {
        self.rows
            .read()
            .map_err(|_| DomainError::busy("store lock poisoned"))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, Vec<T>>> {
        self.rows
            .write()
            .map_err(|_| DomainError::busy("store lock poisoned"))
    }
}

impl<T> EntityStore<T> for InMemoryStore<T>
where
    T: Entity + Clone + Send + Sync,
{
    fn insert(&self, entity: T) -> DomainResult<()> {
        let mut rows = self.write()?;
        if rows.iter().any(|r| r.id() == entity.id()) {
            return Err(DomainError::conflict(format!(
                "duplicate row id {:?}",
                entity.id()
            )));
        }
        rows.push(entity);
        Ok(())
    }

    fn get(&self, id: T::Id) -> DomainResult<Option<T>> {
        let rows = self.read()?;
        Ok(rows
            .iter()
            .find(|r| r.id() == id && !r.is_deleted())
            .cloned())
    }

    fn get_raw(&self, id: T::Id) -> DomainResult<Option<T>> {
        let rows = self.read()?;
        Ok(rows.iter().find(|r| r.id() == id).cloned())
    }

    fn put(&self, entity: T) -> DomainResult<()> {
        let mut rows = self.write()?;
        match rows.iter_mut().find(|r| r.id() == entity.id()) {
            Some(row) => {
                *row = entity;
                Ok(())
            }
            None => Err(DomainError::conflict(format!(
                "put of unknown row id {:?}",
                entity.id()
            ))),
        }
    }

    fn page(&self, request: PageRequest) -> DomainResult<Page<T>> {
        let rows = self.read()?;
        let live: Vec<&T> = rows.iter().filter(|r| !r.is_deleted()).collect();
        let total = live.len();
        let items = live
            .into_iter()
            .skip(request.offset())
            .take(request.page_size)
            .cloned()
            .collect();
        Ok(Page::new(items, request, total))
    }

    fn find_first(&self, pred: &dyn Fn(&T) -> bool) -> DomainResult<Option<T>> {
        let rows = self.read()?;
        Ok(rows
            .iter()
            .find(|r| !r.is_deleted() && pred(r))
            .cloned())
    }

    fn last(&self) -> DomainResult<Option<T>> {
        let rows = self.read()?;
        Ok(rows.iter().rev().find(|r| !r.is_deleted()).cloned())
    }

    fn count(&self) -> DomainResult<usize> {
        let rows = self.read()?;
        Ok(rows.iter().filter(|r| !r.is_deleted()).count())
    }
}

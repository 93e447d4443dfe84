//! Storage seam: CRUD + pagination + soft-delete filtering per entity type.

mod in_memory;

pub use in_memory::InMemoryStore;

use stockpile_core::{DomainResult, Entity, Page, PageRequest};

/// Durable entity storage with soft-delete semantics.
///
/// All read paths except [`EntityStore::get_raw`] exclude soft-deleted rows.
/// Rows are kept in insertion order; that order is the stable listing order
/// and defines which entity is "newest".
pub trait EntityStore<T: Entity>: Send + Sync {
    /// Insert a new entity. The id must not be present yet.
    fn insert(&self, entity: T) -> DomainResult<()>;

    /// Fetch a live entity.
    fn get(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// Fetch regardless of the soft-delete marker (audit access).
    fn get_raw(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// Replace the stored entity with the same id.
    fn put(&self, entity: T) -> DomainResult<()>;

    /// Page over live entities in insertion order.
    fn page(&self, request: PageRequest) -> DomainResult<Page<T>>;

    /// First live entity matching the predicate, in insertion order.
    fn find_first(&self, pred: &dyn Fn(&T) -> bool) -> DomainResult<Option<T>>;

    /// Newest live entity.
    fn last(&self) -> DomainResult<Option<T>>;

    /// Number of live entities.
    fn count(&self) -> DomainResult<usize>;
}

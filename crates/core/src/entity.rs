//! Entity trait: identity + continuity across state changes.

use chrono::{DateTime, Utc};

/// Entity marker + minimal interface.
///
/// Every persisted entity carries a stable identifier and a soft-delete
/// marker. "Deleted" entities stay in storage (audit trail) and are excluded
/// from lookups by the store, never physically removed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Soft-delete timestamp, `None` while the entity is live.
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Stamp or clear the soft-delete marker.
    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>);

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

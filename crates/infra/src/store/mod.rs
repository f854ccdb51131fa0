//! Classroom Store boundary.
//!
//! The store is a keyed record service. `add_member`/`remove_member` are
//! atomic set primitives — idempotent add, silent no-op remove — so a roster
//! update never round-trips a read-modify-write through this process and
//! concurrent updates to the same roster cannot lose entries or duplicate an
//! id.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryClassroomStore;
pub use r#trait::{ClassroomStore, StoreError};

//! Infrastructure layer: external collaborator ports and orchestration.
//!
//! Campus does not own its tenant/user data or its calendar; those live in
//! sibling services. Each collaborator is an async port trait with an
//! in-memory adapter (tests, dev wiring); production adapters plug in behind
//! the same traits.

pub mod directory;
pub mod schedule;
pub mod service;
pub mod store;

pub use directory::{Directory, DirectoryError, InMemoryDirectory, Tenant, User};
pub use schedule::{CreateEvent, InMemoryScheduler, ScheduleError, ScheduleService};
pub use service::{ClassroomListing, ClassroomService, ServiceError, TenantRule};
pub use store::{ClassroomStore, InMemoryClassroomStore, StoreError};

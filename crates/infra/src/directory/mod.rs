//! Tenant/User Directory boundary.
//!
//! Answers "does tenant T exist and who administers it" and "does user U
//! exist and which tenants is U a member of". Read-only from this service's
//! point of view.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryDirectory;
pub use r#trait::{Directory, DirectoryError, Tenant, User};

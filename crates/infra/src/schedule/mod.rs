//! Scheduling Service boundary.
//!
//! Campus never expands occurrences itself; it forwards a normalized
//! [`campus_classrooms::RecurrenceSpec`] and surfaces the collaborator's
//! outcome transparently, error payload included.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryScheduler;
pub use r#trait::{CreateEvent, ScheduleError, ScheduleService};

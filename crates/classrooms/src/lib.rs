//! `campus-classrooms` — classroom domain types and pure domain logic.
//!
//! Mutation and role resolution against external systems live in
//! `campus-infra`; this crate owns the record shapes, their invariants, and
//! the recurrence normalization handed to the scheduling collaborator.

pub mod classroom;
pub mod recurrence;

pub use classroom::{Classroom, ClassroomSummary, ClassroomView, ForumPost, MemberKind, RosterSummary};
pub use recurrence::{Frequency, RecurrenceSpec};

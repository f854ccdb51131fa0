//! `campus-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: token claims
//! are validated as deterministic functions of `now`, and role resolution is
//! a pure fold over views the caller has already fetched.

pub mod claims;
pub mod jwt;
pub mod resolve;
pub mod role;

pub use claims::{Caller, JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator};
pub use resolve::{MembershipView, resolve_role};
pub use role::EffectiveRole;

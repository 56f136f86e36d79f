//! Domain models with validation at the boundary
//!
//! Candidate records are checked before they reach the store.
//! Invalid input returns ValidationError, not panic.

pub mod employee;
pub mod validation;

pub use employee::{Employee, NewEmployee};
pub use validation::ValidationError;

//! Policy layer (prefix rules, first-match registry, reusable decisions).
//!
//! Policies are built programmatically at startup, collected into a
//! [`PolicyRegistry`], and then shared read-only across request tasks.

pub mod access;
pub mod checks;
pub mod registry;

pub use access::{AccessPolicy, Decide};
pub use registry::PolicyRegistry;

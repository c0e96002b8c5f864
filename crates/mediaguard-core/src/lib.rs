//! mediaguard core: path-based access policies and the registry that resolves them.
//!
//! This crate holds the decision engine only. It knows nothing about HTTP,
//! files, or how a caller was authenticated; the embedding application hands
//! it an opaque decision context and a normalized media path, and gets back a
//! boolean (or the decision's own failure, untouched).
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A policy that fails must surface as an error the caller can see, never as
//! a crash and never as a silent allow or deny.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;
pub mod principal;

/// Shared result type.
pub use error::{DecisionError, MediaGuardError, Result};
pub use policy::{AccessPolicy, Decide, PolicyRegistry};
pub use principal::Principal;

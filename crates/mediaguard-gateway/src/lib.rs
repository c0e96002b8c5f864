//! mediaguard gateway library entry.
//!
//! This crate wires configuration, identity resolution, the policy guard,
//! and static media serving into an axum router. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod config;
pub mod context;
pub mod guard;
pub mod media_policies;
pub mod obs;
pub mod ops;
pub mod router;

//! Top-level facade crate for mediaguard.
//!
//! Re-exports the policy engine and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use mediaguard_core::*;
}

pub mod gateway {
    pub use mediaguard_gateway::*;
}

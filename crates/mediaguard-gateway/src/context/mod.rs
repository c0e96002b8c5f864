//! Per-request decision context and how it is derived from request headers.
//!
//! The policy engine treats the context as opaque; it only reaches the
//! reusable checks through [`mediaguard_core::Principal`].

pub mod identity;

pub use identity::{Identity, IdentityResolver, RequestContext, TicketResolver};

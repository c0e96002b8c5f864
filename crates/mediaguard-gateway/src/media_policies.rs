//! Policy set for the media tree, registered once at startup.
//!
//! - `images/`   : signed-in users
//! - `profiles/` : owner only (`profiles/{username}/...`)
//! - `staff/`    : holders of the `staff` role
//!
//! Everything else falls through to `default_allow`.

use mediaguard_core::policy::checks::{Authenticated, HasRole, OwnerSegment};
use mediaguard_core::{AccessPolicy, PolicyRegistry};

use crate::context::RequestContext;

pub const STAFF_ROLE: &str = "staff";

pub fn build_registry(default_allow: bool) -> PolicyRegistry<RequestContext> {
    let mut registry = PolicyRegistry::new(default_allow);
    registry.register(AccessPolicy::with_decision(["images/"], Authenticated));
    registry.register(AccessPolicy::with_decision(
        ["profiles/"],
        OwnerSegment::new("profiles/"),
    ));
    registry.register(AccessPolicy::with_decision(["staff/"], HasRole::new(STAFF_ROLE)));
    registry
}

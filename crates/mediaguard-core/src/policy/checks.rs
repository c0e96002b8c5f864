//! Reusable decisions over any [`Principal`] context.
//!
//! These cover the common media rules (signed-in only, owner-only folders,
//! role gates) so applications rarely need a hand-written closure.

use crate::error::DecisionError;
use crate::principal::Principal;

use super::access::Decide;

/// Allow only authenticated callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticated;

impl<C: Principal + ?Sized> Decide<C> for Authenticated {
    fn decide(&self, ctx: &C, _path: &str) -> Result<bool, DecisionError> {
        Ok(ctx.is_authenticated())
    }
}

/// Allow only `{namespace}{username}/...` for the caller's own username.
///
/// `OwnerSegment::new("profiles/")` lets jane read `profiles/jane/avatar.png`
/// but not `profiles/john/avatar.png`, nor `profiles/jane` itself.
#[derive(Debug, Clone)]
pub struct OwnerSegment {
    namespace: String,
}

impl OwnerSegment {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl<C: Principal + ?Sized> Decide<C> for OwnerSegment {
    fn decide(&self, ctx: &C, path: &str) -> Result<bool, DecisionError> {
        let Some(user) = ctx.username().filter(|u| !u.is_empty()) else {
            return Ok(false);
        };
        Ok(path
            .strip_prefix(self.namespace.as_str())
            .and_then(|rest| rest.strip_prefix(user))
            .is_some_and(|rest| rest.starts_with('/')))
    }
}

/// Allow callers holding a specific role.
#[derive(Debug, Clone)]
pub struct HasRole {
    role: String,
}

impl HasRole {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

impl<C: Principal + ?Sized> Decide<C> for HasRole {
    fn decide(&self, ctx: &C, _path: &str) -> Result<bool, DecisionError> {
        Ok(ctx.has_role(&self.role))
    }
}

/// Constant allow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Allow;

impl<C: ?Sized> Decide<C> for Allow {
    fn decide(&self, _ctx: &C, _path: &str) -> Result<bool, DecisionError> {
        Ok(true)
    }
}

/// Constant deny.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deny;

impl<C: ?Sized> Decide<C> for Deny {
    fn decide(&self, _ctx: &C, _path: &str) -> Result<bool, DecisionError> {
        Ok(false)
    }
}

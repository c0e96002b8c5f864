use std::fmt;

use crate::error::DecisionError;

use super::access::AccessPolicy;

/// Ordered set of policies. The first policy whose prefixes match a path
/// governs it; `default_allow` applies when none do.
///
/// Build it during startup, then share it (e.g. via `Arc`) for reads.
pub struct PolicyRegistry<C: ?Sized> {
    policies: Vec<AccessPolicy<C>>,
    default_allow: bool,
}

impl<C: ?Sized> PolicyRegistry<C> {
    pub fn new(default_allow: bool) -> Self {
        Self {
            policies: Vec::new(),
            default_allow,
        }
    }

    /// Registry pre-seeded with `policies`, kept in iteration order.
    pub fn with_policies<I>(policies: I, default_allow: bool) -> Self
    where
        I: IntoIterator<Item = AccessPolicy<C>>,
    {
        Self {
            policies: policies.into_iter().collect(),
            default_allow,
        }
    }

    /// Append a policy. Overlapping prefixes are legal; earlier registrations win.
    pub fn register(&mut self, policy: AccessPolicy<C>) {
        self.policies.push(policy);
    }

    pub fn default_allow(&self) -> bool {
        self.default_allow
    }

    pub fn policies(&self) -> &[AccessPolicy<C>] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// First policy, in registration order, whose prefixes match `path`.
    pub fn policy_for_path(&self, path: &str) -> Option<&AccessPolicy<C>> {
        self.policies.iter().find(|p| p.matches(path))
    }

    /// Decide `path` for `ctx`.
    ///
    /// Only the governing policy is consulted. A failing decision is returned
    /// unchanged; it is never folded into allow or deny.
    pub fn is_allowed(&self, ctx: &C, path: &str) -> Result<bool, DecisionError> {
        match self.policy_for_path(path) {
            Some(policy) => policy.is_allowed(ctx, path),
            None => {
                tracing::trace!(path, default_allow = self.default_allow, "no policy matched");
                Ok(self.default_allow)
            }
        }
    }
}

impl<C: ?Sized> Default for PolicyRegistry<C> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<C: ?Sized> Clone for PolicyRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            policies: self.policies.clone(),
            default_allow: self.default_allow,
        }
    }
}

impl<C: ?Sized> fmt::Debug for PolicyRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyRegistry")
            .field("policies", &self.policies)
            .field("default_allow", &self.default_allow)
            .finish()
    }
}

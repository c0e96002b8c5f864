use std::fmt;
use std::sync::Arc;

use crate::error::DecisionError;

/// Capability that decides whether a context may read a path.
///
/// Implemented for closures `Fn(&C, &str) -> Result<bool, DecisionError>` and
/// for small value types such as those in [`super::checks`]. A returned error
/// is a policy bug; it travels back to the caller untouched.
pub trait Decide<C: ?Sized>: Send + Sync {
    fn decide(&self, ctx: &C, path: &str) -> Result<bool, DecisionError>;
}

impl<C: ?Sized, F> Decide<C> for F
where
    F: Fn(&C, &str) -> Result<bool, DecisionError> + Send + Sync,
{
    fn decide(&self, ctx: &C, path: &str) -> Result<bool, DecisionError> {
        self(ctx, path)
    }
}

/// A single rule: the path prefixes it governs plus the decision applied to them.
///
/// Immutable once built. Cloning shares the decision.
pub struct AccessPolicy<C: ?Sized> {
    prefixes: Vec<String>,
    decision: Arc<dyn Decide<C>>,
}

impl<C: ?Sized + 'static> AccessPolicy<C> {
    /// Policy with an infallible predicate.
    pub fn new<P, S, F>(prefixes: P, check: F) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&C, &str) -> bool + Send + Sync + 'static,
    {
        Self::with_decision(prefixes, move |ctx: &C, path: &str| -> Result<bool, DecisionError> {
            Ok(check(ctx, path))
        })
    }

    /// Policy with a predicate that may fail. Its error reaches the caller as-is.
    pub fn try_new<P, S, F, E>(prefixes: P, check: F) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&C, &str) -> std::result::Result<bool, E> + Send + Sync + 'static,
        E: Into<DecisionError>,
    {
        Self::with_decision(prefixes, move |ctx: &C, path: &str| -> Result<bool, DecisionError> {
            check(ctx, path).map_err(Into::into)
        })
    }

    /// Policy backed by any [`Decide`] implementation.
    pub fn with_decision<P, S, D>(prefixes: P, decision: D) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
        D: Decide<C> + 'static,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            decision: Arc::new(decision),
        }
    }
}

impl<C: ?Sized> AccessPolicy<C> {
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// True iff `path` starts with one of the prefixes (byte-exact, anchored at 0).
    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Run the decision and return its verdict verbatim.
    pub fn is_allowed(&self, ctx: &C, path: &str) -> Result<bool, DecisionError> {
        self.decision.decide(ctx, path)
    }
}

impl<C: ?Sized> Clone for AccessPolicy<C> {
    fn clone(&self) -> Self {
        Self {
            prefixes: self.prefixes.clone(),
            decision: Arc::clone(&self.decision),
        }
    }
}

impl<C: ?Sized> fmt::Debug for AccessPolicy<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessPolicy")
            .field("prefixes", &self.prefixes)
            .finish_non_exhaustive()
    }
}

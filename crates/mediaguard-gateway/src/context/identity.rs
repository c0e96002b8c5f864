use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::{header, HeaderMap};

use mediaguard_core::error::{MediaGuardError, Result};
use mediaguard_core::Principal;

use crate::config::IdentityConfig;

/// Resolved caller identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub roles: Vec<String>,
}

/// Decision context handed to every policy.
/// Anonymous callers carry no identity.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    identity: Option<Identity>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }
}

impl Principal for RequestContext {
    fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    fn username(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.username.as_str())
    }

    fn has_role(&self, role: &str) -> bool {
        self.identity
            .as_ref()
            .is_some_and(|i| i.roles.iter().any(|r| r == role))
    }
}

/// Builds the decision context for an incoming request.
///
/// Resolution may do I/O (session stores, token introspection), hence async.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, headers: &HeaderMap) -> Result<RequestContext>;
}

/// Resolves `Authorization: Bearer <ticket>` against the configured ticket table.
///
/// No header means anonymous. A header that is malformed or names an unknown
/// ticket is an auth failure.
#[derive(Debug, Default)]
pub struct TicketResolver {
    tickets: HashMap<String, Identity>,
}

impl TicketResolver {
    /// Ticket table from validated config (tickets are unique there).
    pub fn new(identities: &[IdentityConfig]) -> Self {
        let tickets = identities
            .iter()
            .map(|id| {
                let identity = Identity {
                    username: id.username.clone(),
                    roles: id.roles.clone(),
                };
                (id.ticket.clone(), identity)
            })
            .collect();
        Self { tickets }
    }

    pub fn lookup(&self, ticket: &str) -> Result<Identity> {
        self.tickets.get(ticket).cloned().ok_or(MediaGuardError::AuthFailed)
    }
}

#[async_trait]
impl IdentityResolver for TicketResolver {
    async fn resolve(&self, headers: &HeaderMap) -> Result<RequestContext> {
        let Some(raw) = headers.get(header::AUTHORIZATION) else {
            return Ok(RequestContext::anonymous());
        };

        let ticket = raw
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(MediaGuardError::AuthFailed)?;

        self.lookup(ticket).map(RequestContext::authenticated)
    }
}

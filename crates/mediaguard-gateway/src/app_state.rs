//! Shared application state for the mediaguard gateway.
//!
//! The policy registry is injected by the caller (built at startup) and is
//! read-only for the lifetime of the state.

use std::sync::Arc;

use mediaguard_core::PolicyRegistry;

use crate::config::GatewayConfig;
use crate::context::{IdentityResolver, RequestContext, TicketResolver};
use crate::obs::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    registry: PolicyRegistry<RequestContext>,
    resolver: Arc<dyn IdentityResolver>,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build state with the config's ticket table as identity source.
    /// `cfg` is expected to have passed `GatewayConfig::validate`.
    pub fn new(cfg: GatewayConfig, registry: PolicyRegistry<RequestContext>) -> Self {
        let resolver = TicketResolver::new(&cfg.identities);
        if registry.default_allow() != cfg.media.default_allow {
            tracing::warn!(
                registry = registry.default_allow(),
                config = cfg.media.default_allow,
                "registry default differs from media.default_allow; registry wins"
            );
        }
        Self::with_resolver(cfg, registry, Arc::new(resolver))
    }

    /// Build state with a custom identity source.
    pub fn with_resolver(
        cfg: GatewayConfig,
        registry: PolicyRegistry<RequestContext>,
        resolver: Arc<dyn IdentityResolver>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                resolver,
                metrics: GatewayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &PolicyRegistry<RequestContext> {
        &self.inner.registry
    }

    pub fn resolver(&self) -> &dyn IdentityResolver {
        self.inner.resolver.as_ref()
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}

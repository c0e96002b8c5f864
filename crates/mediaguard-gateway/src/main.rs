//! mediaguard gateway
//!
//! - Media endpoint: {media.url_prefix}/<path>, gated by the policy registry
//! - Ops endpoints: /healthz, /metrics
//! - Config file: $MEDIAGUARD_CONFIG (default `mediaguard.yaml`)

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use mediaguard_gateway::{app_state, config, media_policies, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file(config::default_path()).expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    // Policies are fixed before the listener opens; the registry is read-only afterwards.
    let registry = media_policies::build_registry(cfg.media.default_allow);
    tracing::info!(
        policies = registry.len(),
        default_allow = registry.default_allow(),
        "policy registry built"
    );

    let state = app_state::AppState::new(cfg, registry);
    let app = router::build_router(state);

    tracing::info!(%listen, "mediaguard-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}

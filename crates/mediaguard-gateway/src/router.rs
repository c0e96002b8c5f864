//! Axum router wiring.
//!
//! - `{media.url_prefix}/*` : guarded static media (GET/HEAD only)
//! - `/healthz`, `/metrics` : ops

use axum::{
    middleware,
    routing::{get, get_service, MethodRouter},
    Router,
};
use tower_http::services::ServeDir;

use crate::{app_state::AppState, guard, ops};

pub fn build_router(state: AppState) -> Router {
    let media = ServeDir::new(&state.cfg().media.root).append_index_html_on_directories(false);

    // Guard sits in front of the file service; nest_service strips the prefix first.
    let guarded: Router = Router::new()
        .fallback_service(media)
        .layer(middleware::from_fn_with_state(state.clone(), guard::secure_media_path));

    // Method check runs before the guard, so every non-GET/HEAD request gets
    // the same 405 whether the path is restricted, missing, or malformed.
    let media_tree: MethodRouter = get_service(guarded);

    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .nest_service(&state.cfg().media.url_prefix, media_tree)
        .with_state(state)
}

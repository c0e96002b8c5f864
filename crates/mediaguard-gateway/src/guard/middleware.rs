use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use mediaguard_core::error::{ClientCode, MediaGuardError};
use mediaguard_core::Principal;

use crate::app_state::AppState;

use super::path::media_path;

/// Guard middleware for media handlers.
///
/// Wrap any router or service with
/// `axum::middleware::from_fn_with_state(state, secure_media_path)`. On allow
/// the resolved [`crate::context::RequestContext`] is inserted into request
/// extensions for the inner handler.
pub async fn secure_media_path(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(path) = media_path(req.uri().path()) else {
        state.metrics().rejected_paths.inc(&[]);
        tracing::debug!(uri = %req.uri(), "media path not normalized");
        return error_response(&MediaGuardError::NotFound);
    };

    // Owned copy: the body is not Sync, so no borrow of `req` may cross the await.
    let headers = req.headers().clone();
    let ctx = match state.resolver().resolve(&headers).await {
        Ok(ctx) => ctx,
        Err(e) => {
            state.metrics().auth_failures.inc(&[]);
            tracing::debug!(error = %e, "identity resolution failed");
            return error_response(&e);
        }
    };
    let user = ctx.username().unwrap_or("-").to_string();

    match state.registry().is_allowed(&ctx, &path) {
        Ok(true) => {
            state.metrics().decisions.inc(&[("outcome", "allow")]);
            tracing::debug!(%path, %user, allowed = true, "media access decision");
            req.extensions_mut().insert(ctx);
            next.run(req).await
        }
        Ok(false) => {
            state.metrics().decisions.inc(&[("outcome", "deny")]);
            tracing::debug!(%path, %user, allowed = false, "media access decision");
            error_response(&MediaGuardError::NotFound)
        }
        Err(source) => {
            // A broken policy never grants access.
            state.metrics().decisions.inc(&[("outcome", "error")]);
            let err = MediaGuardError::policy(path, source);
            tracing::error!(error = %err, %user, "media policy failed");
            error_response(&err)
        }
    }
}

/// The one response used for both "no such file" and "not allowed".
pub fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}

/// Map a gateway error onto an HTTP response.
pub fn error_response(err: &MediaGuardError) -> Response {
    let code = err.client_code();
    match code {
        ClientCode::NotFound => not_found(),
        ClientCode::AuthFailed => (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            code.as_str(),
        )
            .into_response(),
        ClientCode::BadRequest => (StatusCode::BAD_REQUEST, code.as_str()).into_response(),
        ClientCode::UnsupportedVersion | ClientCode::Internal => {
            (StatusCode::INTERNAL_SERVER_ERROR, ClientCode::Internal.as_str()).into_response()
        }
    }
}

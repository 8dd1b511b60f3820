use crate::error::ApiError;
use crate::shell;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Fallback handler - serves the SPA shell with head tags for the request path
///
/// Every path not claimed by another route gets a 200 document; the client
/// router decides what to render.
pub async fn shell_handler(State(state): State<AppState>, uri: Uri) -> Result<Response, ApiError> {
    let template = state.shell.load().await?;
    let rendered = shell::render(&template, uri.path(), state.base_url());

    tracing::info!(
        path = %rendered.path,
        canonical_url = %rendered.canonical_url,
        title = rendered.meta.title,
        "Serving shell"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        rendered.html,
    )
        .into_response())
}

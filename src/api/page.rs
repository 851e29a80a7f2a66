use axum::{extract::State, response::Html};

use crate::error::ApiError;
use crate::server::AppState;

/// Serve the showcase page.
///
/// Always returns a complete document; missing or broken assets degrade to
/// their text-only fallbacks inside the page. The build decodes and
/// re-encodes images, so it runs in a blocking context rather than on the
/// async runtime.
pub async fn handle_page(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let builder = state.page_builder.clone();

    let page = tokio::task::spawn_blocking(move || builder.render_page())
        .await
        .map_err(|e| ApiError::Internal(format!("Render task failed: {e}")))??;

    tracing::info!(
        bytes = page.html.len(),
        warnings = page.warnings.len(),
        "Page rendered"
    );

    Ok(Html(page.html))
}

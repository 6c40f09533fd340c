//! Entry page for the solar system viewer
//!
//! The page is compiled into the binary; its assets are served from the
//! configured static directory under `/static`.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / — the viewer entry page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

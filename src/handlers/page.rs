//! Upload page handler
//!
//! The report itself is JSON (`POST /api/v1/report`); this page is a thin
//! shell that uploads a roster and renders the response.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

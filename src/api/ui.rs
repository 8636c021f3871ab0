//! UI serving routes
//!
//! Serves the static HTML/JS display page, embedded at compile time

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");

/// GET /
///
/// Serves the display page
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /static/app.js
pub async fn serve_app_js() -> Response {
    (
        StatusCode::OK,
        [("content-type", "application/javascript")],
        APP_JS,
    )
        .into_response()
}

/// Build UI routes
pub fn ui_routes() -> axum::Router<crate::AppState> {
    use axum::routing::get;

    axum::Router::new()
        .route("/", get(serve_index))
        .route("/static/app.js", get(serve_app_js))
}

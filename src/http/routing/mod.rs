use axum::{routing::get, Router};
use tower_http::services::ServeDir;

pub fn app(router: Router) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest_service("/static", ServeDir::new("static"))
        .merge(router)
}

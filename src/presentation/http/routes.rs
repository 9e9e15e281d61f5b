// src/presentation/http/routes.rs
use crate::presentation::http::controllers::articles;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::{StatusCode, header::LOCATION},
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::index).post(articles::create),
        )
        .route("/articles/new", get(articles::new_article))
        .route(
            "/articles/{id}",
            get(articles::show)
                .patch(articles::update)
                .put(articles::update)
                .delete(articles::destroy)
                .post(articles::override_method),
        )
        .route("/articles/{id}/edit", get(articles::edit))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

async fn root() -> impl IntoResponse {
    (StatusCode::FOUND, [(LOCATION, "/articles")])
}

pub async fn health() -> &'static str {
    "ok"
}

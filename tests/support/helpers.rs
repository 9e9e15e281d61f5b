// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{self, InMemoryArticleRepo};
use article_board::application::services::ApplicationServices;
use article_board::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use article_board::domain::validation::FieldLimits;
use article_board::presentation::http::{routes::build_router, state::HttpState, views::Views};
use axum::body::{self, Body};
use axum::http::{HeaderValue, Request, header};
use axum::response::Response;

pub fn build_services(
    article_write: Arc<dyn ArticleWriteRepository>,
    article_read: Arc<dyn ArticleReadRepository>,
    limits: FieldLimits,
) -> ApplicationServices {
    ApplicationServices::new(article_write, article_read, Arc::new(mocks::FixedClock), limits)
}

/// Services backed by one in-memory repository for both reads and writes.
pub fn in_memory_services(repo: &Arc<InMemoryArticleRepo>) -> ApplicationServices {
    build_services(repo.clone(), repo.clone(), FieldLimits::default())
}

pub fn build_test_state(repo: &Arc<InMemoryArticleRepo>) -> HttpState {
    HttpState {
        services: Arc::new(in_memory_services(repo)),
        views: Arc::new(Views::new().expect("templates compile")),
    }
}

pub fn make_test_router(repo: &Arc<InMemoryArticleRepo>) -> axum::Router {
    build_router(build_test_state(repo))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Form-encoded request, e.g. `form_request("POST", "/articles", &[("article[title]", "t")])`.
pub fn form_request(method: &str, uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(pairs).expect("encode form");
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn article_form<'a>(title: &'a str, content: &'a str, author: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("article[title]", title),
        ("article[content]", content),
        ("article[author]", author),
    ]
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// `name=value` part of the first `Set-Cookie` header.
pub fn cookie_pair(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub fn with_cookie(mut req: Request<Body>, cookie: &str) -> Request<Body> {
    req.headers_mut()
        .insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
    req
}

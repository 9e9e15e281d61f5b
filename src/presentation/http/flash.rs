// src/presentation/http/flash.rs
//! One-shot notices carried across a redirect.
//!
//! The notice travels in a cookie set on the redirect response. The next
//! page that renders it expires the cookie again.

use axum::http::{HeaderMap, HeaderValue};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use headers::{Cookie, HeaderMapExt};

pub const FLASH_COOKIE: &str = "article_board_notice";

/// Notice left by the previous response, if any.
pub fn pending(headers: &HeaderMap) -> Option<String> {
    let cookie = headers.typed_get::<Cookie>()?;
    decode(cookie.get(FLASH_COOKIE)?)
}

pub fn set_cookie(notice: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        encode(notice)
    ))
    .ok()
}

pub fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("article_board_notice=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

fn encode(notice: &str) -> String {
    URL_SAFE_NO_PAD.encode(notice.as_bytes())
}

fn decode(value: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    String::from_utf8(bytes).ok().filter(|notice| !notice.is_empty())
}

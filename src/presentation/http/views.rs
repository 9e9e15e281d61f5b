// src/presentation/http/views.rs
use super::{
    error::{HttpError, HttpResult},
    flash,
    outcome::{ActionOutcome, ArticleForm, Redirect, View},
};
use axum::{
    http::{
        HeaderValue, StatusCode,
        header::{LOCATION, SET_COOKIE},
    },
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tera::{Context, Tera};

/// Tera templates for the article pages, compiled once at startup.
pub struct Views {
    tera: Tera,
}

#[derive(Serialize)]
struct FormContext<'a> {
    id: Option<i64>,
    title: &'a str,
    content: &'a str,
    author: &'a str,
    errors: &'a [String],
}

impl<'a> From<&'a ArticleForm> for FormContext<'a> {
    fn from(form: &'a ArticleForm) -> Self {
        Self {
            id: form.id,
            title: form.attributes.title.as_deref().unwrap_or_default(),
            content: form.attributes.content.as_deref().unwrap_or_default(),
            author: form.attributes.author.as_deref().unwrap_or_default(),
            errors: &form.errors,
        }
    }
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                "articles/layout.html",
                include_str!("../../../templates/articles/layout.html"),
            ),
            (
                "articles/_form.html",
                include_str!("../../../templates/articles/_form.html"),
            ),
            (
                "articles/index.html",
                include_str!("../../../templates/articles/index.html"),
            ),
            (
                "articles/show.html",
                include_str!("../../../templates/articles/show.html"),
            ),
            (
                "articles/new.html",
                include_str!("../../../templates/articles/new.html"),
            ),
            (
                "articles/edit.html",
                include_str!("../../../templates/articles/edit.html"),
            ),
        ])?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: &View, notice: Option<&str>) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("notice", &notice);
        match view {
            View::Index { articles } => context.insert("articles", articles),
            View::Show { article } => context.insert("article", article),
            View::New { form } | View::Edit { form } => {
                context.insert("form", &FormContext::from(form));
            }
        }
        self.tera.render(view.template(), &context)
    }

    /// Turn an action outcome into a response. `pending_notice` is the flash
    /// read from the request; it is shown and expired by rendered pages.
    pub fn respond(&self, outcome: ActionOutcome, pending_notice: Option<String>) -> HttpResult<Response> {
        match outcome {
            ActionOutcome::Render(view) => {
                let html = self
                    .render(&view, pending_notice.as_deref())
                    .map_err(|err| HttpError::internal(format!("failed to render {}: {err:?}", view.template())))?;
                let mut response = Html(html).into_response();
                if pending_notice.is_some() {
                    response
                        .headers_mut()
                        .append(SET_COOKIE, flash::clear_cookie());
                }
                Ok(response)
            }
            ActionOutcome::Redirect(redirect) => Ok(redirect_response(&redirect)),
        }
    }
}

fn redirect_response(redirect: &Redirect) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    let headers = response.headers_mut();
    if let Ok(location) = HeaderValue::from_str(&redirect.location.path()) {
        headers.insert(LOCATION, location);
    }
    if let Some(cookie) = redirect.notice.and_then(flash::set_cookie) {
        headers.append(SET_COOKIE, cookie);
    }
    response
}

// src/presentation/http/outcome.rs
//! What an action decided to do, independent of how it is sent.

use crate::{
    application::dto::ArticleDto,
    domain::{article::ArticleAttributes, validation::ValidationErrors},
};

/// Article bound to a form; `id` stays `None` until the record is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleForm {
    pub id: Option<i64>,
    pub attributes: ArticleAttributes,
    pub errors: Vec<String>,
}

impl ArticleForm {
    pub fn blank() -> Self {
        Self {
            id: None,
            attributes: ArticleAttributes::default(),
            errors: Vec::new(),
        }
    }

    pub fn persisted(article: &ArticleDto) -> Self {
        Self {
            id: Some(article.id),
            attributes: article.attributes(),
            errors: Vec::new(),
        }
    }

    /// Attempted values together with the reasons they were rejected.
    pub fn rejected(id: Option<i64>, attributes: ArticleAttributes, errors: &ValidationErrors) -> Self {
        Self {
            id,
            attributes,
            errors: errors.full_messages(),
        }
    }

    pub const fn is_new_record(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Index { articles: Vec<ArticleDto> },
    Show { article: ArticleDto },
    New { form: ArticleForm },
    Edit { form: ArticleForm },
}

impl View {
    pub const fn template(&self) -> &'static str {
        match self {
            Self::Index { .. } => "articles/index.html",
            Self::Show { .. } => "articles/show.html",
            Self::New { .. } => "articles/new.html",
            Self::Edit { .. } => "articles/edit.html",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Index,
    Show(i64),
}

impl Location {
    pub fn path(self) -> String {
        match self {
            Self::Index => "/articles".to_string(),
            Self::Show(id) => format!("/articles/{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: Location,
    pub notice: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Render(View),
    Redirect(Redirect),
}

impl ActionOutcome {
    pub const fn redirect_with_notice(location: Location, notice: &'static str) -> Self {
        Self::Redirect(Redirect {
            location,
            notice: Some(notice),
        })
    }

    pub const fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Redirect(redirect) => Some(redirect),
            Self::Render(_) => None,
        }
    }
}

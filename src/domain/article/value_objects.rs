use crate::domain::validation::{FieldLimits, ValidationErrors, validate_var_char};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for ArticleId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The user-editable columns of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    Title,
    Content,
    Author,
}

impl ArticleField {
    pub const ALL: [Self; 3] = [Self::Title, Self::Content, Self::Author];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Author => "author",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory attribute set of an article that may not have been saved.
///
/// `None` means the value was never supplied, which is distinct from an
/// empty string only for merging; both fail validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleAttributes {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl ArticleAttributes {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            author: Some(author.into()),
        }
    }

    pub fn get(&self, field: ArticleField) -> Option<&str> {
        match field {
            ArticleField::Title => self.title.as_deref(),
            ArticleField::Content => self.content.as_deref(),
            ArticleField::Author => self.author.as_deref(),
        }
    }

    pub fn set(&mut self, field: ArticleField, value: impl Into<String>) {
        let slot = match field {
            ArticleField::Title => &mut self.title,
            ArticleField::Content => &mut self.content,
            ArticleField::Author => &mut self.author,
        };
        *slot = Some(value.into());
    }

    pub fn is_empty(&self) -> bool {
        ArticleField::ALL
            .into_iter()
            .all(|field| self.get(field).is_none())
    }

    /// Overlay the supplied values of `changes`; absent keys keep their
    /// current value.
    #[must_use]
    pub fn merge(mut self, changes: Self) -> Self {
        if let Some(title) = changes.title {
            self.title = Some(title);
        }
        if let Some(content) = changes.content {
            self.content = Some(content);
        }
        if let Some(author) = changes.author {
            self.author = Some(author);
        }
        self
    }

    /// Check presence and length of every field, reporting all offenders.
    pub fn validate(&self, limits: FieldLimits) -> Result<ValidAttributes, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in ArticleField::ALL {
            validate_var_char(field.as_str(), self.get(field), limits, &mut errors);
        }
        errors.into_result()?;

        Ok(ValidAttributes {
            title: self.title.clone().unwrap_or_default(),
            content: self.content.clone().unwrap_or_default(),
            author: self.author.clone().unwrap_or_default(),
        })
    }
}

/// Attribute set that passed [`ArticleAttributes::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAttributes {
    title: String,
    content: String,
    author: String,
}

impl ValidAttributes {
    pub fn into_parts(self) -> (String, String, String) {
        (self.title, self.content, self.author)
    }
}

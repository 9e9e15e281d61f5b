// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleAttributes, ArticleId, ValidAttributes};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn attributes(&self) -> ArticleAttributes {
        ArticleAttributes::new(
            self.title.clone(),
            self.content.clone(),
            self.author.clone(),
        )
    }

    /// Current attributes with `changes` assigned on top, as they would be
    /// written by an update.
    pub fn assign(&self, changes: ArticleAttributes) -> ArticleAttributes {
        self.attributes().merge(changes)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub attributes: ValidAttributes,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub const fn new(attributes: ValidAttributes, now: DateTime<Utc>) -> Self {
        Self {
            attributes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub attributes: ValidAttributes,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub const fn new(id: ArticleId, attributes: ValidAttributes, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            attributes,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::FieldLimits;
    use chrono::Utc;

    fn sample_article() -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(1),
            title: "title".into(),
            content: "content".into(),
            author: "author".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn attributes_reflect_stored_columns() {
        let article = sample_article();
        assert_eq!(
            article.attributes(),
            ArticleAttributes::new("title", "content", "author")
        );
    }

    #[test]
    fn assign_keeps_rejected_values_in_memory() {
        let article = sample_article();
        let changes = ArticleAttributes {
            title: Some(String::new()),
            author: Some("someone else".into()),
            ..ArticleAttributes::default()
        };

        let assigned = article.assign(changes);
        assert_eq!(assigned.title.as_deref(), Some(""));
        assert_eq!(assigned.content.as_deref(), Some("content"));
        assert_eq!(assigned.author.as_deref(), Some("someone else"));
        assert!(assigned.validate(FieldLimits::default()).is_err());
        assert_eq!(article.title, "title");
    }

    #[test]
    fn new_article_uses_one_timestamp() {
        let now = Utc::now();
        let attrs = ArticleAttributes::new("t", "c", "a")
            .validate(FieldLimits::default())
            .unwrap();
        let new_article = NewArticle::new(attrs, now);
        assert_eq!(new_article.created_at, now);
        assert_eq!(new_article.updated_at, now);
    }
}

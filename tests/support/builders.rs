// tests/support/builders.rs
use std::collections::BTreeMap;

use article_board::domain::article::{Article, ArticleId};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    author: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            content: "Test content".into(),
            author: "Test Author".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id),
            title: self.title,
            content: self.content,
            author: self.author,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

/// `count` stored articles with ids `1..=count`.
pub fn article_list(count: i64) -> Vec<Article> {
    (1..=count)
        .map(|id| {
            ArticleBuilder::new()
                .id(id)
                .title(format!("Title {id}"))
                .content(format!("Content {id}"))
                .author(format!("Author {id}"))
                .build()
        })
        .collect()
}

/// Submitted `article` mapping.
pub fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

use crate::domain::article::{Article, ArticleAttributes, ArticleId};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn attributes(&self) -> ArticleAttributes {
        ArticleAttributes::new(
            self.title.clone(),
            self.content.clone(),
            self.author.clone(),
        )
    }
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            author: article.author,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: ArticleId::new(dto.id),
            title: dto.title,
            content: dto.content,
            author: dto.author,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

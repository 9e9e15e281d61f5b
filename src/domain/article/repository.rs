use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Replaces the stored columns; `DomainError::NotFound` when the row is gone.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Hard delete; `DomainError::NotFound` when the row is gone.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Every article, in id order.
    async fn list(&self) -> DomainResult<Vec<Article>>;
}

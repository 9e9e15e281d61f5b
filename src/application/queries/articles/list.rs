use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

/// Every stored article, oldest first.
pub struct ListArticlesQuery;

impl ArticleQueryService {
    pub async fn list_articles(&self, _query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

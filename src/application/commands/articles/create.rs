// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleAttributes, NewArticle},
};

pub struct CreateArticleCommand {
    pub attributes: ArticleAttributes,
}

impl ArticleCommandService {
    /// Validates and inserts a new article. Nothing is written when
    /// validation fails.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let attributes = command.attributes.validate(self.limits)?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewArticle::new(attributes, now))
            .await?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}

use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{Article, ArticleAttributes, ArticleUpdate},
        errors::DomainError,
        validation::ValidationErrors,
    },
};

pub struct UpdateArticleCommand {
    /// The stored article, already looked up by the caller.
    pub article: ArticleDto,
    /// Only the supplied fields are replaced.
    pub changes: ArticleAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateArticleOutcome {
    Updated(ArticleDto),
    /// Nothing was written. `attempted` is the stored article with the
    /// submitted changes assigned, as it should be shown again.
    Rejected {
        attempted: ArticleAttributes,
        errors: ValidationErrors,
    },
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<UpdateArticleOutcome> {
        let UpdateArticleCommand { article, changes } = command;
        let current = Article::from(article);
        let attempted = current.assign(changes);

        let attributes = match attempted.validate(self.limits) {
            Ok(attributes) => attributes,
            Err(errors) => return Ok(UpdateArticleOutcome::Rejected { attempted, errors }),
        };

        let update = ArticleUpdate::new(current.id, attributes, self.clock.now());
        match self.write_repo.update(update).await {
            Ok(updated) => {
                tracing::info!(article_id = %updated.id, "article updated");
                Ok(UpdateArticleOutcome::Updated(updated.into()))
            }
            Err(DomainError::Validation(errors)) => Ok(UpdateArticleOutcome::Rejected { attempted, errors }),
            Err(other) => Err(other.into()),
        }
    }
}

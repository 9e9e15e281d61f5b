// src/presentation/http/controllers/articles.rs
use crate::application::{
    ApplicationResult,
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand, UpdateArticleOutcome,
    },
    dto::ArticleDto,
    error::ApplicationError,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
    services::ApplicationServices,
};
use crate::domain::article::{ArticleAttributes, ArticleField};
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    extractors::ArticleIdParam,
    flash,
    outcome::{ActionOutcome, ArticleForm, Location, View},
    params::FormParams,
    state::HttpState,
};
use axum::{Extension, http::HeaderMap, response::Response};
use bytes::Bytes;
use std::collections::BTreeMap;

pub const ARTICLE_CREATED: &str = "Article was successfully created.";
pub const ARTICLE_UPDATED: &str = "Article was successfully updated.";
pub const ARTICLE_DESTROYED: &str = "Article was successfully destroyed.";

const ARTICLE_SCOPE: &str = "article";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleAction {
    Index,
    Show,
    New,
    Edit,
    Create,
    Update,
    Destroy,
}

impl ArticleAction {
    pub const ALL: [Self; 7] = [
        Self::Index,
        Self::Show,
        Self::New,
        Self::Edit,
        Self::Create,
        Self::Update,
        Self::Destroy,
    ];

    /// Whether the current article is loaded by id before the action runs.
    pub const fn resolves_article(self) -> bool {
        match self {
            Self::Show | Self::Edit | Self::Update | Self::Destroy => true,
            Self::Index | Self::New | Self::Create => false,
        }
    }
}

/// Keep only the permitted article keys. Anything else, including an
/// injected `id`, is dropped without complaint.
pub fn article_params(input: &BTreeMap<String, String>) -> ArticleAttributes {
    let mut permitted = ArticleAttributes::default();
    for (key, value) in input {
        if let Some(field) = ArticleField::parse(key) {
            permitted.set(field, value.clone());
        }
    }
    permitted
}

/// The seven resource actions, free of any HTTP plumbing.
pub struct ArticlesController<'a> {
    services: &'a ApplicationServices,
}

impl<'a> ArticlesController<'a> {
    pub const fn new(services: &'a ApplicationServices) -> Self {
        Self { services }
    }

    pub async fn index(&self) -> ApplicationResult<ActionOutcome> {
        self.set_article(ArticleAction::Index, None).await?;
        let articles = self
            .services
            .article_queries
            .list_articles(ListArticlesQuery)
            .await?;
        Ok(ActionOutcome::Render(View::Index { articles }))
    }

    pub async fn show(&self, id: i64) -> ApplicationResult<ActionOutcome> {
        let article = self.current_article(ArticleAction::Show, id).await?;
        Ok(ActionOutcome::Render(View::Show { article }))
    }

    pub async fn new_article(&self) -> ApplicationResult<ActionOutcome> {
        self.set_article(ArticleAction::New, None).await?;
        Ok(ActionOutcome::Render(View::New {
            form: ArticleForm::blank(),
        }))
    }

    pub async fn edit(&self, id: i64) -> ApplicationResult<ActionOutcome> {
        let article = self.current_article(ArticleAction::Edit, id).await?;
        Ok(ActionOutcome::Render(View::Edit {
            form: ArticleForm::persisted(&article),
        }))
    }

    /// `input` is the submitted `article` mapping; an absent one is empty.
    pub async fn create(&self, input: &BTreeMap<String, String>) -> ApplicationResult<ActionOutcome> {
        self.set_article(ArticleAction::Create, None).await?;
        let attributes = article_params(input);

        let result = self
            .services
            .article_commands
            .create_article(CreateArticleCommand {
                attributes: attributes.clone(),
            })
            .await;

        match result {
            Ok(created) => Ok(ActionOutcome::redirect_with_notice(
                Location::Show(created.id),
                ARTICLE_CREATED,
            )),
            Err(ApplicationError::Validation(errors)) => {
                tracing::debug!(%errors, "article rejected on create");
                Ok(ActionOutcome::Render(View::New {
                    form: ArticleForm::rejected(None, attributes, &errors),
                }))
            }
            Err(other) => Err(other),
        }
    }

    /// On rejection the form shows the submitted values, not the stored row.
    pub async fn update(&self, id: i64, input: &BTreeMap<String, String>) -> ApplicationResult<ActionOutcome> {
        let article = self.current_article(ArticleAction::Update, id).await?;
        let article_id = article.id;

        let outcome = self
            .services
            .article_commands
            .update_article(UpdateArticleCommand {
                article,
                changes: article_params(input),
            })
            .await?;

        match outcome {
            UpdateArticleOutcome::Updated(updated) => Ok(ActionOutcome::redirect_with_notice(
                Location::Show(updated.id),
                ARTICLE_UPDATED,
            )),
            UpdateArticleOutcome::Rejected { attempted, errors } => {
                tracing::debug!(article_id, %errors, "article rejected on update");
                Ok(ActionOutcome::Render(View::Edit {
                    form: ArticleForm::rejected(Some(article_id), attempted, &errors),
                }))
            }
        }
    }

    pub async fn destroy(&self, id: i64) -> ApplicationResult<ActionOutcome> {
        let article = self.current_article(ArticleAction::Destroy, id).await?;
        self.services
            .article_commands
            .delete_article(DeleteArticleCommand { id: article.id })
            .await?;
        Ok(ActionOutcome::redirect_with_notice(
            Location::Index,
            ARTICLE_DESTROYED,
        ))
    }

    /// Runs before every action; loads the article only when the action
    /// table asks for it.
    pub async fn set_article(&self, action: ArticleAction, id: Option<i64>) -> ApplicationResult<Option<ArticleDto>> {
        if !action.resolves_article() {
            return Ok(None);
        }
        let id = id.ok_or_else(|| ApplicationError::not_found("article id missing"))?;
        self.resolve(id).await.map(Some)
    }

    /// Primary-key lookup; a miss is `NotFound`.
    pub async fn resolve(&self, id: i64) -> ApplicationResult<ArticleDto> {
        self.services
            .article_queries
            .get_article_by_id(GetArticleByIdQuery { id })
            .await
    }

    async fn current_article(&self, action: ArticleAction, id: i64) -> ApplicationResult<ArticleDto> {
        self.set_article(action, Some(id)).await?.ok_or_else(|| {
            ApplicationError::infrastructure(format!("{action:?} does not load an article"))
        })
    }
}

pub async fn index(Extension(state): Extension<HttpState>, headers: HeaderMap) -> HttpResult<Response> {
    let outcome = state.controller().index().await.into_http()?;
    state.views.respond(outcome, flash::pending(&headers))
}

pub async fn show(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let outcome = state.controller().show(id).await.into_http()?;
    state.views.respond(outcome, flash::pending(&headers))
}

pub async fn new_article(Extension(state): Extension<HttpState>) -> HttpResult<Response> {
    let outcome = state.controller().new_article().await.into_http()?;
    state.views.respond(outcome, None)
}

pub async fn edit(Extension(state): Extension<HttpState>, ArticleIdParam(id): ArticleIdParam) -> HttpResult<Response> {
    let outcome = state.controller().edit(id).await.into_http()?;
    state.views.respond(outcome, None)
}

pub async fn create(Extension(state): Extension<HttpState>, body: Bytes) -> HttpResult<Response> {
    let params = FormParams::parse(&body)?;
    let outcome = state
        .controller()
        .create(&params.scoped(ARTICLE_SCOPE))
        .await
        .into_http()?;
    state.views.respond(outcome, None)
}

pub async fn update(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
    body: Bytes,
) -> HttpResult<Response> {
    let params = FormParams::parse(&body)?;
    update_with(&state, id, &params).await
}

pub async fn destroy(Extension(state): Extension<HttpState>, ArticleIdParam(id): ArticleIdParam) -> HttpResult<Response> {
    let outcome = state.controller().destroy(id).await.into_http()?;
    state.views.respond(outcome, None)
}

/// `POST /articles/{id}` from an HTML form, dispatched on its `_method` field.
pub async fn override_method(
    Extension(state): Extension<HttpState>,
    ArticleIdParam(id): ArticleIdParam,
    body: Bytes,
) -> HttpResult<Response> {
    let params = FormParams::parse(&body)?;
    let method = params
        .get("_method")
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match method.as_str() {
        "patch" | "put" => update_with(&state, id, &params).await,
        "delete" => {
            let outcome = state.controller().destroy(id).await.into_http()?;
            state.views.respond(outcome, None)
        }
        _ => Err(HttpError::method_not_allowed(
            "POST to an article requires _method=patch, put or delete",
        )),
    }
}

async fn update_with(state: &HttpState, id: i64, params: &FormParams) -> HttpResult<Response> {
    let outcome = state
        .controller()
        .update(id, &params.scoped(ARTICLE_SCOPE))
        .await
        .into_http()?;
    state.views.respond(outcome, None)
}

// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use article_board::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWriteRepository, NewArticle,
};
use article_board::domain::errors::{DomainError, DomainResult};
use article_board::domain::validation::{ValidationErrors, Violation};

/* -------------------------------- InMemoryArticleRepo -------------------------------- */

/// メモリ上の記事リポジトリ（読み書き両対応）
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    articles: BTreeMap<i64, Article>,
    last_id: i64,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let repo = Self::default();
        {
            let mut store = repo.inner.lock().unwrap();
            for article in articles {
                let id = i64::from(article.id);
                store.last_id = store.last_id.max(id);
                store.articles.insert(id, article);
            }
        }
        repo
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.inner.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn missing(id: ArticleId) -> DomainError {
    DomainError::NotFound(format!("article {id} not found"))
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        store.last_id += 1;
        let id = store.last_id;
        let (title, content, author) = article.attributes.into_parts();
        let created = Article {
            id: ArticleId::new(id),
            title,
            content,
            author,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        store.articles.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut store = self.inner.lock().unwrap();
        let article = store
            .articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| missing(update.id))?;
        let (title, content, author) = update.attributes.into_parts();
        article.title = title;
        article.content = content;
        article.author = author;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut store = self.inner.lock().unwrap();
        store
            .articles
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| missing(id))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(i64::from(id)))
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.inner.lock().unwrap().articles.values().cloned().collect())
    }
}

/* -------------------------------- CountingArticleRead -------------------------------- */

/// 主キー検索の回数を数える読み取りリポジトリ
pub struct CountingArticleRead {
    inner: Arc<InMemoryArticleRepo>,
    lookups: AtomicUsize,
}

impl CountingArticleRead {
    pub fn new(inner: Arc<InMemoryArticleRepo>) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleReadRepository for CountingArticleRead {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        self.inner.list().await
    }
}

/* -------------------------------- RejectingArticleWrite -------------------------------- */

/// 保存を常に拒否する書き込みリポジトリ（NOT NULL 制約違反と同じ扱い）
pub struct RejectingArticleWrite {
    inner: Arc<InMemoryArticleRepo>,
}

impl RejectingArticleWrite {
    pub fn new(inner: Arc<InMemoryArticleRepo>) -> Self {
        Self { inner }
    }
}

fn rejected() -> DomainError {
    DomainError::Validation(ValidationErrors::single("author", Violation::Blank))
}

#[async_trait]
impl ArticleWriteRepository for RejectingArticleWrite {
    async fn insert(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(rejected())
    }

    async fn update(&self, _update: ArticleUpdate) -> DomainResult<Article> {
        Err(rejected())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.inner.delete(id).await
    }
}

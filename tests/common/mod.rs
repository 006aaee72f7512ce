#![allow(dead_code)]

// Shared fixtures: an in-memory `article` resource with its validator and
// authorizer, plus stub widget providers. Each suite wires these into the
// registries it needs.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use portal_core::api::response::NonOk;
use portal_core::crud::{
    CrudAuthorizer, CrudModelMapper, CrudRepository, CrudValidator, RepositoryCrudService,
};
use portal_core::widget::WidgetDataProvider;

pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub name: String,
    pub admin: bool,
}

impl TestUser {
    pub fn admin() -> Self {
        Self { name: "alice".into(), admin: true }
    }

    pub fn reader() -> Self {
        Self { name: "bob".into(), admin: false }
    }
}

// ---- article resource ----

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleCreate {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleUpdate {
    pub id: Uuid,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleFilter {
    pub title_contains: Option<String>,
}

#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: Mutex<HashMap<Uuid, Article>>,
}

impl InMemoryArticleRepository {
    pub fn len(&self) -> usize {
        self.articles.lock().unwrap().len()
    }
}

#[async_trait]
impl CrudRepository for InMemoryArticleRepository {
    type Id = Uuid;
    type Entity = Article;
    type Filter = ArticleFilter;

    async fn create(&self, entity: Article) -> Result<Uuid, NonOk> {
        let id = entity.id;
        self.articles.lock().unwrap().insert(id, entity);
        Ok(id)
    }

    async fn update(&self, id: Uuid, entity: Article) -> Result<Uuid, NonOk> {
        let mut articles = self.articles.lock().unwrap();
        if !articles.contains_key(&id) {
            return Err(NonOk::NotFound);
        }
        articles.insert(id, entity);
        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, NonOk> {
        Ok(self.articles.lock().unwrap().remove(&id).is_some())
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Article>, NonOk> {
        Ok(self.articles.lock().unwrap().get(&id).cloned())
    }

    async fn fetch_all(&self, filter: ArticleFilter) -> Result<Vec<Article>, NonOk> {
        let mut articles: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .values()
            .filter(|article| match &filter.title_contains {
                Some(needle) => article.title.contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        articles.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(articles)
    }
}

pub struct ArticleMapper;

impl CrudModelMapper for ArticleMapper {
    type Id = Uuid;
    type Create = ArticleCreate;
    type Update = ArticleUpdate;
    type Entity = Article;

    fn entity_from_create(&self, model: ArticleCreate) -> Article {
        Article { id: Uuid::new_v4(), title: model.title, body: model.body }
    }

    fn entity_from_update(&self, model: ArticleUpdate) -> (Uuid, Article) {
        (model.id, Article { id: model.id, title: model.title, body: model.body })
    }

    fn edit_model(&self, entity: &Article) -> Value {
        json!({ "id": entity.id, "title": entity.title, "body": entity.body })
    }

    fn preview_model(&self, entity: &Article) -> Value {
        json!({ "id": entity.id, "title": entity.title })
    }

    fn read_model(&self, entity: &Article) -> Value {
        json!({ "id": entity.id, "title": entity.title, "body": entity.body })
    }
}

pub type ArticleService = RepositoryCrudService<Arc<InMemoryArticleRepository>, ArticleMapper, TestUser>;

pub fn article_service(repository: Arc<InMemoryArticleRepository>) -> ArticleService {
    RepositoryCrudService::new(repository, ArticleMapper)
}

/// Requires non-empty title and body; optionally refuses to delete one id.
pub struct ArticleValidator {
    pub locked_id: Option<Uuid>,
}

impl ArticleValidator {
    pub fn lenient() -> Self {
        Self { locked_id: None }
    }

    fn check(title: &str, body: &str) -> Vec<String> {
        let mut errors = Vec::new();
        if title.trim().is_empty() {
            errors.push("title must not be empty".to_string());
        }
        if body.trim().is_empty() {
            errors.push("body must not be empty".to_string());
        }
        errors
    }
}

#[async_trait]
impl CrudValidator for ArticleValidator {
    type Id = Uuid;
    type Create = ArticleCreate;
    type Update = ArticleUpdate;
    type User = TestUser;

    async fn validate_create_model(
        &self,
        model: &ArticleCreate,
        _user: Option<&TestUser>,
    ) -> Vec<String> {
        Self::check(&model.title, &model.body)
    }

    async fn validate_updated_model(
        &self,
        model: &ArticleUpdate,
        _user: Option<&TestUser>,
    ) -> Vec<String> {
        Self::check(&model.title, &model.body)
    }

    async fn can_be_deleted(&self, id: &Uuid, _user: Option<&TestUser>) -> Vec<String> {
        if self.locked_id.as_ref() == Some(id) {
            vec!["article is locked and cannot be deleted".to_string()]
        } else {
            Vec::new()
        }
    }
}

/// Mutations and the edit view require an admin; the other reads are open.
pub struct ArticleAuthorizer;

impl ArticleAuthorizer {
    fn is_admin(user: Option<&TestUser>) -> bool {
        user.map(|u| u.admin).unwrap_or(false)
    }
}

#[async_trait]
impl CrudAuthorizer for ArticleAuthorizer {
    type Id = Uuid;
    type Create = ArticleCreate;
    type Update = ArticleUpdate;
    type Filter = ArticleFilter;
    type User = TestUser;

    async fn allowed_to_create(&self, _model: &ArticleCreate, user: Option<&TestUser>) -> bool {
        Self::is_admin(user)
    }

    async fn allowed_to_update(&self, _model: &ArticleUpdate, user: Option<&TestUser>) -> bool {
        Self::is_admin(user)
    }

    async fn allowed_to_delete(&self, _id: &Uuid, user: Option<&TestUser>) -> bool {
        Self::is_admin(user)
    }

    async fn allowed_to_edit(&self, _id: &Uuid, user: Option<&TestUser>) -> bool {
        Self::is_admin(user)
    }

    async fn allowed_get_preview_model(&self, _id: &Uuid, _user: Option<&TestUser>) -> bool {
        true
    }

    async fn allowed_get_read_model(&self, _id: &Uuid, _user: Option<&TestUser>) -> bool {
        true
    }

    async fn allowed_fetch_preview_models(
        &self,
        _filter: &ArticleFilter,
        _user: Option<&TestUser>,
    ) -> bool {
        true
    }
}

// ---- widget fixtures ----

pub struct EchoProvider {
    pub id: &'static str,
}

#[async_trait]
impl WidgetDataProvider for EchoProvider {
    fn widget_id(&self) -> &str {
        self.id
    }

    async fn get_render_model(&self, configuration: &Value) -> Value {
        json!({ "widget": self.id, "configuration": configuration })
    }

    async fn process_api_request(&self, request: &Value) -> Value {
        json!({ "widget": self.id, "request": request })
    }
}

pub fn echo_provider(id: &'static str) -> Arc<dyn WidgetDataProvider> {
    Arc::new(EchoProvider { id })
}

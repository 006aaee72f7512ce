use async_trait::async_trait;
use serde_json::Value;
use std::marker::PhantomData;

use crate::api::response::{ApiCallResponse, NonOk};
use crate::crud::service::CrudService;

/// Persistence collaborator for one resource kind. Implementations live
/// outside the core (a SQL store, a document store, an in-memory map in
/// tests); the core only ever calls through this interface, and failures
/// arrive as taxonomy values rather than store-specific errors.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Id: Send + Sync + 'static;
    type Entity: Send + Sync + 'static;
    type Filter: Send + Sync + 'static;

    async fn create(&self, entity: Self::Entity) -> Result<Self::Id, NonOk>;

    async fn update(&self, id: Self::Id, entity: Self::Entity) -> Result<Self::Id, NonOk>;

    /// Returns whether an entity was actually removed.
    async fn delete(&self, id: Self::Id) -> Result<bool, NonOk>;

    async fn fetch(&self, id: Self::Id) -> Result<Option<Self::Entity>, NonOk>;

    async fn fetch_all(&self, filter: Self::Filter) -> Result<Vec<Self::Entity>, NonOk>;
}

// Repositories are routinely shared between the service and other owners.
#[async_trait]
impl<R: CrudRepository + ?Sized> CrudRepository for std::sync::Arc<R> {
    type Id = R::Id;
    type Entity = R::Entity;
    type Filter = R::Filter;

    async fn create(&self, entity: Self::Entity) -> Result<Self::Id, NonOk> {
        (**self).create(entity).await
    }

    async fn update(&self, id: Self::Id, entity: Self::Entity) -> Result<Self::Id, NonOk> {
        (**self).update(id, entity).await
    }

    async fn delete(&self, id: Self::Id) -> Result<bool, NonOk> {
        (**self).delete(id).await
    }

    async fn fetch(&self, id: Self::Id) -> Result<Option<Self::Entity>, NonOk> {
        (**self).fetch(id).await
    }

    async fn fetch_all(&self, filter: Self::Filter) -> Result<Vec<Self::Entity>, NonOk> {
        (**self).fetch_all(filter).await
    }
}

/// Translates between wire models and the persisted entity, and renders the
/// three read payloads. Pure synchronous mapping; anything that needs IO
/// belongs in the repository or a decorator check instead.
pub trait CrudModelMapper: Send + Sync {
    type Id: Send + Sync + 'static;
    type Create: Send + Sync + 'static;
    type Update: Send + Sync + 'static;
    type Entity: Send + Sync + 'static;

    fn entity_from_create(&self, model: Self::Create) -> Self::Entity;

    /// Splits an update model into the target id and the replacement entity.
    fn entity_from_update(&self, model: Self::Update) -> (Self::Id, Self::Entity);

    fn edit_model(&self, entity: &Self::Entity) -> Value;

    fn preview_model(&self, entity: &Self::Entity) -> Value;

    fn read_model(&self, entity: &Self::Entity) -> Value;
}

/// The base `CrudService` a deployment wraps with `PreValidated`/`Secured`:
/// maps models through the `CrudModelMapper` and delegates storage to a
/// `CrudRepository`. Ignores the caller identity — authorization is the
/// `Secured` decorator's job, not the storage layer's.
pub struct RepositoryCrudService<R, M, U> {
    repository: R,
    mapper: M,
    _user: PhantomData<fn() -> U>,
}

impl<R, M, U> RepositoryCrudService<R, M, U> {
    pub fn new(repository: R, mapper: M) -> Self {
        Self { repository, mapper, _user: PhantomData }
    }
}

#[async_trait]
impl<R, M, U> CrudService for RepositoryCrudService<R, M, U>
where
    R: CrudRepository,
    M: CrudModelMapper<Id = R::Id, Entity = R::Entity>,
    U: Send + Sync + 'static,
{
    type Id = R::Id;
    type Create = M::Create;
    type Update = M::Update;
    type Filter = R::Filter;
    type User = U;

    async fn create(
        &self,
        model: Self::Create,
        _user: Option<&Self::User>,
    ) -> Result<Self::Id, NonOk> {
        self.repository.create(self.mapper.entity_from_create(model)).await
    }

    async fn update(
        &self,
        model: Self::Update,
        _user: Option<&Self::User>,
    ) -> Result<Self::Id, NonOk> {
        let (id, entity) = self.mapper.entity_from_update(model);
        self.repository.update(id, entity).await
    }

    async fn delete(&self, id: Self::Id, _user: Option<&Self::User>) -> Result<bool, NonOk> {
        self.repository.delete(id).await
    }

    async fn get_edit_model(&self, id: Self::Id, _user: Option<&Self::User>) -> ApiCallResponse {
        match self.repository.fetch(id).await {
            Ok(Some(entity)) => ApiCallResponse::ok(self.mapper.edit_model(&entity)),
            Ok(None) => ApiCallResponse::NotFound,
            Err(non_ok) => non_ok.into(),
        }
    }

    async fn get_preview_model(&self, id: Self::Id, _user: Option<&Self::User>) -> ApiCallResponse {
        match self.repository.fetch(id).await {
            Ok(Some(entity)) => ApiCallResponse::ok(self.mapper.preview_model(&entity)),
            Ok(None) => ApiCallResponse::NotFound,
            Err(non_ok) => non_ok.into(),
        }
    }

    async fn get_read_model(&self, id: Self::Id, _user: Option<&Self::User>) -> ApiCallResponse {
        match self.repository.fetch(id).await {
            Ok(Some(entity)) => ApiCallResponse::ok(self.mapper.read_model(&entity)),
            Ok(None) => ApiCallResponse::NotFound,
            Err(non_ok) => non_ok.into(),
        }
    }

    async fn fetch_preview_models(
        &self,
        filter: Self::Filter,
        _user: Option<&Self::User>,
    ) -> ApiCallResponse {
        match self.repository.fetch_all(filter).await {
            Ok(entities) => ApiCallResponse::ok(Value::Array(
                entities.iter().map(|entity| self.mapper.preview_model(entity)).collect(),
            )),
            Err(non_ok) => non_ok.into(),
        }
    }
}

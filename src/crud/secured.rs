use async_trait::async_trait;

use crate::api::response::{ApiCallResponse, NonOk};
use crate::crud::service::CrudService;

/// Authorization predicates for all seven CRUD operations. Each predicate may
/// consult external state (a permissions store, group membership) and answers
/// whether the given caller may perform the operation on the given target.
#[async_trait]
pub trait CrudAuthorizer: Send + Sync {
    type Id: Send + Sync + 'static;
    type Create: Send + Sync + 'static;
    type Update: Send + Sync + 'static;
    type Filter: Send + Sync + 'static;
    type User: Send + Sync + 'static;

    async fn allowed_to_create(&self, model: &Self::Create, user: Option<&Self::User>) -> bool;

    async fn allowed_to_update(&self, model: &Self::Update, user: Option<&Self::User>) -> bool;

    async fn allowed_to_delete(&self, id: &Self::Id, user: Option<&Self::User>) -> bool;

    async fn allowed_to_edit(&self, id: &Self::Id, user: Option<&Self::User>) -> bool;

    async fn allowed_get_preview_model(&self, id: &Self::Id, user: Option<&Self::User>) -> bool;

    async fn allowed_get_read_model(&self, id: &Self::Id, user: Option<&Self::User>) -> bool;

    async fn allowed_fetch_preview_models(
        &self,
        filter: &Self::Filter,
        user: Option<&Self::User>,
    ) -> bool;
}

/// Decorator running an authorization predicate in front of every operation of
/// a wrapped `CrudService`. A rejected predicate short-circuits to `Forbidden`
/// without touching the inner service; the predicate always completes before
/// delegation begins.
pub struct Secured<S, A> {
    inner: S,
    authorizer: A,
}

impl<S, A> Secured<S, A> {
    pub fn new(inner: S, authorizer: A) -> Self {
        Self { inner, authorizer }
    }
}

#[async_trait]
impl<S, A> CrudService for Secured<S, A>
where
    S: CrudService,
    A: CrudAuthorizer<
        Id = S::Id,
        Create = S::Create,
        Update = S::Update,
        Filter = S::Filter,
        User = S::User,
    >,
{
    type Id = S::Id;
    type Create = S::Create;
    type Update = S::Update;
    type Filter = S::Filter;
    type User = S::User;

    async fn create(
        &self,
        model: Self::Create,
        user: Option<&Self::User>,
    ) -> Result<Self::Id, NonOk> {
        if !self.authorizer.allowed_to_create(&model, user).await {
            return Err(NonOk::Forbidden);
        }
        self.inner.create(model, user).await
    }

    async fn update(
        &self,
        model: Self::Update,
        user: Option<&Self::User>,
    ) -> Result<Self::Id, NonOk> {
        if !self.authorizer.allowed_to_update(&model, user).await {
            return Err(NonOk::Forbidden);
        }
        self.inner.update(model, user).await
    }

    async fn delete(&self, id: Self::Id, user: Option<&Self::User>) -> Result<bool, NonOk> {
        if !self.authorizer.allowed_to_delete(&id, user).await {
            return Err(NonOk::Forbidden);
        }
        self.inner.delete(id, user).await
    }

    async fn get_edit_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse {
        if !self.authorizer.allowed_to_edit(&id, user).await {
            return ApiCallResponse::Forbidden;
        }
        self.inner.get_edit_model(id, user).await
    }

    async fn get_preview_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse {
        if !self.authorizer.allowed_get_preview_model(&id, user).await {
            return ApiCallResponse::Forbidden;
        }
        self.inner.get_preview_model(id, user).await
    }

    async fn get_read_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse {
        if !self.authorizer.allowed_get_read_model(&id, user).await {
            return ApiCallResponse::Forbidden;
        }
        self.inner.get_read_model(id, user).await
    }

    async fn fetch_preview_models(
        &self,
        filter: Self::Filter,
        user: Option<&Self::User>,
    ) -> ApiCallResponse {
        if !self.authorizer.allowed_fetch_preview_models(&filter, user).await {
            return ApiCallResponse::Forbidden;
        }
        self.inner.fetch_preview_models(filter, user).await
    }
}

use async_trait::async_trait;

use crate::api::response::{ApiCallResponse, NonOk};
use crate::crud::service::CrudService;

/// Domain validation checks for the mutating CRUD operations. Each check may
/// consult external state and returns human-readable errors; an empty result
/// means the operation may proceed.
#[async_trait]
pub trait CrudValidator: Send + Sync {
    type Id: Send + Sync + 'static;
    type Create: Send + Sync + 'static;
    type Update: Send + Sync + 'static;
    type User: Send + Sync + 'static;

    async fn validate_create_model(
        &self,
        model: &Self::Create,
        user: Option<&Self::User>,
    ) -> Vec<String>;

    async fn validate_updated_model(
        &self,
        model: &Self::Update,
        user: Option<&Self::User>,
    ) -> Vec<String>;

    async fn can_be_deleted(&self, id: &Self::Id, user: Option<&Self::User>) -> Vec<String>;
}

/// Decorator running domain validation in front of a wrapped `CrudService`.
///
/// A non-empty error set short-circuits to `InvalidRequest` and the inner
/// service is never called. Read operations pass through untouched —
/// validation only guards mutations. Holds no state beyond its two parts and
/// composes freely with other decorators by nested construction.
pub struct PreValidated<S, V> {
    inner: S,
    validator: V,
}

impl<S, V> PreValidated<S, V> {
    pub fn new(inner: S, validator: V) -> Self {
        Self { inner, validator }
    }
}

#[async_trait]
impl<S, V> CrudService for PreValidated<S, V>
where
    S: CrudService,
    V: CrudValidator<Id = S::Id, Create = S::Create, Update = S::Update, User = S::User>,
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
        let errors = self.validator.validate_create_model(&model, user).await;
        if !errors.is_empty() {
            return Err(NonOk::InvalidRequest(errors));
        }
        self.inner.create(model, user).await
    }

    async fn update(
        &self,
        model: Self::Update,
        user: Option<&Self::User>,
    ) -> Result<Self::Id, NonOk> {
        let errors = self.validator.validate_updated_model(&model, user).await;
        if !errors.is_empty() {
            return Err(NonOk::InvalidRequest(errors));
        }
        self.inner.update(model, user).await
    }

    async fn delete(&self, id: Self::Id, user: Option<&Self::User>) -> Result<bool, NonOk> {
        let errors = self.validator.can_be_deleted(&id, user).await;
        if !errors.is_empty() {
            return Err(NonOk::InvalidRequest(errors));
        }
        self.inner.delete(id, user).await
    }

    async fn get_edit_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse {
        self.inner.get_edit_model(id, user).await
    }

    async fn get_preview_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse {
        self.inner.get_preview_model(id, user).await
    }

    async fn get_read_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse {
        self.inner.get_read_model(id, user).await
    }

    async fn fetch_preview_models(
        &self,
        filter: Self::Filter,
        user: Option<&Self::User>,
    ) -> ApiCallResponse {
        self.inner.fetch_preview_models(filter, user).await
    }
}

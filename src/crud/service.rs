use async_trait::async_trait;

use crate::api::response::{ApiCallResponse, NonOk};

/// The CRUD contract every resource kind implements.
///
/// Each resource picks its own identifier, create/update models, list filter
/// and user identity types; everything downstream — decorators, the api
/// extension glue, the repository-backed base service — is generic over this
/// bundle rather than any concrete resource.
///
/// Mutating operations return the success value or a `NonOk` outcome. The
/// read operations return an already-built response so implementations decide
/// their own payload shape (and can answer `NotFound` directly).
#[async_trait]
pub trait CrudService: Send + Sync {
    type Id: Send + Sync + 'static;
    type Create: Send + Sync + 'static;
    type Update: Send + Sync + 'static;
    type Filter: Send + Sync + 'static;
    type User: Send + Sync + 'static;

    async fn create(&self, model: Self::Create, user: Option<&Self::User>)
        -> Result<Self::Id, NonOk>;

    async fn update(&self, model: Self::Update, user: Option<&Self::User>)
        -> Result<Self::Id, NonOk>;

    async fn delete(&self, id: Self::Id, user: Option<&Self::User>) -> Result<bool, NonOk>;

    async fn get_edit_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse;

    async fn get_preview_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse;

    async fn get_read_model(&self, id: Self::Id, user: Option<&Self::User>) -> ApiCallResponse;

    async fn fetch_preview_models(
        &self,
        filter: Self::Filter,
        user: Option<&Self::User>,
    ) -> ApiCallResponse;
}

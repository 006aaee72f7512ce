use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::api::call::ApiCall;
use crate::api::extension::{path, ApiExtension};
use crate::api::registry::RegistryError;
use crate::api::request::ApiCallRequest;
use crate::api::response::ApiCallResponse;
use crate::crud::service::CrudService;

/// Exposes a `CrudService` as an `ApiExtension`.
///
/// Registers the seven fixed operation paths, each decoding its payload as the
/// model type for that operation. Mutations wrap the success value under a
/// fixed field (`"id"` for create/update, `"removed"` for delete) and pass a
/// `NonOk` outcome through unchanged; read operations return the service's
/// response as-is.
pub fn crud_api_extension<S>(
    name: impl Into<String>,
    service: Arc<S>,
) -> Result<ApiExtension<S::User>, RegistryError>
where
    S: CrudService + 'static,
    S::Id: Serialize + DeserializeOwned,
    S::Create: DeserializeOwned,
    S::Update: DeserializeOwned,
    S::Filter: DeserializeOwned,
{
    let create = {
        let service = Arc::clone(&service);
        ApiCall::json(move |req: ApiCallRequest<S::Create, S::User>| {
            let service = Arc::clone(&service);
            async move {
                match service.create(req.data, req.identity.as_ref()).await {
                    Ok(id) => ApiCallResponse::ok(json!({ "id": id })),
                    Err(non_ok) => non_ok.into(),
                }
            }
        })
    };

    let update = {
        let service = Arc::clone(&service);
        ApiCall::json(move |req: ApiCallRequest<S::Update, S::User>| {
            let service = Arc::clone(&service);
            async move {
                match service.update(req.data, req.identity.as_ref()).await {
                    Ok(id) => ApiCallResponse::ok(json!({ "id": id })),
                    Err(non_ok) => non_ok.into(),
                }
            }
        })
    };

    let delete = {
        let service = Arc::clone(&service);
        ApiCall::json(move |req: ApiCallRequest<S::Id, S::User>| {
            let service = Arc::clone(&service);
            async move {
                match service.delete(req.data, req.identity.as_ref()).await {
                    Ok(removed) => ApiCallResponse::ok(json!({ "removed": removed })),
                    Err(non_ok) => non_ok.into(),
                }
            }
        })
    };

    let get_edit_model = {
        let service = Arc::clone(&service);
        ApiCall::json(move |req: ApiCallRequest<S::Id, S::User>| {
            let service = Arc::clone(&service);
            async move { service.get_edit_model(req.data, req.identity.as_ref()).await }
        })
    };

    let get_preview_model = {
        let service = Arc::clone(&service);
        ApiCall::json(move |req: ApiCallRequest<S::Id, S::User>| {
            let service = Arc::clone(&service);
            async move { service.get_preview_model(req.data, req.identity.as_ref()).await }
        })
    };

    let get_read_model = {
        let service = Arc::clone(&service);
        ApiCall::json(move |req: ApiCallRequest<S::Id, S::User>| {
            let service = Arc::clone(&service);
            async move { service.get_read_model(req.data, req.identity.as_ref()).await }
        })
    };

    let fetch_preview_models = {
        let service = Arc::clone(&service);
        ApiCall::json(move |req: ApiCallRequest<S::Filter, S::User>| {
            let service = Arc::clone(&service);
            async move { service.fetch_preview_models(req.data, req.identity.as_ref()).await }
        })
    };

    ApiExtension::new(
        name,
        vec![
            (path(&["create"]), create),
            (path(&["update"]), update),
            (path(&["delete"]), delete),
            (path(&["getEditModel"]), get_edit_model),
            (path(&["getPreviewModel"]), get_preview_model),
            (path(&["getReadModel"]), get_read_model),
            (path(&["fetchPreviewModels"]), fetch_preview_models),
        ],
    )
}

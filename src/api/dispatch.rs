use futures::FutureExt;
use std::panic::{self, AssertUnwindSafe};

use crate::api::registry::ExtensionRegistry;
use crate::api::request::RawApiCallRequest;
use crate::api::response::ApiCallResponse;
use crate::config::CONFIG;

/// Front door of the dispatch pipeline.
///
/// Resolves the extension from the first path segment, the handler from the
/// remaining segments, and invokes it behind a fault boundary: a panic raised
/// while producing the handler future or while polling it is logged with the
/// request context and converted to `SystemError`. Callers always observe
/// exactly one taxonomy value, never a raw fault.
pub struct ApiDispatchService<U> {
    registry: ExtensionRegistry<U>,
}

impl<U: Send + 'static> ApiDispatchService<U> {
    pub fn new(registry: ExtensionRegistry<U>) -> Self {
        Self { registry }
    }

    pub async fn process_api_call(
        &self,
        path: &[String],
        request: RawApiCallRequest<U>,
    ) -> ApiCallResponse {
        let Some((extension_name, handler_path)) = path.split_first() else {
            tracing::warn!("api call with empty path");
            return ApiCallResponse::UnsupportedRequest;
        };

        let Some(extension) = self.registry.extension(extension_name) else {
            tracing::warn!(extension = %extension_name, "no extension registered for name");
            return ApiCallResponse::UnsupportedRequest;
        };

        let Some(handler) = extension.handler(handler_path) else {
            tracing::warn!(
                extension = %extension_name,
                path = %handler_path.join("/"),
                "extension has no handler for path"
            );
            return ApiCallResponse::UnsupportedRequest;
        };

        // Kept for fault logging; the request itself moves into the handler.
        let payload = request.data.to_string();
        if CONFIG.api.log_request_payloads {
            tracing::debug!(extension = %extension_name, path = %handler_path.join("/"), %payload, "dispatching api call");
        }

        // The handler closure runs synchronously up to its first await (the
        // decode step in particular), so a fault can surface before a future
        // even exists. Both entry points funnel into SystemError.
        let invocation = panic::catch_unwind(AssertUnwindSafe(|| handler.invoke(request)));
        let future = match invocation {
            Ok(future) => future,
            Err(fault) => {
                tracing::error!(
                    extension = %extension_name,
                    path = %handler_path.join("/"),
                    %payload,
                    fault = %panic_message(&fault),
                    "handler faulted before returning a future"
                );
                return ApiCallResponse::SystemError;
            }
        };

        match AssertUnwindSafe(future).catch_unwind().await {
            Ok(response) => response,
            Err(fault) => {
                tracing::error!(
                    extension = %extension_name,
                    path = %handler_path.join("/"),
                    %payload,
                    fault = %panic_message(&fault),
                    "handler faulted while resolving"
                );
                ApiCallResponse::SystemError
            }
        }
    }
}

fn panic_message(fault: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = fault.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = fault.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::call::ApiCall;
    use crate::api::extension::{path, ApiExtension};
    use crate::api::request::ApiCallRequest;
    use serde_json::{json, Value};

    fn dispatch_with_ping() -> ApiDispatchService<String> {
        let ping = ApiCall::json(|req: ApiCallRequest<Value, String>| async move {
            ApiCallResponse::ok(json!({ "echo": req.data }))
        });
        let boom = ApiCall::json(|_req: ApiCallRequest<Value, String>| async move {
            panic!("collaborator exploded");
        });

        let extension = ApiExtension::new(
            "diag",
            vec![(path(&["ping"]), ping), (path(&["boom"]), boom)],
        )
        .unwrap();

        ApiDispatchService::new(ExtensionRegistry::new(vec![extension]).unwrap())
    }

    #[tokio::test]
    async fn routes_to_registered_handler() {
        let dispatch = dispatch_with_ping();
        let response = dispatch
            .process_api_call(&path(&["diag", "ping"]), ApiCallRequest::anonymous(json!(1)))
            .await;
        assert_eq!(response, ApiCallResponse::Ok(json!({ "echo": 1 })));
    }

    #[tokio::test]
    async fn unknown_extension_is_unsupported() {
        let dispatch = dispatch_with_ping();
        let response = dispatch
            .process_api_call(&path(&["nope", "ping"]), ApiCallRequest::anonymous(json!(1)))
            .await;
        assert_eq!(response, ApiCallResponse::UnsupportedRequest);
    }

    #[tokio::test]
    async fn unknown_path_within_extension_is_unsupported() {
        let dispatch = dispatch_with_ping();
        let response = dispatch
            .process_api_call(&path(&["diag", "pong"]), ApiCallRequest::anonymous(json!(1)))
            .await;
        assert_eq!(response, ApiCallResponse::UnsupportedRequest);
    }

    #[tokio::test]
    async fn empty_path_is_unsupported() {
        let dispatch = dispatch_with_ping();
        let response = dispatch
            .process_api_call(&[], ApiCallRequest::anonymous(json!(1)))
            .await;
        assert_eq!(response, ApiCallResponse::UnsupportedRequest);
    }

    #[tokio::test]
    async fn handler_panic_becomes_system_error() {
        let dispatch = dispatch_with_ping();
        let response = dispatch
            .process_api_call(&path(&["diag", "boom"]), ApiCallRequest::anonymous(json!(1)))
            .await;
        assert_eq!(response, ApiCallResponse::SystemError);
    }
}

use futures::future::{self, BoxFuture};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

use crate::api::request::{ApiCallRequest, RawApiCallRequest};
use crate::api::response::ApiCallResponse;

/// A registered handler: the single point where a wire payload becomes a typed
/// domain value.
///
/// The adapter decodes the raw payload with a caller-supplied fallible decode
/// function and only then invokes the typed handler. A failed decode is data,
/// not a fault: it short-circuits to `InvalidRequest` without running the
/// handler, and the adapter itself never panics on bad input.
pub struct ApiCall<U> {
    run: Box<dyn Fn(RawApiCallRequest<U>) -> BoxFuture<'static, ApiCallResponse> + Send + Sync>,
}

impl<U: Send + 'static> ApiCall<U> {
    /// Build a call from an explicit decode function and a typed handler.
    pub fn new<T, D, H, Fut>(decode: D, handler: H) -> Self
    where
        T: Send + 'static,
        D: Fn(Value) -> Result<T, String> + Send + Sync + 'static,
        H: Fn(ApiCallRequest<T, U>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ApiCallResponse> + Send + 'static,
    {
        let run = move |raw: RawApiCallRequest<U>| -> BoxFuture<'static, ApiCallResponse> {
            match decode(raw.data) {
                Ok(data) => Box::pin(handler(ApiCallRequest::new(data, raw.identity))),
                Err(reason) => {
                    tracing::debug!(%reason, "payload decode failed");
                    // Clients get a single generic error; the decode detail stays in the logs
                    Box::pin(future::ready(ApiCallResponse::invalid_request([
                        "invalid request payload",
                    ])))
                }
            }
        };

        Self { run: Box::new(run) }
    }

    /// Build a call whose payload decodes via `serde_json::from_value`.
    pub fn json<T, H, Fut>(handler: H) -> Self
    where
        T: DeserializeOwned + Send + 'static,
        H: Fn(ApiCallRequest<T, U>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ApiCallResponse> + Send + 'static,
    {
        Self::new(|raw| serde_json::from_value(raw).map_err(|e| e.to_string()), handler)
    }

    pub fn invoke(&self, request: RawApiCallRequest<U>) -> BoxFuture<'static, ApiCallResponse> {
        (self.run)(request)
    }
}

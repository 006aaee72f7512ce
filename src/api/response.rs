use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of outcomes every API call reduces to.
///
/// Expected failures (authorization, validation, missing targets) are values of
/// this type, never errors propagated out of the call chain. Unexpected faults
/// are caught at the dispatch boundary and surface as `SystemError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
pub enum ApiCallResponse {
    /// Success, always carrying an output value (null when there is none)
    Ok(Value),
    /// Caller is not authorized for the attempted operation
    Forbidden,
    /// Payload failed decode or domain validation; never empty
    InvalidRequest(Vec<String>),
    /// Target entity does not exist
    NotFound,
    /// No extension or handler registered for the requested path
    UnsupportedRequest,
    /// An unexpected fault occurred; details are logged, not returned
    SystemError,
}

impl ApiCallResponse {
    pub fn ok(value: impl Into<Value>) -> Self {
        ApiCallResponse::Ok(value.into())
    }

    /// Success with no payload
    pub fn ok_empty() -> Self {
        ApiCallResponse::Ok(Value::Null)
    }

    pub fn invalid_request<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let errors: Vec<String> = errors.into_iter().map(Into::into).collect();
        debug_assert!(!errors.is_empty(), "InvalidRequest requires at least one error");
        ApiCallResponse::InvalidRequest(errors)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ApiCallResponse::Ok(_))
    }
}

/// The non-success subset of the taxonomy, used as the error side of CRUD
/// results so services can return `Result<T, NonOk>` and map into a response.
#[derive(Debug, Clone, PartialEq)]
pub enum NonOk {
    Forbidden,
    InvalidRequest(Vec<String>),
    NotFound,
    UnsupportedRequest,
    SystemError,
}

impl NonOk {
    pub fn invalid_request<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let errors: Vec<String> = errors.into_iter().map(Into::into).collect();
        debug_assert!(!errors.is_empty(), "InvalidRequest requires at least one error");
        NonOk::InvalidRequest(errors)
    }
}

impl From<NonOk> for ApiCallResponse {
    fn from(non_ok: NonOk) -> Self {
        match non_ok {
            NonOk::Forbidden => ApiCallResponse::Forbidden,
            NonOk::InvalidRequest(errors) => ApiCallResponse::InvalidRequest(errors),
            NonOk::NotFound => ApiCallResponse::NotFound,
            NonOk::UnsupportedRequest => ApiCallResponse::UnsupportedRequest,
            NonOk::SystemError => ApiCallResponse::SystemError,
        }
    }
}

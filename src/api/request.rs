use serde_json::Value;

/// A single inbound API call: a payload plus the already-resolved caller
/// identity (`None` for anonymous callers). Constructed fresh per call and
/// never persisted.
#[derive(Debug, Clone)]
pub struct ApiCallRequest<T, U> {
    pub data: T,
    pub identity: Option<U>,
}

/// Requests as they arrive off the wire, before the typed call adapter has
/// decoded the payload.
pub type RawApiCallRequest<U> = ApiCallRequest<Value, U>;

impl<T, U> ApiCallRequest<T, U> {
    pub fn new(data: T, identity: Option<U>) -> Self {
        Self { data, identity }
    }

    pub fn anonymous(data: T) -> Self {
        Self { data, identity: None }
    }
}

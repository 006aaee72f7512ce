pub mod call;
pub mod dispatch;
pub mod extension;
pub mod registry;
pub mod request;
pub mod response;

pub use call::ApiCall;
pub use dispatch::ApiDispatchService;
pub use extension::ApiExtension;
pub use registry::{ExtensionRegistry, RegistryError};
pub use request::ApiCallRequest;
pub use response::{ApiCallResponse, NonOk};

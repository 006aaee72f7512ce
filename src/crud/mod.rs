pub mod extension;
pub mod repository;
pub mod secured;
pub mod service;
pub mod validated;

pub use extension::crud_api_extension;
pub use repository::{CrudModelMapper, CrudRepository, RepositoryCrudService};
pub use secured::{CrudAuthorizer, Secured};
pub use service::CrudService;
pub use validated::{CrudValidator, PreValidated};

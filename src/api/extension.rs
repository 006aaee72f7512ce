use std::collections::HashMap;

use crate::api::call::ApiCall;
use crate::api::registry::RegistryError;

/// A named unit exposing a finite set of API handlers.
///
/// Handlers are keyed by the request path remaining after the extension name,
/// matched by exact segment equality against the registered set. There is no
/// route syntax here: a path either is registered or it is not, and
/// `handles()` answers that without invoking anything.
pub struct ApiExtension<U> {
    name: String,
    handlers: HashMap<Vec<String>, ApiCall<U>>,
}

impl<U> ApiExtension<U> {
    /// Construct an extension from its handler table. Registering the same
    /// path twice is a configuration bug and fails construction.
    pub fn new(
        name: impl Into<String>,
        handlers: impl IntoIterator<Item = (Vec<String>, ApiCall<U>)>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        let mut table: HashMap<Vec<String>, ApiCall<U>> = HashMap::new();

        for (path, call) in handlers {
            if table.contains_key(&path) {
                return Err(RegistryError::DuplicateHandlerPath {
                    extension: name,
                    path: path.join("/"),
                });
            }
            table.insert(path, call);
        }

        tracing::debug!(extension = %name, handlers = table.len(), "registered api extension");
        Ok(Self { name, handlers: table })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler(&self, path: &[String]) -> Option<&ApiCall<U>> {
        self.handlers.get(path)
    }

    pub fn handles(&self, path: &[String]) -> bool {
        self.handlers.contains_key(path)
    }
}

/// Convenience for building handler-table keys from string literals.
pub fn path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

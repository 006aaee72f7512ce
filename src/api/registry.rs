use std::collections::HashMap;
use thiserror::Error;

use crate::api::extension::ApiExtension;

/// Construction-time registry errors. Duplicate registrations are
/// configuration bugs, so building a registry fails fast instead of letting a
/// later entry silently shadow an earlier one.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    #[error("extension '{0}' registered more than once")]
    DuplicateExtension(String),

    #[error("extension '{extension}' registers path '{path}' more than once")]
    DuplicateHandlerPath { extension: String, path: String },

    #[error("widget data provider '{0}' registered more than once")]
    DuplicateWidgetProvider(String),
}

/// Name-keyed extension lookup. Built once at startup, immutable afterwards,
/// shared by reference.
pub struct ExtensionRegistry<U> {
    extensions: HashMap<String, ApiExtension<U>>,
}

impl<U> ExtensionRegistry<U> {
    pub fn new(extensions: impl IntoIterator<Item = ApiExtension<U>>) -> Result<Self, RegistryError> {
        let mut table: HashMap<String, ApiExtension<U>> = HashMap::new();

        for extension in extensions {
            let name = extension.name().to_string();
            if table.contains_key(&name) {
                return Err(RegistryError::DuplicateExtension(name));
            }
            table.insert(name, extension);
        }

        tracing::debug!(extensions = table.len(), "built extension registry");
        Ok(Self { extensions: table })
    }

    pub fn extension(&self, name: &str) -> Option<&ApiExtension<U>> {
        self.extensions.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extension(name: &str) -> ApiExtension<()> {
        ApiExtension::new(name, Vec::new()).unwrap()
    }

    #[test]
    fn looks_up_extensions_by_name() {
        let registry = ExtensionRegistry::new(vec![extension("news"), extension("banner")]).unwrap();

        assert!(registry.extension("news").is_some());
        assert!(registry.extension("banner").is_some());
        assert!(registry.extension("missing").is_none());
    }

    #[test]
    fn duplicate_name_fails_construction() {
        let result = ExtensionRegistry::new(vec![extension("news"), extension("news")]);
        assert_eq!(result.err(), Some(RegistryError::DuplicateExtension("news".into())));
    }
}

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Global configuration, resolved once from the environment.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub api: ApiConfig,
    pub widget: WidgetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Log request payloads at debug level when dispatching calls
    pub log_request_payloads: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Maximum nesting depth accepted when persisting a rendering configuration
    pub max_nested_depth: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("API_LOG_REQUEST_PAYLOADS") {
            self.api.log_request_payloads = v.parse().unwrap_or(self.api.log_request_payloads);
        }
        if let Ok(v) = env::var("WIDGET_MAX_NESTED_DEPTH") {
            self.widget.max_nested_depth = v.parse().unwrap_or(self.widget.max_nested_depth);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            api: ApiConfig { log_request_payloads: true },
            widget: WidgetConfig { max_nested_depth: 16 },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            api: ApiConfig { log_request_payloads: false },
            widget: WidgetConfig { max_nested_depth: 16 },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            api: ApiConfig { log_request_payloads: false },
            widget: WidgetConfig { max_nested_depth: 8 },
        }
    }
}

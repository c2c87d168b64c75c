use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::share_service::{ServiceError, ShareService};

/// Where and how to reach the share service.
///
/// `backend` must match the [`ServiceFactory::backend_name`] of a
/// registered factory. The remaining fields are read by that factory.
///
/// | field            | default                  |
/// |------------------|--------------------------|
/// | `backend`        | `http`                   |
/// | `base_url`       | `http://127.0.0.1:5000`  |
/// | `calculate_path` | `/calculate`             |
/// | `export_path`    | `/pdf`                   |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"http"`).
    pub backend: String,
    pub base_url: String,
    pub calculate_path: String,
    pub export_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: "http".to_string(),
            base_url: "http://127.0.0.1:5000".to_string(),
            calculate_path: "/calculate".to_string(),
            export_path: "/pdf".to_string(),
        }
    }
}

/// One implementation per service backend. Each backend crate exports a
/// single unit struct that implements this trait and is registered with a
/// [`ServiceRegistry`] at startup.
#[async_trait(?Send)]
pub trait ServiceFactory {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use service from `config`.
    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn ShareService>, ServiceError>;
}

/// Registry of [`ServiceFactory`] instances, keyed by backend name.
pub struct ServiceRegistry {
    factories: HashMap<&'static str, Box<dyn ServiceFactory>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory.
    ///
    /// If a factory with the same [`ServiceFactory::backend_name`] is
    /// already present it is silently replaced.
    pub fn register(
        &mut self,
        factory: Box<dyn ServiceFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`ServiceError::Configuration`]: no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn ShareService>, ServiceError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                ServiceError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

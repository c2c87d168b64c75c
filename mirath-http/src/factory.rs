use async_trait::async_trait;
use mirath_core::{
    ServiceConfig, ServiceError, ShareService,
    service::ServiceFactory,
};
use tracing::info;

use crate::service::HttpShareService;

/// [`ServiceFactory`] for the JSON-over-HTTP calculator service.
///
/// Register this with a [`mirath_core::service::ServiceRegistry`] to make the
/// `"http"` backend available:
///
/// ```rust,no_run
/// use mirath_core::service::ServiceRegistry;
/// use mirath_http::HttpServiceFactory;
///
/// let mut registry = ServiceRegistry::new();
/// registry.register(Box::new(HttpServiceFactory));
/// ```
pub struct HttpServiceFactory;

#[async_trait(?Send)]
impl ServiceFactory for HttpServiceFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    /// Builds a client for `config.base_url`. No request is made until the
    /// first operation, so an unreachable service is reported then.
    async fn create(
        &self,
        config: &ServiceConfig,
    ) -> Result<Box<dyn ShareService>, ServiceError> {
        let service = HttpShareService::new(config)?;
        info!(
            calculate = %service.calculate_url(),
            export = %service.export_url(),
            "http share service ready"
        );
        Ok(Box::new(service))
    }
}

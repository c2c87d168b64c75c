use async_trait::async_trait;
use mirath_core::{
    CalculationRequest, CalculationResult, ReportDocument, ServiceConfig, ServiceError,
    ShareService,
};
use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

/// Body the service sends with a non-success status.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// [`ShareService`] backed by the calculator's JSON-over-HTTP endpoints.
///
/// Both operations POST the request as JSON. `calculate` expects a JSON
/// result back; `export_report` takes the response body as-is.
pub struct HttpShareService {
    client: Client,
    calculate_url: Url,
    export_url: Url,
}

impl HttpShareService {
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when the base URL or either path does
    /// not form a valid URL, or the HTTP client cannot be built.
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let base = Url::parse(&config.base_url).map_err(|e| {
            ServiceError::Configuration(format!("invalid base URL '{}': {e}", config.base_url))
        })?;
        let calculate_url = join(&base, &config.calculate_path)?;
        let export_url = join(&base, &config.export_path)?;

        let client = Client::builder()
            .build()
            .map_err(|e| ServiceError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            calculate_url,
            export_url,
        })
    }

    pub fn calculate_url(&self) -> &Url {
        &self.calculate_url
    }

    pub fn export_url(&self) -> &Url {
        &self.export_url
    }

    async fn post(
        &self,
        url: &Url,
        request: &CalculationRequest,
    ) -> Result<Response, ServiceError> {
        debug!(%url, "posting request");
        let response = self
            .client
            .post(url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // The body is best effort: a failure to read it still reports the status.
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error),
            Err(e) => {
                warn!(%url, error = %e, "could not read error body");
                None
            }
        };
        Err(ServiceError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Appends `path` to `base`, keeping any path prefix `base` already has.
fn join(
    base: &Url,
    path: &str,
) -> Result<Url, ServiceError> {
    let mut prefix = base.clone();
    if !prefix.path().ends_with('/') {
        let with_slash = format!("{}/", prefix.path());
        prefix.set_path(&with_slash);
    }
    prefix
        .join(path.trim_start_matches('/'))
        .map_err(|e| ServiceError::Configuration(format!("invalid path '{path}': {e}")))
}

#[async_trait(?Send)]
impl ShareService for HttpShareService {
    async fn calculate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, ServiceError> {
        let response = self.post(&self.calculate_url, request).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ServiceError::Malformed(e.to_string()))
    }

    async fn export_report(
        &self,
        request: &CalculationRequest,
    ) -> Result<ReportDocument, ServiceError> {
        let response = self.post(&self.export_url, request).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let document = ReportDocument::new(bytes.to_vec());
        Ok(match content_type {
            Some(content_type) => document.with_content_type(content_type),
            None => document,
        })
    }
}

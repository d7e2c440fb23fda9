//! Classification service HTTP client.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use wsort_models::{ClassifyResponse, Prediction};

use crate::error::{ClassifyError, ClassifyResult};

/// Configuration for the classification client.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    /// Base URL of the classification service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://waste-classification-ai-production.up.railway.app".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClassifyConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("WSORT_SERVICE_URL").unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(
                std::env::var("WSORT_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Client for the remote waste-classification service.
pub struct ClassifyClient {
    http: Client,
    config: ClassifyConfig,
}

impl ClassifyClient {
    /// Create a new classification client.
    pub fn new(config: ClassifyConfig) -> ClassifyResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClassifyError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClassifyResult<Self> {
        Self::new(ClassifyConfig::from_env())
    }

    /// Upload an image and return the top-confidence prediction.
    ///
    /// The service returns predictions sorted by confidence descending, so
    /// the first entry is the top result; every other entry is discarded.
    pub async fn classify(&self, image: Vec<u8>) -> ClassifyResult<Prediction> {
        let url = format!("{}/classify", self.config.base_url);

        debug!("Sending classification request to {}", url);

        let part = Part::bytes(image)
            .file_name("image.jpg")
            .mime_str("image/jpeg")?;
        let form = Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifyError::Http { status, body });
        }

        let body = response.text().await?;
        let decoded: ClassifyResponse = serde_json::from_str(&body)?;

        decoded
            .predictions
            .into_iter()
            .next()
            .ok_or(ClassifyError::EmptyPredictions)
    }
}

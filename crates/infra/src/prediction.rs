//! Client for the hosted quality-prediction endpoint.
//!
//! One route: a multipart file upload that answers with a JSON payload whose
//! shape is validated later by `canemart-grading`. Failure is any non-success
//! HTTP status; there is no retry.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    /// The endpoint answered with a non-success status.
    #[error("API error: {status}")]
    Api { status: u16 },

    /// The endpoint was unreachable or the connection failed mid-flight.
    #[error("prediction endpoint unreachable: {0}")]
    Network(String),

    /// The response body was not JSON.
    #[error("prediction response not decodable: {0}")]
    Decode(String),
}

/// Seam for the remote prediction call, mockable in tests.
#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Upload measurement data, await the raw JSON verdict.
    async fn predict(&self, file_name: &str, bytes: Vec<u8>) -> Result<JsonValue, PredictionError>;
}

/// Production client over reqwest.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn predict(&self, file_name: &str, bytes: Vec<u8>) -> Result<JsonValue, PredictionError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "prediction endpoint rejected upload");
            return Err(PredictionError::Api {
                status: status.as_u16(),
            });
        }

        resp.json()
            .await
            .map_err(|e| PredictionError::Decode(e.to_string()))
    }
}

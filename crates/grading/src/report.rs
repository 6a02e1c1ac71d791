//! Expected shape of the prediction endpoint's response.
//!
//! The hosted model is opaque, but we pin down what we rely on: a JSON
//! object of metric name → percentage-like value. Keys containing `Grade`
//! or `Quality` participate in grading; everything else is carried but
//! ignored. A participating value that is not a percentage is a schema
//! error, not a silent default.

use serde_json::Value as JsonValue;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradingError {
    /// The response did not match the expected schema.
    #[error("prediction response schema mismatch: {0}")]
    Schema(String),
}

/// A validated prediction response.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionReport {
    metrics: Vec<(String, String)>,
}

impl PredictionReport {
    /// An empty report (no metrics). Grades as the Standard fallback.
    pub fn empty() -> Self {
        Self { metrics: Vec::new() }
    }

    /// Build from raw metric pairs (tests, fixtures).
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            metrics: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Validate a raw JSON payload against the expected schema.
    ///
    /// The payload must be a JSON object; values must be strings or numbers.
    /// `null` payloads are accepted as an empty report (the endpoint returns
    /// `null` for files it cannot score).
    pub fn from_json(payload: &JsonValue) -> Result<Self, GradingError> {
        let object = match payload {
            JsonValue::Null => return Ok(Self::empty()),
            JsonValue::Object(map) => map,
            other => {
                return Err(GradingError::Schema(format!(
                    "expected a JSON object, got {other}"
                )));
            }
        };

        let mut metrics = Vec::with_capacity(object.len());
        for (key, value) in object {
            let rendered = match value {
                JsonValue::String(s) => s.clone(),
                JsonValue::Number(n) => n.to_string(),
                other => {
                    return Err(GradingError::Schema(format!(
                        "metric {key:?} has non-scalar value {other}"
                    )));
                }
            };
            metrics.push((key.clone(), rendered));
        }
        Ok(Self { metrics })
    }

    pub fn metrics(&self) -> &[(String, String)] {
        &self.metrics
    }

    /// Metrics that participate in grading: key contains `Grade` or
    /// `Quality`.
    pub fn grading_metrics(&self) -> impl Iterator<Item = (&str, &str)> {
        self.metrics
            .iter()
            .filter(|(key, _)| key.contains("Grade") || key.contains("Quality"))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

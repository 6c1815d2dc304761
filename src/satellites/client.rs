// Satellite API client
//
// One call: GET {base}/satellites. Everything that can go wrong is folded into
// FetchError so the DataStore can turn it into a single banner message.

use super::model::{SatelliteEnvelope, SatelliteRecord};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Ways a satellite fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-2xx status
    #[error("HTTP error! status: {}", .status.as_u16())]
    Http { status: StatusCode },

    /// The request never completed (DNS, connection refused, reset, ...)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The body was readable but not the expected satellite collection
    #[error("Invalid data format received from server")]
    MalformedResponse(String),
}

impl FetchError {
    /// Extra context for logs; the Display form is what users see
    pub fn detail(&self) -> String {
        match self {
            FetchError::MalformedResponse(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// HTTP client for the satellite API
#[derive(Debug, Clone)]
pub struct SatelliteClient {
    http: Client,
    base_url: String,
}

impl SatelliteClient {
    /// Build a client for `base_url`
    ///
    /// `timeout` of `None` means a hung request stays pending forever, which is
    /// what the dashboard has always done.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder().user_agent(concat!(
            "mission-board/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint for the satellite collection
    pub fn satellites_url(&self) -> String {
        format!("{}/satellites", self.base_url)
    }

    /// Fetch the full satellite collection, in the order the API sent it
    pub async fn fetch_satellites(&self) -> Result<Vec<SatelliteRecord>, FetchError> {
        let url = self.satellites_url();
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        let envelope = parse_envelope(&body)?;

        if let Some(updated) = &envelope.last_updated {
            tracing::debug!("Satellite API generated collection at {}", updated);
        }
        if let Some(count) = envelope.total_count {
            if count != envelope.satellites.len() as u64 {
                tracing::debug!(
                    "API reported total_count={} but sent {} satellites",
                    count,
                    envelope.satellites.len()
                );
            }
        }

        Ok(envelope.satellites)
    }
}

/// Parse a response body into the satellite envelope
///
/// The `satellites` field must exist and be an array; any element that is not
/// a well-formed record rejects the whole body.
pub fn parse_envelope(body: &str) -> Result<SatelliteEnvelope, FetchError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedResponse(format!("body is not JSON: {}", e)))?;

    match value.get("satellites") {
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(FetchError::MalformedResponse(
                "`satellites` is not an array".to_string(),
            ))
        }
        None => {
            return Err(FetchError::MalformedResponse(
                "missing `satellites` field".to_string(),
            ))
        }
    }

    serde_json::from_value(value)
        .map_err(|e| FetchError::MalformedResponse(format!("bad satellite entry: {}", e)))
}

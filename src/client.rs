//! Prediction API client
//!
//! One GET against `{API_BASE_URL}/predict` per refresh. No retries and
//! no backoff; a failed attempt is reported once and the caller renders
//! the error state.

use crate::config::Config;
use crate::error::{DashboardError, Result};
use crate::types::{Currency, PredictionPayload, PredictionResult};

/// Anything that can produce a prediction for a currency.
///
/// The view model only talks to this trait.
#[allow(async_fn_in_trait)] // single-threaded runtime, futures need not be Send
pub trait PredictionSource {
    async fn fetch(&self, currency: Currency) -> Result<PredictionResult>;
}

/// HTTP client for the upstream prediction service
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
    send_currency: bool,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>, send_currency: bool) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            send_currency,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base_url.clone(), config.request_currency_param)
    }

    /// Endpoint URL for a currency
    pub fn predict_url(&self, currency: Currency) -> String {
        if self.send_currency {
            format!("{}/predict?currency={}", self.base_url, currency.code())
        } else {
            format!("{}/predict", self.base_url)
        }
    }
}

impl PredictionSource for PredictionClient {
    async fn fetch(&self, currency: Currency) -> Result<PredictionResult> {
        let url = self.predict_url(currency);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_prediction(status, &body)
    }
}

/// Turn a status code and body into a validated prediction
pub fn decode_prediction(status: u16, body: &str) -> Result<PredictionResult> {
    if !(200..300).contains(&status) {
        let snippet: String = body.chars().take(200).collect();
        return Err(DashboardError::Network(format!("HTTP {status}: {snippet}")));
    }

    let payload: PredictionPayload = serde_json::from_str(body)?;
    payload.validate()
}

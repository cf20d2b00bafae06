//! Common types for the prediction dashboard
//!
//! Wire payload, validated result, currencies and the fx table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Symbol assumed when the payload does not name one
pub const DEFAULT_SYMBOL: &str = "BTC";

/// Display currency
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Inr,
    Eur,
}

impl Currency {
    /// Every currency offered in the dropdown, in display order
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Inr, Currency::Eur];

    /// ISO code
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
        }
    }

    /// Parse an ISO code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "INR" => Some(Currency::Inr),
            "EUR" => Some(Currency::Eur),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::from_code(s).ok_or_else(|| DashboardError::UnsupportedCurrency(s.to_string()))
    }
}

/// Currency symbol for a code; unknown codes fall back to "$"
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "INR" => "₹",
        "EUR" => "€",
        _ => "$",
    }
}

/// Static USD conversion multipliers.
///
/// Rates are fixed at configuration time and never refreshed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FxTable {
    rates: BTreeMap<String, f64>,
}

impl Default for FxTable {
    fn default() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert("USD".to_string(), 1.0);
        rates.insert("INR".to_string(), 91.78);
        rates.insert("EUR".to_string(), 0.85);
        Self { rates }
    }
}

impl FxTable {
    /// Override (or add) the multiplier for a code
    pub fn set_rate(&mut self, code: &str, rate: f64) {
        self.rates.insert(code.to_ascii_uppercase(), rate);
    }

    /// Multiplier for a code, 1 when the code is unknown
    pub fn rate(&self, code: &str) -> f64 {
        self.rates.get(code).copied().unwrap_or(1.0)
    }

    /// Convert a USD amount into `code`
    pub fn convert(&self, price_usd: f64, code: &str) -> f64 {
        price_usd * self.rate(code)
    }

    /// Convert an amount quoted in `code` back to USD
    pub fn to_usd(&self, amount: f64, code: &str) -> f64 {
        amount / self.rate(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

/// Raw `/predict` response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionPayload {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub growth_probability: Option<f64>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub price_usd: Option<f64>,
    /// Some deployments send this instead of `price_usd`
    #[serde(default)]
    pub current_price: Option<f64>,
    /// Echoed when the server already converted the price
    #[serde(default)]
    pub currency: Option<String>,
    /// Upstream status note, e.g. "Model not trained yet"
    #[serde(default)]
    pub message: Option<String>,
}

impl PredictionPayload {
    /// Check required fields and build a `PredictionResult`
    pub fn validate(self) -> Result<PredictionResult> {
        let reason = |field: &str| match &self.message {
            Some(message) => format!("missing {field}: {message}"),
            None => format!("missing {field}"),
        };

        let growth_probability = match self.growth_probability {
            Some(p) if p.is_finite() => p,
            Some(p) => {
                return Err(DashboardError::Application(format!(
                    "growth_probability is not finite: {p}"
                )));
            }
            None => return Err(DashboardError::Application(reason("growth_probability"))),
        };

        let Some(risk_level) = self.risk_level.clone() else {
            return Err(DashboardError::Application(reason("risk_level")));
        };

        Ok(PredictionResult {
            symbol: self.symbol.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
            growth_probability,
            risk_level,
            price_usd: self.price_usd.or(self.current_price),
            currency: self.currency.map(|c| c.to_ascii_uppercase()),
        })
    }
}

/// A validated prediction, replaced wholesale on each successful fetch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub symbol: String,
    /// Fraction (0-1) or percentage (0-100)
    pub growth_probability: f64,
    pub risk_level: String,
    pub price_usd: Option<f64>,
    pub currency: Option<String>,
}

impl PredictionResult {
    /// Price in USD, undoing any server-side conversion
    pub fn normalized_price_usd(&self, fx: &FxTable) -> Option<f64> {
        let price = self.price_usd?;
        match self.currency.as_deref() {
            Some(code) if code != "USD" => Some(fx.to_usd(price, code)),
            _ => Some(price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        assert_eq!(Currency::from_code("eur"), Some(Currency::Eur));
        assert_eq!(Currency::from_code(" INR "), Some(Currency::Inr));
        assert_eq!(Currency::from_code("GBP"), None);
        assert!("GBP".parse::<Currency>().is_err());
        assert_eq!(Currency::default(), Currency::Usd);
        assert_eq!(Currency::Eur.to_string(), "EUR");
    }

    #[test]
    fn test_fx_rates() {
        let fx = FxTable::default();
        assert!((fx.convert(100.0, "INR") - 9178.0).abs() < 1e-9);
        assert!((fx.convert(100.0, "EUR") - 85.0).abs() < 1e-9);
        // Unknown codes pass through unchanged
        assert!((fx.convert(123.45, "GBP") - 123.45).abs() < f64::EPSILON);
        assert!((fx.rate("JPY") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fx_override() {
        let mut fx = FxTable::default();
        fx.set_rate("eur", 0.9);
        assert!((fx.rate("EUR") - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_payload_accepts_current_price_alias() {
        let payload: PredictionPayload = serde_json::from_str(
            r#"{"growth_probability": 82, "risk_level": "High Risk", "current_price": 61234.5}"#,
        )
        .expect("payload should parse");
        let result = payload.validate().expect("payload should validate");
        assert_eq!(result.symbol, "BTC");
        assert_eq!(result.price_usd, Some(61234.5));
    }

    #[test]
    fn test_payload_null_price() {
        let payload: PredictionPayload = serde_json::from_str(
            r#"{"growth_probability": 0.4, "risk_level": "Medium Risk", "price_usd": null}"#,
        )
        .expect("payload should parse");
        let result = payload.validate().expect("payload should validate");
        assert_eq!(result.price_usd, None);
    }

    #[test]
    fn test_untrained_model_is_application_error() {
        let payload: PredictionPayload = serde_json::from_str(
            r#"{"symbol": "BTC", "growth_probability": null, "message": "Model not trained yet"}"#,
        )
        .expect("payload should parse");
        let err = payload.validate().unwrap_err();
        assert!(matches!(err, DashboardError::Application(_)));
        assert!(err.to_string().contains("Model not trained yet"));
    }

    #[test]
    fn test_missing_risk_level() {
        let payload = PredictionPayload {
            growth_probability: Some(0.5),
            ..PredictionPayload::default()
        };
        assert!(matches!(payload.validate(), Err(DashboardError::Application(_))));
    }

    #[test]
    fn test_server_converted_price_is_normalized() {
        let fx = FxTable::default();
        let result = PredictionResult {
            symbol: "BTC".into(),
            growth_probability: 0.5,
            risk_level: "Low Risk".into(),
            price_usd: Some(85.0),
            currency: Some("EUR".into()),
        };
        let usd = result.normalized_price_usd(&fx).expect("price present");
        assert!((usd - 100.0).abs() < 1e-9);
    }
}

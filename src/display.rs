//! Display derivation
//!
//! Pure projection of a `PredictionResult` and a currency into the
//! render-ready `DisplayState`. Nothing here touches the network or a
//! view; the view model feeds the output to a `ViewSink`.

use std::f64::consts::PI;

use serde::Serialize;

use crate::types::{FxTable, PredictionResult, currency_symbol};

/// Radius of the progress ring in the page SVG
pub const RING_RADIUS: f64 = 95.0;

/// Text shown while a refresh is in flight
pub const LOADING_PROBABILITY: &str = "...";
pub const LOADING_TEXT: &str = "Loading...";

/// Text shown after a failed refresh
pub const ERROR_PROBABILITY: &str = "--";
pub const ERROR_RISK: &str = "Error";
pub const UNAVAILABLE: &str = "Unavailable";

/// Risk classification derived from the free-text risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// First match wins: "Low", then "Medium", otherwise high
    pub fn from_risk_text(text: &str) -> Self {
        if text.contains("Low") {
            RiskCategory::Low
        } else if text.contains("Medium") {
            RiskCategory::Medium
        } else {
            RiskCategory::High
        }
    }
}

/// Render-ready values for the four view targets
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    pub probability_text: String,
    pub probability: Option<u8>,
    pub risk_text: String,
    pub risk_category: Option<RiskCategory>,
    pub price_text: String,
    pub progress_offset: f64,
}

impl DisplayState {
    /// Derive the display state for `result` shown in `currency_code`
    pub fn derive(result: &PredictionResult, currency_code: &str, fx: &FxTable) -> Self {
        let probability = probability_percent(result.growth_probability);
        let price = result
            .normalized_price_usd(fx)
            .map(|usd| fx.convert(usd, currency_code));

        Self {
            probability_text: probability.to_string(),
            probability: Some(probability),
            risk_text: result.risk_level.clone(),
            risk_category: Some(RiskCategory::from_risk_text(&result.risk_level)),
            price_text: format_price(price, currency_code),
            progress_offset: progress_offset(f64::from(probability)),
        }
    }

    /// Placeholders while loading
    pub fn loading() -> Self {
        Self {
            probability_text: LOADING_PROBABILITY.to_string(),
            probability: None,
            risk_text: LOADING_TEXT.to_string(),
            risk_category: None,
            price_text: LOADING_TEXT.to_string(),
            progress_offset: ring_circumference(),
        }
    }

    /// Uniform failure state; every field is overwritten
    pub fn error() -> Self {
        Self {
            probability_text: ERROR_PROBABILITY.to_string(),
            probability: None,
            risk_text: ERROR_RISK.to_string(),
            risk_category: None,
            price_text: UNAVAILABLE.to_string(),
            progress_offset: ring_circumference(),
        }
    }
}

/// Normalise a growth probability to a rounded 0-100 percentage.
///
/// Values up to 1 are read as fractions.
pub fn probability_percent(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    let percent = if raw.abs() <= 1.0 { raw * 100.0 } else { raw };
    // Math.round semantics: half rounds up
    (percent + 0.5).floor().clamp(0.0, 100.0) as u8
}

pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Stroke-dash offset of the ring for a 0-100 percentage
pub fn progress_offset(percentage: f64) -> f64 {
    let circumference = ring_circumference();
    let percentage = percentage.clamp(0.0, 100.0);
    circumference - (percentage / 100.0) * circumference
}

/// Format a converted price, or "Unavailable" when missing or not finite
pub fn format_price(price: Option<f64>, currency_code: &str) -> String {
    match price {
        Some(p) if p.is_finite() => format!("{}{}", currency_symbol(currency_code), group_number(p)),
        _ => UNAVAILABLE.to_string(),
    }
}

/// en-US grouping with at most three fraction digits, trailing zeros trimmed.
/// Ties round half away from zero, like `toLocaleString()`.
pub fn group_number(value: f64) -> String {
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{rounded:.3}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(probability: f64, risk: &str, price: Option<f64>) -> PredictionResult {
        PredictionResult {
            symbol: "BTC".into(),
            growth_probability: probability,
            risk_level: risk.into(),
            price_usd: price,
            currency: None,
        }
    }

    #[test]
    fn test_risk_first_match_wins() {
        assert_eq!(RiskCategory::from_risk_text("Low Risk"), RiskCategory::Low);
        assert_eq!(RiskCategory::from_risk_text("Medium Risk"), RiskCategory::Medium);
        assert_eq!(RiskCategory::from_risk_text("High Risk"), RiskCategory::High);
        assert_eq!(RiskCategory::from_risk_text("Medium-Low"), RiskCategory::Low);
        assert_eq!(RiskCategory::from_risk_text("Unknown"), RiskCategory::High);
        // Case-sensitive
        assert_eq!(RiskCategory::from_risk_text("low"), RiskCategory::High);
    }

    #[test]
    fn test_probability_scales() {
        assert_eq!(probability_percent(0.67), 67);
        assert_eq!(probability_percent(82.0), 82);
        assert_eq!(probability_percent(1.0), 100);
        assert_eq!(probability_percent(0.005), 1);
        assert_eq!(probability_percent(150.0), 100);
        assert_eq!(probability_percent(f64::NAN), 0);
    }

    #[test]
    fn test_progress_offset() {
        let c = ring_circumference();
        assert!((progress_offset(0.0) - c).abs() < 1e-9);
        assert!(progress_offset(100.0).abs() < 1e-9);
        assert!((progress_offset(50.0) - c / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_number(42_500.000_000_000_01), "42,500");
        assert_eq!(group_number(61_234.5), "61,234.5");
        assert_eq!(group_number(999.0), "999");
        assert_eq!(group_number(1_000.0), "1,000");
        assert_eq!(group_number(4_589_000.0), "4,589,000");
        assert_eq!(group_number(0.12345), "0.123");
        assert_eq!(group_number(-1_234.5), "-1,234.5");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_price(Some(61_234.0625), "USD"), "$61,234.063");
        assert_eq!(group_number(0.0005), "0.001");
        assert_eq!(group_number(-2.0625), "-2.063");
    }

    #[test]
    fn test_unavailable_price_for_every_currency() {
        for code in ["USD", "INR", "EUR", "GBP"] {
            assert_eq!(format_price(None, code), UNAVAILABLE);
            assert_eq!(format_price(Some(f64::NAN), code), UNAVAILABLE);
            assert_eq!(format_price(Some(f64::INFINITY), code), UNAVAILABLE);
        }
    }

    #[test]
    fn test_eur_scenario() {
        let state = DisplayState::derive(&result(0.67, "Low Risk", Some(50_000.0)), "EUR", &FxTable::default());
        assert_eq!(state.probability_text, "67");
        assert_eq!(state.risk_category, Some(RiskCategory::Low));
        assert_eq!(state.price_text, "€42,500");
    }

    #[test]
    fn test_usd_scenario() {
        let state = DisplayState::derive(&result(82.0, "High Risk", Some(61_234.5)), "USD", &FxTable::default());
        assert_eq!(state.probability_text, "82");
        assert_eq!(state.risk_category, Some(RiskCategory::High));
        assert_eq!(state.price_text, "$61,234.5");
    }

    #[test]
    fn test_unknown_currency_uses_unit_rate() {
        let state = DisplayState::derive(&result(0.5, "Medium Risk", Some(100.0)), "GBP", &FxTable::default());
        assert_eq!(state.price_text, "$100");
    }

    #[test]
    fn test_derive_is_idempotent() {
        let fx = FxTable::default();
        let r = result(0.31, "Medium Risk", Some(12_345.678));
        assert_eq!(DisplayState::derive(&r, "INR", &fx), DisplayState::derive(&r, "INR", &fx));
    }

    #[test]
    fn test_error_state_covers_all_fields() {
        let state = DisplayState::error();
        assert_eq!(state.probability_text, ERROR_PROBABILITY);
        assert_eq!(state.risk_text, ERROR_RISK);
        assert_eq!(state.price_text, UNAVAILABLE);
        assert_eq!(state.probability, None);
        assert_eq!(state.risk_category, None);
        assert_ne!(DisplayState::loading(), state);
    }
}

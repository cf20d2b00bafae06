//! Configuration management for the dashboard worker

use worker::Env;

use crate::error::{DashboardError, Result};
use crate::types::{Currency, FxTable};

const DEFAULT_API_BASE_URL: &str = "https://crptrix-backend.onrender.com";

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Prediction API base URL, without trailing slash
    pub api_base_url: String,

    /// Currency selected on first load
    pub default_currency: Currency,

    /// Append `?currency=` to upstream requests
    pub request_currency_param: bool,

    /// Static conversion table
    pub fx_rates: FxTable,

    /// Page auto-refresh period (0 = disabled)
    pub refresh_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            log_level: "info".to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_currency: Currency::Usd,
            request_currency_param: false,
            fx_rates: FxTable::default(),
            refresh_interval_seconds: 60,
        }
    }
}

impl Config {
    /// Load configuration from Cloudflare environment variables
    pub fn from_env(env: &Env) -> Result<Self> {
        Self::from_vars(|key| env.var(key).ok().map(|v| v.to_string()))
    }

    /// Build from any key lookup; missing or unparsable values keep defaults
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let mut fx_rates = defaults.fx_rates.clone();
        for currency in Currency::ALL {
            let key = format!("FX_RATE_{}", currency.code());
            if let Some(rate) = var(key.as_str()).and_then(|v| v.parse().ok()) {
                fx_rates.set_rate(currency.code(), rate);
            }
        }

        let default_currency = match var("DEFAULT_CURRENCY") {
            Some(code) => code.parse()?,
            None => defaults.default_currency,
        };

        let config = Self {
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),

            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),

            api_base_url: var("API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),

            default_currency,

            request_currency_param: var("REQUEST_CURRENCY_PARAM")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(defaults.request_currency_param),

            fx_rates,

            refresh_interval_seconds: var("REFRESH_INTERVAL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_interval_seconds),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://")) {
            return Err(DashboardError::Config(format!(
                "API_BASE_URL must be an http(s) URL, got {:?}",
                self.api_base_url
            )));
        }
        for (code, rate) in self.fx_rates.iter() {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(DashboardError::Config(format!("fx rate for {code} must be positive")));
            }
        }
        Ok(())
    }

    pub fn is_debug(&self) -> bool {
        self.log_level.eq_ignore_ascii_case("debug")
    }
}

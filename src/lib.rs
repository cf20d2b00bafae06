//! Crptrix Worker - BTC growth forecast dashboard for Cloudflare Workers
//!
//! Polls the Crptrix prediction API and renders growth probability, risk
//! level and price, with static client-side currency conversion.
//!
//! # Architecture
//! - `view_model`: refresh cycle, cached result, active currency
//! - `display`: pure derivation of render-ready values
//! - `client`: upstream `/predict` requests
//! - `snapshot`: server-side rendering for the page
//! - `dashboard`: HTML/CSS/JS served at `/`

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::needless_pass_by_value)] // Worker framework patterns

mod animation;
mod client;
mod config;
mod dashboard;
mod display;
mod error;
mod snapshot;
mod types;
mod view_model;

use worker::{Context, Env, Request, Response, Router, console_error, console_log, console_warn, event};

pub use animation::{AnimationSlot, CountUp};
pub use client::{PredictionClient, PredictionSource, decode_prediction};
pub use config::Config;
pub use display::{DisplayState, RiskCategory, format_price, probability_percent, progress_offset};
pub use error::DashboardError;
pub use snapshot::{DashboardSnapshot, RenderedView, SnapshotSink, capture};
pub use types::*;
pub use view_model::{AppState, PredictionViewModel, RefreshPhase, ViewSink};

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    console_error_panic_hook::set_once();

    let router = Router::new();

    router
        // Health check
        .get("/health", |_req, ctx| {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };

            Response::from_json(&serde_json::json!({
                "status": "Crptrix dashboard running",
                "version": env!("CARGO_PKG_VERSION"),
                "environment": config.environment,
                "api_base_url": config.api_base_url,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        })
        // Dashboard UI
        .get("/", |_req, ctx| dashboard_page(&ctx.env))
        .get("/dashboard", |_req, ctx| dashboard_page(&ctx.env))
        // Static page settings
        .get("/api/config", |_req, ctx| {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return error_response(&e, 500),
            };
            Response::from_json(&dashboard::page_config(&config))
        })
        // Fetch, derive and render for every currency
        .get_async("/api/prediction", |req, ctx| async move {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return error_response(&e, 500),
            };

            let requested = requested_currency(&req)?;
            let currency = match resolve_currency(requested.as_deref(), config.default_currency) {
                Ok(c) => c,
                Err(e) => {
                    console_warn!("Rejected currency {}", requested.unwrap_or_default());
                    return error_response(&e, 400);
                }
            };

            let client = PredictionClient::from_config(&config);
            if config.is_debug() {
                console_log!("Fetching {}", client.predict_url(currency));
            }
            let mut view_model = PredictionViewModel::new(client, config.fx_rates.clone(), currency);
            let snapshot = capture(&mut view_model).await;

            match &snapshot.error {
                Some(err) => console_error!("Prediction refresh failed [{}]: {}", snapshot.request_id, err.message),
                None => console_log!(
                    "Prediction refreshed [{}]: {} {}",
                    snapshot.request_id,
                    currency,
                    snapshot.selected_view().map_or("", |v| v.probability.as_str())
                ),
            }

            Response::from_json(&snapshot)
        })
        .run(req, env)
        .await
}

fn dashboard_page(env: &Env) -> WResult<Response> {
    match Config::from_env(env) {
        Ok(config) => Response::from_html(dashboard::dashboard_html(&config)),
        Err(e) => {
            console_error!("Config error: {}", e);
            Response::error(format!("Config error: {e}"), 500)
        }
    }
}

/// `currency` query parameter, if present
fn requested_currency(req: &Request) -> WResult<Option<String>> {
    let url = req.url()?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == "currency")
        .map(|(_, value)| value.into_owned()))
}

/// Requested currency, or `default` when none was given
fn resolve_currency(requested: Option<&str>, default: Currency) -> Result<Currency, DashboardError> {
    match requested {
        Some(code) => code.parse(),
        None => Ok(default),
    }
}

fn error_response(err: &DashboardError, status: u16) -> WResult<Response> {
    Ok(Response::from_json(&serde_json::json!({
        "error": true,
        "kind": err.kind(),
        "message": err.to_string(),
    }))?
    .with_status(status))
}

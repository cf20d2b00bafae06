//! Dashboard module - prediction web interface
//!
//! Single-page dashboard served by the worker.
//! Separated into HTML, CSS, and JS submodules for maintainability.
//!
//! # Architecture
//! - `html.rs`: Page structure and layout
//! - `css.rs`: Styling with CSS custom properties
//! - `js.rs`: Fetch, view writes, animation, currency switching
//!
//! The page never derives display values itself; it only writes what
//! `/api/prediction` rendered. `PAGE_CONFIG` carries the static pieces.

mod css;
mod html;
mod js;

use serde_json::json;

use crate::config::Config;
use crate::display::DisplayState;
use crate::snapshot::RenderedView;
use crate::types::Currency;

/// Page bootstrap values, serialized into a `PAGE_CONFIG` constant
pub fn page_config(config: &Config) -> serde_json::Value {
    json!({
        "defaultCurrency": config.default_currency,
        "currencies": Currency::ALL,
        "fxRates": config.fx_rates,
        "refreshIntervalMs": config.refresh_interval_seconds.saturating_mul(1000),
        "loadingView": RenderedView::from(&DisplayState::loading()),
        "errorView": RenderedView::from(&DisplayState::error()),
    })
}

/// Generate the complete dashboard HTML page
pub fn dashboard_html(config: &Config) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Crptrix Forecast</title>
    <style>
{css}
    </style>
</head>
<body>
{html}
    <script>
const PAGE_CONFIG = {page_config};
{js}
    </script>
</body>
</html>"#,
        css = css::STYLES,
        html = html::TEMPLATE,
        page_config = page_config(config),
        js = js::SCRIPT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_config_values() {
        let value = page_config(&Config::default());
        assert_eq!(value["defaultCurrency"], "USD");
        assert_eq!(value["currencies"], json!(["USD", "INR", "EUR"]));
        assert_eq!(value["refreshIntervalMs"], 60_000);
        assert_eq!(value["errorView"]["probability"], "--");
        assert_eq!(value["errorView"]["price"], "Unavailable");
        assert_eq!(value["loadingView"]["risk"], "Loading...");
    }

    #[test]
    fn test_dashboard_html_has_view_targets() {
        let page = dashboard_html(&Config::default());
        for id in ["currencyDropdown", "probabilityValue", "riskValue", "btcPrice", "progress-ring-circle"] {
            assert!(page.contains(id), "missing {id}");
        }
        assert!(page.contains("const PAGE_CONFIG = {"));
    }

    #[test]
    fn test_script_rejects_error_responses() {
        assert!(js::SCRIPT.contains("if (!res.ok) throw"));
        assert!(js::SCRIPT.contains("writeView(PAGE_CONFIG.errorView)"));
    }
}

//! Server-side rendering of the dashboard state
//!
//! The worker runs the view model once per request against a recording
//! sink, then re-renders the cached prediction for every supported
//! currency so the page can switch currency without another request.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::animation::CountUp;
use crate::client::PredictionSource;
use crate::display::{DisplayState, RiskCategory, ring_circumference};
use crate::types::Currency;
use crate::view_model::{PredictionViewModel, RefreshPhase, ViewSink};

/// Final values written to each view target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView {
    pub probability: String,
    pub risk: String,
    pub risk_class: Option<RiskCategory>,
    pub price: String,
    pub progress_offset: f64,
}

/// `ViewSink` that keeps only the latest write per target
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSink {
    view: RenderedView,
}

impl Default for SnapshotSink {
    fn default() -> Self {
        Self {
            view: RenderedView {
                probability: String::new(),
                risk: String::new(),
                risk_class: None,
                price: String::new(),
                progress_offset: ring_circumference(),
            },
        }
    }
}

impl SnapshotSink {
    pub fn into_view(self) -> RenderedView {
        self.view
    }
}

impl ViewSink for SnapshotSink {
    fn update_probability(&mut self, text: &str) {
        self.view.probability = text.to_string();
    }

    fn update_risk(&mut self, text: &str, category: Option<RiskCategory>) {
        self.view.risk = text.to_string();
        self.view.risk_class = category;
    }

    fn update_price(&mut self, text: &str) {
        self.view.price = text.to_string();
    }

    fn update_progress(&mut self, offset: f64) {
        self.view.progress_offset = offset;
    }
}

/// Everything `/api/prediction` returns
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub request_id: String,
    pub fetched_at: String,
    pub phase: RefreshPhase,
    pub symbol: Option<String>,
    pub selected: Currency,
    pub views: BTreeMap<Currency, RenderedView>,
    /// Count-up parameters for the page, absent on failure
    pub animation: Option<CountUp>,
    pub error: Option<SnapshotError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotError {
    pub kind: &'static str,
    pub message: String,
}

/// Refresh once, then render every currency from the cached result
pub async fn capture<S: PredictionSource>(vm: &mut PredictionViewModel<S>) -> DashboardSnapshot {
    let selected = vm.currency();
    let mut sink = SnapshotSink::default();
    let outcome = vm.refresh(&mut sink).await;

    let mut views = BTreeMap::new();
    views.insert(selected, sink.into_view());

    for currency in Currency::ALL.into_iter().filter(|c| *c != selected) {
        let mut sink = SnapshotSink::default();
        if vm.select_currency(currency, &mut sink).is_some() {
            views.insert(currency, sink.into_view());
        }
    }
    // Leave the model pointing at the currency the caller asked for
    let mut discard = SnapshotSink::default();
    vm.select_currency(selected, &mut discard);

    let (animation, error) = match &outcome {
        Ok(display) => (display.probability.map(CountUp::to_target), None),
        Err(err) => (
            None,
            Some(SnapshotError {
                kind: err.kind(),
                message: err.to_string(),
            }),
        ),
    };

    DashboardSnapshot {
        request_id: uuid::Uuid::new_v4().to_string(),
        fetched_at: chrono::Utc::now().to_rfc3339(),
        phase: vm.phase(),
        symbol: vm.cached().map(|r| r.symbol.clone()),
        selected,
        views,
        animation,
        error,
    }
}

impl DashboardSnapshot {
    pub fn selected_view(&self) -> Option<&RenderedView> {
        self.views.get(&self.selected)
    }
}

impl From<&DisplayState> for RenderedView {
    fn from(display: &DisplayState) -> Self {
        Self {
            probability: display.probability_text.clone(),
            risk: display.risk_text.clone(),
            risk_class: display.risk_category,
            price: display.price_text.clone(),
            progress_offset: display.progress_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::decode_prediction;
    use crate::display::{ERROR_PROBABILITY, ERROR_RISK, UNAVAILABLE};
    use crate::error::Result;
    use crate::types::{FxTable, PredictionResult};

    struct FixedBody(u16, &'static str);

    impl PredictionSource for FixedBody {
        async fn fetch(&self, _currency: Currency) -> Result<PredictionResult> {
            decode_prediction(self.0, self.1)
        }
    }

    #[tokio::test]
    async fn test_capture_renders_every_currency() {
        let source = FixedBody(200, r#"{"growth_probability": 0.67, "risk_level": "Low Risk", "price_usd": 50000}"#);
        let mut vm = PredictionViewModel::new(source, FxTable::default(), Currency::Eur);

        let snapshot = capture(&mut vm).await;

        assert_eq!(snapshot.phase, RefreshPhase::Success);
        assert_eq!(snapshot.symbol.as_deref(), Some("BTC"));
        assert_eq!(snapshot.views.len(), Currency::ALL.len());
        assert_eq!(snapshot.selected_view().map(|v| v.price.as_str()), Some("€42,500"));
        assert_eq!(snapshot.views[&Currency::Usd].price, "$50,000");
        assert_eq!(snapshot.views[&Currency::Inr].price, "₹4,589,000");
        assert!(snapshot.views.values().all(|v| v.probability == "67"));
        assert!(snapshot.animation.is_some());
        assert!(snapshot.error.is_none());
        assert_eq!(vm.currency(), Currency::Eur);
    }

    #[tokio::test]
    async fn test_capture_failure_is_uniform() {
        let mut vm = PredictionViewModel::new(FixedBody(500, "down"), FxTable::default(), Currency::Usd);

        let snapshot = capture(&mut vm).await;

        assert_eq!(snapshot.phase, RefreshPhase::Error);
        assert_eq!(snapshot.views.len(), Currency::ALL.len());
        for view in snapshot.views.values() {
            assert_eq!(view.probability, ERROR_PROBABILITY);
            assert_eq!(view.risk, ERROR_RISK);
            assert_eq!(view.price, UNAVAILABLE);
            assert_eq!(view.risk_class, None);
        }
        assert!(snapshot.animation.is_none());
        assert_eq!(snapshot.error.as_ref().map(|e| e.kind), Some("network"));
    }

    #[test]
    fn test_view_from_display() {
        let view = RenderedView::from(&DisplayState::error());
        assert_eq!(view.probability, ERROR_PROBABILITY);
        assert_eq!(view.price, UNAVAILABLE);
    }

    #[test]
    fn test_snapshot_serializes_currency_keys() {
        let mut views = BTreeMap::new();
        views.insert(Currency::Inr, RenderedView::from(&DisplayState::loading()));
        let json = serde_json::to_value(&views).expect("views serialize");
        assert!(json.get("INR").is_some());
    }
}

//! Prediction view model
//!
//! Owns the refresh cycle (`Idle -> Loading -> Success | Error`), the
//! cached last-known prediction and the active currency. Rendering goes
//! through a `ViewSink`, so nothing here depends on a browser.
//!
//! Changing currency re-renders the cached prediction locally with the
//! static fx table; it never triggers a network request.

use serde::Serialize;

use crate::animation::{AnimationSlot, CountUp};
use crate::client::PredictionSource;
use crate::display::{DisplayState, RiskCategory};
use crate::error::Result;
use crate::types::{Currency, FxTable, PredictionResult};

/// Presentation boundary: the four targets the dashboard writes to
pub trait ViewSink {
    fn update_probability(&mut self, text: &str);
    fn update_risk(&mut self, text: &str, category: Option<RiskCategory>);
    fn update_price(&mut self, text: &str);
    fn update_progress(&mut self, offset: f64);
}

/// Where the last refresh cycle ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPhase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Explicit application state; replaces page-level globals
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub currency: Currency,
    pub cached: Option<PredictionResult>,
}

pub struct PredictionViewModel<S> {
    source: S,
    fx: FxTable,
    state: AppState,
    phase: RefreshPhase,
    animation: AnimationSlot,
}

impl<S: PredictionSource> PredictionViewModel<S> {
    pub fn new(source: S, fx: FxTable, currency: Currency) -> Self {
        Self {
            source,
            fx,
            state: AppState {
                currency,
                cached: None,
            },
            phase: RefreshPhase::Idle,
            animation: AnimationSlot::default(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.state.currency
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn cached(&self) -> Option<&PredictionResult> {
        self.state.cached.as_ref()
    }

    /// One request through the source. Success replaces the cached result.
    pub async fn fetch_prediction(&mut self, currency: Currency) -> Result<PredictionResult> {
        let result = self.source.fetch(currency).await?;
        self.state.cached = Some(result.clone());
        Ok(result)
    }

    /// Project `result` in `currency` onto the sink. Pure apart from the sink writes.
    pub fn render(&self, result: &PredictionResult, currency: Currency, sink: &mut impl ViewSink) -> DisplayState {
        let display = DisplayState::derive(result, currency.code(), &self.fx);
        write_display(&display, sink);
        display
    }

    /// Full refresh cycle for the active currency.
    ///
    /// On failure every field is overwritten with its error text and the
    /// cache is cleared; the error is returned for logging only.
    pub async fn refresh(&mut self, sink: &mut impl ViewSink) -> Result<DisplayState> {
        self.animation.cancel();
        self.phase = RefreshPhase::Loading;
        write_display(&DisplayState::loading(), sink);

        let currency = self.state.currency;
        match self.fetch_prediction(currency).await {
            Ok(result) => {
                let display = self.render(&result, currency, sink);
                if let Some(target) = display.probability {
                    self.animation.start(CountUp::to_target(target));
                }
                self.phase = RefreshPhase::Success;
                Ok(display)
            }
            Err(err) => {
                self.fail(sink);
                Err(err)
            }
        }
    }

    /// Switch currency and re-render whatever is already known.
    ///
    /// Returns `None` when nothing has been rendered yet (idle or loading).
    pub fn select_currency(&mut self, currency: Currency, sink: &mut impl ViewSink) -> Option<DisplayState> {
        self.state.currency = currency;
        match (&self.state.cached, self.phase) {
            (Some(result), RefreshPhase::Success) => Some(self.render(result, currency, sink)),
            (_, RefreshPhase::Error) => {
                let display = DisplayState::error();
                write_display(&display, sink);
                Some(display)
            }
            _ => None,
        }
    }

    /// Advance the count-up animation to `now_ms`.
    /// Returns true while frames remain.
    pub fn tick(&mut self, now_ms: f64, sink: &mut impl ViewSink) -> bool {
        if let Some(value) = self.animation.frame(now_ms) {
            sink.update_probability(&value.to_string());
        }
        self.animation.is_running()
    }

    fn fail(&mut self, sink: &mut impl ViewSink) {
        self.animation.cancel();
        self.state.cached = None;
        self.phase = RefreshPhase::Error;
        write_display(&DisplayState::error(), sink);
    }
}

fn write_display(display: &DisplayState, sink: &mut impl ViewSink) {
    sink.update_probability(&display.probability_text);
    sink.update_risk(&display.risk_text, display.risk_category);
    sink.update_price(&display.price_text);
    sink.update_progress(display.progress_offset);
}

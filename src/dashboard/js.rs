//! Dashboard JavaScript
//!
//! Thin rendering boundary for the page:
//! - Fetches `/api/prediction`, which already holds rendered text per currency
//! - Writes the selected view into the four targets
//! - Count-up animation on `requestAnimationFrame`, cancelled on refresh
//! - Currency changes re-render locally from the last response

pub const SCRIPT: &str = r#"
// ============================================================================
// State
// ============================================================================
let snapshot = null;
let selectedCurrency = PAGE_CONFIG.defaultCurrency;
let animationFrame = null;

const elements = {
    currencyDropdown: document.getElementById('currencyDropdown'),
    probabilityValue: document.getElementById('probabilityValue'),
    riskValue: document.getElementById('riskValue'),
    btcPrice: document.getElementById('btcPrice'),
    progressCircle: document.querySelector('.progress-ring-circle'),
    symbolLabel: document.getElementById('symbolLabel'),
    refreshTime: document.getElementById('refreshTime'),
    fxNote: document.getElementById('fxNote')
};

// ============================================================================
// View Sink
// ============================================================================
function cancelAnimation() {
    if (animationFrame !== null) {
        cancelAnimationFrame(animationFrame);
        animationFrame = null;
    }
}

function animateProbability(anim) {
    cancelAnimation();
    let start = null;
    const step = (now) => {
        if (start === null) start = now;
        const t = anim.duration_ms > 0 ? Math.min((now - start) / anim.duration_ms, 1) : 1;
        const eased = 1 - Math.pow(1 - t, 3);
        elements.probabilityValue.textContent = Math.round(anim.from + (anim.to - anim.from) * eased);
        animationFrame = t < 1 ? requestAnimationFrame(step) : null;
    };
    animationFrame = requestAnimationFrame(step);
}

function writeView(view) {
    elements.probabilityValue.textContent = view.probability;
    elements.riskValue.textContent = view.risk;
    elements.riskValue.className = 'risk-value' + (view.risk_class ? ' ' + view.risk_class : '');
    elements.btcPrice.textContent = view.price;
    elements.progressCircle.style.strokeDashoffset = view.progress_offset;
}

function showLoading() {
    cancelAnimation();
    writeView(PAGE_CONFIG.loadingView);
}

function showSelected(animate) {
    if (!snapshot) return;
    const view = snapshot.views[selectedCurrency];
    if (!view) return;
    writeView(view);
    if (animate && snapshot.animation) animateProbability(snapshot.animation);
    const rate = PAGE_CONFIG.fxRates[selectedCurrency];
    elements.fxNote.textContent = selectedCurrency === 'USD' || rate === undefined
        ? ''
        : `Static rate: 1 USD = ${rate} ${selectedCurrency}`;
}

// ============================================================================
// Refresh
// ============================================================================
async function refreshPrediction() {
    const btn = document.getElementById('refreshBtn');
    btn.disabled = true;
    showLoading();

    try {
        const res = await fetch(`/api/prediction?currency=${encodeURIComponent(selectedCurrency)}`);
        const body = await res.json().catch(() => ({}));
        if (!res.ok) throw new Error(body.message || `HTTP ${res.status}`);
        snapshot = body;
        if (snapshot.symbol) elements.symbolLabel.textContent = snapshot.symbol;
        if (snapshot.error) console.error('Prediction error:', snapshot.error.message || snapshot.error);
        showSelected(true);
    } catch (err) {
        console.error('Dashboard error:', err);
        snapshot = null;
        writeView(PAGE_CONFIG.errorView);
    } finally {
        elements.refreshTime.textContent = 'Updated: ' + new Date().toLocaleTimeString();
        btn.disabled = false;
    }
}

// ============================================================================
// Initialization
// ============================================================================
PAGE_CONFIG.currencies.forEach(code => {
    const option = document.createElement('option');
    option.value = code;
    option.textContent = code;
    option.selected = code === selectedCurrency;
    elements.currencyDropdown.appendChild(option);
});

elements.currencyDropdown.addEventListener('change', (e) => {
    selectedCurrency = e.target.value;
    cancelAnimation();
    showSelected(false);
});

refreshPrediction();
if (PAGE_CONFIG.refreshIntervalMs > 0) {
    setInterval(refreshPrediction, PAGE_CONFIG.refreshIntervalMs);
}
"#;

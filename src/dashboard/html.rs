//! Dashboard HTML template
//!
//! Single card with the four view targets:
//! - Growth probability with progress ring
//! - Risk level badge
//! - Converted price
//! - Currency dropdown

pub const TEMPLATE: &str = r#"
    <div class="container">
        <header>
            <div>
                <h1>🔮 Crptrix <span id="symbolLabel">BTC</span> Forecast</h1>
                <span class="refresh-time" id="refreshTime">Loading...</span>
            </div>
            <div class="header-controls">
                <select class="currency-select" id="currencyDropdown"></select>
                <button class="btn btn-secondary" onclick="refreshPrediction()" id="refreshBtn">🔄 Refresh</button>
            </div>
        </header>

        <div class="grid">
            <!-- Probability Card -->
            <div class="card">
                <div class="card-header">
                    <span class="card-title">📈 Growth Probability</span>
                </div>
                <div class="ring-wrap">
                    <svg class="progress-ring" width="220" height="220">
                        <circle class="progress-ring-track" cx="110" cy="110" r="95"></circle>
                        <circle class="progress-ring-circle" cx="110" cy="110" r="95"></circle>
                    </svg>
                    <div class="ring-label">
                        <span id="probabilityValue">...</span><span class="ring-unit">%</span>
                    </div>
                </div>
            </div>

            <!-- Risk Card -->
            <div class="card">
                <div class="card-header">
                    <span class="card-title">⚠️ Risk Level</span>
                </div>
                <div class="risk-value" id="riskValue">Loading...</div>
            </div>

            <!-- Price Card -->
            <div class="card">
                <div class="card-header">
                    <span class="card-title">💰 Current Price</span>
                </div>
                <div class="card-value" id="btcPrice">Loading...</div>
                <div class="fx-note" id="fxNote"></div>
            </div>
        </div>
    </div>
"#;

//! Dashboard CSS styles
//!
//! Uses CSS custom properties (variables) for theming.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --green: #3fb950;
    --red: #f85149;
    --blue: #58a6ff;
    --yellow: #d29922;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
}

.container { max-width: 1000px; margin: 0 auto; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 24px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.header-controls {
    display: flex;
    align-items: center;
    gap: 12px;
}

.refresh-time { font-size: 12px; color: var(--text-dim); }

/* Controls */
.currency-select {
    background: var(--card);
    color: var(--text);
    border: 1px solid var(--border);
    border-radius: 6px;
    padding: 7px 10px;
    font-size: 13px;
}

.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
}

.btn:disabled { opacity: 0.6; cursor: not-allowed; }
.btn-secondary { background: var(--border); color: var(--text); }
.btn-secondary:hover:not(:disabled) { background: #3d444d; }

/* Grid Layout */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 16px;
}

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 16px;
}

.card-title {
    font-size: 14px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.card-value { font-size: 28px; font-weight: 700; }
.fx-note { font-size: 11px; color: var(--text-dim); margin-top: 8px; }

/* Progress Ring (r = 95, circumference ~596.9) */
.ring-wrap { position: relative; width: 220px; height: 220px; margin: 0 auto; }
.progress-ring { transform: rotate(-90deg); }
.progress-ring-track { fill: none; stroke: var(--border); stroke-width: 12; }
.progress-ring-circle {
    fill: none;
    stroke: var(--blue);
    stroke-width: 12;
    stroke-linecap: round;
    stroke-dasharray: 596.9;
    stroke-dashoffset: 596.9;
    transition: stroke-dashoffset 0.6s ease-out;
}
.ring-label {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 40px;
    font-weight: 700;
}
.ring-unit { font-size: 18px; color: var(--text-dim); margin-left: 2px; }

/* Risk */
.risk-value { font-size: 26px; font-weight: 700; }
.risk-value.low { color: var(--green); }
.risk-value.medium { color: var(--yellow); }
.risk-value.high { color: var(--red); }
";

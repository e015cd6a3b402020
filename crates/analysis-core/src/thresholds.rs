//! Fixed-cutoff interpretation of single metrics.
//!
//! Every metric has a low and a high cutoff. A value strictly below the low
//! cutoff takes the `below` outcome, strictly above the high cutoff takes the
//! `above` outcome, and anything in between (cutoffs included) lands in the
//! middle bucket. Missing or NaN values never reach the table.
use serde::{Deserialize, Serialize};

use crate::SignalCategory::{Buy, Hold, Neutral, Sell};
use crate::{Signal, SignalCategory};

/// Metric that has a fixed threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    PeRatio,
    PbRatio,
    DebtToEquity,
    EvToEbitda,
    Rsi,
    Macd,
    Volume,
}

/// Label and category produced by one side of a threshold rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub label: &'static str,
    pub category: SignalCategory,
}

impl Outcome {
    const fn new(label: &'static str, category: SignalCategory) -> Self {
        Self { label, category }
    }

    pub fn to_signal(self) -> Signal {
        Signal::new(self.label, self.category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRule {
    pub low: f64,
    pub high: f64,
    pub below: Outcome,
    pub middle: Outcome,
    pub above: Outcome,
}

impl ThresholdRule {
    pub fn apply(&self, value: f64) -> Signal {
        if value < self.low {
            self.below.to_signal()
        } else if value > self.high {
            self.above.to_signal()
        } else {
            self.middle.to_signal()
        }
    }
}

const PE_RATIO: ThresholdRule = ThresholdRule {
    low: 15.0,
    high: 30.0,
    below: Outcome::new("Undervalued (Buy)", Buy),
    middle: Outcome::new("Fairly Valued", Hold),
    above: Outcome::new("Overvalued (Sell)", Sell),
};

const PB_RATIO: ThresholdRule = ThresholdRule {
    low: 1.0,
    high: 3.0,
    below: Outcome::new("Undervalued (Positive Signal)", Buy),
    middle: Outcome::new("Fairly Priced", Hold),
    above: Outcome::new("Possibly Overvalued", Sell),
};

const DEBT_TO_EQUITY: ThresholdRule = ThresholdRule {
    low: 1.0,
    high: 2.0,
    below: Outcome::new("Low Leverage (Safe)", Buy),
    middle: Outcome::new("Moderate Risk", Hold),
    above: Outcome::new("High Risk (Debt-heavy)", Sell),
};

const EV_TO_EBITDA: ThresholdRule = ThresholdRule {
    low: 10.0,
    high: 20.0,
    below: Outcome::new("Attractive Valuation", Buy),
    middle: Outcome::new("Reasonable", Hold),
    above: Outcome::new("Expensive", Sell),
};

const RSI: ThresholdRule = ThresholdRule {
    low: 30.0,
    high: 70.0,
    below: Outcome::new("Oversold (Buy Signal)", Buy),
    middle: Outcome::new("Neutral", Neutral),
    above: Outcome::new("Overbought (Sell Signal)", Sell),
};

const MACD: ThresholdRule = ThresholdRule {
    low: 0.0,
    high: 0.0,
    below: Outcome::new("Bearish Momentum", Sell),
    middle: Outcome::new("No Clear Trend", Neutral),
    above: Outcome::new("Bullish Momentum", Buy),
};

const VOLUME: ThresholdRule = ThresholdRule {
    low: 1_000_000.0,
    high: 50_000_000.0,
    below: Outcome::new("Low volume (Weak interest)", Sell),
    middle: Outcome::new("Normal volume", Neutral),
    above: Outcome::new("High volume (Strong interest)", Buy),
};

impl MetricKind {
    pub const FUNDAMENTAL: [MetricKind; 4] = [
        MetricKind::PeRatio,
        MetricKind::PbRatio,
        MetricKind::EvToEbitda,
        MetricKind::DebtToEquity,
    ];

    pub const TECHNICAL: [MetricKind; 3] = [MetricKind::Rsi, MetricKind::Macd, MetricKind::Volume];

    pub fn rule(&self) -> &'static ThresholdRule {
        match self {
            MetricKind::PeRatio => &PE_RATIO,
            MetricKind::PbRatio => &PB_RATIO,
            MetricKind::DebtToEquity => &DEBT_TO_EQUITY,
            MetricKind::EvToEbitda => &EV_TO_EBITDA,
            MetricKind::Rsi => &RSI,
            MetricKind::Macd => &MACD,
            MetricKind::Volume => &VOLUME,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MetricKind::PeRatio => "P/E Ratio",
            MetricKind::PbRatio => "P/B Ratio",
            MetricKind::DebtToEquity => "Debt to Equity Ratio",
            MetricKind::EvToEbitda => "EV to EBITDA",
            MetricKind::Rsi => "RSI (14d)",
            MetricKind::Macd => "MACD",
            MetricKind::Volume => "Latest Volume",
        }
    }
}

/// Interpret one metric. Absent and NaN values resolve to `Signal::unavailable()`.
pub fn classify(kind: MetricKind, value: Option<f64>) -> Signal {
    match value {
        Some(v) if !v.is_nan() => kind.rule().apply(v),
        _ => Signal::unavailable(),
    }
}

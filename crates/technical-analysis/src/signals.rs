use analysis_core::format::{format_metric, group_thousands};
use analysis_core::{classify, MetricKind, Signal, SignalCategory, TechnicalIndicators};
use serde::Serialize;

use crate::moving_average::{compare_to_moving_averages, macd_crossover};

/// RSI(14): <30 oversold, >70 overbought
pub fn interpret_rsi(value: Option<f64>) -> Signal {
    classify(MetricKind::Rsi, value)
}

pub fn interpret_macd(value: Option<f64>) -> Signal {
    classify(MetricKind::Macd, value)
}

/// Shares traded: >50M strong interest, <1M weak
pub fn interpret_volume(volume: Option<u64>) -> Signal {
    classify(MetricKind::Volume, volume.map(|v| v as f64))
}

/// One line of the technicals card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalRow {
    pub name: &'static str,
    pub value: String,
    pub signal: Signal,
    pub display: String,
}

impl TechnicalRow {
    fn new(name: &'static str, value: String, signal: Signal) -> Self {
        Self {
            name,
            value,
            display: signal.display(),
            signal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalReport {
    pub rows: Vec<TechnicalRow>,
}

impl TechnicalReport {
    pub fn signal(&self, name: &str) -> Option<&Signal> {
        self.rows.iter().find(|r| r.name == name).map(|r| &r.signal)
    }

    pub fn count(&self, category: SignalCategory) -> usize {
        self.rows.iter().filter(|r| r.signal.category == category).count()
    }
}

fn dollars(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${}", v),
        _ => Signal::UNAVAILABLE_LABEL.to_string(),
    }
}

pub struct TechnicalAnalysisEngine;

impl TechnicalAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, indicators: &TechnicalIndicators, latest_close: Option<f64>) -> TechnicalReport {
        let averages = compare_to_moving_averages(indicators.sma, indicators.ema, latest_close);

        let rows = vec![
            TechnicalRow::new(
                "MACD Signal",
                format_metric(indicators.macd_signal),
                macd_crossover(indicators.macd, indicators.macd_signal),
            ),
            TechnicalRow::new(
                MetricKind::Rsi.display_name(),
                format_metric(indicators.rsi),
                interpret_rsi(indicators.rsi),
            ),
            TechnicalRow::new(
                MetricKind::Macd.display_name(),
                format_metric(indicators.macd),
                interpret_macd(indicators.macd),
            ),
            TechnicalRow::new("Simple MA (20d)", dollars(indicators.sma), averages.sma_signal),
            TechnicalRow::new("Exp MA (20d)", dollars(indicators.ema), averages.ema_signal),
            TechnicalRow::new(
                MetricKind::Volume.display_name(),
                indicators
                    .volume
                    .map(group_thousands)
                    .unwrap_or_else(|| Signal::UNAVAILABLE_LABEL.to_string()),
                interpret_volume(indicators.volume),
            ),
        ];

        TechnicalReport { rows }
    }
}

impl Default for TechnicalAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

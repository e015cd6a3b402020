use analysis_core::format::{format_dollars, format_metric};
use analysis_core::{classify, FundamentalMetrics, MetricKind, MetricSource, Signal, SignalCategory};
use serde::Serialize;

/// P/E: <15 undervalued, 15-30 fair, >30 overvalued
pub fn interpret_pe_ratio(value: Option<f64>) -> Signal {
    classify(MetricKind::PeRatio, value)
}

/// P/B: <1 trades below book, >3 rich
pub fn interpret_pb_ratio(value: Option<f64>) -> Signal {
    classify(MetricKind::PbRatio, value)
}

/// D/E: <1 conservative, 1-2 moderate, >2 debt-heavy
pub fn interpret_debt_to_equity(value: Option<f64>) -> Signal {
    classify(MetricKind::DebtToEquity, value)
}

pub fn interpret_ev_to_ebitda(value: Option<f64>) -> Signal {
    classify(MetricKind::EvToEbitda, value)
}

pub fn format_free_cash_flow(value: Option<f64>) -> String {
    format_dollars(value)
}

/// One line of the fundamentals card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundamentalRow {
    pub metric: MetricKind,
    pub name: &'static str,
    pub value: String,
    pub signal: Signal,
    /// Signal text with its badge, as printed on the card
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundamentalReport {
    pub ticker: Option<String>,
    pub rows: Vec<FundamentalRow>,
    pub free_cash_flow: String,
    pub reason: String,
}

impl FundamentalReport {
    pub fn signal(&self, metric: MetricKind) -> Option<&Signal> {
        self.rows.iter().find(|r| r.metric == metric).map(|r| &r.signal)
    }

    pub fn count(&self, category: SignalCategory) -> usize {
        self.rows.iter().filter(|r| r.signal.category == category).count()
    }
}

pub struct FundamentalAnalysisEngine;

impl FundamentalAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, metrics: &FundamentalMetrics) -> FundamentalReport {
        let rows: Vec<FundamentalRow> = metrics
            .classify_all()
            .into_iter()
            .map(|(metric, signal)| FundamentalRow {
                metric,
                name: metric.display_name(),
                value: format_metric(metrics.metric(metric)),
                display: signal.display(),
                signal,
            })
            .collect();

        let reason = rows
            .iter()
            .filter_map(|row| match row.signal.category {
                SignalCategory::Buy => Some(format!("+ {}", row.signal.label)),
                SignalCategory::Sell => Some(format!("- {}", row.signal.label)),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(", ");

        FundamentalReport {
            ticker: metrics.ticker.clone(),
            rows,
            free_cash_flow: format_free_cash_flow(metrics.free_cash_flow),
            reason: if reason.is_empty() {
                "No decisive fundamental signals".to_string()
            } else {
                reason
            },
        }
    }
}

impl Default for FundamentalAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

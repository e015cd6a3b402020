use std::fmt;

use analysis_core::{
    AiAnalysis, FundamentalMetrics, Interval, PricePoint, SentimentData, StockQuote,
    TechnicalIndicators,
};
use serde::{Deserialize, Serialize};

/// Retrieval state of one data kind. Each kind loads and fails on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Section<T> {
    Loaded(T),
    Loading,
    Unavailable { reason: String },
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Loading
    }
}

impl<T> Section<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Section::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Section::Loaded(data),
            Err(e) => Section::unavailable(e.to_string()),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Section::Loaded(_))
    }

    /// Transform loaded data, carrying `Loading`/`Unavailable` through untouched.
    pub fn map_ref<U>(&self, f: impl FnOnce(&T) -> U) -> Section<U> {
        match self {
            Section::Loaded(data) => Section::Loaded(f(data)),
            Section::Loading => Section::Loading,
            Section::Unavailable { reason } => Section::Unavailable {
                reason: reason.clone(),
            },
        }
    }
}

/// Everything fetched for one ticker at one refresh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ticker: String,
    #[serde(default)]
    pub interval: Interval,
    #[serde(default)]
    pub quote: Section<StockQuote>,
    #[serde(default)]
    pub history: Section<Vec<PricePoint>>,
    #[serde(default)]
    pub fundamentals: Section<FundamentalMetrics>,
    #[serde(default)]
    pub indicators: Section<TechnicalIndicators>,
    #[serde(default)]
    pub sentiment: Section<SentimentData>,
    #[serde(default)]
    pub ai_analysis: Section<AiAnalysis>,
}

impl Snapshot {
    pub fn new(ticker: impl Into<String>, interval: Interval) -> Self {
        Self {
            ticker: ticker.into(),
            interval,
            ..Default::default()
        }
    }

    pub fn latest_close(&self) -> Option<f64> {
        self.quote.loaded().map(|q| q.latest_close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis_core::AnalysisError;

    #[test]
    fn test_section_wire_shape() {
        let loaded: Section<u32> = serde_json::from_str(r#"{"status":"loaded","data":7}"#).unwrap();
        assert_eq!(loaded, Section::Loaded(7));

        let failed: Section<u32> =
            serde_json::from_str(r#"{"status":"unavailable","data":{"reason":"HTTP 500"}}"#).unwrap();
        assert_eq!(failed, Section::unavailable("HTTP 500"));

        let loading: Section<u32> = serde_json::from_str(r#"{"status":"loading"}"#).unwrap();
        assert_eq!(loading, Section::Loading);
    }

    #[test]
    fn test_from_result_keeps_error_text() {
        let section: Section<u32> =
            Section::from_result(Err(AnalysisError::InsufficientData("Not enough data for indicators".into())));
        assert_eq!(
            section,
            Section::unavailable("Insufficient data: Not enough data for indicators")
        );
    }

    #[test]
    fn test_map_ref_passes_states_through() {
        assert_eq!(Section::Loaded(2).map_ref(|v| v * 10), Section::Loaded(20));
        assert_eq!(Section::<u32>::Loading.map_ref(|v| v * 10), Section::Loading);
        assert_eq!(
            Section::<u32>::unavailable("timeout").map_ref(|v| v * 10),
            Section::unavailable("timeout")
        );
    }

    #[test]
    fn test_missing_sections_default_to_loading() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"ticker":"AAPL"}"#).unwrap();
        assert_eq!(snapshot.interval, Interval::OneMonth);
        assert_eq!(snapshot.history, Section::Loading);
        assert_eq!(snapshot.latest_close(), None);
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// Look-back window for price history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
    #[default]
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "6m")]
    SixMonths,
}

impl Interval {
    pub const ALL: [Interval; 4] = [
        Interval::OneDay,
        Interval::OneWeek,
        Interval::OneMonth,
        Interval::SixMonths,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Interval::OneDay => "1d",
            Interval::OneWeek => "1w",
            Interval::OneMonth => "1m",
            Interval::SixMonths => "6m",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interval::OneDay => "Past Day",
            Interval::OneWeek => "Past Week",
            Interval::OneMonth => "Past Month",
            Interval::SixMonths => "Past 6 Months",
        }
    }

    /// (period, bar granularity) requested from the history source
    pub fn history_window(&self) -> (&'static str, &'static str) {
        match self {
            Interval::OneDay => ("1d", "5m"),
            Interval::OneWeek => ("5d", "30m"),
            Interval::OneMonth => ("1mo", "1d"),
            Interval::SixMonths => ("6mo", "1d"),
        }
    }

    /// Intraday windows get one tick per calendar day.
    pub fn uses_daily_ticks(&self) -> bool {
        matches!(self, Interval::OneDay | Interval::OneWeek)
    }

    pub fn parse(code: &str) -> Result<Self, AnalysisError> {
        Self::ALL
            .into_iter()
            .find(|i| i.code() == code.trim())
            .ok_or_else(|| AnalysisError::InvalidData(format!("Unknown interval: {}", code)))
    }

    /// Unknown codes fall back to the one-month window.
    pub fn parse_or_default(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }
}

impl FromStr for Interval {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

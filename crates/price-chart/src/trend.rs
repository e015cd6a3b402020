use analysis_core::PricePoint;
use serde::{Deserialize, Serialize};

/// Stroke color for the price line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColor {
    Up,
    Down,
    Neutral,
}

impl TrendColor {
    pub fn css(&self) -> &'static str {
        match self {
            TrendColor::Up => "green",
            TrendColor::Down => "red",
            TrendColor::Neutral => "#8884d8",
        }
    }
}

/// Compares only the first and last closes; a flat window counts as up.
pub fn select_trend_color(series: &[PricePoint]) -> TrendColor {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) if series.len() >= 2 => {
            if last.close >= first.close {
                TrendColor::Up
            } else {
                TrendColor::Down
            }
        }
        _ => TrendColor::Neutral,
    }
}

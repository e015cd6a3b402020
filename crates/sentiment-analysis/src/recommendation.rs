use serde::{Deserialize, Serialize};

/// Styling bucket for a recommendation string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationBucket {
    Buy,
    Sell,
    #[default]
    Hold,
}

const BUY_PATTERNS: &[&str] = &["Strong Buy", "Buy"];
const SELL_PATTERNS: &[&str] = &["Strong Sell", "Sell"];

/// Bucket free text by case-sensitive containment.
///
/// Buy patterns are checked before sell patterns, so text mentioning both
/// lands in `Buy`. Missing or empty text is `Hold`.
pub fn bucket_recommendation(text: Option<&str>) -> RecommendationBucket {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return RecommendationBucket::Hold,
    };

    if BUY_PATTERNS.iter().any(|p| text.contains(p)) {
        RecommendationBucket::Buy
    } else if SELL_PATTERNS.iter().any(|p| text.contains(p)) {
        RecommendationBucket::Sell
    } else {
        RecommendationBucket::Hold
    }
}

/// Day-over-day change in percent. `None` when the previous close is zero.
pub fn change_pct(latest: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 || !latest.is_finite() || !previous.is_finite() {
        return None;
    }
    Some((latest - previous) / previous * 100.0)
}

/// Recommendation text for a daily move
pub fn recommendation_from_change(change_pct: f64) -> &'static str {
    if change_pct >= 3.0 {
        "Strong Buy"
    } else if change_pct >= 1.0 {
        "Buy"
    } else if change_pct > -1.0 {
        "Hold"
    } else if change_pct > -3.0 {
        "Sell"
    } else {
        "Strong Sell"
    }
}

use analysis_core::AnalystSummary;
use serde::Serialize;

use crate::recommendation::RecommendationBucket;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalystBreakdown {
    pub period: String,
    pub strong_buy: u32,
    pub buy: u32,
    pub hold: u32,
    pub sell: u32,
    pub strong_sell: u32,
    pub total: u64,
    pub consensus: RecommendationBucket,
}

/// Counts for the analyst card, or `None` when upstream had no period.
///
/// The consensus folds strong ratings into their side and needs a strict
/// plurality; any tie reads as hold.
pub fn analyst_breakdown(summary: Option<&AnalystSummary>) -> Option<AnalystBreakdown> {
    let summary = summary.filter(|s| s.is_present())?;

    let bullish = u64::from(summary.strong_buy) + u64::from(summary.buy);
    let bearish = u64::from(summary.sell) + u64::from(summary.strong_sell);
    let hold = u64::from(summary.hold);
    let consensus = if bullish > bearish && bullish > hold {
        RecommendationBucket::Buy
    } else if bearish > bullish && bearish > hold {
        RecommendationBucket::Sell
    } else {
        RecommendationBucket::Hold
    };

    Some(AnalystBreakdown {
        period: summary.period.clone(),
        strong_buy: summary.strong_buy,
        buy: summary.buy,
        hold: summary.hold,
        sell: summary.sell,
        strong_sell: summary.strong_sell,
        total: bullish + bearish + hold,
        consensus,
    })
}

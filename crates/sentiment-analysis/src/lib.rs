use analysis_core::format::format_metric;
use analysis_core::{SentimentData, StockQuote};
use serde::Serialize;

pub mod analyst;
pub mod news;
pub mod recommendation;

pub use analyst::{analyst_breakdown, AnalystBreakdown};
pub use news::{news_digest, NewsDigestItem, SUMMARY_PREVIEW_CHARS};
pub use recommendation::{
    bucket_recommendation, change_pct, recommendation_from_change, RecommendationBucket,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub analyst: Option<AnalystBreakdown>,
    pub news: Vec<NewsDigestItem>,
    pub put_call_ratio: String,
    pub short_interest_pct: String,
}

/// Header line for a ticker card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteView {
    pub ticker: String,
    pub latest_close: f64,
    pub change_pct: f64,
    pub recommendation: String,
    pub bucket: RecommendationBucket,
}

pub fn interpret_quote(quote: &StockQuote) -> QuoteView {
    QuoteView {
        ticker: quote.ticker.to_uppercase(),
        latest_close: quote.latest_close,
        change_pct: quote.change_pct,
        recommendation: quote.recommendation.clone(),
        bucket: bucket_recommendation(Some(&quote.recommendation)),
    }
}

pub struct SentimentAnalysisEngine;

impl SentimentAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, data: &SentimentData) -> SentimentReport {
        SentimentReport {
            analyst: analyst_breakdown(data.analyst_summary.as_ref()),
            news: news_digest(&data.news),
            put_call_ratio: format_metric(data.put_call_ratio),
            short_interest_pct: format_metric(data.short_interest_pct),
        }
    }
}

impl Default for SentimentAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

use analysis_core::Interval;
use fundamental_analysis::{FundamentalAnalysisEngine, FundamentalReport};
use price_chart::{prepare_chart, ChartView};
use sentiment_analysis::{interpret_quote, QuoteView, SentimentAnalysisEngine, SentimentReport};
use serde::Serialize;
use technical_analysis::{TechnicalAnalysisEngine, TechnicalReport};

pub mod snapshot;
pub use snapshot::{Section, Snapshot};

pub const NO_ANALYSIS: &str = "No analysis available.";

/// Display-ready interpretation of one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub ticker: String,
    pub interval: Interval,
    pub quote: Section<QuoteView>,
    /// `Loaded(None)` means the history arrived empty and nothing should be drawn
    pub chart: Section<Option<ChartView>>,
    pub fundamentals: Section<FundamentalReport>,
    pub technicals: Section<TechnicalReport>,
    pub sentiment: Section<SentimentReport>,
    pub ai_analysis: Section<String>,
}

impl DashboardView {
    /// Sections that failed to load, as `(name, reason)`
    pub fn unavailable_sections(&self) -> Vec<(&'static str, &str)> {
        fn reason<T>(section: &Section<T>) -> Option<&str> {
            match section {
                Section::Unavailable { reason } => Some(reason.as_str()),
                _ => None,
            }
        }

        [
            ("quote", reason(&self.quote)),
            ("chart", reason(&self.chart)),
            ("fundamentals", reason(&self.fundamentals)),
            ("technicals", reason(&self.technicals)),
            ("sentiment", reason(&self.sentiment)),
            ("ai_analysis", reason(&self.ai_analysis)),
        ]
        .into_iter()
        .filter_map(|(name, r)| r.map(|r| (name, r)))
        .collect()
    }
}

fn log_unavailable<T>(ticker: &str, kind: &str, section: &Section<T>) {
    if let Section::Unavailable { reason } = section {
        tracing::warn!("{} unavailable for {}: {}", kind, ticker, reason);
    }
}

pub struct DashboardInterpreter {
    fundamental_analyzer: FundamentalAnalysisEngine,
    technical_analyzer: TechnicalAnalysisEngine,
    sentiment_analyzer: SentimentAnalysisEngine,
}

impl DashboardInterpreter {
    pub fn new() -> Self {
        Self {
            fundamental_analyzer: FundamentalAnalysisEngine::new(),
            technical_analyzer: TechnicalAnalysisEngine::new(),
            sentiment_analyzer: SentimentAnalysisEngine::new(),
        }
    }

    /// Interpret every section independently; a failed kind never hides the others.
    pub fn interpret(&self, snapshot: &Snapshot) -> DashboardView {
        let ticker = snapshot.ticker.to_uppercase();
        tracing::info!("Interpreting snapshot for {} (interval: {})", ticker, snapshot.interval);

        log_unavailable(&ticker, "Quote", &snapshot.quote);
        log_unavailable(&ticker, "Price history", &snapshot.history);
        log_unavailable(&ticker, "Fundamentals", &snapshot.fundamentals);
        log_unavailable(&ticker, "Indicators", &snapshot.indicators);
        log_unavailable(&ticker, "Sentiment", &snapshot.sentiment);
        log_unavailable(&ticker, "AI analysis", &snapshot.ai_analysis);

        let chart = snapshot.history.map_ref(|series| {
            tracing::debug!("Preparing chart from {} points", series.len());
            prepare_chart(series, snapshot.interval)
        });

        let latest_close = snapshot.latest_close();
        if latest_close.is_none() && snapshot.indicators.is_loaded() {
            tracing::debug!("No latest close for {}; moving-average signals will read N/A", ticker);
        }
        let technicals = snapshot
            .indicators
            .map_ref(|indicators| self.technical_analyzer.analyze(indicators, latest_close));

        let ai_analysis = snapshot.ai_analysis.map_ref(|ai| {
            ai.analysis
                .as_deref()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(NO_ANALYSIS)
                .to_string()
        });

        DashboardView {
            ticker,
            interval: snapshot.interval,
            quote: snapshot.quote.map_ref(interpret_quote),
            chart,
            fundamentals: snapshot
                .fundamentals
                .map_ref(|metrics| self.fundamental_analyzer.analyze(metrics)),
            technicals,
            sentiment: snapshot
                .sentiment
                .map_ref(|data| self.sentiment_analyzer.analyze(data)),
            ai_analysis,
        }
    }
}

impl Default for DashboardInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// Layout used when a history timestamp carries a time of day.
pub const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Layout used when a history timestamp is a plain calendar date.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp layouts accepted on the history wire, most specific first.
const WIRE_DATETIME_FORMATS: &[&str] = &[WIRE_DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a history timestamp. Date-only values resolve to midnight.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDateTime, AnalysisError> {
    let raw = raw.trim();
    for format in WIRE_DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(ts);
        }
    }
    NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT)
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
        .ok_or_else(|| AnalysisError::InvalidData(format!("Unrecognized date: {}", raw)))
}

/// `PricePoint` as it travels on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WirePricePoint {
    pub date: String,
    pub close: f64,
}

/// One closing price sample from the history endpoint.
///
/// `date_only` remembers whether the wire value was a plain calendar date, so
/// the point serializes back in the layout it arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WirePricePoint", into = "WirePricePoint")]
pub struct PricePoint {
    pub date: NaiveDateTime,
    pub close: f64,
    pub date_only: bool,
}

impl PricePoint {
    pub fn new(date: NaiveDateTime, close: f64) -> Self {
        Self {
            date,
            close,
            date_only: false,
        }
    }

    /// Daily bar keyed by calendar date alone.
    pub fn on_day(day: NaiveDate, close: f64) -> Self {
        Self {
            date: day.and_time(NaiveTime::MIN),
            close,
            date_only: true,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// The `date` key as it appears on the wire.
    pub fn wire_date(&self) -> String {
        let layout = if self.date_only {
            WIRE_DATE_FORMAT
        } else {
            WIRE_DATETIME_FORMAT
        };
        self.date.format(layout).to_string()
    }
}

impl TryFrom<WirePricePoint> for PricePoint {
    type Error = AnalysisError;

    fn try_from(wire: WirePricePoint) -> Result<Self, Self::Error> {
        let raw = wire.date.trim();
        if let Ok(day) = NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT) {
            return Ok(Self::on_day(day, wire.close));
        }
        Ok(Self::new(parse_wire_date(raw)?, wire.close))
    }
}

impl From<PricePoint> for WirePricePoint {
    fn from(point: PricePoint) -> Self {
        Self {
            date: point.wire_date(),
            close: point.close,
        }
    }
}

/// Valuation metrics. Every field may be missing and a missing field is never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalMetrics {
    #[serde(default)]
    pub ticker: Option<String>,
    pub pe_ratio: Option<f64>,
    pub pb_ratio: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub free_cash_flow: Option<f64>,
}

/// Latest technical indicator readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub volume: Option<u64>,
}

/// Most recent analyst recommendation period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalystSummary {
    #[serde(default)]
    pub period: String,
    #[serde(rename = "strongBuy", default)]
    pub strong_buy: u32,
    #[serde(default)]
    pub buy: u32,
    #[serde(default)]
    pub hold: u32,
    #[serde(default)]
    pub sell: u32,
    #[serde(rename = "strongSell", default)]
    pub strong_sell: u32,
}

impl AnalystSummary {
    /// Upstream sends `{}` when it has no recommendations; only a named period counts.
    pub fn is_present(&self) -> bool {
        !self.period.is_empty()
    }
}

/// Company news headline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub url: String,
    /// Unix epoch seconds
    pub datetime: i64,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Sentiment payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentData {
    #[serde(default)]
    pub put_call_ratio: Option<f64>,
    #[serde(default)]
    pub short_interest_pct: Option<f64>,
    #[serde(default)]
    pub analyst_summary: Option<AnalystSummary>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
}

/// Latest close with the backend's day-over-day recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub ticker: String,
    pub latest_close: f64,
    pub change_pct: f64,
    #[serde(default)]
    pub recommendation: String,
}

/// Free-text narrative from the analysis endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(default)]
    pub analysis: Option<String>,
}

/// Signal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    Buy,
    Sell,
    Hold,
    Neutral,
    Unknown,
}

impl SignalCategory {
    /// Badge shown in front of a label
    pub fn icon(&self) -> &'static str {
        match self {
            SignalCategory::Buy => "✅",
            SignalCategory::Sell => "⚠️",
            SignalCategory::Hold | SignalCategory::Neutral => "➖",
            SignalCategory::Unknown => "",
        }
    }
}

/// Interpreted metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub label: String,
    pub category: SignalCategory,
}

impl Signal {
    pub const UNAVAILABLE_LABEL: &'static str = "N/A";

    pub fn new(label: impl Into<String>, category: SignalCategory) -> Self {
        Self {
            label: label.into(),
            category,
        }
    }

    /// Fallback for an absent input.
    pub fn unavailable() -> Self {
        Self::new(Self::UNAVAILABLE_LABEL, SignalCategory::Unknown)
    }

    pub fn is_unavailable(&self) -> bool {
        self.category == SignalCategory::Unknown
    }

    /// Label with its category badge, e.g. `✅ Attractive Valuation`.
    pub fn display(&self) -> String {
        match self.category.icon() {
            "" => self.label.clone(),
            icon => format!("{} {}", icon, self.label),
        }
    }
}

/// Vertical axis range for a price chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub low: f64,
    pub high: f64,
}

impl AxisDomain {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// True when the axis has no height and needs a caller-side fallback.
    pub fn is_degenerate(&self) -> bool {
        self.span() <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_wire_date_formats() {
        let ts = parse_wire_date("2025-03-05 14:30").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2025, 3, 5));
        assert_eq!((ts.hour(), ts.minute()), (14, 30));

        let midnight = parse_wire_date("2025-03-05").unwrap();
        assert_eq!(midnight.hour(), 0);
        assert_eq!(midnight.date(), ts.date());

        assert!(parse_wire_date("05/03/2025").is_err());
    }

    #[test]
    fn test_price_point_wire_shape() {
        let point: PricePoint = serde_json::from_str(r#"{"date":"2025-03-05 09:30","close":101.25}"#).unwrap();
        assert_eq!(point.close, 101.25);
        assert_eq!(point.day(), NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());

        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["date"], "2025-03-05 09:30");
    }

    #[test]
    fn test_date_only_point_keeps_layout() {
        let point: PricePoint = serde_json::from_str(r#"{"date":"2025-01-02","close":243.85}"#).unwrap();
        assert!(point.date_only);
        assert_eq!(point, PricePoint::on_day(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), 243.85));
        assert_eq!(point.wire_date(), "2025-01-02");

        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json, serde_json::json!({"date": "2025-01-02", "close": 243.85}));
    }

    #[test]
    fn test_bad_point_date_is_rejected() {
        let err = serde_json::from_str::<PricePoint>(r#"{"date":"02/01/2025","close":1.0}"#).unwrap_err();
        assert!(err.to_string().contains("Unrecognized date"));
    }

    #[test]
    fn test_fundamentals_missing_fields_are_absent() {
        let metrics: FundamentalMetrics =
            serde_json::from_str(r#"{"ticker":"AAPL","pe_ratio":28.4,"pb_ratio":null}"#).unwrap();
        assert_eq!(metrics.pe_ratio, Some(28.4));
        assert_eq!(metrics.pb_ratio, None);
        assert_eq!(metrics.free_cash_flow, None);
    }

    #[test]
    fn test_analyst_summary_camel_case_and_presence() {
        let summary: AnalystSummary = serde_json::from_str(
            r#"{"period":"2025-03-01","strongBuy":12,"buy":20,"hold":7,"sell":1,"strongSell":0,"symbol":"AAPL"}"#,
        )
        .unwrap();
        assert_eq!(summary.strong_buy, 12);
        assert!(summary.is_present());

        let empty: AnalystSummary = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_present());
    }

    #[test]
    fn test_signal_serializes_lowercase_category() {
        let json = serde_json::to_value(Signal::new("Neutral", SignalCategory::Neutral)).unwrap();
        assert_eq!(json["category"], "neutral");
        assert_eq!(Signal::unavailable().label, "N/A");
        assert_eq!(Signal::unavailable().display(), "N/A");
        assert_eq!(Signal::new("Expensive", SignalCategory::Sell).display(), "⚠️ Expensive");
    }
}

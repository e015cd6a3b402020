pub mod domain;
pub mod format;
pub mod ticks;
pub mod trend;

pub use domain::*;
pub use format::*;
pub use ticks::*;
pub use trend::*;

use analysis_core::{AxisDomain, Interval, PricePoint};
use serde::Serialize;

/// Everything the line chart needs besides the raw points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub interval: Interval,
    pub interval_label: &'static str,
    pub domain: AxisDomain,
    pub trend: TrendColor,
    pub stroke: &'static str,
    /// `None` lets the chart place ticks itself. Each tick is the point's
    /// `date` key exactly as the history wire carried it.
    pub ticks: Option<Vec<String>>,
    pub tick_labels: Option<Vec<String>>,
    pub points: usize,
    pub latest_close: String,
}

/// Chart settings for a history window, or `None` for an empty series.
pub fn prepare_chart(series: &[PricePoint], interval: Interval) -> Option<ChartView> {
    let last = series.last()?;
    let trend = select_trend_color(series);
    let ticks = select_tick_points(series, interval);

    Some(ChartView {
        interval,
        interval_label: interval.label(),
        domain: compute_domain(series),
        trend,
        stroke: trend.css(),
        tick_labels: ticks
            .as_ref()
            .map(|t| t.iter().map(|p| format_tick_label(&p.date)).collect()),
        ticks: ticks.map(|t| t.iter().map(|p| p.wire_date()).collect()),
        points: series.len(),
        latest_close: format_close(last.close),
    })
}

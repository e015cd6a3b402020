use analysis_core::{Interval, PricePoint};
use chrono::NaiveDateTime;

/// One tick per calendar day for intraday windows.
///
/// Returns `None` for `1m`/`6m`, meaning the chart keeps its automatic ticks.
/// Otherwise keeps, in series order, each point whose calendar day differs
/// from the point just before it.
pub fn select_tick_points(series: &[PricePoint], interval: Interval) -> Option<Vec<&PricePoint>> {
    if !interval.uses_daily_ticks() {
        return None;
    }

    let mut ticks = Vec::new();
    let mut previous_day = None;
    for point in series {
        let day = point.day();
        if previous_day != Some(day) {
            ticks.push(point);
        }
        previous_day = Some(day);
    }
    Some(ticks)
}

/// Timestamps of the points picked by [`select_tick_points`].
pub fn select_ticks(series: &[PricePoint], interval: Interval) -> Option<Vec<NaiveDateTime>> {
    select_tick_points(series, interval).map(|points| points.iter().map(|p| p.date).collect())
}

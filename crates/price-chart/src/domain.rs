use analysis_core::{AxisDomain, PricePoint};

/// Share of the close range added above and below the data
pub const DOMAIN_PADDING: f64 = 0.05;

/// Padded Y-axis range over the closing prices, widened to whole numbers.
///
/// An empty series yields `{0, 0}`; callers should not draw a chart from it.
/// A flat series gets no padding, so an integral flat close yields `low == high`.
pub fn compute_domain(series: &[PricePoint]) -> AxisDomain {
    if series.is_empty() {
        return AxisDomain::new(0.0, 0.0);
    }

    let min = series.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let max = series.iter().map(|p| p.close).fold(f64::NEG_INFINITY, f64::max);
    let buffer = (max - min) * DOMAIN_PADDING;

    AxisDomain::new((min - buffer).floor(), (max + buffer).ceil())
}

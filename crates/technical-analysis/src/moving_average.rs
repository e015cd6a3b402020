use analysis_core::{Signal, SignalCategory};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovingAverageSignals {
    pub sma_signal: Signal,
    pub ema_signal: Signal,
}

impl MovingAverageSignals {
    fn unavailable() -> Self {
        Self {
            sma_signal: Signal::unavailable(),
            ema_signal: Signal::unavailable(),
        }
    }
}

/// Position of the latest close relative to the 20-day averages.
///
/// Only a strictly higher price counts as "above"; a price sitting exactly on
/// the average is reported with the "below" reading.
pub fn compare_to_moving_averages(
    sma: Option<f64>,
    ema: Option<f64>,
    latest_price: Option<f64>,
) -> MovingAverageSignals {
    let (sma, ema, price) = match (sma, ema, latest_price) {
        (Some(s), Some(e), Some(p)) if !(s.is_nan() || e.is_nan() || p.is_nan()) => (s, e, p),
        _ => return MovingAverageSignals::unavailable(),
    };

    let sma_signal = if price > sma {
        Signal::new("Price above SMA (Uptrend)", SignalCategory::Buy)
    } else {
        Signal::new("Price below SMA (Downtrend)", SignalCategory::Sell)
    };

    let ema_signal = if price > ema {
        Signal::new("Price above EMA (Short-term Strength)", SignalCategory::Buy)
    } else {
        Signal::new("Price below EMA (Weakness)", SignalCategory::Sell)
    };

    MovingAverageSignals { sma_signal, ema_signal }
}

/// MACD line against its signal line.
pub fn macd_crossover(macd: Option<f64>, macd_signal: Option<f64>) -> Signal {
    match (macd, macd_signal) {
        (Some(m), Some(s)) if m > s => Signal::new("Bullish Crossover", SignalCategory::Buy),
        (Some(m), Some(s)) if m < s => Signal::new("Bearish Crossover", SignalCategory::Sell),
        (Some(m), Some(s)) if m == s => Signal::new("No Crossover", SignalCategory::Neutral),
        // absent or NaN
        _ => Signal::new("No Crossover", SignalCategory::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_above_both_averages() {
        let signals = compare_to_moving_averages(Some(180.0), Some(182.5), Some(190.0));
        assert_eq!(signals.sma_signal.label, "Price above SMA (Uptrend)");
        assert_eq!(signals.ema_signal.label, "Price above EMA (Short-term Strength)");
        assert_eq!(signals.sma_signal.category, SignalCategory::Buy);
    }

    #[test]
    fn test_mixed_trend() {
        let signals = compare_to_moving_averages(Some(180.0), Some(195.0), Some(190.0));
        assert_eq!(signals.sma_signal.category, SignalCategory::Buy);
        assert_eq!(signals.ema_signal.label, "Price below EMA (Weakness)");
    }

    #[test]
    fn test_price_on_average_reads_below() {
        let signals = compare_to_moving_averages(Some(100.0), Some(100.0), Some(100.0));
        assert_eq!(signals.sma_signal.label, "Price below SMA (Downtrend)");
        assert_eq!(signals.ema_signal.label, "Price below EMA (Weakness)");
    }

    #[test]
    fn test_any_absent_input_is_na() {
        for (sma, ema, price) in [
            (None, Some(1.0), Some(1.0)),
            (Some(1.0), None, Some(1.0)),
            (Some(1.0), Some(1.0), None),
        ] {
            let signals = compare_to_moving_averages(sma, ema, price);
            assert_eq!(signals.sma_signal.label, "N/A");
            assert_eq!(signals.ema_signal.label, "N/A");
            assert!(signals.sma_signal.is_unavailable());
        }
    }

    #[test]
    fn test_zero_values_are_compared() {
        // zero is a reading, not a missing value
        let signals = compare_to_moving_averages(Some(0.0), Some(0.0), Some(1.0));
        assert_eq!(signals.sma_signal.category, SignalCategory::Buy);
    }

    #[test]
    fn test_macd_crossover() {
        assert_eq!(macd_crossover(Some(1.2), Some(0.8)).label, "Bullish Crossover");
        assert_eq!(macd_crossover(Some(-0.5), Some(0.1)).label, "Bearish Crossover");

        let flat = macd_crossover(Some(0.3), Some(0.3));
        assert_eq!(flat.label, "No Crossover");
        assert_eq!(flat.category, SignalCategory::Neutral);

        let missing = macd_crossover(None, Some(0.3));
        assert_eq!(missing.label, "No Crossover");
        assert_eq!(missing.category, SignalCategory::Unknown);
    }
}

use analysis_core::{AnalysisError, TechnicalIndicators};

pub const MA_PERIOD: usize = 20;
pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;

/// Minimum daily closes needed before indicators are reported
pub const MIN_HISTORY: usize = 30;

/// Simple Moving Average
pub fn sma(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![];
    }

    let mut result = Vec::with_capacity(data.len() - period + 1);
    for i in period - 1..data.len() {
        let sum: f64 = data[i + 1 - period..=i].iter().sum();
        result.push(sum / period as f64);
    }
    result
}

/// Exponential Moving Average, recursive form seeded with the first value.
///
/// Output has one entry per input: `ema[0] = data[0]`,
/// `ema[i] = α·data[i] + (1 − α)·ema[i−1]` with `α = 2 / (span + 1)`.
pub fn ema(data: &[f64], span: usize) -> Vec<f64> {
    if span == 0 || data.is_empty() {
        return vec![];
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len());
    result.push(data[0]);

    for i in 1..data.len() {
        let ema_val = alpha * data[i] + (1.0 - alpha) * result[i - 1];
        result.push(ema_val);
    }

    result
}

/// MACD (Moving Average Convergence Divergence)
pub struct MacdResult {
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
}

pub fn macd(data: &[f64], fast_period: usize, slow_period: usize, signal_period: usize) -> MacdResult {
    if fast_period == 0 || slow_period == 0 || signal_period == 0 || slow_period < fast_period {
        return MacdResult { macd_line: vec![], signal_line: vec![] };
    }

    let ema_fast = ema(data, fast_period);
    let ema_slow = ema(data, slow_period);

    let macd_line: Vec<f64> = ema_fast.iter().zip(&ema_slow).map(|(f, s)| f - s).collect();
    let signal_line = ema(&macd_line, signal_period);

    MacdResult { macd_line, signal_line }
}

/// Relative Strength Index over a plain rolling mean of gains and losses.
///
/// One value per window of `period` price changes. A window with no losses
/// reads 100; a window with no movement at all has no defined value and is
/// reported as NaN.
pub fn rsi(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period + 1 {
        return vec![];
    }

    let changes: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();

    changes
        .windows(period)
        .map(|window| {
            let avg_gain = window.iter().filter(|c| **c > 0.0).sum::<f64>() / period as f64;
            let avg_loss = window.iter().filter(|c| **c < 0.0).map(|c| c.abs()).sum::<f64>() / period as f64;

            if avg_loss == 0.0 {
                if avg_gain == 0.0 {
                    f64::NAN
                } else {
                    100.0
                }
            } else {
                let rs = avg_gain / avg_loss;
                100.0 - (100.0 / (1.0 + rs))
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn last_finite(values: &[f64]) -> Option<f64> {
    values.last().copied().filter(|v| v.is_finite()).map(round2)
}

/// Latest indicator readings from a daily close/volume history (oldest first).
pub fn compute_indicators(closes: &[f64], volumes: &[u64]) -> Result<TechnicalIndicators, AnalysisError> {
    if closes.len() < MIN_HISTORY {
        return Err(AnalysisError::InsufficientData(
            "Not enough data for indicators".to_string(),
        ));
    }
    if volumes.len() != closes.len() {
        return Err(AnalysisError::InvalidData(format!(
            "{} closes but {} volumes",
            closes.len(),
            volumes.len()
        )));
    }
    if closes.iter().any(|c| !c.is_finite()) {
        return Err(AnalysisError::InvalidData("Non-finite close in history".to_string()));
    }

    let sma = last_finite(&sma(closes, MA_PERIOD));
    let ema = last_finite(&ema(closes, MA_PERIOD));
    if sma.is_none() || ema.is_none() {
        return Err(AnalysisError::CalculationError(
            "Moving average overflowed".to_string(),
        ));
    }

    let macd_result = macd(closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL);

    Ok(TechnicalIndicators {
        sma,
        ema,
        rsi: last_finite(&rsi(closes, RSI_PERIOD)),
        macd: last_finite(&macd_result.macd_line),
        macd_signal: last_finite(&macd_result.signal_line),
        volume: volumes.last().copied(),
    })
}

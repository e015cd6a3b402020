use crate::{classify, FundamentalMetrics, MetricKind, Signal, TechnicalIndicators};

/// A fetched record that carries threshold-classifiable metrics
pub trait MetricSource {
    /// Metrics this record can supply, in display order.
    fn kinds(&self) -> &'static [MetricKind];

    fn metric(&self, kind: MetricKind) -> Option<f64>;

    fn classify_all(&self) -> Vec<(MetricKind, Signal)> {
        self.kinds()
            .iter()
            .map(|&kind| (kind, classify(kind, self.metric(kind))))
            .collect()
    }
}

impl MetricSource for FundamentalMetrics {
    fn kinds(&self) -> &'static [MetricKind] {
        &MetricKind::FUNDAMENTAL
    }

    fn metric(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::PeRatio => self.pe_ratio,
            MetricKind::PbRatio => self.pb_ratio,
            MetricKind::EvToEbitda => self.ev_to_ebitda,
            MetricKind::DebtToEquity => self.debt_to_equity,
            _ => None,
        }
    }
}

impl MetricSource for TechnicalIndicators {
    fn kinds(&self) -> &'static [MetricKind] {
        &MetricKind::TECHNICAL
    }

    fn metric(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::Rsi => self.rsi,
            MetricKind::Macd => self.macd,
            MetricKind::Volume => self.volume.map(|v| v as f64),
            _ => None,
        }
    }
}

//! Alert system for usage thresholds.
//!
//! Every evaluation is independent: an exceeded threshold is reported again
//! on each tick for as long as it stays exceeded.

use std::fmt;

use super::metrics::MetricsSnapshot;

/// Usage percentage above which an alert is raised (exclusive)
pub const ALERT_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Cpu,
    Memory,
    Disk,
}

impl MetricKind {
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Cpu => "CPU",
            MetricKind::Memory => "Memória",
            MetricKind::Disk => "Disco",
        }
    }
}

/// A threshold crossing observed in one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEvent {
    pub metric_kind: MetricKind,
    pub value: f64,
    pub threshold: f64,
}

impl fmt::Display for AlertEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alerta: Uso de {} acima de {}%!",
            self.metric_kind.label(),
            self.threshold
        )
    }
}

/// Compare a snapshot against the fixed thresholds
pub fn evaluate(snapshot: &MetricsSnapshot) -> Vec<AlertEvent> {
    [
        (MetricKind::Cpu, snapshot.cpu_percent),
        (MetricKind::Memory, snapshot.mem_percent),
        (MetricKind::Disk, snapshot.disk_percent),
    ]
    .into_iter()
    .filter(|(_, value)| *value > ALERT_THRESHOLD)
    .map(|(metric_kind, value)| AlertEvent {
        metric_kind,
        value,
        threshold: ALERT_THRESHOLD,
    })
    .collect()
}

/// Write alerts to the log sink
pub fn emit_alerts(alerts: &[AlertEvent]) {
    for alert in alerts {
        log::warn!("{}", alert);
    }
}

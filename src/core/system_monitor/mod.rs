//! Metrics collection and alerting.
//!
//! This module provides the snapshot type, the sysinfo-backed provider, the
//! bounded-latency poller and the threshold alerts.

pub mod alerts;
mod collector;
mod metrics;
mod runtime;

pub use alerts::{emit_alerts, evaluate, AlertEvent, MetricKind, ALERT_THRESHOLD};
pub use collector::{pick_temperature, MetricsCollector, MetricsProvider, TEMPERATURE_SENSOR_GROUPS};
pub use metrics::{percent_of, round_percent, MetricsSnapshot};
pub use runtime::SnapshotPoller;

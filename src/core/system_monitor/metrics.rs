/// Point-in-time read of every tracked host metric.
///
/// One snapshot is produced per poll tick and never mutated afterwards.
/// Fields the provider could not read are left at zero (or `None` for the
/// temperature) instead of failing the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub cpu_percent: f64,
    pub cpu_freq_mhz: f64,
    pub cpu_cores_physical: usize,
    pub cpu_cores_logical: usize,
    pub cpu_time_user_s: f64,
    pub cpu_time_system_s: f64,

    pub mem_total_bytes: u64,
    pub mem_available_bytes: u64,
    pub mem_used_bytes: u64,
    pub mem_percent: f64,
    pub mem_buffers_bytes: u64,

    pub disk_total_bytes: u64,
    pub disk_used_bytes: u64,
    pub disk_free_bytes: u64,
    pub disk_percent: f64,
    pub disk_read_bytes: u64,  // cumulative since boot
    pub disk_write_bytes: u64, // cumulative since boot

    pub net_bytes_sent: u64,
    pub net_bytes_recv: u64,

    /// First reading from a known CPU sensor group, `None` when unsupported
    pub temperature_c: Option<f64>,

    pub system_name: String,
    pub system_version: String,
    pub system_arch: String,
}

/// Round a percentage to one decimal place
pub fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / total` as a rounded percentage, 0 when `total` is 0
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total > 0 {
        round_percent(part as f64 / total as f64 * 100.0)
    } else {
        0.0
    }
}

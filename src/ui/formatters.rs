const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// Format a byte count as binary gigabytes with two decimals (e.g. "16.00 GB")
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / GIB)
}

/// Format a byte count as binary megabytes with two decimals (e.g. "1.50 MB")
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / MIB)
}

/// Format a percentage with the shortest representation ("50%", "42.5%")
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

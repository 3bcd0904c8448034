// UI and formatting module

pub mod formatters;
pub mod monitor_tui;
pub mod system_formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_gb, format_mb, format_percent};
pub use system_formatters::{format_tab, Table, TabContent};

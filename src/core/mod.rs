// Core business logic module

pub mod navigation;
pub mod system_monitor;

// Re-export commonly used items
pub use navigation::{Direction, NavigationState, Tab, TAB_COUNT};
pub use system_monitor::{MetricsProvider, MetricsSnapshot};

// Sysdash Library - Public API

// Re-export error types
pub mod error;
pub use error::{DashError, Result};

// Module declarations
pub mod core;
pub mod logging;
pub mod platform;
pub mod ui;

pub use logging::{init_logging, LogBuffer};

//! Terminal User Interface for the dashboard.
//!
//! Provides the tabbed live view using ratatui.

mod app;
mod event_handler;
mod render;
mod terminal;

pub use app::{run_monitor_app, MonitorApp, MonitorAppConfig};
pub use event_handler::{handle_event, CrosstermKeys, InputListener, KeySource, MonitorEvent};
pub use render::{menu_line, render_ui, DashboardView};
pub use terminal::{FrameSink, TerminalSession};

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::core::navigation::NavigationState;
use crate::core::system_monitor::{
    emit_alerts, evaluate, AlertEvent, MetricsCollector, MetricsProvider, MetricsSnapshot,
    SnapshotPoller,
};
use crate::logging::LogBuffer;
use crate::ui::system_formatters::format_tab;

use super::event_handler::{CrosstermKeys, InputListener};
use super::render::DashboardView;
use super::terminal::{FrameSink, TerminalSession};

/// Configuration for the monitor app
#[derive(Debug, Clone)]
pub struct MonitorAppConfig {
    /// Render loop period
    pub tick_interval: Duration,
    /// Longest a tick waits for the metrics provider
    pub poll_timeout: Duration,
    /// How long the input listener blocks before re-checking for exit
    pub input_poll: Duration,
    /// Log lines shown under the tab content
    pub log_lines: usize,
}

impl Default for MonitorAppConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(500),
            poll_timeout: Duration::from_millis(400),
            input_poll: Duration::from_millis(100),
            log_lines: 5,
        }
    }
}

/// The render loop.
///
/// Displayed content always comes from the last snapshot pulled while
/// monitoring was enabled, so pausing freezes the values on screen.
pub struct MonitorApp<S: FrameSink> {
    pub state: Arc<NavigationState>,
    pub snapshot: MetricsSnapshot,
    pub alerts: Vec<AlertEvent>,
    poller: SnapshotPoller,
    sink: S,
    log: LogBuffer,
    config: MonitorAppConfig,
}

impl<S: FrameSink> MonitorApp<S> {
    pub fn new(
        state: Arc<NavigationState>,
        provider: Box<dyn MetricsProvider>,
        sink: S,
        log: LogBuffer,
        config: MonitorAppConfig,
    ) -> Result<Self> {
        let poller = SnapshotPoller::new(provider, config.poll_timeout)
            .context("Failed to start metrics runtime")?;

        Ok(Self {
            state,
            snapshot: MetricsSnapshot::default(),
            alerts: Vec::new(),
            poller,
            sink,
            log,
            config,
        })
    }

    /// Pull a snapshot, keeping the previous one if collection fails or times out
    pub fn refresh_snapshot(&mut self) {
        if let Some(snapshot) = self.poller.poll() {
            self.snapshot = snapshot;
        }
    }

    /// One iteration: poll and alert (when monitoring), then draw
    pub fn tick(&mut self) -> Result<()> {
        if self.state.monitoring_enabled() {
            self.refresh_snapshot();
            self.alerts = evaluate(&self.snapshot);
            emit_alerts(&self.alerts);
        } else {
            // A collection started before the pause is stale once monitoring resumes
            self.poller.discard_pending();
        }

        let view = self.view();
        self.sink.render(&view).context("Failed to render dashboard")?;
        Ok(())
    }

    /// Frame for the current state and snapshot
    pub fn view(&self) -> DashboardView {
        let selected_tab = self.state.selected_tab();
        DashboardView {
            selected_tab,
            monitoring_enabled: self.state.monitoring_enabled(),
            content: format_tab(selected_tab, &self.snapshot),
            log_lines: self.log.recent(self.config.log_lines),
        }
    }

    /// Tick at a fixed rate until an exit is requested
    pub fn run(&mut self) -> Result<()> {
        while !self.state.exit_requested() {
            let started = Instant::now();
            self.tick()?;

            if let Some(remaining) = self.config.tick_interval.checked_sub(started.elapsed()) {
                std::thread::sleep(remaining);
            }
        }

        log::debug!("Render loop stopped");
        Ok(())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Run the dashboard on the real terminal until escape is pressed
pub fn run_monitor_app(config: MonitorAppConfig, log: LogBuffer) -> Result<()> {
    let session = TerminalSession::acquire().context("Failed to acquire terminal")?;

    let state = Arc::new(NavigationState::new());
    let mut app = MonitorApp::new(
        Arc::clone(&state),
        Box::new(MetricsCollector::new()),
        session,
        log,
        config.clone(),
    )?;

    let listener = InputListener::spawn(Arc::clone(&state), CrosstermKeys, config.input_poll)
        .context("Failed to start input listener")?;

    // Wait for CPU measurement interval
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

    let result = app.run();

    // Stop the listener even when the loop ended on an error
    state.request_exit();
    listener.join();

    let MonitorApp { mut sink, .. } = app;
    let restored = sink.restore().context("Failed to restore terminal");

    merge_shutdown(result, restored)
}

/// Report the render loop error first; a restore failure alongside it is
/// logged and attached as context instead of being dropped
fn merge_shutdown(run: Result<()>, restored: Result<()>) -> Result<()> {
    match (run, restored) {
        (Err(run_err), Err(restore_err)) => {
            log::error!("{:#}", restore_err);
            Err(run_err.context(format!("{:#}", restore_err)))
        }
        (Err(run_err), Ok(())) => Err(run_err),
        (Ok(()), restored) => restored,
    }
}

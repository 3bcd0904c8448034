use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::core::navigation::{Direction, NavigationState};
use crate::error::{DashError, Result};

/// Commands the dashboard understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Switch to the next tab
    NextTab,
    /// Switch to the previous tab
    PrevTab,
    /// Pause or resume polling
    ToggleMonitoring,
    /// Leave the dashboard
    Exit,
}

impl MonitorEvent {
    /// Map a key press to a command; releases, repeats and other keys map to nothing
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Right => Some(MonitorEvent::NextTab),
            KeyCode::Left => Some(MonitorEvent::PrevTab),
            KeyCode::Char(' ') => Some(MonitorEvent::ToggleMonitoring),
            KeyCode::Esc => Some(MonitorEvent::Exit),
            _ => None,
        }
    }
}

/// Apply a command to the shared navigation state
pub fn handle_event(state: &NavigationState, event: MonitorEvent) {
    match event {
        MonitorEvent::NextTab => {
            state.advance(Direction::Next);
        }
        MonitorEvent::PrevTab => {
            state.advance(Direction::Prev);
        }
        MonitorEvent::ToggleMonitoring => {
            let status = if state.toggle_monitoring() {
                "ativado"
            } else {
                "desativado"
            };
            log::info!("Monitoramento {}.", status);
        }
        MonitorEvent::Exit => {
            log::info!("Saindo do monitoramento...");
            state.request_exit();
        }
    }
}

/// Source of raw key events
pub trait KeySource: Send {
    /// Wait up to `timeout` for the next key event
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Key events read from the terminal through crossterm
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        let ready = event::poll(timeout)
            .map_err(|e| DashError::input(format!("failed to poll terminal events: {}", e)))?;
        if !ready {
            return Ok(None);
        }

        let event = event::read()
            .map_err(|e| DashError::input(format!("failed to read terminal event: {}", e)))?;
        match event {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}

/// Handle to the input listener thread
pub struct InputListener {
    handle: JoinHandle<()>,
}

impl InputListener {
    /// Start listening on a dedicated thread.
    ///
    /// Keys are applied to `state` in arrival order. The thread stops after
    /// an exit command, or once it notices an exit requested elsewhere.
    pub fn spawn<K>(state: Arc<NavigationState>, mut keys: K, poll_interval: Duration) -> std::io::Result<Self>
    where
        K: KeySource + 'static,
    {
        let handle = thread::Builder::new()
            .name("input-listener".to_string())
            .spawn(move || listen(&state, &mut keys, poll_interval))?;

        Ok(Self { handle })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the listener thread to stop
    pub fn join(self) {
        if self.handle.join().is_err() {
            log::error!("Input listener thread panicked");
        }
    }
}

fn listen<K: KeySource>(state: &NavigationState, keys: &mut K, poll_interval: Duration) {
    while !state.exit_requested() {
        match keys.next_key(poll_interval) {
            Ok(Some(key)) => {
                if let Some(event) = MonitorEvent::from_key(&key) {
                    handle_event(state, event);
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("Erro: {}", e);
                // Keep a failing source from spinning
                thread::sleep(poll_interval);
            }
        }
    }
}

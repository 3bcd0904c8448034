//! Navigation state shared between the input listener and the render loop.
//!
//! Every field is written by the input listener only and read by the render
//! loop, so each one lives in its own atomic.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Number of dashboard tabs
pub const TAB_COUNT: usize = 6;

/// Dashboard tabs, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    System,
    Memory,
    Cpu,
    Disk,
    Network,
    Temperature,
}

impl Tab {
    pub const ALL: [Tab; TAB_COUNT] = [
        Tab::System,
        Tab::Memory,
        Tab::Cpu,
        Tab::Disk,
        Tab::Network,
        Tab::Temperature,
    ];

    /// Tab at `index`, wrapping modulo [`TAB_COUNT`]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % TAB_COUNT]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::System => "Sistema",
            Tab::Memory => "Memória",
            Tab::Cpu => "CPU",
            Tab::Disk => "Disco",
            Tab::Network => "Rede",
            Tab::Temperature => "Temperatura",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

#[derive(Debug)]
pub struct NavigationState {
    selected_tab: AtomicUsize,
    monitoring_enabled: AtomicBool,
    exit_requested: AtomicBool,
}

impl NavigationState {
    /// Tab 0, monitoring on
    pub fn new() -> Self {
        Self {
            selected_tab: AtomicUsize::new(0),
            monitoring_enabled: AtomicBool::new(true),
            exit_requested: AtomicBool::new(false),
        }
    }

    pub fn selected_tab(&self) -> Tab {
        Tab::from_index(self.selected_tab.load(Ordering::Acquire))
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring_enabled.load(Ordering::Acquire)
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested.load(Ordering::Acquire)
    }

    /// Move one tab forward or back, wrapping around
    pub fn advance(&self, direction: Direction) -> Tab {
        let step = match direction {
            Direction::Next => 1,
            Direction::Prev => TAB_COUNT - 1,
        };
        let previous = self
            .selected_tab
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |tab| {
                Some((tab + step) % TAB_COUNT)
            })
            .unwrap_or_else(|tab| tab);
        Tab::from_index(previous + step)
    }

    /// Flip the monitoring flag, returning the new value
    pub fn toggle_monitoring(&self) -> bool {
        !self.monitoring_enabled.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn request_exit(&self) {
        self.exit_requested.store(true, Ordering::Release);
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

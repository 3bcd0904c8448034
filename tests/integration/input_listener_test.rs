use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEventKind};
use sysdash::core::{NavigationState, Tab};
use sysdash::ui::monitor_tui::InputListener;
use sysdash::DashError;

use super::fakes::{press, ScriptedKeys};

const POLL: Duration = Duration::from_millis(10);

#[test]
fn test_right_right_left_selects_second_tab() {
    let state = Arc::new(NavigationState::new());
    let keys = ScriptedKeys::keys(&[KeyCode::Right, KeyCode::Right, KeyCode::Left, KeyCode::Esc]);

    let listener = InputListener::spawn(Arc::clone(&state), keys, POLL).unwrap();
    listener.join();

    assert_eq!(state.selected_tab().index(), 1);
    assert_eq!(state.selected_tab(), Tab::Memory);
    assert!(state.exit_requested());
}

#[test]
fn test_space_toggles_monitoring() {
    let state = Arc::new(NavigationState::new());
    let keys = ScriptedKeys::keys(&[KeyCode::Char(' '), KeyCode::Esc]);

    InputListener::spawn(Arc::clone(&state), keys, POLL).unwrap().join();

    assert!(!state.monitoring_enabled());
}

#[test]
fn test_keys_after_escape_are_not_applied() {
    let state = Arc::new(NavigationState::new());
    let keys = ScriptedKeys::keys(&[KeyCode::Right, KeyCode::Esc, KeyCode::Right]);

    InputListener::spawn(Arc::clone(&state), keys, POLL).unwrap().join();

    assert_eq!(state.selected_tab(), Tab::Memory);
}

#[test]
fn test_read_errors_do_not_stop_the_listener() {
    let state = Arc::new(NavigationState::new());
    let keys = ScriptedKeys::new(vec![
        Ok(press(KeyCode::Right)),
        Err(DashError::input("device went away")),
        Ok(press(KeyCode::Right)),
        Ok(press(KeyCode::Esc)),
    ]);

    InputListener::spawn(Arc::clone(&state), keys, POLL).unwrap().join();

    assert_eq!(state.selected_tab(), Tab::Cpu);
    assert!(state.exit_requested());
}

#[test]
fn test_unmapped_and_released_keys_are_ignored() {
    let state = Arc::new(NavigationState::new());
    let mut released = press(KeyCode::Right);
    released.kind = KeyEventKind::Release;
    let keys = ScriptedKeys::new(vec![
        Ok(press(KeyCode::Char('q'))),
        Ok(released),
        Ok(press(KeyCode::Up)),
        Ok(press(KeyCode::Esc)),
    ]);

    InputListener::spawn(Arc::clone(&state), keys, POLL).unwrap().join();

    assert_eq!(state.selected_tab(), Tab::System);
    assert!(state.monitoring_enabled());
}

#[test]
fn test_listener_stops_when_exit_requested_elsewhere() {
    let state = Arc::new(NavigationState::new());
    let listener = InputListener::spawn(Arc::clone(&state), ScriptedKeys::keys(&[]), POLL).unwrap();

    std::thread::sleep(Duration::from_millis(30));
    assert!(!listener.is_finished());

    state.request_exit();
    let started = Instant::now();
    while !listener.is_finished() {
        assert!(started.elapsed() < Duration::from_secs(1), "listener did not stop");
        std::thread::sleep(POLL);
    }
    listener.join();
}

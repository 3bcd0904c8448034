use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use sysdash::core::{MetricsSnapshot, Tab};
use sysdash::ui::monitor_tui::{menu_line, render_ui, DashboardView};
use sysdash::ui::format_tab;

fn as_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::new();
    for y in 0..area.height {
        let mut line = String::new();
        for x in 0..area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn draw(view: &DashboardView) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| render_ui(frame, view)).unwrap();
    as_text(terminal.backend().buffer())
}

fn view(tab: Tab, snapshot: &MetricsSnapshot, monitoring_enabled: bool) -> DashboardView {
    DashboardView {
        selected_tab: tab,
        monitoring_enabled,
        content: format_tab(tab, snapshot),
        log_lines: vec!["[10:00:00] Alerta: Uso de CPU acima de 80%!".to_string()],
    }
}

#[test]
fn test_menu_line_marks_only_the_active_tab() {
    assert_eq!(
        menu_line(Tab::Memory),
        "[ ] Sistema  [*] Memória  [ ] CPU  [ ] Disco  [ ] Rede  [ ] Temperatura"
    );
    for tab in Tab::ALL {
        assert_eq!(menu_line(tab).matches("[*]").count(), 1);
    }
}

#[test]
fn test_frame_shows_menu_table_and_log() {
    let snapshot = MetricsSnapshot {
        mem_total_bytes: 16 * 1024 * 1024 * 1024,
        mem_percent: 50.0,
        ..Default::default()
    };

    let text = draw(&view(Tab::Memory, &snapshot, true));

    assert!(text.contains("[*] Memória"));
    assert!(text.contains("Monitoramento: ativo"));
    assert!(text.contains("Monitoramento de Memória"));
    assert!(text.contains("16.00 GB"));
    assert!(text.contains("50%"));
    assert!(text.contains("Alerta: Uso de CPU acima de 80%!"));
    assert!(text.contains("Esc Sair"));
}

#[test]
fn test_frame_shows_paused_status() {
    let text = draw(&view(Tab::System, &MetricsSnapshot::default(), false));
    assert!(text.contains("Monitoramento: pausado"));
}

#[test]
fn test_frame_shows_temperature_error_message() {
    let text = draw(&view(Tab::Temperature, &MetricsSnapshot::default(), true));
    assert!(text.contains("[*] Temperatura"));
    assert!(text.contains("Nenhum sensor de temperatura"));
}

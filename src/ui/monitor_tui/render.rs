use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::core::navigation::Tab;
use crate::ui::system_formatters::{self, TabContent};

const HELP_TEXT: &str =
    " → Próxima aba   ← Aba anterior   Espaço Ativar/desativar monitoramento   Esc Sair";

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selected_tab: Tab,
    pub monitoring_enabled: bool,
    pub content: TabContent,
    pub log_lines: Vec<String>,
}

/// Menu line marking the active tab, e.g. `[*] Sistema  [ ] Memória  ...`
pub fn menu_line(selected: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|&tab| {
            let marker = if tab == selected { '*' } else { ' ' };
            format!("[{}] {}", marker, tab.title())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Main render function
pub fn render_ui(frame: &mut Frame, view: &DashboardView) {
    let area = frame.area();

    // 1 line per log entry + 2 for borders
    let log_height = (view.log_lines.len().max(1) + 2) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Menu
            Constraint::Min(5),             // Tab content
            Constraint::Length(log_height), // Log
            Constraint::Length(1),          // Footer
        ])
        .split(area);

    render_menu(frame, chunks[0], view);
    render_content(frame, chunks[1], view);
    render_log(frame, chunks[2], &view.log_lines);
    render_footer(frame, chunks[3]);
}

fn render_menu(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let (status, status_color) = if view.monitoring_enabled {
        ("ativo", Color::Green)
    } else {
        ("pausado", Color::Yellow)
    };

    let title = Line::from(vec![
        Span::raw(" Menu │ Monitoramento: "),
        Span::styled(status, Style::default().fg(status_color)),
        Span::raw(" "),
    ]);

    let block = Block::default().title(title).borders(Borders::ALL);
    let menu = Paragraph::new(menu_line(view.selected_tab)).block(block);

    frame.render_widget(menu, area);
}

fn render_content(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let block = Block::default()
        .title(format!(" {} ", view.selected_tab.title()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &view.content {
        TabContent::Table(table) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(0)])
                .split(inner);

            let title = Paragraph::new(table.title.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::ITALIC));
            frame.render_widget(title, chunks[0]);
            frame.render_widget(metrics_table(table), chunks[1]);
        }
        TabContent::Error(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, inner);
        }
    }
}

fn metrics_table(table: &system_formatters::Table) -> Table<'static> {
    let header = Row::new(
        table
            .columns
            .iter()
            .map(|&column| Cell::from(column).style(Style::default().add_modifier(Modifier::BOLD))),
    );

    let rows: Vec<Row> = table
        .rows
        .iter()
        .map(|(label, value)| {
            Row::new(vec![
                Cell::from(label.clone()).style(Style::default().fg(Color::Cyan)),
                Cell::from(value.clone()).style(Style::default().fg(Color::Magenta)),
            ])
        })
        .collect();

    Table::new(rows, [Constraint::Length(24), Constraint::Min(10)]).header(header)
}

fn render_log(frame: &mut Frame, area: Rect, log_lines: &[String]) {
    let lines: Vec<Line> = log_lines
        .iter()
        .map(|line| {
            let style = if line.contains("Alerta:") {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::styled(line.clone(), style)
        })
        .collect();

    let block = Block::default().title(" Log ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

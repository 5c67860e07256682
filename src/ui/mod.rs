use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub mod layout;
pub mod tabs;
pub mod widgets;

use crate::app::{App, FieldId, InputMode, StatusLevel, Tab};

pub fn draw(f: &mut Frame, app: &mut App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    tabs::draw_tab_bar(f, areas.tab_bar, app);

    // The active tab maps to exactly one view
    match app.current_tab {
        Tab::Overview => tabs::draw_overview_tab(f, areas.main, app),
        Tab::Patients => tabs::draw_patients_tab(f, areas.main, app),
        Tab::Templates => tabs::draw_templates_tab(f, areas.main, app),
        Tab::Integrations => tabs::draw_integrations_tab(f, areas.main, app),
        Tab::Analytics => tabs::draw_analytics_tab(f, areas.main, app),
    }

    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            "Remind",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.product_name.clone(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled("Manage patient reminders and follow-ups", Style::default().fg(Color::DarkGray)),
    ]);

    let left = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    let webhook = if app.webhook_in_flight {
        Span::styled("● webhook test…", Style::default().fg(Color::Yellow))
    } else if app.fields.is_empty(FieldId::WebhookUrl) {
        Span::styled("○ no webhook set", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled("● webhook ready", Style::default().fg(Color::Green))
    };
    let right_line = Line::from(vec![
        Span::styled("Patients ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.patients.len())),
        Span::styled("Templates ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.templates.len())),
        webhook,
    ]);
    let right = Paragraph::new(right_line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    f.render_widget(left, chunks[0]);
    f.render_widget(right, chunks[1]);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.status_text() {
        Some((text, level)) => {
            let color = match level {
                StatusLevel::Info => Color::Green,
                StatusLevel::Warn => Color::Yellow,
                StatusLevel::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(" ● ", Style::default().fg(color)),
                Span::styled(text.to_string(), Style::default().fg(color)),
            ])
        }
        None => hint_line(app),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn hint_line(app: &App) -> Line<'static> {
    let hints = match app.current_tab {
        Tab::Overview => " j/k: panel   Enter: open   1-5: tabs   ?: help",
        Tab::Patients => " /: search   j/k: move   y: copy   x: export   ?: help",
        Tab::Templates => " Enter: select   e: edit   d: duplicate   x: export   ?: help",
        Tab::Integrations => " j/k: move   Enter: edit/flip   t: test webhook   ?: help",
        Tab::Analytics => " x: export   1-5: tabs   ?: help",
    };
    Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(" :", Style::default().fg(Color::Yellow)),
            Span::raw(app.command.input.clone()),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        InputMode::Field(field) => Line::from(vec![
            Span::styled(
                format!(" editing {} ", field.title().to_lowercase()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled("(Esc: done)", Style::default().fg(Color::DarkGray)),
        ]),
        InputMode::Normal => match &app.command.last {
            Some(last) => Line::from(Span::styled(
                format!(" last :{last}"),
                Style::default().fg(Color::DarkGray),
            )),
            None => Line::from(Span::styled(
                " :: command mode",
                Style::default().fg(Color::DarkGray),
            )),
        },
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_help_popup(f: &mut Frame, size: Rect) {
    let area = centered_rect(58, 70, size);
    f.render_widget(Clear, area);

    let key = |k: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {k:<10}"), Style::default().fg(Color::Yellow)),
            Span::raw(text),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Navigation",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key("1-5", "Jump to tab"),
        key("Tab", "Next tab (Shift+Tab: previous)"),
        key("j/k", "Move selection / overview panel"),
        key("g/G", "Top / bottom of list"),
        Line::from(""),
        Line::from(Span::styled(
            "  Templates",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key("Enter", "Select template under cursor"),
        key("e", "Toggle edit mode"),
        key("i", "Edit the active draft field"),
        key("c", "Cycle draft channel"),
        key("Ctrl+S", "Save changes (session only)"),
        key("d", "Duplicate template"),
        Line::from(""),
        Line::from(Span::styled(
            "  Integrations",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key("Enter", "Edit field / flip switch"),
        key("t", "Send webhook test event"),
        Line::from(""),
        Line::from(Span::styled(
            "  Everywhere",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key("/", "Search patients"),
        key(":", "Command mode (:patients, :test, :export …)"),
        key("y", "Copy to clipboard"),
        key("x", "Export current tab"),
        key("r", "Reload mock data"),
        key("q", "Quit"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title("HELP (?: close)");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, size: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(size);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

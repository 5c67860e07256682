//! Overview module - panel-based default view

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::Tab;
use crate::core::{Action, Context, Module};

/// Headline stat card on the overview
#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

/// Patient requiring immediate attention
#[derive(Debug, Clone)]
pub struct FollowUp {
    pub name: &'static str,
    pub appointment: &'static str,
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Error,
    Info,
}

impl ActivityStatus {
    pub fn color(&self) -> Color {
        match self {
            ActivityStatus::Success => Color::Green,
            ActivityStatus::Error => Color::Red,
            ActivityStatus::Info => Color::Blue,
        }
    }
}

/// Reminder activity feed entry
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub action: &'static str,
    pub time: &'static str,
    pub status: ActivityStatus,
}

pub fn stat_cards() -> Vec<StatCard> {
    vec![
        StatCard { title: "Total Patients", value: "1,247", change: "+12%" },
        StatCard { title: "Reminders Sent", value: "3,456", change: "+8%" },
        StatCard { title: "Pending Follow-ups", value: "89", change: "-15%" },
        StatCard { title: "Response Rate", value: "87%", change: "+5%" },
    ]
}

pub fn urgent_followups() -> Vec<FollowUp> {
    vec![
        FollowUp { name: "Sarah Johnson", appointment: "Tomorrow 9:00 AM", kind: "Consultation" },
        FollowUp { name: "Michael Chen", appointment: "Today 3:30 PM", kind: "Follow-up" },
        FollowUp { name: "Emma Davis", appointment: "Tomorrow 11:00 AM", kind: "Check-up" },
    ]
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            action: "SMS sent to John Smith",
            time: "2 minutes ago",
            status: ActivityStatus::Success,
        },
        ActivityEntry {
            action: "WhatsApp reminder delivered",
            time: "15 minutes ago",
            status: ActivityStatus::Success,
        },
        ActivityEntry {
            action: "Email failed to deliver",
            time: "1 hour ago",
            status: ActivityStatus::Error,
        },
        ActivityEntry {
            action: "Follow-up scheduled",
            time: "2 hours ago",
            status: ActivityStatus::Info,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewPanel {
    Stats,
    FollowUps,
    Activity,
}

#[derive(Debug)]
pub struct Overview {
    active_panel: OverviewPanel,
}

impl Overview {
    pub fn new() -> Self {
        Self {
            active_panel: OverviewPanel::Stats,
        }
    }

    pub fn active_panel(&self) -> OverviewPanel {
        self.active_panel
    }

    pub fn next_panel(&mut self) {
        self.active_panel = match self.active_panel {
            OverviewPanel::Stats => OverviewPanel::FollowUps,
            OverviewPanel::FollowUps => OverviewPanel::Activity,
            OverviewPanel::Activity => OverviewPanel::Stats,
        };
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = match self.active_panel {
            OverviewPanel::Stats => OverviewPanel::Activity,
            OverviewPanel::FollowUps => OverviewPanel::Stats,
            OverviewPanel::Activity => OverviewPanel::FollowUps,
        };
    }
}

impl Default for Overview {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for Overview {
    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next_panel();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.prev_panel();
                Action::None
            }
            // Jump to the tab behind the focused panel
            KeyCode::Enter => match self.active_panel {
                OverviewPanel::Stats => Action::Navigate(Tab::Analytics),
                OverviewPanel::FollowUps => Action::Navigate(Tab::Patients),
                OverviewPanel::Activity => Action::Navigate(Tab::Analytics),
            },
            _ => Action::None,
        }
    }
}

impl Overview {
    pub fn render_with_data(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        stats: &[StatCard],
        followups: &[FollowUp],
        activity: &[ActivityEntry],
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(8)])
            .split(area);

        let bottom_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_stats_panel(frame, chunks[0], stats);
        self.render_followups_panel(frame, bottom_chunks[0], followups);
        self.render_activity_panel(frame, bottom_chunks[1], activity);
    }

    fn panel_border(&self, panel: OverviewPanel) -> Style {
        if self.active_panel == panel {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn render_stats_panel(&self, frame: &mut ratatui::Frame, area: Rect, stats: &[StatCard]) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("THIS MONTH")
            .border_style(self.panel_border(OverviewPanel::Stats));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if stats.is_empty() {
            return;
        }
        let constraints: Vec<Constraint> =
            stats.iter().map(|_| Constraint::Ratio(1, stats.len() as u32)).collect();
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (cell, stat) in cells.iter().zip(stats) {
            let change_color = if stat.change.starts_with('-') {
                Color::Red
            } else {
                Color::Green
            };
            let lines = vec![
                Line::from(Span::styled(stat.title, Style::default().fg(Color::DarkGray))),
                Line::from(Span::styled(
                    stat.value,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled(stat.change, Style::default().fg(change_color)),
                    Span::styled(" vs last month", Style::default().fg(Color::DarkGray)),
                ]),
            ];
            frame.render_widget(Paragraph::new(lines), *cell);
        }
    }

    fn render_followups_panel(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        followups: &[FollowUp],
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("URGENT FOLLOW-UPS")
            .border_style(self.panel_border(OverviewPanel::FollowUps));

        let mut lines = vec![Line::from("")];
        if followups.is_empty() {
            lines.push(Line::from(Span::styled(
                " Nothing urgent right now",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for item in followups {
            lines.push(Line::from(vec![
                Span::styled(" ● ", Style::default().fg(Color::Yellow)),
                Span::styled(item.name, Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(item.appointment, Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(item.kind, Style::default().fg(Color::Cyan)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_activity_panel(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        activity: &[ActivityEntry],
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("RECENT ACTIVITY")
            .border_style(self.panel_border(OverviewPanel::Activity));

        let mut lines = vec![Line::from("")];
        for entry in activity {
            lines.push(Line::from(vec![
                Span::styled(" ● ", Style::default().fg(entry.status.color())),
                Span::styled(entry.action, Style::default().fg(Color::White)),
            ]));
            lines.push(Line::from(vec![
                Span::raw("   "),
                Span::styled(entry.time, Style::default().fg(Color::DarkGray)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_cycle_round_trip() {
        let mut overview = Overview::new();
        assert_eq!(overview.active_panel(), OverviewPanel::Stats);
        overview.next_panel();
        overview.next_panel();
        overview.next_panel();
        assert_eq!(overview.active_panel(), OverviewPanel::Stats);
        overview.prev_panel();
        assert_eq!(overview.active_panel(), OverviewPanel::Activity);
    }
}

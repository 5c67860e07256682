//! Tab-based UI rendering

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs as RataTabs, Wrap};
use ratatui::Frame;

use crate::app::{App, FieldId, InputMode, Tab};
use crate::domain::template::MessageTemplate;
use crate::modules::integrations::SettingRow;
use crate::ui::widgets::sparkline::{meter_text, sparkline_text};

/// Draw the tab bar below the header
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            let shortcut = tab.shortcut();
            let title = tab.title();
            Line::from(vec![
                Span::styled(
                    format!("{}:", shortcut),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(title),
            ])
        })
        .collect();

    let selected = Tab::ALL
        .iter()
        .position(|t| *t == app.current_tab)
        .unwrap_or(0);

    let tabs = RataTabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");

    f.render_widget(tabs, area);
}

/// Map a click column on the tab bar back to a tab
pub fn tab_at_column(area: Rect, column: u16) -> Option<Tab> {
    if column < area.x {
        return None;
    }
    let mut cursor = area.x + 1;
    for tab in Tab::ALL {
        let width = 2 + tab.title().chars().count() as u16;
        if column >= cursor && column < cursor + width {
            return Some(tab);
        }
        cursor += width + 3;
    }
    None
}

/// Draw the Overview tab content
pub fn draw_overview_tab(f: &mut Frame, area: Rect, app: &App) {
    app.overview.render_with_data(
        f,
        area,
        &app.stats,
        &app.urgent_followups,
        &app.recent_activity,
    );
}

/// Draw the Patients tab content
pub fn draw_patients_tab(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    draw_patient_search(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    draw_patient_list(f, main_chunks[0], app);
    draw_patient_inspector(f, main_chunks[1], app);
}

fn draw_patient_search(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Field(FieldId::Search);
    let border_style = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = app.fields.get(FieldId::Search);
    let content = if value.is_empty() && !editing {
        Line::from(Span::styled(
            " Press / to search patients…",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![Span::raw(format!(" {value}"))];
        if editing {
            spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("SEARCH");
    f.render_widget(Paragraph::new(content).block(block), area);
}

fn draw_patient_list(f: &mut Frame, area: Rect, app: &App) {
    let indices = app.filtered_patient_indices();

    let items: Vec<ListItem> = indices
        .iter()
        .filter_map(|idx| app.patients.get(*idx))
        .map(|patient| {
            let channel = patient.preferred_channel;
            let row = Line::from(vec![
                Span::styled(
                    format!("{:<16}", patient.name),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:<11}", patient.status.title()),
                    Style::default().fg(patient.status.color()),
                ),
                Span::styled(
                    format!("{:<17}", patient.next_appointment),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{} {}", channel.glyph(), channel.title()),
                    Style::default().fg(channel.color()),
                ),
            ]);
            ListItem::new(row)
        })
        .collect();

    let title = format!("PATIENTS ({}/{})", indices.len(), app.patients.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    if !indices.is_empty() {
        state.select(Some(app.selected_patient.min(indices.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_patient_inspector(f: &mut Frame, area: Rect, app: &App) {
    let lines = match app.selected_patient_record() {
        Some(patient) => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" Patient   ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    patient.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  (ID {})", patient.id), Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(vec![
                Span::styled(" Email     ", Style::default().fg(Color::DarkGray)),
                Span::raw(patient.email.clone()),
            ]),
            Line::from(vec![
                Span::styled(" Phone     ", Style::default().fg(Color::DarkGray)),
                Span::raw(patient.phone.clone()),
            ]),
            Line::from(vec![
                Span::styled(" Next appt ", Style::default().fg(Color::DarkGray)),
                Span::raw(patient.next_appointment.clone()),
            ]),
            Line::from(vec![
                Span::styled(" Status    ", Style::default().fg(Color::DarkGray)),
                Span::styled(patient.status.title(), Style::default().fg(patient.status.color())),
            ]),
            Line::from(vec![
                Span::styled(" Channel   ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!(
                        "{} {}",
                        patient.preferred_channel.glyph(),
                        patient.preferred_channel.title()
                    ),
                    Style::default().fg(patient.preferred_channel.color()),
                ),
            ]),
            Line::from(vec![
                Span::styled(" Reminded  ", Style::default().fg(Color::DarkGray)),
                Span::raw(patient.last_reminder.clone()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                " y: copy contact   x: export list",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                " No patient matches the search",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("DETAILS");
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

/// Draw the Templates tab content
pub fn draw_templates_tab(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_template_list(f, chunks[0], app);
    if app.edit_mode {
        draw_template_editor(f, chunks[1], app);
    } else {
        draw_template_preview(f, chunks[1], app);
    }
}

fn template_badges(template: &MessageTemplate) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!("{} {}", template.channel.glyph(), template.channel.title()),
        Style::default().fg(template.channel.color()),
    )];
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        template.category.clone(),
        Style::default().fg(Color::DarkGray),
    ));
    if template.ai_optimized {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("✦ AI", Style::default().fg(Color::Yellow)));
    }
    spans
}

fn draw_template_list(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .templates
        .iter()
        .map(|template| {
            let is_selected = app.selected_template == Some(template.id);
            let marker = if is_selected { "▸ " } else { "  " };
            let name_style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut first = vec![
                Span::raw(marker),
                Span::styled(format!("#{} ", template.id), Style::default().fg(Color::DarkGray)),
                Span::styled(template.name.clone(), name_style),
                Span::raw("  "),
            ];
            first.extend(template_badges(template));

            let mut chips: Vec<Span> = vec![Span::raw("    ")];
            for variable in template.variables.iter().take(3) {
                chips.push(Span::styled(
                    format!("{{{variable}}} "),
                    Style::default().fg(Color::Blue),
                ));
            }
            if template.variables.len() > 3 {
                chips.push(Span::styled(
                    format!("+{} more", template.variables.len() - 3),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(vec![
                Line::from(first),
                Line::from(Span::styled(
                    format!("    {}", template.excerpt(60)),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(chips),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("MESSAGE TEMPLATES"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("");

    let mut state = ListState::default();
    if !app.templates.is_empty() {
        state.select(Some(app.template_cursor.min(app.templates.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_template_preview(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("PREVIEW");

    let Some(template) = app.selected_template_record() else {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                " Press Enter to select a template,",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                " then e to edit or d to duplicate.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(Paragraph::new(lines).block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                template.name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        {
            let mut spans = vec![Span::raw(" ")];
            spans.extend(template_badges(template));
            Line::from(spans)
        },
        Line::from(""),
        Line::from(Span::styled(" Content", Style::default().fg(Color::DarkGray))),
    ];
    for body_line in template.body.lines() {
        lines.push(Line::from(format!(" {body_line}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Variables",
        Style::default().fg(Color::DarkGray),
    )));
    let mut chips: Vec<Span> = vec![Span::raw(" ")];
    for variable in &template.variables {
        chips.push(Span::styled(
            format!("{{{variable}}} "),
            Style::default().fg(Color::Blue),
        ));
    }
    lines.push(Line::from(chips));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " e: edit   d: duplicate   y: copy body",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn draw_template_editor(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(2),
        ])
        .split(area);

    draw_editor_field(f, chunks[0], app, FieldId::TemplateName, "NAME");

    // Channel picker
    let channel = app.draft_channel;
    let channel_line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("{} {}", channel.glyph(), channel.title()),
            Style::default().fg(channel.color()),
        ),
        Span::styled("  (c cycles)", Style::default().fg(Color::DarkGray)),
    ]);
    let channel_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("CHANNEL");
    f.render_widget(Paragraph::new(channel_line).block(channel_block), chunks[1]);

    draw_editor_field(f, chunks[2], app, FieldId::TemplateBody, "CONTENT");

    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            " i: edit field   Tab: next field   c: channel",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " Ctrl+S: save   e: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(hints, chunks[3]);
}

fn draw_editor_field(f: &mut Frame, area: Rect, app: &App, field: FieldId, title: &str) {
    let active = app.edit_field == field;
    let editing = app.input_mode == InputMode::Field(field);
    let border_style = if editing {
        Style::default().fg(Color::Cyan)
    } else if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = app.fields.get(field);
    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|row| Line::from(format!(" {row}")))
        .collect();
    if editing {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string());
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

/// Draw the Integrations tab content
pub fn draw_integrations_tab(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(8)])
        .split(area);

    draw_integration_catalog(f, chunks[0], app);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_settings_form(f, lower[0], app);
    draw_integration_notes(f, lower[1], app);
}

fn draw_integration_catalog(f: &mut Frame, area: Rect, app: &App) {
    if app.integrations.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = app
        .integrations
        .iter()
        .map(|_| Constraint::Ratio(1, app.integrations.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (cell, integration) in cells.iter().zip(&app.integrations) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(integration.name);

        let lines = vec![
            Line::from(Span::styled(
                format!("● {}", integration.status.title()),
                Style::default().fg(integration.status.color()),
            )),
            Line::from(Span::styled(
                integration.description,
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                integration.features[..2].join(" · "),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                integration.features[2..].join(" · "),
                Style::default().fg(Color::White),
            )),
        ];

        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            *cell,
        );
    }
}

fn draw_settings_form(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];

    for (idx, row) in SettingRow::ALL.iter().enumerate() {
        let is_cursor = idx == app.selected_setting;
        let prefix = if is_cursor { "▸ " } else { "  " };
        let label_style = if is_cursor {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let line = match row {
            SettingRow::WebhookUrl => {
                let editing = app.input_mode == InputMode::Field(FieldId::WebhookUrl);
                let value = app.fields.get(FieldId::WebhookUrl);
                let value_span = if value.is_empty() && !editing {
                    Span::styled(
                        "https://hooks.zapier.com/hooks/catch/…",
                        Style::default().fg(Color::DarkGray),
                    )
                } else {
                    Span::styled(value.to_string(), Style::default().fg(Color::White))
                };
                let mut spans = vec![
                    Span::raw(prefix),
                    Span::styled(format!("{:<24}", row.title()), label_style),
                    value_span,
                ];
                if editing {
                    spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
                }
                Line::from(spans)
            }
            SettingRow::ApiKey => {
                let editing = app.input_mode == InputMode::Field(FieldId::ApiKey);
                let value = app.fields.get(FieldId::ApiKey);
                let shown = if editing {
                    value.to_string()
                } else {
                    mask_secret(value)
                };
                let value_span = if shown.is_empty() && !editing {
                    Span::styled("sk-…", Style::default().fg(Color::DarkGray))
                } else {
                    Span::styled(shown, Style::default().fg(Color::White))
                };
                let mut spans = vec![
                    Span::raw(prefix),
                    Span::styled(format!("{:<24}", row.title()), label_style),
                    value_span,
                ];
                if editing {
                    spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
                }
                Line::from(spans)
            }
            SettingRow::Toggle(id) => {
                let on = app.toggles.get(*id);
                let (mark, color) = if on { ("[on] ", Color::Green) } else { ("[off]", Color::DarkGray) };
                Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(format!("{:<24}", row.title()), label_style),
                    Span::styled(mark, Style::default().fg(color)),
                ])
            }
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    let test_line = if app.webhook_in_flight {
        Line::from(Span::styled(
            "  Sending test event…",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(vec![
            Span::styled("  t", Style::default().fg(Color::Yellow)),
            Span::styled(
                ": send test event to the webhook",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    };
    lines.push(test_line);
    lines.push(Line::from(Span::styled(
        "  Enter: edit field / flip switch",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("SETTINGS");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_integration_notes(f: &mut Frame, area: Rect, _app: &App) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " Workflow example",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Patient appointment → Zapier → SMS via Twilio",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            " → Delivery confirmation",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " The test event posts a fixed JSON body to the",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " webhook. The endpoint's response is not read;",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " confirm receipt in your automation history.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " API keys stay in memory for this session only.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("NOTES");
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    let visible: String = value.chars().take(3).collect();
    format!("{}{}", visible, "•".repeat(value.chars().count().saturating_sub(3)))
}

/// Draw the Analytics tab content
pub fn draw_analytics_tab(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(8),
            Constraint::Min(7),
        ])
        .split(area);

    draw_metric_cards(f, chunks[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_weekly_activity(f, middle[0], app);
    draw_channel_distribution(f, middle[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);
    draw_response_times(f, bottom[0], app);
    draw_insights(f, bottom[1], app);
}

fn draw_metric_cards(f: &mut Frame, area: Rect, app: &App) {
    if app.metrics.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = app
        .metrics
        .iter()
        .map(|_| Constraint::Ratio(1, app.metrics.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (cell, metric) in cells.iter().zip(&app.metrics) {
        use crate::domain::analytics::Trend;
        let trend_color = match metric.trend {
            Trend::Up => Color::Green,
            Trend::Down => Color::Red,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let lines = vec![
            Line::from(Span::styled(metric.title, Style::default().fg(Color::DarkGray))),
            Line::from(vec![
                Span::styled(
                    metric.value,
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", metric.trend.arrow(), metric.change),
                    Style::default().fg(trend_color),
                ),
            ]),
            Line::from(Span::styled(" vs last week", Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(Paragraph::new(lines).block(block), *cell);
    }
}

fn draw_weekly_activity(f: &mut Frame, area: Rect, app: &App) {
    let sent: Vec<u64> = app.weekly.iter().map(|d| d.sent).collect();
    let delivered: Vec<u64> = app.weekly.iter().map(|d| d.delivered).collect();
    let responses: Vec<u64> = app.weekly.iter().map(|d| d.responses).collect();
    let days: String = app
        .weekly
        .iter()
        .map(|d| d.day.chars().next().unwrap_or(' '))
        .collect::<Vec<char>>()
        .iter()
        .map(|c| format!("{c} "))
        .collect();

    let width = app.weekly.len().max(1);
    let row = |label: &str, data: &[u64], color: Color| {
        let spark: String = sparkline_text(data, width).chars().flat_map(|c| [c, ' ']).collect();
        Line::from(vec![
            Span::styled(format!(" {label:<10}"), Style::default().fg(Color::DarkGray)),
            Span::styled(spark, Style::default().fg(color)),
            Span::styled(
                format!("{}", data.iter().sum::<u64>()),
                Style::default().fg(Color::White),
            ),
        ])
    };

    let lines = vec![
        Line::from(""),
        row("Sent", &sent, Color::Blue),
        row("Delivered", &delivered, Color::Green),
        row("Responses", &responses, Color::Magenta),
        Line::from(""),
        Line::from(vec![
            Span::raw("            "),
            Span::styled(days, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("WEEKLY MESSAGE ACTIVITY");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_channel_distribution(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];
    for share in &app.channel_shares {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} {:<10}", share.channel.glyph(), share.channel.title()),
                Style::default().fg(share.channel.color()),
            ),
            Span::styled(
                meter_text(share.percent, 100, 20),
                Style::default().fg(share.channel.color()),
            ),
            Span::styled(format!(" {:>3}%", share.percent), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("COMMUNICATION CHANNELS");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_response_times(f: &mut Frame, area: Rect, app: &App) {
    let max = app.response_buckets.iter().map(|b| b.count).max().unwrap_or(1);
    let mut lines = vec![Line::from("")];
    for bucket in &app.response_buckets {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<8}", bucket.label), Style::default().fg(Color::DarkGray)),
            Span::styled(
                meter_text(bucket.count, max, 18),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(format!(" {:>3}", bucket.count), Style::default().fg(Color::White)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("RESPONSE TIME");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_insights(f: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from("")];
    for insight in &app.insights {
        lines.push(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Cyan)),
            Span::styled(
                insight.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", insight.text),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("PERFORMANCE INSIGHTS");
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

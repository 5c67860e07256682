mod app;
mod config;
mod core;
mod domain;
mod infrastructure;
mod modules;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::app::{App, FieldId, InputMode, StatusLevel, Tab};
use crate::core::{parse_command, Action, Command, Module, NotifyLevel};
use crate::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};

#[derive(Debug, Parser)]
#[command(
    name = "remind",
    version,
    about = "Remind: a patient reminder operations TUI"
)]
struct Args {
    /// Webhook endpoint to preload into the Integrations tab
    #[arg(long)]
    webhook: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load();
    let product_name = config.product_name();

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the runtime bridge
    let runtime = RuntimeBridge::new(product_name.clone())?;

    let mut app = App::new();
    app.product_name = product_name;
    if let Some(url) = args.webhook.or(config.webhook.url) {
        app.fields.set(FieldId::WebhookUrl, url);
    }

    let res = run_app(&mut terminal, app, runtime);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &runtime);
        app.sync_context();
        terminal.draw(|f| ui::draw(f, &mut app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        pump_background(&mut app, &runtime);
    }
}

fn pump_background(app: &mut App, runtime: &RuntimeBridge) {
    for event in runtime.poll_events() {
        match event {
            RuntimeEvent::WebhookSent { url } => app.apply_webhook_sent(url),
            RuntimeEvent::WebhookFailed { message } => app.apply_webhook_failed(message),
        }
    }

    if let Some(url) = app.take_webhook_request() {
        if runtime.send(RuntimeCommand::TestWebhook { url }).is_err() {
            app.apply_webhook_failed("Background worker is gone".to_string());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
        InputMode::Field(field) => handle_field_mode(app, key, field),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    // Overview panels take their keys first
    if app.current_tab == Tab::Overview {
        let action = app.overview.handle_key(key, &mut app.ctx);
        if !matches!(action, Action::None) {
            apply_action(app, action);
            return;
        }
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char(':'), _) => app.enter_command(),
        (KeyCode::Char('/'), _) => {
            if app.current_tab == Tab::Patients {
                app.input_mode = InputMode::Field(FieldId::Search);
            } else {
                app.enter_command();
            }
        }
        (KeyCode::Char(digit), _) if digit.is_ascii_digit() => {
            if let Some(tab) = Tab::ALL.iter().find(|tab| tab.shortcut() == digit) {
                app.select_tab(*tab);
            }
        }
        (KeyCode::Tab, _) => {
            if app.current_tab == Tab::Templates && app.edit_mode {
                app.toggle_edit_field();
            } else {
                app.cycle_tab(true);
            }
        }
        (KeyCode::BackTab, _) => app.cycle_tab(false),
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => app.move_selection_down(),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => app.move_selection_up(),
        (KeyCode::Char('g'), _) => app.go_to_top(),
        (KeyCode::Char('G'), _) => app.go_to_bottom(),
        (KeyCode::Enter, _) => handle_enter(app),
        (KeyCode::Char(' '), _) => {
            if app.current_tab == Tab::Integrations {
                if let crate::modules::integrations::SettingRow::Toggle(id) =
                    app.selected_setting_row()
                {
                    app.flip_toggle(id);
                }
            }
        }
        (KeyCode::Char('e'), _) => {
            if app.current_tab == Tab::Templates {
                app.toggle_edit();
            }
        }
        (KeyCode::Char('i'), _) => match app.current_tab {
            Tab::Templates if app.edit_mode => {
                app.input_mode = InputMode::Field(app.edit_field);
            }
            Tab::Integrations => handle_enter(app),
            _ => {}
        },
        (KeyCode::Char('c'), _) => {
            if app.current_tab == Tab::Templates {
                app.cycle_draft_channel();
            }
        }
        (KeyCode::Char('s'), mods) if mods.contains(KeyModifiers::CONTROL) => {
            app.save_template_changes();
        }
        (KeyCode::Char('d'), _) => {
            if app.current_tab == Tab::Templates {
                app.duplicate_selected_template();
            }
        }
        (KeyCode::Char('t'), _) => {
            if app.current_tab == Tab::Integrations {
                app.request_webhook_test();
            } else {
                app.set_status("Webhook test lives in Integrations", StatusLevel::Warn);
            }
        }
        (KeyCode::Char('y'), _) => handle_copy_to_clipboard(app),
        (KeyCode::Char('x'), _) => {
            let action = modules::export::export_current_tab(app);
            apply_action(app, action);
        }
        (KeyCode::Char('r'), _) => app.refresh(),
        _ => {}
    }
}

fn handle_enter(app: &mut App) {
    match app.current_tab {
        Tab::Templates => {
            if let Some(id) = app.cursor_template().map(|t| t.id) {
                app.select_template(id);
            }
        }
        Tab::Integrations => match app.selected_setting_row() {
            crate::modules::integrations::SettingRow::WebhookUrl => {
                app.input_mode = InputMode::Field(FieldId::WebhookUrl);
            }
            crate::modules::integrations::SettingRow::ApiKey => {
                app.input_mode = InputMode::Field(FieldId::ApiKey);
            }
            crate::modules::integrations::SettingRow::Toggle(id) => app.flip_toggle(id),
        },
        Tab::Overview | Tab::Patients | Tab::Analytics => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Enter => {
            let input = app.command.input.trim().to_string();
            app.exit_command();
            if input.is_empty() {
                return;
            }
            let cmd = parse_command(&input);
            app.command.last = Some(input);
            let action = execute_command(app, &cmd);
            apply_action(app, action);
        }
        KeyCode::Char(c) => app.command.input.push(c),
        _ => {}
    }
}

fn execute_command(app: &mut App, cmd: &Command) -> Action {
    match cmd {
        Command::Overview => Action::Navigate(Tab::Overview),
        Command::Patients => Action::Navigate(Tab::Patients),
        Command::Templates => Action::Navigate(Tab::Templates),
        Command::Integrations => Action::Navigate(Tab::Integrations),
        Command::Analytics => Action::Navigate(Tab::Analytics),

        Command::Select(id) => {
            app.select_tab(Tab::Templates);
            if app.select_template(*id) {
                Action::Notify(format!("Selected template #{id}"), NotifyLevel::Info)
            } else {
                Action::Notify(format!("No template #{id}"), NotifyLevel::Error)
            }
        }
        Command::Edit => {
            app.select_tab(Tab::Templates);
            app.toggle_edit();
            Action::None
        }
        Command::Save => {
            app.save_template_changes();
            Action::None
        }
        Command::Duplicate => {
            app.select_tab(Tab::Templates);
            app.duplicate_selected_template();
            Action::None
        }
        Command::Channel(name) => {
            if !app.edit_mode {
                return Action::Notify(
                    "Enter edit mode first (:edit)".to_string(),
                    NotifyLevel::Warn,
                );
            }
            let Some(name) = name else {
                return Action::Notify("Usage: channel <sms|whatsapp|email>".to_string(), NotifyLevel::Warn);
            };
            match crate::domain::template::Channel::parse(name) {
                Some(channel) => {
                    app.draft_channel = channel;
                    Action::Notify(format!("Channel set to {}", channel.title()), NotifyLevel::Info)
                }
                None => Action::Notify(
                    format!("Unknown channel: {name} (sms, whatsapp, email)"),
                    NotifyLevel::Warn,
                ),
            }
        }
        Command::Generate(args) => {
            if !app.edit_mode {
                return Action::Notify(
                    "Enter edit mode first (:edit)".to_string(),
                    NotifyLevel::Warn,
                );
            }
            let args = args.clone().unwrap_or_default();
            match modules::templates::generate_draft(&args) {
                Ok(body) => {
                    app.fields.set(FieldId::TemplateBody, body);
                    app.edit_field = FieldId::TemplateBody;
                    Action::Notify("Draft generated into the content field".to_string(), NotifyLevel::Info)
                }
                Err(message) => Action::Notify(message, NotifyLevel::Warn),
            }
        }

        Command::Search(term) => {
            app.select_tab(Tab::Patients);
            match term {
                Some(term) => {
                    app.fields.set(FieldId::Search, term.clone());
                    Action::Notify(format!("Search: {term}"), NotifyLevel::Info)
                }
                None => {
                    app.fields.clear(FieldId::Search);
                    Action::Notify("Search cleared".to_string(), NotifyLevel::Info)
                }
            }
        }

        Command::Webhook(url) => match url {
            Some(url) => {
                app.fields.set(FieldId::WebhookUrl, url.clone());
                Action::Notify("Webhook URL set".to_string(), NotifyLevel::Info)
            }
            None => {
                let current = app.fields.get(FieldId::WebhookUrl);
                if current.is_empty() {
                    Action::Notify("Usage: webhook <url>".to_string(), NotifyLevel::Warn)
                } else {
                    Action::Notify(
                        format!("Webhook: {}", crate::app::short_url(current)),
                        NotifyLevel::Info,
                    )
                }
            }
        },
        Command::ApiKey(key) => match key {
            Some(key) => {
                app.fields.set(FieldId::ApiKey, key.clone());
                Action::Notify("API key stored for this session".to_string(), NotifyLevel::Info)
            }
            None => Action::Notify("Usage: apikey <key>".to_string(), NotifyLevel::Warn),
        },
        Command::Test => {
            app.request_webhook_test();
            Action::None
        }

        Command::Export => modules::export::export_current_tab(app),
        Command::Quit => Action::Quit,

        Command::Unknown(input) => {
            Action::Notify(format!("Unknown command: {input}"), NotifyLevel::Warn)
        }
    }
}

fn handle_field_mode(app: &mut App, key: KeyEvent, field: FieldId) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => match field {
            // Multi-line field: Enter inserts a line break
            FieldId::TemplateBody => app.fields.push(field, '\n'),
            FieldId::WebhookUrl => {
                app.input_mode = InputMode::Normal;
                if !app.fields.is_empty(field) {
                    app.set_status("Webhook URL set", StatusLevel::Info);
                }
            }
            FieldId::ApiKey => {
                app.input_mode = InputMode::Normal;
                if !app.fields.is_empty(field) {
                    app.set_status("API key stored for this session", StatusLevel::Info);
                }
            }
            FieldId::Search | FieldId::TemplateName => {
                app.input_mode = InputMode::Normal;
            }
        },
        KeyCode::Tab => {
            if matches!(field, FieldId::TemplateName | FieldId::TemplateBody) {
                app.toggle_edit_field();
                app.input_mode = InputMode::Field(app.edit_field);
            }
        }
        KeyCode::Backspace => app.fields.pop(field),
        KeyCode::Char(c) => app.fields.push(field, c),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.help_open || matches!(app.input_mode, InputMode::Command | InputMode::Field(_)) {
        return;
    }
    let Some(size) = terminal_rect() else {
        return;
    };
    let areas = ui::layout::areas(size);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row == areas.tab_bar.y {
                if let Some(tab) = ui::tabs::tab_at_column(areas.tab_bar, mouse.column) {
                    app.select_tab(tab);
                }
            }
        }
        MouseEventKind::ScrollUp => app.move_selection_up(),
        MouseEventKind::ScrollDown => app.move_selection_down(),
        _ => {}
    }
}

fn terminal_rect() -> Option<Rect> {
    crossterm::terminal::size()
        .ok()
        .map(|(width, height)| Rect::new(0, 0, width, height))
}

fn handle_copy_to_clipboard(app: &mut App) {
    let target = match app.current_tab {
        Tab::Patients => app
            .selected_patient_record()
            .map(|patient| patient.contact_line()),
        Tab::Templates => app
            .selected_template_record()
            .or_else(|| app.cursor_template())
            .map(|template| template.body.clone()),
        Tab::Overview | Tab::Integrations | Tab::Analytics => None,
    };

    let Some(text) = target else {
        app.set_status("Nothing to copy here", StatusLevel::Warn);
        return;
    };

    use arboard::Clipboard;
    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => {
            app.ctx.set_clipboard(text);
            app.set_status("Copied to clipboard", StatusLevel::Info);
        }
        Err(err) => app.set_status(format!("Clipboard error: {err}"), StatusLevel::Warn),
    }
}

fn apply_action(app: &mut App, action: Action) {
    match action {
        Action::None => {}
        Action::Navigate(tab) => app.select_tab(tab),
        Action::Copy(text) => {
            use arboard::Clipboard;
            match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
                Ok(()) => {
                    app.ctx.set_clipboard(text);
                    app.set_status("Copied to clipboard", StatusLevel::Info);
                }
                Err(err) => app.set_status(format!("Clipboard error: {err}"), StatusLevel::Warn),
            }
        }
        Action::Notify(text, level) => app.set_status(text, status_level(level)),
        Action::Quit => app.should_quit = true,
    }
}

fn status_level(level: NotifyLevel) -> StatusLevel {
    match level {
        NotifyLevel::Info => StatusLevel::Info,
        NotifyLevel::Warn => StatusLevel::Warn,
        NotifyLevel::Error => StatusLevel::Error,
    }
}

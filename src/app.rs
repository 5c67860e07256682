use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::core::{Context, Selected};
use crate::domain::analytics::{
    self, ChannelShare, DayActivity, Insight, Metric, ResponseBucket,
};
use crate::domain::patient::{ApptStatus, Patient};
use crate::domain::template::{Channel, MessageTemplate};
use crate::infrastructure::webhook;
use crate::modules::integrations::{self, Integration, IntegrationToggles, SettingRow, ToggleId};
use crate::modules::overview::{self, ActivityEntry, FollowUp, Overview, StatCard};

/// Main tabs in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Patients,
    Templates,
    Integrations,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overview,
        Tab::Patients,
        Tab::Templates,
        Tab::Integrations,
        Tab::Analytics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Patients => "Patients",
            Tab::Templates => "Templates",
            Tab::Integrations => "Integrations",
            Tab::Analytics => "Analytics",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Tab::Overview => '1',
            Tab::Patients => '2',
            Tab::Templates => '3',
            Tab::Integrations => '4',
            Tab::Analytics => '5',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
    Field(FieldId),
}

/// Controls backed by the generic form-field store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldId {
    Search,
    WebhookUrl,
    ApiKey,
    TemplateName,
    TemplateBody,
}

impl FieldId {
    pub fn title(&self) -> &'static str {
        match self {
            FieldId::Search => "Search",
            FieldId::WebhookUrl => "Webhook URL",
            FieldId::ApiKey => "API key",
            FieldId::TemplateName => "Template name",
            FieldId::TemplateBody => "Template content",
        }
    }
}

/// String values for every form control, keyed by control id.
/// No validation beyond presence checks; no cross-field relationships.
#[derive(Debug, Default)]
pub struct FormFields {
    values: BTreeMap<FieldId, String>,
}

impl FormFields {
    pub fn get(&self, id: FieldId) -> &str {
        self.values.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.insert(id, value.into());
    }

    pub fn push(&mut self, id: FieldId, ch: char) {
        self.values.entry(id).or_default().push(ch);
    }

    pub fn pop(&mut self, id: FieldId) {
        if let Some(value) = self.values.get_mut(&id) {
            value.pop();
        }
    }

    pub fn clear(&mut self, id: FieldId) {
        self.values.remove(&id);
    }

    pub fn is_empty(&self, id: FieldId) -> bool {
        self.get(id).trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub since: Instant,
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug)]
pub struct App {
    /// Shared context for modules
    pub ctx: Context,
    /// Current active tab
    pub current_tab: Tab,
    pub overview: Overview,
    pub input_mode: InputMode,
    pub fields: FormFields,

    // Patients tab
    pub patients: Vec<Patient>,
    pub selected_patient: usize,

    // Templates tab
    pub templates: Vec<MessageTemplate>,
    pub template_cursor: usize,
    pub selected_template: Option<u32>,
    pub edit_mode: bool,
    pub edit_field: FieldId,
    pub draft_channel: Channel,

    // Integrations tab
    pub integrations: Vec<Integration>,
    pub toggles: IntegrationToggles,
    pub selected_setting: usize,
    pub webhook_in_flight: bool,
    pending_webhook_test: Option<String>,

    // Analytics tab (literal series, reseeded each session)
    pub weekly: Vec<DayActivity>,
    pub channel_shares: Vec<ChannelShare>,
    pub response_buckets: Vec<ResponseBucket>,
    pub metrics: Vec<Metric>,
    pub insights: Vec<Insight>,

    // Overview tab
    pub stats: Vec<StatCard>,
    pub urgent_followups: Vec<FollowUp>,
    pub recent_activity: Vec<ActivityEntry>,

    pub product_name: String,
    pub command: CommandBar,
    pub status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let mut app = Self {
            ctx: Context::new(),
            current_tab: Tab::Overview,
            overview: Overview::new(),
            input_mode: InputMode::Normal,
            fields: FormFields::default(),
            patients: Vec::new(),
            selected_patient: 0,
            templates: Vec::new(),
            template_cursor: 0,
            selected_template: None,
            edit_mode: false,
            edit_field: FieldId::TemplateName,
            draft_channel: Channel::Sms,
            integrations: Vec::new(),
            toggles: IntegrationToggles::default(),
            selected_setting: 0,
            webhook_in_flight: false,
            pending_webhook_test: None,
            weekly: Vec::new(),
            channel_shares: Vec::new(),
            response_buckets: Vec::new(),
            metrics: Vec::new(),
            insights: Vec::new(),
            stats: Vec::new(),
            urgent_followups: Vec::new(),
            recent_activity: Vec::new(),
            product_name: crate::config::DEFAULT_PRODUCT_NAME.to_string(),
            command: CommandBar::default(),
            status: None,
            help_open: false,
            should_quit: false,
        };
        app.seed_mock();
        app
    }

    /// Sync context with app state
    pub fn sync_context(&mut self) {
        self.ctx.product_name = self.product_name.clone();
        self.ctx.webhook_in_flight = self.webhook_in_flight;
        self.ctx.selected = match self.current_tab {
            Tab::Patients => self
                .selected_patient_record()
                .map(|p| Selected::Patient(p.id))
                .unwrap_or(Selected::None),
            Tab::Templates => self
                .selected_template
                .map(Selected::Template)
                .unwrap_or(Selected::None),
            _ => Selected::None,
        };
    }

    // === Tab router ===

    /// Unconditionally switch the active tab; the next draw renders the one
    /// view mapped to it.
    pub fn select_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let index = Tab::ALL
            .iter()
            .position(|tab| *tab == self.current_tab)
            .unwrap_or(0);
        let next = if forward {
            (index + 1) % Tab::ALL.len()
        } else {
            (index + Tab::ALL.len() - 1) % Tab::ALL.len()
        };
        self.select_tab(Tab::ALL[next]);
    }

    // === Template selection state ===

    pub fn template_by_id(&self, id: u32) -> Option<&MessageTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn selected_template_record(&self) -> Option<&MessageTemplate> {
        self.selected_template.and_then(|id| self.template_by_id(id))
    }

    /// Template under the list cursor (not necessarily the confirmed selection)
    pub fn cursor_template(&self) -> Option<&MessageTemplate> {
        self.templates.get(self.template_cursor)
    }

    /// Confirm a selection. Switching to a different template always leaves
    /// edit mode and discards the draft; re-selecting the current one keeps
    /// whatever state it had.
    pub fn select_template(&mut self, id: u32) -> bool {
        let Some(row) = self.templates.iter().position(|t| t.id == id) else {
            return false;
        };
        if self.selected_template != Some(id) {
            self.discard_draft();
        }
        self.selected_template = Some(id);
        self.template_cursor = row;
        true
    }

    /// Flip edit mode for the current selection. A no-op on state when
    /// nothing is selected.
    pub fn toggle_edit(&mut self) {
        let Some(id) = self.selected_template else {
            self.set_status("Select a template first", StatusLevel::Warn);
            return;
        };
        if self.edit_mode {
            self.discard_draft();
            self.set_status("Edit cancelled", StatusLevel::Info);
        } else if let Some(template) = self.template_by_id(id) {
            let name = template.name.clone();
            let body = template.body.clone();
            self.draft_channel = template.channel;
            self.fields.set(FieldId::TemplateName, name);
            self.fields.set(FieldId::TemplateBody, body);
            self.edit_field = FieldId::TemplateName;
            self.edit_mode = true;
        }
    }

    fn discard_draft(&mut self) {
        self.edit_mode = false;
        self.edit_field = FieldId::TemplateName;
        self.fields.clear(FieldId::TemplateName);
        self.fields.clear(FieldId::TemplateBody);
    }

    /// Copy the edit draft into the in-memory record and leave edit mode.
    /// The change lives for this session only; a restart reseeds the
    /// original templates.
    pub fn save_template_changes(&mut self) {
        if !self.edit_mode {
            self.set_status("Not editing a template", StatusLevel::Warn);
            return;
        }
        let Some(id) = self.selected_template else {
            return;
        };
        let name = self.fields.get(FieldId::TemplateName).trim().to_string();
        let body = self.fields.get(FieldId::TemplateBody).to_string();
        if name.is_empty() {
            self.set_status("Template name is required", StatusLevel::Error);
            return;
        }
        if body.trim().is_empty() {
            self.set_status("Template content is required", StatusLevel::Error);
            return;
        }
        let channel = self.draft_channel;
        let warning = {
            let Some(template) = self.templates.iter_mut().find(|t| t.id == id) else {
                return;
            };
            template.name = name;
            template.body = body;
            template.channel = channel;
            crate::modules::templates::save_warning(template)
        };
        self.discard_draft();
        match warning {
            Some(text) => self.set_status(text, StatusLevel::Warn),
            None => self.set_status("Template saved for this session", StatusLevel::Info),
        }
    }

    pub fn cycle_draft_channel(&mut self) {
        if !self.edit_mode {
            return;
        }
        let index = Channel::ALL
            .iter()
            .position(|c| *c == self.draft_channel)
            .unwrap_or(0);
        self.draft_channel = Channel::ALL[(index + 1) % Channel::ALL.len()];
    }

    pub fn toggle_edit_field(&mut self) {
        self.edit_field = match self.edit_field {
            FieldId::TemplateName => FieldId::TemplateBody,
            _ => FieldId::TemplateName,
        };
    }

    pub fn duplicate_selected_template(&mut self) {
        let Some(id) = self.selected_template.or_else(|| self.cursor_template().map(|t| t.id))
        else {
            self.set_status("Select a template first", StatusLevel::Warn);
            return;
        };
        match crate::modules::templates::duplicate(&mut self.templates, id) {
            Some(new_id) => {
                self.select_template(new_id);
                self.set_status(format!("Duplicated as template #{new_id}"), StatusLevel::Info);
            }
            None => self.set_status("Template not found", StatusLevel::Error),
        }
    }

    // === Patients ===

    pub fn filtered_patient_indices(&self) -> Vec<usize> {
        let needle = self.fields.get(FieldId::Search);
        self.patients
            .iter()
            .enumerate()
            .filter(|(_, patient)| patient.matches_search(needle))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn selected_patient_record(&self) -> Option<&Patient> {
        self.filtered_patient_indices()
            .get(self.selected_patient)
            .and_then(|idx| self.patients.get(*idx))
    }

    // === Webhook test action ===

    /// Queue a webhook test for the background worker.
    ///
    /// Fails fast on an empty URL field (nothing is queued) and refuses
    /// re-submission while a test is still in flight.
    pub fn request_webhook_test(&mut self) {
        if self.webhook_in_flight {
            self.set_status("A test is already in flight", StatusLevel::Warn);
            return;
        }
        let url = self.fields.get(FieldId::WebhookUrl).trim().to_string();
        if let Err(err) = webhook::validate_url(&url) {
            self.set_status(format!("{err}"), StatusLevel::Error);
            return;
        }
        self.webhook_in_flight = true;
        self.pending_webhook_test = Some(url);
        self.set_status("Sending test event…", StatusLevel::Info);
    }

    /// Drain the queued test request, if any (picked up by the main loop)
    pub fn take_webhook_request(&mut self) -> Option<String> {
        self.pending_webhook_test.take()
    }

    pub fn apply_webhook_sent(&mut self, url: String) {
        self.webhook_in_flight = false;
        self.set_status(
            format!("Test event dispatched to {} - check your automation history", short_url(&url)),
            StatusLevel::Info,
        );
    }

    pub fn apply_webhook_failed(&mut self, message: String) {
        self.webhook_in_flight = false;
        self.set_status(message, StatusLevel::Error);
    }

    // === Selection movement (per-tab) ===

    pub fn move_selection_up(&mut self) {
        match self.current_tab {
            Tab::Patients => {
                if self.selected_patient > 0 {
                    self.selected_patient -= 1;
                }
            }
            Tab::Templates => {
                if self.template_cursor > 0 {
                    self.template_cursor -= 1;
                }
            }
            Tab::Integrations => {
                if self.selected_setting > 0 {
                    self.selected_setting -= 1;
                }
            }
            Tab::Overview | Tab::Analytics => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.current_tab {
            Tab::Patients => {
                let len = self.filtered_patient_indices().len();
                if self.selected_patient + 1 < len {
                    self.selected_patient += 1;
                }
            }
            Tab::Templates => {
                if self.template_cursor + 1 < self.templates.len() {
                    self.template_cursor += 1;
                }
            }
            Tab::Integrations => {
                if self.selected_setting + 1 < SettingRow::ALL.len() {
                    self.selected_setting += 1;
                }
            }
            Tab::Overview | Tab::Analytics => {}
        }
    }

    pub fn go_to_top(&mut self) {
        match self.current_tab {
            Tab::Patients => self.selected_patient = 0,
            Tab::Templates => self.template_cursor = 0,
            Tab::Integrations => self.selected_setting = 0,
            Tab::Overview | Tab::Analytics => {}
        }
    }

    pub fn go_to_bottom(&mut self) {
        match self.current_tab {
            Tab::Patients => {
                self.selected_patient = self.filtered_patient_indices().len().saturating_sub(1);
            }
            Tab::Templates => {
                self.template_cursor = self.templates.len().saturating_sub(1);
            }
            Tab::Integrations => {
                self.selected_setting = SettingRow::ALL.len() - 1;
            }
            Tab::Overview | Tab::Analytics => {}
        }
    }

    pub fn selected_setting_row(&self) -> SettingRow {
        SettingRow::ALL
            .get(self.selected_setting)
            .copied()
            .unwrap_or(SettingRow::WebhookUrl)
    }

    pub fn flip_toggle(&mut self, id: ToggleId) {
        self.toggles.flip(id);
        let state = if self.toggles.get(id) { "on" } else { "off" };
        self.set_status(format!("{} {}", id.title(), state), StatusLevel::Info);
    }

    // === Status line ===

    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > Duration::from_secs(3) {
                self.status = None;
            }
        }
        self.clamp_all_selections();
    }

    // === Command line ===

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    // === Mock data ===

    /// Drop session edits and reseed the literals
    pub fn refresh(&mut self) {
        self.seed_mock();
        self.template_cursor = 0;
        self.selected_patient = 0;
        self.discard_draft();
        self.selected_template = None;
        self.fields.clear(FieldId::Search);
        self.set_status("Reloaded mock data", StatusLevel::Info);
    }

    fn seed_mock(&mut self) {
        self.patients = seed_patients();
        self.templates = seed_templates();
        self.integrations = integrations::catalog();
        self.weekly = analytics::weekly_activity();
        self.channel_shares = analytics::channel_shares();
        self.response_buckets = analytics::response_buckets();
        self.metrics = analytics::metrics();
        self.insights = analytics::insights();
        self.stats = overview::stat_cards();
        self.urgent_followups = overview::urgent_followups();
        self.recent_activity = overview::recent_activity();
    }

    fn clamp_all_selections(&mut self) {
        let patient_len = self.filtered_patient_indices().len();
        Self::clamp_selection(&mut self.selected_patient, patient_len);
        Self::clamp_selection(&mut self.template_cursor, self.templates.len());
        Self::clamp_selection(&mut self.selected_setting, SettingRow::ALL.len());
    }

    fn clamp_selection(selection: &mut usize, len: usize) {
        if len == 0 {
            *selection = 0;
        } else if *selection >= len {
            *selection = len - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

pub fn short_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.chars().count() <= 40 {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(37).collect();
    format!("{head}…")
}

fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: 1,
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            next_appointment: "2025-05-28 09:00".to_string(),
            status: ApptStatus::Confirmed,
            preferred_channel: Channel::Sms,
            last_reminder: "2025-05-25".to_string(),
        },
        Patient {
            id: 2,
            name: "Michael Chen".to_string(),
            email: "michael.chen@email.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            next_appointment: "2025-05-26 15:30".to_string(),
            status: ApptStatus::Pending,
            preferred_channel: Channel::WhatsApp,
            last_reminder: "2025-05-24".to_string(),
        },
        Patient {
            id: 3,
            name: "Emma Davis".to_string(),
            email: "emma.davis@email.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            next_appointment: "2025-05-28 11:00".to_string(),
            status: ApptStatus::Confirmed,
            preferred_channel: Channel::Email,
            last_reminder: "2025-05-25".to_string(),
        },
    ]
}

fn seed_templates() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate {
            id: 1,
            name: "Appointment Reminder - 24hr".to_string(),
            channel: Channel::Sms,
            category: "Reminder".to_string(),
            body: "Hi {patientName}! This is a friendly reminder about your appointment \
                   with Dr. {doctorName} tomorrow at {appointmentTime}. Please reply CONFIRM \
                   or call us at {clinicPhone} if you need to reschedule. Thank you!"
                .to_string(),
            variables: vec![
                "patientName".to_string(),
                "doctorName".to_string(),
                "appointmentTime".to_string(),
                "clinicPhone".to_string(),
            ],
            ai_optimized: true,
        },
        MessageTemplate {
            id: 2,
            name: "WhatsApp Follow-up".to_string(),
            channel: Channel::WhatsApp,
            category: "Follow-up".to_string(),
            body: "Hello {patientName}!\n\nHow are you feeling after your visit with \
                   Dr. {doctorName}? We hope your recovery is going well.\n\nIf you have any \
                   questions or concerns, please don't hesitate to reach out.\n\nBest regards,\n\
                   {clinicName} Team"
                .to_string(),
            variables: vec![
                "patientName".to_string(),
                "doctorName".to_string(),
                "clinicName".to_string(),
            ],
            ai_optimized: true,
        },
        MessageTemplate {
            id: 3,
            name: "Email Confirmation".to_string(),
            channel: Channel::Email,
            category: "Confirmation".to_string(),
            body: "Dear {patientName},\n\nYour appointment has been confirmed for \
                   {appointmentDate} at {appointmentTime} with Dr. {doctorName}.\n\n\
                   Location: {clinicAddress}\n\nPlease arrive 15 minutes early and bring your \
                   insurance card and any relevant medical records.\n\nIf you need to cancel or \
                   reschedule, please contact us at least 24 hours in advance.\n\nThank you,\n\
                   {clinicName}"
                .to_string(),
            variables: vec![
                "patientName".to_string(),
                "appointmentDate".to_string(),
                "appointmentTime".to_string(),
                "doctorName".to_string(),
                "clinicAddress".to_string(),
                "clinicName".to_string(),
            ],
            ai_optimized: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let app = App::new();
        assert_eq!(app.current_tab, Tab::Overview);
        assert_eq!(app.selected_template, None);
        assert!(!app.edit_mode);
        assert!(!app.webhook_in_flight);
        assert_eq!(app.patients.len(), 3);
        assert_eq!(app.templates.len(), 3);
    }

    #[test]
    fn test_tab_routing_is_total() {
        let mut app = App::new();
        for tab in Tab::ALL {
            app.select_tab(tab);
            assert_eq!(app.current_tab, tab);
        }
    }

    #[test]
    fn test_cycle_tab_wraps() {
        let mut app = App::new();
        for _ in 0..Tab::ALL.len() {
            app.cycle_tab(true);
        }
        assert_eq!(app.current_tab, Tab::Overview);
        app.cycle_tab(false);
        assert_eq!(app.current_tab, Tab::Analytics);
    }

    #[test]
    fn test_selecting_other_template_resets_edit_mode() {
        let mut app = App::new();
        assert!(app.select_template(1));
        app.toggle_edit();
        assert!(app.edit_mode);

        assert!(app.select_template(2));
        assert_eq!(app.selected_template, Some(2));
        assert!(!app.edit_mode);
        assert!(app.fields.is_empty(FieldId::TemplateName));
    }

    #[test]
    fn test_reselecting_same_template_keeps_edit_mode() {
        let mut app = App::new();
        app.select_template(1);
        app.toggle_edit();
        assert!(app.edit_mode);
        app.select_template(1);
        assert!(app.edit_mode);
    }

    #[test]
    fn test_toggle_edit_without_selection_is_noop() {
        let mut app = App::new();
        app.toggle_edit();
        assert!(!app.edit_mode);
        assert_eq!(app.selected_template, None);
    }

    #[test]
    fn test_select_unknown_template_rejected() {
        let mut app = App::new();
        assert!(!app.select_template(42));
        assert_eq!(app.selected_template, None);
    }

    #[test]
    fn test_end_to_end_template_flow() {
        let mut app = App::new();
        assert_eq!(app.current_tab, Tab::Overview);

        app.select_tab(Tab::Templates);
        assert_eq!(app.current_tab, Tab::Templates);

        app.select_template(1);
        assert_eq!(app.selected_template, Some(1));
        assert!(!app.edit_mode);

        app.toggle_edit();
        assert!(app.edit_mode);

        app.select_template(2);
        assert_eq!(app.selected_template, Some(2));
        assert!(!app.edit_mode);
    }

    #[test]
    fn test_save_mutates_in_memory_record_only() {
        let mut app = App::new();
        app.select_template(1);
        app.toggle_edit();
        app.fields.set(FieldId::TemplateName, "Reminder - same day");
        app.fields
            .set(FieldId::TemplateBody, "See you today, {patientName}!");
        app.save_template_changes();

        assert!(!app.edit_mode);
        let saved = app.template_by_id(1).unwrap();
        assert_eq!(saved.name, "Reminder - same day");
        assert_eq!(saved.body, "See you today, {patientName}!");

        // A fresh session reseeds the originals
        let fresh = App::new();
        assert_eq!(fresh.template_by_id(1).unwrap().name, "Appointment Reminder - 24hr");
    }

    #[test]
    fn test_save_warns_on_undeclared_placeholder() {
        let mut app = App::new();
        app.select_template(1);
        app.toggle_edit();
        app.fields
            .set(FieldId::TemplateBody, "Hi {patientName}, ward {wardNumber}");
        app.save_template_changes();
        let (text, level) = app.status_text().unwrap();
        assert_eq!(level, StatusLevel::Warn);
        assert!(text.contains("wardNumber"));
    }

    #[test]
    fn test_save_requires_name_and_body() {
        let mut app = App::new();
        app.select_template(1);
        app.toggle_edit();
        app.fields.set(FieldId::TemplateName, "  ");
        app.save_template_changes();
        assert!(app.edit_mode);
        assert_eq!(app.template_by_id(1).unwrap().name, "Appointment Reminder - 24hr");
    }

    #[test]
    fn test_webhook_request_requires_url() {
        let mut app = App::new();
        app.request_webhook_test();
        assert!(!app.webhook_in_flight);
        assert!(app.take_webhook_request().is_none());
        let (_, level) = app.status_text().unwrap();
        assert_eq!(level, StatusLevel::Error);
    }

    #[test]
    fn test_webhook_request_queues_once() {
        let mut app = App::new();
        app.fields
            .set(FieldId::WebhookUrl, "https://hooks.example.com/catch/1");
        app.request_webhook_test();
        assert!(app.webhook_in_flight);
        assert_eq!(
            app.take_webhook_request().as_deref(),
            Some("https://hooks.example.com/catch/1")
        );

        // Second submit refused while in flight
        app.request_webhook_test();
        assert!(app.take_webhook_request().is_none());

        // In-flight flag clears on both outcomes
        app.apply_webhook_failed("request could not be delivered: dns".to_string());
        assert!(!app.webhook_in_flight);
        app.fields
            .set(FieldId::WebhookUrl, "https://hooks.example.com/catch/1");
        app.request_webhook_test();
        app.apply_webhook_sent("https://hooks.example.com/catch/1".to_string());
        assert!(!app.webhook_in_flight);
    }

    #[test]
    fn test_patient_search_filters_and_clears() {
        let mut app = App::new();
        app.fields.set(FieldId::Search, "chen");
        let filtered = app.filtered_patient_indices();
        assert_eq!(filtered.len(), 1);
        assert_eq!(app.patients[filtered[0]].name, "Michael Chen");

        app.fields.clear(FieldId::Search);
        assert_eq!(app.filtered_patient_indices().len(), 3);
    }

    #[test]
    fn test_search_clamps_selection() {
        let mut app = App::new();
        app.select_tab(Tab::Patients);
        app.selected_patient = 2;
        app.fields.set(FieldId::Search, "sarah");
        app.on_tick();
        assert_eq!(app.selected_patient, 0);
        assert_eq!(app.selected_patient_record().unwrap().name, "Sarah Johnson");
    }

    #[test]
    fn test_duplicate_selects_the_copy() {
        let mut app = App::new();
        app.select_template(2);
        app.duplicate_selected_template();
        assert_eq!(app.selected_template, Some(4));
        assert_eq!(app.templates.len(), 4);
        assert!(app
            .selected_template_record()
            .unwrap()
            .name
            .ends_with("(copy)"));
    }

    #[test]
    fn test_seeded_templates_declare_their_placeholders() {
        let app = App::new();
        for template in &app.templates {
            assert!(
                template.undeclared_placeholders().is_empty(),
                "template {} drifted from its variable list",
                template.id
            );
        }
    }

    #[test]
    fn test_refresh_drops_session_edits() {
        let mut app = App::new();
        app.select_template(1);
        app.toggle_edit();
        app.fields.set(FieldId::TemplateBody, "edited");
        app.save_template_changes();
        app.refresh();
        assert_eq!(app.selected_template, None);
        assert!(app.template_by_id(1).unwrap().body.starts_with("Hi {patientName}!"));
    }

    #[test]
    fn test_form_fields_semantics() {
        let mut fields = FormFields::default();
        assert!(fields.is_empty(FieldId::Search));
        fields.push(FieldId::Search, 'a');
        fields.push(FieldId::Search, 'b');
        assert_eq!(fields.get(FieldId::Search), "ab");
        fields.pop(FieldId::Search);
        assert_eq!(fields.get(FieldId::Search), "a");
        fields.set(FieldId::WebhookUrl, "https://x");
        assert!(!fields.is_empty(FieldId::WebhookUrl));
        fields.clear(FieldId::WebhookUrl);
        assert!(fields.is_empty(FieldId::WebhookUrl));
    }
}

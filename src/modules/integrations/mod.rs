//! Integration catalog, feature toggles and the settings form rows

use ratatui::style::Color;

/// Connection state of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationStatus {
    Connected,
    Active,
    Disconnected,
}

impl IntegrationStatus {
    pub fn title(&self) -> &'static str {
        match self {
            IntegrationStatus::Connected => "Connected",
            IntegrationStatus::Active => "Active",
            IntegrationStatus::Disconnected => "Disconnected",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            IntegrationStatus::Connected => Color::Green,
            IntegrationStatus::Active => Color::Blue,
            IntegrationStatus::Disconnected => Color::Red,
        }
    }
}

/// External service the product collaborates with. All entries are
/// descriptive; none of them is actually called from here except the
/// webhook endpoint.
#[derive(Debug, Clone)]
pub struct Integration {
    pub name: &'static str,
    pub description: &'static str,
    pub status: IntegrationStatus,
    pub features: [&'static str; 4],
}

pub fn catalog() -> Vec<Integration> {
    vec![
        Integration {
            name: "Zapier",
            description: "Automate workflows and connect with 6000+ apps",
            status: IntegrationStatus::Connected,
            features: ["SMS automation", "Email triggers", "Calendar sync", "CRM integration"],
        },
        Integration {
            name: "Twilio",
            description: "Send SMS and WhatsApp messages to patients",
            status: IntegrationStatus::Connected,
            features: ["SMS delivery", "WhatsApp Business", "Phone calls", "Delivery tracking"],
        },
        Integration {
            name: "OpenAI",
            description: "AI-powered message personalization and generation",
            status: IntegrationStatus::Disconnected,
            features: ["Message generation", "Tone customization", "Multi-language", "Smart templates"],
        },
        Integration {
            name: "HIPAA Compliance",
            description: "Secure patient data handling and encryption",
            status: IntegrationStatus::Active,
            features: ["Data encryption", "Access logs", "Audit trails", "Secure storage"],
        },
    ]
}

/// Feature switches on the settings form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleId {
    AutoTrigger,
    DeliveryReports,
    ErrorNotifications,
    AiOptimization,
    Personalization,
    MultiLanguage,
}

impl ToggleId {
    pub fn title(&self) -> &'static str {
        match self {
            ToggleId::AutoTrigger => "Auto-trigger reminders",
            ToggleId::DeliveryReports => "Send delivery reports",
            ToggleId::ErrorNotifications => "Error notifications",
            ToggleId::AiOptimization => "AI message optimization",
            ToggleId::Personalization => "Personalization",
            ToggleId::MultiLanguage => "Multi-language support",
        }
    }
}

#[derive(Debug, Clone)]
pub struct IntegrationToggles {
    pub auto_trigger: bool,
    pub delivery_reports: bool,
    pub error_notifications: bool,
    pub ai_optimization: bool,
    pub personalization: bool,
    pub multi_language: bool,
}

impl Default for IntegrationToggles {
    fn default() -> Self {
        // Workflow switches start on, AI switches start off
        Self {
            auto_trigger: true,
            delivery_reports: true,
            error_notifications: true,
            ai_optimization: false,
            personalization: false,
            multi_language: false,
        }
    }
}

impl IntegrationToggles {
    pub fn get(&self, id: ToggleId) -> bool {
        match id {
            ToggleId::AutoTrigger => self.auto_trigger,
            ToggleId::DeliveryReports => self.delivery_reports,
            ToggleId::ErrorNotifications => self.error_notifications,
            ToggleId::AiOptimization => self.ai_optimization,
            ToggleId::Personalization => self.personalization,
            ToggleId::MultiLanguage => self.multi_language,
        }
    }

    pub fn flip(&mut self, id: ToggleId) {
        match id {
            ToggleId::AutoTrigger => self.auto_trigger = !self.auto_trigger,
            ToggleId::DeliveryReports => self.delivery_reports = !self.delivery_reports,
            ToggleId::ErrorNotifications => self.error_notifications = !self.error_notifications,
            ToggleId::AiOptimization => self.ai_optimization = !self.ai_optimization,
            ToggleId::Personalization => self.personalization = !self.personalization,
            ToggleId::MultiLanguage => self.multi_language = !self.multi_language,
        }
    }
}

/// Rows of the settings form, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingRow {
    WebhookUrl,
    ApiKey,
    Toggle(ToggleId),
}

impl SettingRow {
    pub const ALL: [SettingRow; 8] = [
        SettingRow::WebhookUrl,
        SettingRow::ApiKey,
        SettingRow::Toggle(ToggleId::AutoTrigger),
        SettingRow::Toggle(ToggleId::DeliveryReports),
        SettingRow::Toggle(ToggleId::ErrorNotifications),
        SettingRow::Toggle(ToggleId::AiOptimization),
        SettingRow::Toggle(ToggleId::Personalization),
        SettingRow::Toggle(ToggleId::MultiLanguage),
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SettingRow::WebhookUrl => "Webhook URL",
            SettingRow::ApiKey => "OpenAI API key",
            SettingRow::Toggle(id) => id.title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_status() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.iter().any(|i| i.status == IntegrationStatus::Connected));
        assert!(catalog.iter().any(|i| i.status == IntegrationStatus::Active));
        assert!(catalog.iter().any(|i| i.status == IntegrationStatus::Disconnected));
    }

    #[test]
    fn test_toggle_flip_round_trip() {
        let mut toggles = IntegrationToggles::default();
        assert!(toggles.get(ToggleId::AutoTrigger));
        assert!(!toggles.get(ToggleId::Personalization));
        toggles.flip(ToggleId::Personalization);
        assert!(toggles.get(ToggleId::Personalization));
        toggles.flip(ToggleId::Personalization);
        assert!(!toggles.get(ToggleId::Personalization));
    }

    #[test]
    fn test_setting_rows_list_every_toggle_once() {
        let toggles = SettingRow::ALL
            .iter()
            .filter(|row| matches!(row, SettingRow::Toggle(_)))
            .count();
        assert_eq!(toggles, 6);
    }
}

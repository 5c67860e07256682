//! Patient records shown in the Patients tab

use ratatui::style::Color;
use serde::Serialize;

use super::template::Channel;

/// Status of the next appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApptStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl ApptStatus {
    pub fn title(&self) -> &'static str {
        match self {
            ApptStatus::Confirmed => "Confirmed",
            ApptStatus::Pending => "Pending",
            ApptStatus::Cancelled => "Cancelled",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            ApptStatus::Confirmed => Color::Green,
            ApptStatus::Pending => Color::Yellow,
            ApptStatus::Cancelled => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub next_appointment: String,
    pub status: ApptStatus,
    pub preferred_channel: Channel,
    pub last_reminder: String,
}

impl Patient {
    /// Case-insensitive substring match over name, email and phone
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
            || self.phone.to_lowercase().contains(&needle)
    }

    /// One-line contact summary for clipboard copy
    pub fn contact_line(&self) -> String {
        format!("{} <{}> {}", self.name, self.email, self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient() -> Patient {
        Patient {
            id: 1,
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            next_appointment: "2025-05-28 09:00".to_string(),
            status: ApptStatus::Confirmed,
            preferred_channel: Channel::Sms,
            last_reminder: "2025-05-25".to_string(),
        }
    }

    #[test]
    fn test_search_matches_name_email_phone() {
        let p = patient();
        assert!(p.matches_search("sarah"));
        assert!(p.matches_search("SARAH"));
        assert!(p.matches_search("sarah.j@email"));
        assert!(p.matches_search("555"));
        assert!(!p.matches_search("chen"));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(patient().matches_search(""));
        assert!(patient().matches_search("   "));
    }
}

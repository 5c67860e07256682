//! Message templates with `{placeholder}` variables

use ratatui::style::Color;
use serde::Serialize;

/// Delivery channel for a message template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Channel {
    Sms,
    WhatsApp,
    Email,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Sms, Channel::WhatsApp, Channel::Email];

    pub fn title(&self) -> &'static str {
        match self {
            Channel::Sms => "SMS",
            Channel::WhatsApp => "WhatsApp",
            Channel::Email => "Email",
        }
    }

    /// Badge glyph shown next to the channel name
    pub fn glyph(&self) -> &'static str {
        match self {
            Channel::Sms => "☎",
            Channel::WhatsApp => "✆",
            Channel::Email => "✉",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Channel::Sms => Color::Blue,
            Channel::WhatsApp => Color::Green,
            Channel::Email => Color::Magenta,
        }
    }

    pub fn parse(value: &str) -> Option<Channel> {
        match value.trim().to_lowercase().as_str() {
            "sms" => Some(Channel::Sms),
            "whatsapp" | "wa" => Some(Channel::WhatsApp),
            "email" | "mail" => Some(Channel::Email),
            _ => None,
        }
    }
}

/// A reusable message body with named placeholder variables
#[derive(Debug, Clone, Serialize)]
pub struct MessageTemplate {
    pub id: u32,
    pub name: String,
    pub channel: Channel,
    pub category: String,
    pub body: String,
    pub variables: Vec<String>,
    pub ai_optimized: bool,
}

impl MessageTemplate {
    /// Scan a body for `{placeholder}` tokens, in order of first appearance
    pub fn placeholders(body: &str) -> Vec<String> {
        let mut found = Vec::new();
        let mut rest = body;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            let token = &after[..close];
            if !token.is_empty()
                && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
                && !found.iter().any(|t| t == token)
            {
                found.push(token.to_string());
            }
            rest = &after[close + 1..];
        }
        found
    }

    /// Placeholders used in the body that are missing from the variable list.
    /// The seeded data keeps loading even when a body drifts; callers surface
    /// this as a warning, never a hard error.
    pub fn undeclared_placeholders(&self) -> Vec<String> {
        Self::placeholders(&self.body)
            .into_iter()
            .filter(|token| !self.variables.iter().any(|v| v == token))
            .collect()
    }

    /// First line of the body, truncated for list rows
    pub fn excerpt(&self, max: usize) -> String {
        let first = self.body.lines().next().unwrap_or_default();
        if first.chars().count() <= max {
            first.to_string()
        } else {
            let cut: String = first.chars().take(max.saturating_sub(1)).collect();
            format!("{cut}…")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(body: &str, variables: &[&str]) -> MessageTemplate {
        MessageTemplate {
            id: 1,
            name: "Test".to_string(),
            channel: Channel::Sms,
            category: "Reminder".to_string(),
            body: body.to_string(),
            variables: variables.iter().map(|v| v.to_string()).collect(),
            ai_optimized: false,
        }
    }

    #[test]
    fn test_placeholders_in_order() {
        let found =
            MessageTemplate::placeholders("Hi {patientName}, see Dr. {doctorName} at {time}.");
        assert_eq!(found, vec!["patientName", "doctorName", "time"]);
    }

    #[test]
    fn test_placeholders_dedup_and_reject_garbage() {
        let found = MessageTemplate::placeholders("{a} then {a} and {not valid} plus {b_2}");
        assert_eq!(found, vec!["a", "b_2"]);
    }

    #[test]
    fn test_placeholders_unclosed_brace() {
        assert!(MessageTemplate::placeholders("broken {token").is_empty());
    }

    #[test]
    fn test_undeclared_placeholders() {
        let tpl = template("Hi {patientName}, call {clinicPhone}", &["patientName"]);
        assert_eq!(tpl.undeclared_placeholders(), vec!["clinicPhone"]);

        let ok = template("Hi {patientName}", &["patientName"]);
        assert!(ok.undeclared_placeholders().is_empty());
    }

    #[test]
    fn test_channel_parse_total() {
        assert_eq!(Channel::parse("SMS"), Some(Channel::Sms));
        assert_eq!(Channel::parse("whatsapp"), Some(Channel::WhatsApp));
        assert_eq!(Channel::parse("Email"), Some(Channel::Email));
        assert_eq!(Channel::parse("fax"), None);
        for channel in Channel::ALL {
            assert_eq!(Channel::parse(channel.title()), Some(channel));
        }
    }

    #[test]
    fn test_excerpt_truncation() {
        let tpl = template("a long first line that keeps going\nsecond", &[]);
        let short = tpl.excerpt(10);
        assert!(short.chars().count() <= 10);
        assert!(short.ends_with('…'));
    }
}

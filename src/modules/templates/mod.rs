//! Template operations: duplication and the canned draft generator

use crate::domain::template::MessageTemplate;

/// Clone the template with `id` under a fresh id.
/// Returns the new id, or None when `id` does not exist.
pub fn duplicate(templates: &mut Vec<MessageTemplate>, id: u32) -> Option<u32> {
    let source = templates.iter().find(|t| t.id == id)?.clone();
    let next_id = templates.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    let mut copy = source;
    copy.id = next_id;
    copy.name = format!("{} (copy)", copy.name);
    templates.push(copy);
    Some(next_id)
}

/// Warning text for a template whose body uses placeholders missing from its
/// variable list, if any.
pub fn save_warning(template: &MessageTemplate) -> Option<String> {
    let undeclared = template.undeclared_placeholders();
    if undeclared.is_empty() {
        return None;
    }
    Some(format!(
        "Saved, but body uses undeclared variables: {}",
        undeclared.join(", ")
    ))
}

const KINDS: [&str; 4] = ["reminder", "followup", "confirmation", "cancellation"];
const TONES: [&str; 4] = ["professional", "friendly", "caring", "urgent"];

/// Produce a canned message body for a `<kind> <tone>` request.
///
/// This is a local generator seeded with fixed copy; it stands in for a
/// message-generation provider without calling one.
pub fn generate_draft(args: &str) -> Result<String, String> {
    let mut parts = args.split_whitespace();
    let kind = parts.next().unwrap_or("").to_lowercase();
    let tone = parts.next().unwrap_or("friendly").to_lowercase();

    if !KINDS.contains(&kind.as_str()) {
        return Err(format!("Usage: generate <{}> [tone]", KINDS.join("|")));
    }
    if !TONES.contains(&tone.as_str()) {
        return Err(format!("Unknown tone (one of: {})", TONES.join(", ")));
    }

    let opener = match tone.as_str() {
        "professional" => "Dear {patientName},",
        "friendly" => "Hi {patientName}!",
        "caring" => "Hello {patientName}, we hope you are doing well.",
        "urgent" => "{patientName}, please read this right away.",
        _ => unreachable!("tone checked above"),
    };

    let core = match kind.as_str() {
        "reminder" => {
            "This is a reminder about your appointment with Dr. {doctorName} at {appointmentTime}. Reply CONFIRM or call {clinicPhone} to reschedule."
        }
        "followup" => {
            "How are you feeling after your visit with Dr. {doctorName}? If anything feels off, please reach out to us at {clinicPhone}."
        }
        "confirmation" => {
            "Your appointment with Dr. {doctorName} is confirmed for {appointmentDate} at {appointmentTime}. Please arrive 15 minutes early."
        }
        "cancellation" => {
            "Your appointment on {appointmentDate} has been cancelled. Call {clinicPhone} to pick a new time."
        }
        _ => unreachable!("kind checked above"),
    };

    Ok(format!("{opener}\n\n{core}\n\n{{clinicName}} Team"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::Channel;

    fn seed() -> Vec<MessageTemplate> {
        vec![MessageTemplate {
            id: 1,
            name: "Appointment Reminder - 24hr".to_string(),
            channel: Channel::Sms,
            category: "Reminder".to_string(),
            body: "Hi {patientName}!".to_string(),
            variables: vec!["patientName".to_string()],
            ai_optimized: true,
        }]
    }

    #[test]
    fn test_duplicate_assigns_fresh_id_and_marks_name() {
        let mut templates = seed();
        let new_id = duplicate(&mut templates, 1).unwrap();
        assert_eq!(new_id, 2);
        assert_eq!(templates.len(), 2);
        let copy = templates.iter().find(|t| t.id == new_id).unwrap();
        assert_eq!(copy.name, "Appointment Reminder - 24hr (copy)");
        assert_eq!(copy.body, templates[0].body);
    }

    #[test]
    fn test_duplicate_unknown_id() {
        let mut templates = seed();
        assert!(duplicate(&mut templates, 99).is_none());
        assert_eq!(templates.len(), 1);
    }

    #[test]
    fn test_save_warning_lists_undeclared() {
        let mut templates = seed();
        templates[0].body = "Hi {patientName}, call {clinicPhone}".to_string();
        let warning = save_warning(&templates[0]).unwrap();
        assert!(warning.contains("clinicPhone"));
        templates[0].variables.push("clinicPhone".to_string());
        assert!(save_warning(&templates[0]).is_none());
    }

    #[test]
    fn test_generate_draft_known_combinations() {
        let body = generate_draft("reminder friendly").unwrap();
        assert!(body.contains("{patientName}"));
        assert!(body.contains("{appointmentTime}"));

        let body = generate_draft("confirmation professional").unwrap();
        assert!(body.starts_with("Dear {patientName},"));

        // Tone defaults to friendly
        assert!(generate_draft("followup").is_ok());
    }

    #[test]
    fn test_generate_draft_rejects_unknown() {
        assert!(generate_draft("").is_err());
        assert!(generate_draft("newsletter").is_err());
        assert!(generate_draft("reminder shouty").is_err());
    }
}

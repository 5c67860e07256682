//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Overview,
    Patients,
    Templates,
    Integrations,
    Analytics,

    // Template commands
    Select(u32),
    Edit,
    Save,
    Duplicate,
    Channel(Option<String>),
    Generate(Option<String>),

    // Patient commands
    Search(Option<String>),

    // Integration commands
    Webhook(Option<String>),
    ApiKey(Option<String>),
    Test,

    // Misc
    Export,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim().to_string());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "overview" | "home" => Command::Overview,
        "patients" | "pat" => Command::Patients,
        "templates" | "tpl" => Command::Templates,
        "integrations" | "int" => Command::Integrations,
        "analytics" | "ana" | "stats" => Command::Analytics,

        // Templates
        "select" | "sel" => {
            if let Some(id) = args.as_deref().and_then(|s| s.parse().ok()) {
                Command::Select(id)
            } else {
                Command::Unknown(input.to_string())
            }
        }
        "edit" => Command::Edit,
        "save" => Command::Save,
        "duplicate" | "dup" | "copy" => Command::Duplicate,
        "channel" | "chan" => Command::Channel(args),
        "generate" | "gen" => Command::Generate(args),

        // Patients
        "search" | "find" => Command::Search(args),

        // Integrations
        "webhook" | "hook" => Command::Webhook(args),
        "apikey" | "key" => Command::ApiKey(args),
        "test" => Command::Test,

        // Misc
        "export" | "exp" => Command::Export,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("overview"), Command::Overview);
        assert_eq!(parse_command("patients"), Command::Patients);
        assert_eq!(parse_command("tpl"), Command::Templates);
        assert_eq!(parse_command("integrations"), Command::Integrations);
        assert_eq!(parse_command("stats"), Command::Analytics);
    }

    #[test]
    fn test_parse_template_commands() {
        assert_eq!(parse_command("select 2"), Command::Select(2));
        assert_eq!(
            parse_command("select two"),
            Command::Unknown("select two".to_string())
        );
        assert_eq!(parse_command("edit"), Command::Edit);
        assert_eq!(parse_command("save"), Command::Save);
        assert_eq!(parse_command("dup"), Command::Duplicate);
        assert_eq!(
            parse_command("channel whatsapp"),
            Command::Channel(Some("whatsapp".to_string()))
        );
        assert_eq!(
            parse_command("generate reminder friendly"),
            Command::Generate(Some("reminder friendly".to_string()))
        );
    }

    #[test]
    fn test_parse_integration_commands() {
        assert_eq!(
            parse_command("webhook https://hooks.example.com/catch/1"),
            Command::Webhook(Some("https://hooks.example.com/catch/1".to_string()))
        );
        assert_eq!(parse_command("webhook"), Command::Webhook(None));
        assert_eq!(
            parse_command("apikey sk-test"),
            Command::ApiKey(Some("sk-test".to_string()))
        );
        assert_eq!(parse_command("test"), Command::Test);
    }

    #[test]
    fn test_parse_search() {
        assert_eq!(
            parse_command("search sarah"),
            Command::Search(Some("sarah".to_string()))
        );
        assert_eq!(parse_command("search"), Command::Search(None));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("notacommand"),
            Command::Unknown("notacommand".to_string())
        );
    }
}

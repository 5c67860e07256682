//! Export Module
//!
//! Provides CSV and JSON export for the dashboard data sets.
//!
//! - 'x' key triggers export based on the active tab
//! - Patients and weekly analytics → CSV
//! - Templates → JSON
//! - Files saved under the user data dir in `exports/`

mod csv_export;
mod json_export;

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::app::{App, Tab};
use crate::config;
use crate::core::{Action, NotifyLevel};

/// Get the export directory path, creating it if needed
fn get_export_dir() -> std::io::Result<PathBuf> {
    let export_dir = config::data_dir()
        .map(|dir| dir.join("exports"))
        .unwrap_or_else(|| PathBuf::from(".remind").join("exports"));
    fs::create_dir_all(&export_dir)?;
    Ok(export_dir)
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Export the active tab's data set
pub fn export_current_tab(app: &App) -> Action {
    match app.current_tab {
        Tab::Patients => export_patients(app),
        Tab::Templates => export_templates(app),
        Tab::Analytics => export_weekly_activity(app),
        Tab::Overview | Tab::Integrations => Action::Notify(
            "Nothing to export in this tab".to_string(),
            NotifyLevel::Warn,
        ),
    }
}

fn export_patients(app: &App) -> Action {
    if app.patients.is_empty() {
        return Action::Notify("No patients to export".to_string(), NotifyLevel::Warn);
    }

    let export_dir = match get_export_dir() {
        Ok(dir) => dir,
        Err(e) => {
            return Action::Notify(
                format!("Failed to create export directory: {}", e),
                NotifyLevel::Error,
            )
        }
    };

    let filename = generate_filename("patients", "csv");
    let path = export_dir.join(&filename);

    match csv_export::write_patients(&path, &app.patients) {
        Ok(count) => Action::Notify(
            format!("Exported {} patients to exports/{}", count, filename),
            NotifyLevel::Info,
        ),
        Err(e) => Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error),
    }
}

fn export_weekly_activity(app: &App) -> Action {
    if app.weekly.is_empty() {
        return Action::Notify("No activity data to export".to_string(), NotifyLevel::Warn);
    }

    let export_dir = match get_export_dir() {
        Ok(dir) => dir,
        Err(e) => {
            return Action::Notify(
                format!("Failed to create export directory: {}", e),
                NotifyLevel::Error,
            )
        }
    };

    let filename = generate_filename("weekly-activity", "csv");
    let path = export_dir.join(&filename);

    match csv_export::write_weekly_activity(&path, &app.weekly) {
        Ok(count) => Action::Notify(
            format!("Exported {} days to exports/{}", count, filename),
            NotifyLevel::Info,
        ),
        Err(e) => Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error),
    }
}

fn export_templates(app: &App) -> Action {
    if app.templates.is_empty() {
        return Action::Notify("No templates to export".to_string(), NotifyLevel::Warn);
    }

    let export_dir = match get_export_dir() {
        Ok(dir) => dir,
        Err(e) => {
            return Action::Notify(
                format!("Failed to create export directory: {}", e),
                NotifyLevel::Error,
            )
        }
    };

    let filename = generate_filename("templates", "json");
    let path = export_dir.join(&filename);

    match json_export::write_templates(&path, &app.templates) {
        Ok(count) => Action::Notify(
            format!("Exported {} templates to exports/{}", count, filename),
            NotifyLevel::Info,
        ),
        Err(e) => Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error),
    }
}

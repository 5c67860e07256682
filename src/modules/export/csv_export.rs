//! CSV Export
//!
//! Writes patient and analytics rows to CSV files.

use std::path::Path;

use crate::domain::analytics::DayActivity;
use crate::domain::patient::Patient;

/// Write patients to CSV file
pub fn write_patients(
    path: &Path,
    patients: &[Patient],
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "email",
        "phone",
        "next_appointment",
        "status",
        "preferred_channel",
        "last_reminder",
    ])?;

    for patient in patients {
        wtr.write_record([
            patient.id.to_string(),
            patient.name.clone(),
            patient.email.clone(),
            patient.phone.clone(),
            patient.next_appointment.clone(),
            patient.status.title().to_string(),
            patient.preferred_channel.title().to_string(),
            patient.last_reminder.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(patients.len())
}

/// Write weekly activity rows to CSV file
pub fn write_weekly_activity(
    path: &Path,
    week: &[DayActivity],
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["day", "sent", "delivered", "responses"])?;

    for day in week {
        wtr.write_record([
            day.day.to_string(),
            day.sent.to_string(),
            day.delivered.to_string(),
            day.responses.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(week.len())
}

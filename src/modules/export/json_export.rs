//! JSON Export
//!
//! Writes message templates, placeholder variables included, to a JSON file.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::domain::template::MessageTemplate;

/// Write templates to a pretty-printed JSON file
pub fn write_templates(
    path: &Path,
    templates: &[MessageTemplate],
) -> Result<usize, Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, templates)?;
    Ok(templates.len())
}

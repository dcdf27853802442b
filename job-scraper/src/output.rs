use std::{fs, fs::File, io::Write, path::Path};

use crate::types::{JobPosting, Result};

pub const COLUMNS: [&str; 5] = ["company", "position", "skills", "link", "source"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Csv,
        }
    }
}

/// Writes `jobs` to `path`, creating missing parent directories.
pub fn save(path: &Path, jobs: &[JobPosting]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let format = Format::from_path(path);
    log::info!("Writing {} jobs as {:?} to {}", jobs.len(), format, path.display());
    match format {
        Format::Csv => write_csv(file, jobs),
        Format::Json => write_json(file, jobs),
    }
}

pub fn write_csv<W: Write>(writer: W, jobs: &[JobPosting]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(COLUMNS)?;
    for job in jobs {
        csv_writer.serialize(job)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut writer: W, jobs: &[JobPosting]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, jobs)?;
    writer.flush()?;
    Ok(())
}

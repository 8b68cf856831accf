use super::types::FestivalData;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATA_FILE_NAME: &str = "festival_data.json";

/// Get the default data file path (./festival_data.json)
pub fn get_default_data_path() -> PathBuf {
    PathBuf::from(DATA_FILE_NAME)
}

/// Load festival data from a JSON file
///
/// A missing or blank file yields empty data. A file that exists but does not
/// parse is an error, so it never gets overwritten by an empty save.
pub fn load_festival_data(path: &Path) -> Result<FestivalData> {
    if !path.exists() {
        debug!("No data file at {}, starting empty", path.display());
        return Ok(FestivalData::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file at {}", path.display()))?;

    if content.trim().is_empty() {
        return Ok(FestivalData::new());
    }

    let data: FestivalData = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse data file at {}", path.display()))?;

    debug!(
        "Loaded {} participants, {} performances, {} scores from {}",
        data.participants.len(),
        data.performances.len(),
        data.scores.len(),
        path.display()
    );

    Ok(data)
}

/// Save festival data to a JSON file atomically
///
/// Output is indented with four spaces and keeps non-ASCII text as-is.
pub fn save_festival_data(path: &Path, data: &FestivalData) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory at {}", parent.display())
            })?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    let mut serializer =
        serde_json::Serializer::with_formatter(&mut file, PrettyFormatter::with_indent(b"    "));
    data.serialize(&mut serializer)
        .context("Failed to serialize festival data")?;

    file.commit().context("Failed to save festival data")?;

    debug!("Saved festival data to {}", path.display());
    Ok(())
}

// File: src/persistence.rs
use crate::error::Result;
use crate::scoring::ScoreLedger;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the ledger atomically: a temp file in the same directory, then a
/// rename over `path`.
pub fn save_ledger(ledger: &ScoreLedger, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, ledger)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn load_ledger(path: &Path) -> Result<ScoreLedger> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let ledger: ScoreLedger = bincode::deserialize_from(reader)?;
    Ok(ledger)
}

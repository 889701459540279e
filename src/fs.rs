use crate::exceptions::HivePrefixError;
use std::fs;
use std::io::{BufReader, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, HivePrefixError> {
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Atomically write JSON to a file using a temporary file + rename strategy.
pub fn atomic_write_json<T: serde::Serialize>(
    path: &Path,
    data: &T,
) -> Result<(), HivePrefixError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    // Same directory as the target so the rename never crosses filesystems
    let mut temp_file = NamedTempFile::new_in(dir)?;

    {
        let mut writer = std::io::BufWriter::new(&mut temp_file);
        serde_json::to_writer_pretty(&mut writer, data)?;
        writeln!(writer)?;
        writer.flush()?;
    }

    temp_file
        .persist(path)
        .map_err(|e| HivePrefixError::Io(e.error))?;
    Ok(())
}

/// Restricts a file to its owner. No-op off Unix.
pub fn set_owner_only(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(meta) = fs::metadata(path) {
            let mut perms = meta.permissions();
            perms.set_mode(0o600);
            let _ = fs::set_permissions(path, perms);
        }
    }
    #[cfg(not(unix))]
    let _ = path;
}

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::error::ExportError;

/// Write the rendered SQL to `path` through a sibling temporary file and a
/// rename, so a failed run never leaves a partially written artifact
/// behind.
pub fn write_sql(path: impl AsRef<Path>, sql: &str) -> Result<(), ExportError> {
    let path = path.as_ref();
    let staging = staging_path(path);

    fs::write(&staging, sql)?;
    if let Err(err) = fs::rename(&staging, path) {
        // rename across filesystems or onto a locked target: clean up the
        // staging file before reporting
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }

    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_os_string();
    staged.push(".tmp");
    PathBuf::from(staged)
}

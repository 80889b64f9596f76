//! Directory scanner for ROM collections.

use std::path::{Path, PathBuf};

/// Collect every regular file under a directory, recursively, sorted by
/// path. Subdirectories that cannot be read are logged and skipped so one
/// bad entry never stops the rest of the batch.
pub fn collect_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_into(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_into(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        if path.is_dir() {
            if let Err(e) = collect_into(&path, files) {
                log::warn!("skipping unreadable directory {}: {e}", path.display());
            }
        } else if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

//! Staged file replacement shared by the ledger snapshot and the config file.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

const TMP_SUFFIX: &str = "tmp";

/// Sibling staging path: `ledger.json` stages as `ledger.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Replaces `path` with `data` by writing a synced staging file and renaming
/// it into place. On failure the staging file is removed and `path` keeps its
/// previous contents.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let parent = parent_dir(path);
    fs::create_dir_all(parent)?;

    let tmp = tmp_path(path);
    if let Err(err) = write_staged(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    // The new contents are already in place; a failed directory sync is not a failed write.
    if let Err(err) = sync_dir(parent) {
        debug!(path = %parent.display(), error = %err, "directory sync skipped");
    }
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn write_staged(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

/// Flushes the directory entry created by the rename.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

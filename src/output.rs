use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TimelineError};

pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|err| TimelineError::io(dir, err))
}

/// Pretty JSON with four-space indentation. Non-ASCII text is left as UTF-8
/// rather than escaped.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Returns the size of `path`, or `PostWriteIntegrity` if it is empty.
pub fn verify_written(path: &Path) -> Result<u64> {
    let len = fs::metadata(path)
        .map_err(|err| TimelineError::io(path, err))?
        .len();

    if len == 0 {
        return Err(TimelineError::PostWriteIntegrity(path.to_path_buf()));
    }

    Ok(len)
}

fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Writes `value` to `path` through a sibling temp file which is synced and
/// checked before being renamed over the destination. On any failure the
/// previous contents of `path` are left alone.
pub fn save<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<u64> {
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }

    let payload = to_pretty_json(value).map_err(|err| {
        TimelineError::io(path, std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })?;

    let tmp = temp_path(path);
    debug!("Writing {} bytes to {}", payload.len(), tmp.display());

    if let Err(err) = write_synced(&tmp, &payload) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }

    commit(&tmp, path)
}

/// Checks the synced temp file and renames it over `path`. An empty temp
/// file is discarded and reported against `path`.
fn commit(tmp: &Path, path: &Path) -> Result<u64> {
    let len = match verify_written(tmp) {
        Ok(len) => len,
        Err(err) => {
            let _ = fs::remove_file(tmp);
            return Err(match err {
                TimelineError::PostWriteIntegrity(_) => {
                    TimelineError::PostWriteIntegrity(path.to_path_buf())
                }
                other => other,
            });
        }
    };

    fs::rename(tmp, path).map_err(|err| TimelineError::io(path, err))?;

    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => sync_dir(dir)?,
        _ => {}
    }

    Ok(len)
}

// Persists the rename itself.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<()> {
    File::open(dir)
        .and_then(|handle| handle.sync_all())
        .map_err(|err| TimelineError::io(dir, err))
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}

fn write_synced(path: &Path, payload: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|err| TimelineError::io(path, err))?;
    file.write_all(payload)
        .and_then(|_| file.flush())
        .and_then(|_| file.sync_all())
        .map_err(|err| TimelineError::io(path, err))
}

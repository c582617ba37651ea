use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::errors::StatsError;
use crate::model::StatsRecord;

pub fn write_record(path: &Path, record: &StatsRecord) -> Result<PathBuf, StatsError> {
    let data = record.encode()?;
    write_atomic(path.to_path_buf(), &data).map_err(|err| StatsError::io(path, err))
}

/// Write to a sibling temp file, fsync, then rename over the target.
fn write_atomic(path: PathBuf, data: &[u8]) -> io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = temp_path(&path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(tmp, &path)?;
    Ok(path)
}

/// `<file name>.tmp` next to the target, so it never equals the target and
/// stores sharing a stem keep separate temp files.
fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "stats path has no file name")
    })?;
    let mut tmp = name.to_os_string();
    tmp.push(".tmp");
    Ok(path.with_file_name(tmp))
}

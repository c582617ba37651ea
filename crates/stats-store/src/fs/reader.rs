use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::errors::StatsError;
use crate::model::StatsRecord;

pub fn read_record(path: &Path) -> Result<StatsRecord, StatsError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => StatsError::NotFound(path.to_path_buf()),
        _ => StatsError::io(path, err),
    })?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| StatsError::io(path, err))?;
    StatsRecord::decode(&buf)
}

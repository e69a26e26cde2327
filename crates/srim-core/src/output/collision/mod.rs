//! Random-access reader for the collision log (`COLLISON.txt`).
//!
//! The log can be larger than memory. Opening it scans the file once in fixed
//! buffers for the per-ion record marker; each `record(i)` then reads only the
//! bytes between two consecutive markers.

mod index;
mod model;
mod record;

pub use index::find_all_buffered;
pub use model::{Cascade, CascadeStep, Collision, CollisionRecord, IonSummary};
pub use record::{SEPARATOR, parse_record};

use crate::domain::{OutputKind, SrimError, SrimResult};
use crate::output::parser::decode_latin1;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Marker that opens every per-ion record.
pub const RECORD_MARKER: &[u8] = b"  Ion    Energy";
pub const DEFAULT_BUFFER_SIZE: usize = 4096;

#[derive(Debug)]
pub struct CollisionLog {
    path: PathBuf,
    /// Seek and read happen under one lock so shared readers never interleave.
    file: Mutex<File>,
    /// Marker offsets followed by the file length.
    index: Vec<u64>,
}

impl CollisionLog {
    pub fn open(path: impl AsRef<Path>) -> SrimResult<Self> {
        Self::open_with_buffer_size(path, DEFAULT_BUFFER_SIZE)
    }

    pub fn from_dir(directory: impl AsRef<Path>) -> SrimResult<Self> {
        Self::open(directory.as_ref().join(OutputKind::Collision.file_name()))
    }

    pub fn open_with_buffer_size(path: impl AsRef<Path>, buffer_size: usize) -> SrimResult<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::open(&path).map_err(|error| io_error(&path, error))?;

        let mut index = find_all_buffered(&mut file, RECORD_MARKER, buffer_size)
            .map_err(|error| io_error(&path, error))?;
        let length = file
            .seek(SeekFrom::End(0))
            .map_err(|error| io_error(&path, error))?;
        index.push(length);

        tracing::debug!(
            path = %path.display(),
            records = index.len() - 1,
            bytes = length,
            "indexed collision log"
        );
        Ok(Self {
            path,
            file: Mutex::new(file),
            index,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record start offsets plus the end-of-file offset.
    pub fn index(&self) -> &[u64] {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn record(&self, index: usize) -> SrimResult<CollisionRecord> {
        parse_record(&self.record_text(index)?)
    }

    /// Decoded text of one record, without parsing it.
    pub fn record_text(&self, index: usize) -> SrimResult<String> {
        if index >= self.len() {
            return Err(SrimError::out_of_bounds(
                "OUTPUT.COLLISION_INDEX",
                format!(
                    "collision record {index} out of bounds for {} records",
                    self.len()
                ),
            ));
        }
        let start = self.index[index];
        let end = self.index[index + 1];

        let mut bytes = vec![0_u8; (end - start) as usize];
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.seek(SeekFrom::Start(start))
            .and_then(|_| file.read_exact(&mut bytes))
            .map_err(|error| io_error(&self.path, error))?;
        Ok(decode_latin1(&bytes))
    }

    pub fn iter(&self) -> impl Iterator<Item = SrimResult<CollisionRecord>> + '_ {
        (0..self.len()).map(|index| self.record(index))
    }
}

fn io_error(path: &Path, error: std::io::Error) -> SrimError {
    SrimError::io_system(
        "IO.COLLISION_READ",
        format!("failed to read collision log '{}': {error}", path.display()),
    )
}

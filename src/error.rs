use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a file into a line sequence.
///
/// Decoding failures are kept apart from I/O failures: the former are a
/// reportable outcome of the comparison, the latter abort the run.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Decode { path: PathBuf },
}

impl ReadError {
    pub fn is_decode(&self) -> bool {
        matches!(self, ReadError::Decode { .. })
    }
}

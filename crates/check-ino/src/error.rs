//! Listing error types.

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for a completed listing.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for every failure kind.
pub const EXIT_FAILURE: i32 = 1;

/// Errors that can terminate a directory listing.
#[derive(Debug, Error)]
pub enum ListError {
    /// Wrong number of command-line arguments.
    #[error("usage: {program} <dir>")]
    Usage {
        /// Program name used in the usage hint.
        program: String,
    },

    /// The target could not be opened as a directory.
    #[error("opendir {}: {source}", path.display())]
    Open {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The OS reported an error while reading an open directory stream.
    #[error("readdir {}: {source}", path.display())]
    Read {
        /// The directory being read.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a listing line to the output stream failed.
    #[error("write: {source}")]
    Write {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl ListError {
    /// Create an Open error from a rustix errno.
    ///
    /// # Arguments
    /// * `path` - Path that failed to open
    /// * `errno` - The OS error number
    pub fn open(path: impl Into<PathBuf>, errno: rustix::io::Errno) -> Self {
        Self::Open {
            path: path.into(),
            source: std::io::Error::from(errno),
        }
    }

    /// Create a Read error from a rustix errno.
    ///
    /// # Arguments
    /// * `path` - Directory being read
    /// * `errno` - The OS error number
    pub fn read(path: impl Into<PathBuf>, errno: rustix::io::Errno) -> Self {
        Self::Read {
            path: path.into(),
            source: std::io::Error::from(errno),
        }
    }

    /// Process exit code for this error.
    ///
    /// There is no distinct code per failure kind.
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

impl From<std::io::Error> for ListError {
    fn from(source: std::io::Error) -> Self {
        Self::Write { source }
    }
}

//! Raw directory streams.
//!
//! `std::fs::read_dir` hides the `.` and `..` entries, so the stream is read
//! through `rustix` instead, which hands back every entry the kernel returns
//! in the order it returns them.

use std::ffi::{CStr, CString, OsStr};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use rustix::fs::{Dir, Mode, OFlags, CWD};

use crate::error::ListError;

/// A single entry read from a directory stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Raw entry name as stored by the filesystem.
    name: CString,
    /// Inode number reported alongside the name.
    inode: u64,
}

impl DirectoryEntry {
    /// Create an entry from a raw name and inode number.
    ///
    /// # Arguments
    /// * `name` - Entry name bytes (no interior NUL)
    /// * `inode` - Inode number
    pub fn new(name: CString, inode: u64) -> Self {
        Self { name, inode }
    }

    /// Entry name as raw bytes, without the trailing NUL.
    pub fn name_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// Entry name as an `OsStr`. Not guaranteed to be valid UTF-8.
    pub fn name(&self) -> &OsStr {
        OsStr::from_bytes(self.name.as_bytes())
    }

    /// Entry name as a C string.
    pub fn name_cstr(&self) -> &CStr {
        &self.name
    }

    /// Inode number reported by the filesystem.
    pub fn inode(&self) -> u64 {
        self.inode
    }
}

/// An open directory stream.
///
/// The stream is closed when the handle is dropped, which covers exhaustion,
/// early return and mid-stream errors alike.
pub struct DirectoryHandle {
    path: PathBuf,
    dir: Dir,
    done: bool,
}

impl DirectoryHandle {
    /// Open a path as a directory stream.
    ///
    /// # Arguments
    /// * `path` - Directory to open
    ///
    /// # Errors
    /// `ListError::Open` if the path is missing, is not a directory, or
    /// cannot be read.
    pub fn open(path: &Path) -> Result<Self, ListError> {
        let flags: OFlags = OFlags::RDONLY | OFlags::DIRECTORY | OFlags::CLOEXEC;
        let fd: rustix::fd::OwnedFd = rustix::fs::openat(CWD, path, flags, Mode::empty())
            .map_err(|e: rustix::io::Errno| ListError::open(path, e))?;
        let dir: Dir = Dir::new(fd).map_err(|e: rustix::io::Errno| ListError::open(path, e))?;

        tracing::debug!("opened directory {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            dir,
            done: false,
        })
    }

    /// Path this handle was opened with.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the next entry from the stream.
    ///
    /// # Returns
    /// `None` once the stream is exhausted or after an error has been returned.
    pub fn next_entry(&mut self) -> Option<Result<DirectoryEntry, ListError>> {
        if self.done {
            return None;
        }

        match self.dir.read() {
            Some(Ok(entry)) => {
                let entry: DirectoryEntry =
                    DirectoryEntry::new(entry.file_name().to_owned(), entry.ino());
                tracing::trace!("entry {:?} -> {:x}", entry.name(), entry.inode());
                Some(Ok(entry))
            }
            Some(Err(e)) => {
                self.done = true;
                Some(Err(ListError::read(&self.path, e)))
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl Iterator for DirectoryHandle {
    type Item = Result<DirectoryEntry, ListError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry()
    }
}

impl std::iter::FusedIterator for DirectoryHandle {}

impl Drop for DirectoryHandle {
    fn drop(&mut self) {
        tracing::debug!("closing directory {}", self.path.display());
    }
}

impl std::fmt::Debug for DirectoryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryHandle")
            .field("path", &self.path)
            .field("done", &self.done)
            .finish()
    }
}

//! Directory handles must not outlive a run.
//!
//! Kept in its own test binary with a single test so no other test thread
//! opens descriptors while the count is taken.

#![cfg(target_os = "linux")]

use std::ffi::OsString;
use std::path::PathBuf;

use check_ino::{list_directory, run, ListError};
use tempfile::TempDir;

fn open_fd_count() -> usize {
    std::fs::read_dir("/proc/self/fd").unwrap().count()
}

#[test]
fn test_no_descriptor_leaks() {
    let dir: TempDir = TempDir::new().unwrap();
    for name in ["one", "two", "three"] {
        std::fs::File::create(dir.path().join(name)).unwrap();
    }
    let missing: PathBuf = dir.path().join("missing");

    let before: usize = open_fd_count();

    // Successful listing.
    let mut stdout: Vec<u8> = Vec::new();
    let mut stderr: Vec<u8> = Vec::new();
    let args: [OsString; 2] = ["check_ino".into(), dir.path().into()];
    assert_eq!(run(args, &mut stdout, &mut stderr), 0);
    assert_eq!(open_fd_count(), before);

    // Open failure.
    let args: [OsString; 2] = ["check_ino".into(), missing.into_os_string()];
    assert_eq!(run(args, &mut stdout, &mut stderr), 1);
    assert_eq!(open_fd_count(), before);

    // Write failure part way through the stream.
    let mut sink: FailingWriter = FailingWriter;
    let err: ListError = list_directory(dir.path(), &mut sink).unwrap_err();
    assert!(matches!(err, ListError::Write { .. }));
    assert_eq!(open_fd_count(), before);
}

/// Writer that rejects every write.
struct FailingWriter;

impl std::io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

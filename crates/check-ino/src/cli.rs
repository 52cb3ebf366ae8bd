//! Command-line entry point.

use std::ffi::OsString;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::dir::{DirectoryEntry, DirectoryHandle};
use crate::error::{ListError, EXIT_SUCCESS};
use crate::format::write_entry;

/// Program name used in the usage hint when `argv[0]` is missing.
pub const DEFAULT_PROGRAM_NAME: &str = "check_ino";

/// Stream every entry of a directory to `out`, one line each.
///
/// The directory handle is released before this returns, whatever the outcome.
///
/// # Arguments
/// * `path` - Directory to list
/// * `out` - Destination for listing lines
///
/// # Returns
/// Number of entries written.
///
/// # Errors
/// - `ListError::Open` if the directory cannot be opened
/// - `ListError::Read` if the OS reports an error mid-stream
/// - `ListError::Write` if writing to `out` fails
pub fn list_directory<W: Write + ?Sized>(path: &Path, out: &mut W) -> Result<u64, ListError> {
    let handle: DirectoryHandle = DirectoryHandle::open(path)?;
    let mut count: u64 = 0;

    for entry in handle {
        let entry: DirectoryEntry = entry?;
        write_entry(out, &entry)?;
        count += 1;
    }

    tracing::debug!("listed {} entries from {}", count, path.display());
    Ok(count)
}

/// Parse arguments and list the requested directory.
///
/// # Arguments
/// * `args` - Full argument vector, program name first
/// * `stdout` - Stream for listing lines
/// * `stderr` - Stream for the usage hint or error diagnostic
///
/// # Returns
/// Process exit code: `0` on success, `1` on any failure.
pub fn run<I, O, E>(args: I, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    match try_run(args, stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            // Nothing useful can be done if stderr itself is gone.
            let _ = writeln!(stderr, "{}", e);
            let _ = stderr.flush();
            e.exit_code()
        }
    }
}

fn try_run<I, O>(args: I, stdout: &mut O) -> Result<(), ListError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
    O: Write + ?Sized,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let dir: PathBuf = parse_args(&args)?;

    let mut out: BufWriter<&mut O> = BufWriter::new(stdout);
    list_directory(&dir, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Extract the single directory argument.
///
/// # Errors
/// `ListError::Usage` unless exactly one argument follows the program name.
fn parse_args(args: &[OsString]) -> Result<PathBuf, ListError> {
    match args {
        [_, dir] => Ok(PathBuf::from(dir)),
        _ => {
            let program: String = args
                .first()
                .map(|p: &OsString| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());
            Err(ListError::Usage { program })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_argument() {
        let args: Vec<OsString> = vec!["check_ino".into(), "/tmp".into()];
        assert_eq!(parse_args(&args).unwrap(), PathBuf::from("/tmp"));
    }

    #[test]
    fn test_parse_no_arguments() {
        let args: Vec<OsString> = vec!["/usr/bin/check_ino".into()];
        match parse_args(&args).unwrap_err() {
            ListError::Usage { program } => assert_eq!(program, "/usr/bin/check_ino"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_too_many_arguments() {
        let args: Vec<OsString> = vec!["check_ino".into(), "a".into(), "b".into()];
        assert!(matches!(parse_args(&args), Err(ListError::Usage { .. })));
    }

    #[test]
    fn test_parse_empty_argv_uses_default_name() {
        let args: Vec<OsString> = Vec::new();
        match parse_args(&args).unwrap_err() {
            ListError::Usage { program } => assert_eq!(program, DEFAULT_PROGRAM_NAME),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_usage_writes_only_stderr() {
        let mut stdout: Vec<u8> = Vec::new();
        let mut stderr: Vec<u8> = Vec::new();

        let code: i32 = run(["prog"], &mut stdout, &mut stderr);

        assert_eq!(code, 1);
        assert!(stdout.is_empty());
        assert_eq!(String::from_utf8(stderr).unwrap(), "usage: prog <dir>\n");
    }
}

//! Directory inode inspection.
//!
//! Lists the entries of a single directory together with the raw inode
//! number the filesystem reports for each, in the order the OS returns them.
//! Intended for checking inode reuse, hard links and filesystem-specific
//! inode encoding.
//!
//! Output is one line per entry:
//!
//! ```text
//!                  foo -> 123
//! ```
//!
//! The name is right-justified to 20 bytes and the inode is lowercase hex.

mod cli;
mod dir;
mod error;
pub mod format;

pub use cli::{list_directory, run, DEFAULT_PROGRAM_NAME};
pub use dir::{DirectoryEntry, DirectoryHandle};
pub use error::{ListError, EXIT_FAILURE, EXIT_SUCCESS};
pub use format::{format_entry, write_entry, NAME_COLUMN_WIDTH, SEPARATOR};

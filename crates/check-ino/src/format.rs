//! Listing line format.
//!
//! Each entry renders as the name right-justified to [`NAME_COLUMN_WIDTH`],
//! then [`SEPARATOR`], then the inode in lowercase hex with no prefix.
//! Existing tooling parses this layout, so it must not drift.

use std::io::Write;

use crate::dir::DirectoryEntry;

/// Minimum width of the right-justified name column, in bytes.
pub const NAME_COLUMN_WIDTH: usize = 20;

/// Text between the name column and the inode.
pub const SEPARATOR: &str = " -> ";

/// Write one listing line for an entry.
///
/// Padding is counted in bytes, not characters, and names longer than the
/// column are written in full.
///
/// # Arguments
/// * `out` - Destination stream
/// * `entry` - Entry to render
pub fn write_entry<W: Write + ?Sized>(out: &mut W, entry: &DirectoryEntry) -> std::io::Result<()> {
    let name: &[u8] = entry.name_bytes();
    let padding: usize = NAME_COLUMN_WIDTH.saturating_sub(name.len());

    write!(out, "{:padding$}", "", padding = padding)?;
    out.write_all(name)?;
    writeln!(out, "{}{:x}", SEPARATOR, entry.inode())
}

/// Render one listing line into a byte vector.
///
/// # Arguments
/// * `entry` - Entry to render
///
/// # Returns
/// The full line including the trailing newline.
pub fn format_entry(entry: &DirectoryEntry) -> Vec<u8> {
    // Up to 16 hex digits plus the newline.
    let mut line: Vec<u8> = Vec::with_capacity(NAME_COLUMN_WIDTH + SEPARATOR.len() + 17);
    // Writing into a Vec cannot fail.
    let _ = write_entry(&mut line, entry);
    line
}

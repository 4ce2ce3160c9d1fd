//! Disk adapter - block-granular file I/O.
//!
//! Stateless utilities over the filesystem, used by the buffer manager and
//! never aware of it. Each logical database file is one physical file laid
//! out as consecutive `PAGE_SIZE` blocks:
//!
//! ```text
//! ┌─────────┬─────────┬─────────┬─────────┬─────────┐
//! │ Block 0 │ Block 1 │ Block 2 │  ...    │ Block N │
//! │ (4KB)   │ (4KB)   │ (4KB)   │         │ (4KB)   │
//! └─────────┴─────────┴─────────┴─────────┴─────────┘
//! Offset:  0      4096     8192    ...    N×4096
//! ```
//!
//! # Durability
//! [`write_block`] fsyncs after each write. This is conservative and fine
//! for a cache layer whose only durability story is explicit write-back.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::common::config::PAGE_SIZE;
use crate::common::{BlockId, Error, Result};
use crate::storage::Page;

/// Check whether a file exists.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Size of a file in bytes.
///
/// # Errors
/// Returns `Error::NotFound` if the path cannot be stat'ed.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| not_found_or_io(path, e))?;
    Ok(metadata.len())
}

/// Number of whole blocks in a file: `floor(file_size / PAGE_SIZE)`.
///
/// # Errors
/// Returns `Error::NotFound` if the file does not exist.
pub fn block_count(path: impl AsRef<Path>) -> Result<u64> {
    Ok(file_size(path)? / PAGE_SIZE as u64)
}

/// Create an empty file, truncating any existing content.
///
/// # Errors
/// Returns an I/O error if the file cannot be created.
pub fn create_empty_file(path: impl AsRef<Path>) -> Result<()> {
    File::create(path)?;
    Ok(())
}

/// Read one block into `page`.
///
/// Bytes beyond the current end of file read back as zeros, so fetching a
/// block that has not been written yet yields a fresh zeroed page rather
/// than an error. This matches the append-grow usage of callers that fetch
/// block `n == block_count` to extend a file.
///
/// # Errors
/// Returns `Error::NotFound` if the file does not exist.
pub fn read_block(path: impl AsRef<Path>, block_id: BlockId, page: &mut Page) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| not_found_or_io(path, e))?;

    page.reset();
    file.seek(SeekFrom::Start(block_id.byte_offset()))?;

    // Read until the page is full or EOF; the zeroed tail stands in for
    // bytes the file does not have yet.
    let mut filled = 0;
    while filled < PAGE_SIZE {
        match file.read(&mut page.as_mut_slice()[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Write one block from `page`, extending the file if necessary.
///
/// The write is followed by `fsync()`.
///
/// # Errors
/// Returns `Error::NotFound` if the file does not exist — a flush must
/// never silently recreate a file that was removed out from under it.
pub fn write_block(path: impl AsRef<Path>, block_id: BlockId, page: &Page) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| not_found_or_io(path, e))?;

    file.seek(SeekFrom::Start(block_id.byte_offset()))?;
    file.write_all(page.as_slice())?;
    file.sync_all()?; // fsync for durability

    Ok(())
}

/// Remove a file from the filesystem.
///
/// Removing a file that is already absent is not an error.
pub fn delete_file(path: impl AsRef<Path>) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Map `ErrorKind::NotFound` to the crate's `NotFound` with the offending
/// path; everything else stays an I/O failure.
fn not_found_or_io(path: &Path, err: std::io::Error) -> Error {
    if err.kind() == ErrorKind::NotFound {
        Error::NotFound(path.to_path_buf())
    } else {
        Error::Io(err)
    }
}

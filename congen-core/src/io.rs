//! Text file access that transparently handles gzip compression.
//!
//! Only available with the `std` feature. Compression is chosen from the file
//! name: paths ending in `.gz` are decoded as (possibly multi-member) gzip,
//! everything else is read as-is.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::{CongenError, Result};

/// Whether `path` names a gzip-compressed file (by its `.gz` suffix).
pub fn is_gzip_path(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .to_str()
        .map_or(false, |s| s.ends_with(".gz"))
}

/// Open `path` for buffered reading, decompressing gzip when the name ends in `.gz`.
pub fn open_text(path: impl AsRef<Path>) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        CongenError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;

    if is_gzip_path(path) {
        debug!("opening {} as gzip", path.display());
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        debug!("opening {} as plain text", path.display());
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Open `path` with [`open_text`] and hand the reader to `f`.
///
/// The file is closed when `f` returns; its result is passed through.
pub fn with_text_file<T, F>(path: impl AsRef<Path>, f: F) -> Result<T>
where
    F: FnOnce(&mut dyn BufRead) -> Result<T>,
{
    let mut reader = open_text(path)?;
    f(reader.as_mut())
}

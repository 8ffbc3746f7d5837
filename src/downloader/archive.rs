//! Archive-mode zip packaging.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{Error, Result};

/// Build a compressed zip archive in memory
///
/// Entry names are the artifact names exactly, so extracting the archive
/// round-trips the original listing. Building in memory keeps a half-written
/// archive from ever touching disk: the caller writes the returned bytes in
/// one shot only after every fetch succeeded.
///
/// `archive_path` is carried for error context only.
pub(crate) fn build_zip(archive_path: &Path, entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, content) in entries {
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| Error::Archive {
                path: archive_path.to_path_buf(),
                reason: format!("failed to add entry {name:?}: {e}"),
            })?;
        writer.write_all(content).map_err(|e| Error::Archive {
            path: archive_path.to_path_buf(),
            reason: format!("failed to write entry {name:?}: {e}"),
        })?;
    }

    let cursor = writer.finish().map_err(|e| Error::Archive {
        path: archive_path.to_path_buf(),
        reason: format!("failed to finalize archive: {e}"),
    })?;

    Ok(cursor.into_inner())
}

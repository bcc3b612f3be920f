//! Package writer seam
//!
//! Builders produce trees; a `PackageWriter` turns a tree into a ZIP-based
//! container on disk. The concrete writers live next to their formats
//! (`word::DocxPackageWriter`, `excel::XlsxPackageWriter`); anything else that
//! implements the trait (an in-memory recorder in tests, say) can stand in.

use crate::error::ReportResult;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Serializes a tree of type `T` into a container file.
///
/// The tree is moved in: once handed over, nothing else holds or mutates it.
/// Implementations must leave either a complete file or no new file at
/// `path`.
pub trait PackageWriter<T> {
    fn write_package(&self, tree: T, path: &Path) -> ReportResult<()>;
}

/// Write `bytes` to `path` all-or-nothing.
///
/// The data goes to a temporary file in the destination directory first and
/// is renamed over `path` only after a successful flush. On error the
/// temporary file is dropped (and deleted) and `path` is left untouched.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> ReportResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    debug!(path = %path.display(), bytes = bytes.len(), "package written");
    Ok(())
}

//! Local layout of downloaded bulletins: `<root>/<category>/<href>`.
//!
//! The existence of a file at its derived path is the only record that it has
//! been fetched.

use crate::catalog::Category;
use crate::error::FetchError;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Local path for a bulletin href. The href is joined verbatim (not normalized),
/// so `./` components and any subdirectories it names are kept.
pub fn local_path(root: &Path, category: &Category, href: &str) -> PathBuf {
    root.join(category.name).join(href)
}

/// True if a file (or anything else) already sits at `path`.
pub fn is_present(path: &Path) -> bool {
    path.exists()
}

/// Creates missing parent directories of `path`.
pub fn ensure_parent_dirs(path: &Path) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| FetchError::filesystem(parent, e))?;
    }
    Ok(())
}

/// Creates (or truncates) the file at `path`, creating parent directories first.
pub fn create_file(path: &Path) -> Result<File, FetchError> {
    ensure_parent_dirs(path)?;
    File::options()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| FetchError::filesystem(path, e))
}

use crate::category::Category;
use crate::error::ScanError;
use crate::format::{UNKNOWN_MODIFIED, format_modified};
use crate::types::Entry;
use colored::Colorize;
use std::ffi::OsStr;
use std::fs::{self, Metadata};
use std::path::Path;
use walkdir::WalkDir;

/// List the immediate children of `path`, directories first, then by name.
///
/// # Errors
///
/// Returns a [`ScanError`] when `path` is missing, unreadable or not a
/// directory. Metadata failures on individual children are not errors.
pub fn scan_dir(path: impl AsRef<Path>) -> Result<Vec<Entry>, ScanError> {
    let root = path.as_ref();

    let root_meta = fs::metadata(root).map_err(|e| ScanError::from_io(&e, root))?;
    if !root_meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let mut entries = Vec::new();
    for item in WalkDir::new(root).min_depth(1).max_depth(1) {
        match item {
            Ok(child) => entries.push(build_entry(child.path(), child.file_name())),
            Err(err) if err.depth() == 0 => return Err(ScanError::from_walk(&err, root)),
            Err(err) => log::warn!("Skipping unreadable entry in {}: {err}", root.display()),
        }
    }

    sort_entries(&mut entries);
    log::debug!("Scanned {} entries in {}", entries.len(), root.display());
    Ok(entries)
}

/// Like [`scan_dir`], but reports failures on stderr and returns no entries.
#[must_use]
pub fn scan(path: impl AsRef<Path>) -> Vec<Entry> {
    match scan_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            Vec::new()
        }
    }
}

fn build_entry(path: &Path, file_name: &OsStr) -> Entry {
    let name = file_name.to_string_lossy().to_string();

    // Follows symlinks: a dangling link ends up as a file with no size.
    let metadata = match fs::metadata(path) {
        Ok(m) => Some(m),
        Err(e) => {
            log::debug!("Cannot stat {}: {e}", path.display());
            None
        }
    };

    let is_directory = metadata.as_ref().is_some_and(Metadata::is_dir);
    let size = metadata
        .as_ref()
        .filter(|m| m.is_file())
        .map(Metadata::len);
    let modified = metadata
        .as_ref()
        .and_then(|m| m.modified().ok())
        .map_or_else(|| UNKNOWN_MODIFIED.to_string(), format_modified);
    let category = Category::from_name(&name);

    Entry {
        name,
        path: path.to_path_buf(),
        is_directory,
        size,
        modified,
        category,
    }
}

// Stable, so equal keys keep enumeration order.
fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.name.cmp(&b.name))
    });
}

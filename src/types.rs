use crate::category::Category;
use std::path::PathBuf;

/// One immediate child of a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    /// Only set for regular files whose metadata could be read.
    pub size: Option<u64>,
    /// `YYYY-MM-DD HH:MM:SS` in local time, or `"unknown"`.
    pub modified: String,
    pub category: Category,
}

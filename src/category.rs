use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// Broad classification of a directory entry, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Category {
    Images,
    Videos,
    Documents,
    Code,
    Other,
}

// Extensions are stored lowercase and without the leading dot.
const EXTENSION_TABLE: [(Category, &[&str]); 4] = [
    (Category::Images, &["jpg", "png", "gif", "svg"]),
    (Category::Videos, &["mp4", "webm", "mov"]),
    (Category::Documents, &["pdf", "doc", "docx"]),
    (Category::Code, &["py", "js", "ts", "java", "cpp"]),
];

impl Category {
    /// All categories in display order, `Other` last.
    pub const ALL: [Category; 5] = [
        Category::Images,
        Category::Videos,
        Category::Documents,
        Category::Code,
        Category::Other,
    ];

    /// Classify a base name by its (case-insensitive) extension.
    ///
    /// Dot-files like `.bashrc` have no extension and land in `Other`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let Some(ext) = Path::new(name).extension() else {
            return Category::Other;
        };
        let ext = ext.to_string_lossy().to_lowercase();

        EXTENSION_TABLE
            .iter()
            .find(|(_, exts)| exts.contains(&ext.as_str()))
            .map_or(Category::Other, |(category, _)| *category)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Videos => "videos",
            Category::Documents => "documents",
            Category::Code => "code",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

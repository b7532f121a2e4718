use crate::category::Category;
use crate::format::format_size;
use crate::types::Entry;
use comfy_table::{Attribute, Cell, Table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: Category,
    pub count: usize,
    pub total_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    pub directories: usize,
    pub files: usize,
    /// Sum over entries with a known size.
    pub total_bytes: u64,
    /// In `Category::ALL` order; empty categories are left out.
    pub rows: Vec<CategoryRow>,
}

#[must_use]
pub fn calculate_summary(entries: &[Entry]) -> ListingSummary {
    let directories = entries.iter().filter(|e| e.is_directory).count();
    let total_bytes = entries.iter().filter_map(|e| e.size).sum();

    let rows = Category::ALL
        .iter()
        .filter_map(|&category| {
            let (count, total_bytes) = entries
                .iter()
                .filter(|e| e.category == category)
                .fold((0, 0u64), |(n, bytes), e| {
                    (n + 1, bytes + e.size.unwrap_or(0))
                });
            (count > 0).then_some(CategoryRow {
                category,
                count,
                total_bytes,
            })
        })
        .collect();

    ListingSummary {
        directories,
        files: entries.len() - directories,
        total_bytes,
        rows,
    }
}

pub fn print_summary(summary: &ListingSummary) {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Category", "Entries", "Size"]);

    for row in &summary.rows {
        table.add_row(vec![
            Cell::new(row.category),
            Cell::new(row.count),
            Cell::new(format_size(Some(row.total_bytes))),
        ]);
    }

    table.add_row(vec![
        Cell::new("TOTAL").add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} dirs, {} files",
            summary.directories, summary.files
        ))
        .add_attribute(Attribute::Bold),
        Cell::new(format_size(Some(summary.total_bytes))).add_attribute(Attribute::Bold),
    ]);

    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_entry(name: &str, is_directory: bool, size: Option<u64>) -> Entry {
        Entry {
            name: name.to_string(),
            path: PathBuf::from("/files").join(name),
            is_directory,
            size,
            modified: "2024-07-29 10:00:00".to_string(),
            category: Category::from_name(name),
        }
    }

    #[test]
    fn test_calculate_summary() {
        let entries = vec![
            make_entry("sub", true, None),
            make_entry("a.py", false, Some(2048)),
            make_entry("b.js", false, Some(100)),
            make_entry("c.png", false, Some(500)),
            make_entry("broken.gif", false, None),
        ];

        let summary = calculate_summary(&entries);
        assert_eq!(summary.directories, 1);
        assert_eq!(summary.files, 4);
        assert_eq!(summary.total_bytes, 2648);

        assert_eq!(
            summary.rows,
            vec![
                CategoryRow {
                    category: Category::Images,
                    count: 2,
                    total_bytes: 500,
                },
                CategoryRow {
                    category: Category::Code,
                    count: 2,
                    total_bytes: 2148,
                },
                CategoryRow {
                    category: Category::Other,
                    count: 1,
                    total_bytes: 0,
                },
            ]
        );
    }

    #[test]
    fn test_calculate_summary_empty() {
        let summary = calculate_summary(&[]);
        assert_eq!(summary.directories, 0);
        assert_eq!(summary.files, 0);
        assert_eq!(summary.total_bytes, 0);
        assert!(summary.rows.is_empty());
    }
}

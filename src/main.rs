use clap::Parser;
use colored::Colorize;
use comfy_table::{Cell, Color, Table};
use dir_lister::category::Category;
use dir_lister::format::format_size;
use dir_lister::scanner;
use dir_lister::stats;
use dir_lister::types::Entry;

#[derive(Parser, Debug)]
#[command(version, about = "List a directory with sizes, dates and file categories", long_about = None)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: String,

    /// Render entries as a table
    #[arg(long, short = 't')]
    table: bool,

    /// Print per-category totals after the listing
    #[arg(long, short = 's')]
    summary: bool,

    /// Only show entries of this category
    #[arg(long, short = 'c', value_enum)]
    category: Option<Category>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut entries = match scanner::scan_dir(&args.path) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            std::process::exit(1);
        }
    };

    if let Some(category) = args.category {
        entries.retain(|e| e.category == category);
    }

    println!("{}", format!("=== Directory Listing: {} ===", args.path).cyan());

    if entries.is_empty() {
        println!("(empty directory)");
    } else if args.table {
        print_table(&entries, !args.no_color);
    } else {
        for entry in &entries {
            let line = format_line(entry);
            if entry.is_directory {
                println!("{}", line.blue().bold());
            } else {
                println!("{line}");
            }
        }
    }

    if args.summary {
        println!("\n{}", "=== Summary ===".cyan());
        stats::print_summary(&stats::calculate_summary(&entries));
    }
}

fn format_line(entry: &Entry) -> String {
    let icon = if entry.is_directory { "📁" } else { "📄" };
    format!(
        "{icon} {:<30} {:>10} {}",
        entry.name,
        format_size(entry.size),
        entry.modified
    )
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Images => Color::Magenta,
        Category::Videos => Color::Red,
        Category::Documents => Color::Yellow,
        Category::Code => Color::Green,
        Category::Other => Color::White,
    }
}

fn print_table(entries: &[Entry], color: bool) {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
    table.set_header(vec!["Name", "Category", "Size", "Modified"]);

    for entry in entries {
        let name = if entry.is_directory {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };

        let mut name_cell = Cell::new(name);
        let mut category_cell = Cell::new(entry.category);
        if color {
            if entry.is_directory {
                name_cell = name_cell.fg(Color::Blue);
            }
            category_cell = category_cell.fg(category_color(entry.category));
        }

        table.add_row(vec![
            name_cell,
            category_cell,
            Cell::new(format_size(entry.size)),
            Cell::new(&entry.modified),
        ]);
    }

    println!("{table}");
}

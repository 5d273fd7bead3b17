use anyhow::Result;
use std::env;
use std::path::PathBuf;

// Use library instead of local modules
use feedback_console::{category_counts, FeedbackFile, FeedbackStore, Filter, Summary};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "stats" {
        // Stats mode (works without the TUI feature)
        run_stats(store_path(args.get(2)))?;
    } else {
        // UI mode (default)
        run_ui_mode(store_path(args.get(1)))?;
    }

    Ok(())
}

/// Store location: positional path argument, or the platform default
fn store_path(arg: Option<&String>) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(FeedbackFile::default_path)
}

fn run_stats(path: PathBuf) -> Result<()> {
    let store = FeedbackStore::open(FeedbackFile::new(&path));

    println!("📊 Customer Feedback - Summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Store: {}", path.display());
    println!("Entries: {}", store.len());

    let summary = Summary::compute(store.entries(), Filter::All);
    println!("Average rating: {}", summary.average_label());

    println!("\nRatings distribution:");
    for (i, count) in summary.histogram.iter().enumerate() {
        println!("  {} ★  {:>4}  {}", i + 1, count, "█".repeat(*count as usize));
    }

    println!("\nBy category:");
    for (category, count) in category_counts(store.entries()) {
        println!("  {:<8} {:>4}", category.label(), count);
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(path: PathBuf) -> Result<()> {
    use feedback_console::ui;

    println!("🖥️  Loading Customer Feedback Console...\n");

    let store = FeedbackStore::open(FeedbackFile::new(&path));
    println!("✓ Loaded {} entries from {}", store.len(), path.display());
    println!("Starting UI... (Press Esc to quit)\n");

    let mut app = ui::App::new(store);
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_path: PathBuf) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or print the summary: feedback-console stats");
    std::process::exit(1);
}

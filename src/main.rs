// ABOUTME: Main entry point for the deckgen program.
// ABOUTME: Renders the course deck into per-module and combined ODP files.

use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory for the generated .odp files
    #[arg(default_value = "slides")]
    output_dir: PathBuf,
}

fn run(out_dir: &Path) -> deckgen::Result<()> {
    let slides = deckgen::course_slides();

    deckgen::utils::ensure_directory_exists(out_dir)?;

    // One artifact per module, in first-seen order
    let modules = deckgen::group_by_module(&slides);
    for (module, module_slides) in &modules {
        let out_path = out_dir.join(format!("{}.odp", module));
        deckgen::render_deck(module_slides, &out_path)?;
    }

    // Full combined deck
    let combined_path = out_dir.join(deckgen::COMBINED_DECK_NAME);
    deckgen::render_deck(&slides, &combined_path)?;

    println!(
        "\nDone. {} module files + 1 combined deck in '{}/'",
        modules.len(),
        out_dir.display()
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli.output_dir) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod config;
mod editor;
mod output;
mod session;

use clap::Parser;
use elomatic_core::{
    BulkEdit, ElomaticError, FileStore, ItemStore, RatingConfig, SortMethod, EXPORT_FILE_NAME,
    INITIAL_RATING,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::ElomaticConfig;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "elomatic", version, about = "Rank your own list by picking winners, two items at a time")]
struct Cli {
    /// Path to config file (default: ~/.config/elomatic/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the item list (default: ~/.local/share/elomatic)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Elo sensitivity (k-factor). Default: 32.
    #[arg(long, global = true)]
    k_factor: Option<f64>,

    /// Log what the core does to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show all items with their scores
    List {
        /// Ordering: "score", "alpha" or "compares"
        #[arg(long)]
        sort: Option<String>,

        /// Output JSON instead of table
        #[arg(long)]
        json: bool,
    },
    /// Add one item
    Add {
        /// Item title
        title: String,
    },
    /// Delete an item by the Id shown in `list`
    Delete {
        id: usize,
    },
    /// Reset every score to 1500 and every comparison count to 0
    Reset {
        /// Don't ask for confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Compare items two at a time
    Rank {
        /// Stop after this many recorded picks
        #[arg(long)]
        rounds: Option<usize>,
    },
    /// Edit every title at once in $EDITOR, one per line
    Edit,
    /// Replace the list with a text file, one title per line. Matching titles keep their scores.
    Import {
        file: PathBuf,
    },
    /// Write all titles to a text file, one per line
    Export {
        /// Output path (default: elomatic_data.txt)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Create a default config file at ~/.config/elomatic/config.toml
    Init,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "elomatic_core=debug,elomatic=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse_sort(value: Option<&str>, fallback: Option<SortMethod>) -> SortMethod {
    match value {
        Some("score") => SortMethod::Score,
        Some("alpha") => SortMethod::Alpha,
        Some("compares") => SortMethod::Compares,
        Some(other) => bail(format!("Unknown sort \"{other}\". Use \"score\", \"alpha\" or \"compares\".")),
        None => fallback.unwrap_or_default(),
    }
}

fn open_store(data_dir: &Path, rating: RatingConfig) -> ItemStore<FileStore> {
    ItemStore::open(FileStore::new(data_dir), rating)
        .unwrap_or_else(|e| bail(format!("Failed to load items from {}: {e}", data_dir.display())))
}

/// Ask a yes/no question on stdin. Anything but y/yes is a no.
fn confirm(question: &str) -> bool {
    print!("{question} [y/N] ");
    let _ = io::stdout().flush();
    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Init = cli.command {
        let path = config::create_default_config();
        println!("Created config at {}", path.display());
        println!("Edit it to set your data directory, k-factor, etc.");
        return;
    }

    // Load config file, merge with CLI args (CLI wins)
    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    let cfg: ElomaticConfig = config::load_config(&config_path);

    let data_dir = cli.data_dir.clone()
        .or(cfg.data_dir)
        .unwrap_or_else(config::default_data_dir);
    let k_factor = cli.k_factor.unwrap_or(cfg.rating.k_factor);
    if !(k_factor > 0.0 && k_factor.is_finite()) {
        bail("--k-factor must be a positive number");
    }

    let mut store = open_store(&data_dir, RatingConfig { k_factor });

    match cli.command {
        Commands::List { sort, json } => {
            let method = parse_sort(sort.as_deref(), cfg.sort);
            let view = store.sorted(method);
            if json {
                output::print_json(&view);
            } else {
                output::print_table(&view);
            }
        }
        Commands::Add { title } => match store.add(&title) {
            Ok(id) => println!("Added \"{}\" (id {id})", title.trim()),
            Err(e) => bail(e),
        },
        Commands::Delete { id } => match store.delete(id) {
            Ok(item) => println!("Deleted \"{}\"", item.title()),
            Err(e) => bail(e),
        },
        Commands::Reset { yes } => {
            if !yes && !confirm(&format!("Reset all {} scores to {INITIAL_RATING}?", store.len())) {
                println!("Nothing changed.");
                return;
            }
            store.reset_all().unwrap_or_else(|e| bail(e));
            println!("All scores have been reset to {INITIAL_RATING}");
        }
        Commands::Rank { rounds } => run_rank(&mut store, rounds),
        Commands::Edit => run_edit(&mut store, &data_dir),
        Commands::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .unwrap_or_else(|e| bail(format!("Failed to read {}: {e}", file.display())));
            match store.reconcile_from_text(&content) {
                Ok(count) => println!("Imported {count} items"),
                Err(ElomaticError::EmptyInput) => {
                    bail(format!("No valid items found in {}; list left unchanged", file.display()))
                }
                Err(e) => bail(e),
            }
        }
        Commands::Export { output } => {
            if store.is_empty() {
                eprintln!("Warning: No items to export");
                return;
            }
            let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            std::fs::write(&path, store.export_text())
                .unwrap_or_else(|e| bail(format!("Failed to write {}: {e}", path.display())));
            println!("Exported {} items to {}", store.len(), path.display());
        }
        Commands::Init => unreachable!("handled before the store is opened"),
    }
}

fn run_rank(store: &mut ItemStore<FileStore>, rounds: Option<usize>) {
    if store.len() < 2 {
        bail("You need at least 2 items to start ranking!");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match session::run_session(store, stdin.lock(), &mut stdout, rounds) {
        Ok(summary) => println!(
            "\n{} comparisons recorded, {} skipped",
            summary.recorded, summary.skipped,
        ),
        Err(e) => bail(e),
    }
}

fn run_edit(store: &mut ItemStore<FileStore>, data_dir: &Path) {
    let edit = BulkEdit::begin(store);

    std::fs::create_dir_all(data_dir)
        .unwrap_or_else(|e| bail(format!("Failed to create directory {}: {e}", data_dir.display())));
    let edited = editor::edit_text(&editor::editor_command(), data_dir, edit.original_text())
        .unwrap_or_else(|e| bail(format!("{e}; nothing saved")));

    if !edit.has_unsaved_changes(&edited) {
        println!("No changes.");
        return;
    }

    match edit.save(store, &edited) {
        Ok(count) => println!("Changes saved successfully! {count} items"),
        Err(ElomaticError::EmptyInput) => bail("Edited list is empty; nothing saved"),
        Err(e) => bail(e),
    }
}

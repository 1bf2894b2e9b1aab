//! CLI frontend for the Quadruple Goddess divination system.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use qg_reading::ReadingConfig;

#[derive(Parser)]
#[command(
    name = "qg",
    about = "Quadruple Goddess: I Ching, geomancy, tarot, and Jafr in one oracle",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory for reading history and saved files
    #[arg(long, global = true, default_value = "readings")]
    data_dir: PathBuf,

    /// Directory with optional correspondence table overrides
    #[arg(long, global = true, default_value = "data")]
    tables_dir: PathBuf,

    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast an I Ching hexagram
    Cast {
        /// Casting method: coins, yarrow, random (default: coins)
        #[arg(short, long)]
        method: Option<String>,
    },

    /// Show a planetary or generated magic square
    Square {
        /// Planet name (default: saturn)
        planet: Option<String>,

        /// Generate a square of this order instead (3-9)
        #[arg(long, conflicts_with = "planet")]
        size: Option<usize>,

        /// Also save the square as text in the data directory
        #[arg(long)]
        save: bool,
    },

    /// Perform a full four-system reading
    Reading {
        /// The question to ask
        query: Vec<String>,

        /// Casting method: coins, yarrow, random (default: coins)
        #[arg(short, long)]
        method: Option<String>,

        /// Depth: standard, detailed, comprehensive (default: standard)
        #[arg(short, long)]
        depth: Option<String>,

        /// Starting perspective: geomancy, iching, tarot, jafr, balanced
        #[arg(short, long, default_value = "balanced")]
        perspective: String,

        /// Do not save the reading or record it in history
        #[arg(long)]
        no_save: bool,

        /// Also write the reading as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Draw a geomantic figure
    Geomancy,

    /// Draw a tarot card
    Tarot,

    /// Draw a figure and build its Jafr talisman
    Jafr,

    /// Show the current planetary hour and a day's schedule
    Hours {
        /// Date to schedule (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Browse past readings
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Export the reading history
    Export {
        /// Output format: json, text, csv
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a correspondence table
    Reference {
        /// Table: iching, geomancy, tarot, jafr, planets
        topic: String,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List recent readings
    List {
        /// How many to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Search readings by keyword
    Search {
        /// Keyword, matched case-insensitively
        keyword: String,
    },

    /// Show one reading in full
    Show {
        /// Reading id
        id: u32,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = ReadingConfig::default()
        .with_data_dir(cli.data_dir)
        .with_tables_dir(cli.tables_dir);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = match cli.command {
        Commands::Cast { method } => commands::cast::run(&config, method.as_deref()),
        Commands::Square { planet, size, save } => {
            commands::square::run(&config, planet.as_deref(), size, save)
        }
        Commands::Reading {
            query,
            method,
            depth,
            perspective,
            no_save,
            csv,
        } => commands::reading::run(
            &config,
            &query.join(" "),
            method.as_deref(),
            depth.as_deref(),
            &perspective,
            !no_save,
            csv.as_deref(),
        ),
        Commands::Geomancy => commands::geomancy::run(&config),
        Commands::Tarot => commands::tarot::run(&config),
        Commands::Jafr => commands::jafr::run(&config),
        Commands::Hours { date } => commands::hours::run(date.as_deref()),
        Commands::History { action } => match action {
            None => commands::history::list(&config, 10),
            Some(HistoryAction::List { count }) => commands::history::list(&config, count),
            Some(HistoryAction::Search { keyword }) => commands::history::search(&config, &keyword),
            Some(HistoryAction::Show { id }) => commands::history::show(&config, id),
        },
        Commands::Export { format, output } => {
            commands::export::run(&config, &format, output.as_deref())
        }
        Commands::Reference { topic } => commands::reference::run(&config, &topic),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

//! aop-owl CLI: compile AOP tables into per-pathway Turtle ontologies.
//!
//! Usage:
//!   aop-owl convert [--config path] [--output dir] [--aop N]... [--ordering table-order|chain] [--json]
//!   aop-owl pairs --out file [--config path] [--aop N]...
//!   aop-owl show-config [--config path]

use aop_owl::{AopId, BatchRunner, Config, OrderingStrategy, Tables, TermPairReport};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "aop-owl",
    version,
    about = "Compile Adverse Outcome Pathway tables into OWL ontologies"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert AOPs to Turtle files and write the run log
    Convert {
        /// Path to YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory (overrides config)
        #[arg(long)]
        output: Option<PathBuf>,
        /// AOP to convert; repeatable (overrides config)
        #[arg(long = "aop")]
        aops: Vec<AopId>,
        /// Event ordering strategy (overrides config)
        #[arg(long, value_enum)]
        ordering: Option<Ordering>,
        /// Print the batch summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write every classified term pair to a CSV file
    Pairs {
        /// Path to YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
        /// CSV file to write
        #[arg(long, required = true)]
        out: PathBuf,
        /// AOP to include; repeatable (overrides config)
        #[arg(long = "aop")]
        aops: Vec<AopId>,
    },
    /// Print the effective configuration
    ShowConfig {
        /// Path to YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Ordering {
    TableOrder,
    Chain,
}

impl From<Ordering> for OrderingStrategy {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::TableOrder => OrderingStrategy::TableOrder,
            Ordering::Chain => OrderingStrategy::Chain,
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config, String> {
    Config::load(path).map_err(|e| format!("Failed to load config: {}", e))
}

fn load_tables(config: &Config) -> Result<Tables, String> {
    Tables::load(
        &config.tables.event_components,
        &config.tables.key_events,
        &config.tables.relationships,
    )
    .map_err(|e| format!("Failed to load tables: {}", e))
}

fn cmd_convert(mut config: Config, output: Option<PathBuf>, aops: Vec<AopId>, ordering: Option<Ordering>, json: bool) -> i32 {
    if let Some(output) = output {
        config.output.directory = output;
    }
    if !aops.is_empty() {
        config.aops = aops;
    }
    if let Some(ordering) = ordering {
        config.ordering = ordering.into();
    }

    let tables = match load_tables(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let summary = match BatchRunner::new(&config).run(&tables) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else {
        println!("{}", summary.results_line());
    }
    0
}

fn cmd_pairs(mut config: Config, out: &Path, aops: Vec<AopId>) -> i32 {
    if !aops.is_empty() {
        config.aops = aops;
    }
    let tables = match load_tables(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let runner = BatchRunner::new(&config);
    let mut report = TermPairReport::new();
    for aop in runner.selected_aops(&tables) {
        let input = tables.pathway(aop);
        match runner.assemble(&input) {
            Ok(pathway) => report.extend(&pathway, &input),
            Err(e) => warn!(aop = %aop, error = %e, "skipping pathway"),
        }
    }

    match report.write_to_path(out) {
        Ok(()) => {
            println!("Wrote {} term pairs to {}", report.len(), out.display());
            0
        }
        Err(e) => {
            eprintln!("Error: cannot write '{}': {}", out.display(), e);
            1
        }
    }
}

fn cmd_show_config(config: &Config) -> i32 {
    match config.to_yaml() {
        Ok(text) => {
            print!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config_path = match &cli.command {
        Commands::Convert { config, .. } | Commands::Pairs { config, .. } | Commands::ShowConfig { config } => {
            config.clone()
        }
    };
    let config = match load_config(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Convert {
            output,
            aops,
            ordering,
            json,
            ..
        } => cmd_convert(config, output, aops, ordering, json),
        Commands::Pairs { out, aops, .. } => cmd_pairs(config, &out, aops),
        Commands::ShowConfig { .. } => cmd_show_config(&config),
    };
    std::process::exit(code);
}

//! CLI for running timing sweeps.
//!
//! Usage:
//!   algo-times list
//!   algo-times sort --algorithm merge_sort --min 100 --max 1000 --incr 100 --perms 50 -o merge.txt
//!   algo-times search --method binary --generator uniform --sorted --min 1000 --max 10000 \
//!       --incr 1000 --times 1 -o bin.txt
//!   algo-times show merge.txt

use std::path::PathBuf;
use std::process::ExitCode;

use algo_times::error::AlgoError;
use algo_times::registry::build_registry;
use algo_times::search::Order;
use algo_times::tui;
use algo_times::utils::{
    generate_search_times, generate_sorting_times, make_rng, read_time_table, PinStrategy,
    SearchSweep, SortSweep, TimingConfig,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algo-times", version, about = "Time classic sorting and searching algorithms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available algorithms, search methods and key generators
    List,
    /// Sweep a sorting algorithm over permutation sizes
    Sort {
        /// Sorting algorithm name (see `list`)
        #[arg(short, long)]
        algorithm: String,
        /// Permutations sorted at each size
        #[arg(long, default_value_t = 100)]
        perms: usize,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Sweep a search method over dictionary sizes
    Search {
        /// Search method name (see `list`)
        #[arg(short, long)]
        method: String,
        /// Key generator name (see `list`)
        #[arg(short, long, default_value = "uniform")]
        generator: String,
        /// Keep the dictionary sorted on insertion
        #[arg(long)]
        sorted: bool,
        /// Keys searched per stored element
        #[arg(long, default_value_t = 1)]
        times: usize,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Print a time table written by a previous run
    Show {
        file: PathBuf,
    },
}

#[derive(Args)]
struct SweepArgs {
    /// Smallest input size
    #[arg(long)]
    min: usize,
    /// Largest input size
    #[arg(long)]
    max: usize,
    /// Size increment between rows
    #[arg(long, default_value_t = 1)]
    incr: usize,
    /// Output table file
    #[arg(short, long)]
    output: PathBuf,
    /// Random seed for reproducible runs (default: time-based)
    #[arg(long)]
    seed: Option<u64>,
    /// Do not pin the thread to a CPU core while timing
    #[arg(long)]
    no_pin: bool,
}

impl SweepArgs {
    fn timing_config(&self) -> TimingConfig {
        TimingConfig {
            pin_strategy: if self.no_pin {
                PinStrategy::Unpinned
            } else {
                PinStrategy::Global
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("algo_times=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    let registry = build_registry();

    match command {
        Command::List => {
            tui::print_available_algorithms(&registry);
        }
        Command::Sort {
            algorithm,
            perms,
            sweep,
        } => {
            let method = registry.find_sorter(&algorithm).ok_or_else(|| {
                format!(
                    "Algorithm '{}' not found. Available: {:?}",
                    algorithm,
                    registry.sorter_names()
                )
            })?;

            let config = sweep.timing_config();
            let mut rng = make_rng(sweep.seed);
            let plan = SortSweep {
                num_min: sweep.min,
                num_max: sweep.max,
                incr: sweep.incr,
                n_perms: perms,
            };

            tui::print_header();
            let records = generate_sorting_times(method, &sweep.output, &plan, &mut rng, &config)
                .map_err(describe)?;
            tui::print_title_box(&format!("{} - {}", method.name(), method.description()));
            tui::print_time_table(&records);
            println!("  Table written to: {}", sweep.output.display());
        }
        Command::Search {
            method,
            generator,
            sorted,
            times,
            sweep,
        } => {
            let searcher = registry.find_searcher(&method).ok_or_else(|| {
                format!(
                    "Search method '{}' not found. Available: {:?}",
                    method,
                    registry.searcher_names()
                )
            })?;
            let keys = registry.find_generator(&generator).ok_or_else(|| {
                format!(
                    "Key generator '{}' not found. Available: {:?}",
                    generator,
                    registry.generator_names()
                )
            })?;
            if searcher.requires_sorted() && !sorted {
                return Err(format!("'{}' needs a sorted dictionary, pass --sorted", method));
            }

            let config = sweep.timing_config();
            let mut rng = make_rng(sweep.seed);
            let plan = SearchSweep {
                num_min: sweep.min,
                num_max: sweep.max,
                incr: sweep.incr,
                n_times: times,
                order: if sorted { Order::Sorted } else { Order::NotSorted },
            };

            tui::print_header();
            let records =
                generate_search_times(searcher, keys, &sweep.output, &plan, &mut rng, &config)
                    .map_err(describe)?;
            tui::print_title_box(&format!("{} search, {} keys", searcher.name(), keys.name()));
            tui::print_time_table(&records);
            println!("  Table written to: {}", sweep.output.display());
        }
        Command::Show { file } => {
            let records = read_time_table(&file).map_err(describe)?;
            tui::print_title_box(&file.display().to_string());
            tui::print_time_table(&records);
        }
    }
    Ok(())
}

fn describe(err: AlgoError) -> String {
    match err {
        AlgoError::NotFound { key } => format!(
            "search missed key {}; every generated key must be stored in the dictionary",
            key
        ),
        other => other.to_string(),
    }
}

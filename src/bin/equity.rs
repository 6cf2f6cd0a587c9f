use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use poker_equity::config::EquityConfig;
use poker_equity::core::{EquityError, Hand, parse_cards};
use poker_equity::holdem::{EquityCalculator, HandDist};
use poker_equity::table::{self, HandRankTable, TableBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "equity")]
#[command(about = "Heads up holdem equity from a perfect hash rank table")]
struct Cli {
    /// Rank table to load. Defaults to $HAND_RANKS_PATH or HandRanks.dat
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,

    /// The table file covers only part of the deck. Full deck files from
    /// `build-table` load without this
    #[arg(short, long, global = true)]
    generated: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Equity of two hole cards against one random hand
    Equity {
        /// Hole cards, e.g. AhKh
        hole: String,
        /// Known board cards, e.g. Ks7d2c
        #[arg(short, long, default_value = "")]
        board: String,
        /// Monte carlo trials, 0 for exhaustive. Defaults to $EQUITY_TRIALS
        #[arg(short = 'n', long)]
        trials: Option<usize>,
        /// Worker threads. Defaults to $EQUITY_WORKERS or the cpu count
        #[arg(short, long)]
        workers: Option<usize>,
    },
    /// Chance an unseen hand is in a class like AKs
    Odds {
        /// Hand class, e.g. QQ, AKs, T9o
        dist: String,
        /// Cards already seen
        #[arg(short, long, default_value = "")]
        visible: String,
    },
    /// Rank five to seven cards
    Rank {
        /// Cards, e.g. AhKhQhJhTh
        cards: String,
    },
    /// Generate a rank table and save it
    BuildTable {
        /// Where to write the table
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), EquityError> {
    let mut config = EquityConfig::from_env()?;
    if let Some(path) = cli.table {
        config.table_path = path;
    }

    match cli.command {
        Commands::Equity {
            hole,
            board,
            trials,
            workers,
        } => {
            let hole = Hand::new_from_str(&hole)?;
            let board = parse_cards(&board)?;
            let trials = trials.unwrap_or(config.trials);
            let workers = workers.unwrap_or(config.workers);

            let calc = EquityCalculator::new(load_table(&config, cli.generated)?);
            let equity = calc.simulate_parallel(&hole, &board, trials, workers)?;
            println!("{:.4}", equity);
        }
        Commands::Odds { dist, visible } => {
            let dist = HandDist::new_from_str(&dist)?;
            let visible = parse_cards(&visible)?;
            println!("{:.6}", dist.probability(&visible)?);
        }
        Commands::Rank { cards } => {
            let cards = parse_cards(&cards)?;
            let table = load_table(&config, cli.generated)?;
            println!("{}", table.rank(&cards)?);
        }
        Commands::BuildTable { output } => {
            let table = TableBuilder::new().build();
            table.write(File::create(&output)?)?;
            println!("wrote {} entries to {}", table.len(), output.display());
        }
    }
    Ok(())
}

fn load_table(config: &EquityConfig, generated: bool) -> Result<Arc<HandRankTable>, EquityError> {
    let table = if generated {
        HandRankTable::open_generated(&config.table_path)?
    } else {
        config.open_table()?
    };
    Ok(table::install_global(Arc::new(table)))
}

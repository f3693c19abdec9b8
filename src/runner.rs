//! The command line entry point of the `tenner` binary: read a Tenner grid from a MiniZinc data
//! file, build its model and search for a solution.

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dzn_rs::DataFile;
use log::info;
use log::LevelFilter;

use crate::branching::VariableSelection;
use crate::engine::search::BacktrackingSearch;
use crate::engine::search::SatisfactionResult;
use crate::engine::termination::TimeBudget;
use crate::model::tenner::TENNER_WIDTH;
use crate::model::TennerBoard;
use crate::model::TennerEncoding;
use crate::model::TennerModel;
use crate::print_arcane_assert_warning_message;
use crate::propagators::PropagationStrategy;
use crate::statistics;

/// Marks an empty cell in the `Board` of a data file. The data files only hold non-negative
/// integers, so the `-1` used by [`TennerBoard::new`] cannot be written there.
const EMPTY_CELL: i32 = 10;

#[derive(Debug, Parser)]
pub struct Cli {
    /// The Tenner grid, as a MiniZinc data file defining `N` (the number of rows), the `N x 10`
    /// array `Board` (with 10 for empty cells) and the `1 x 10` array `Sums`.
    pub instance: PathBuf,

    /// How the rows of the grid are encoded.
    #[arg(short = 'M', long = "model", value_enum, default_value_t)]
    pub encoding: TennerEncoding,

    /// The propagation strategy used during search.
    #[arg(short = 'P', long = "propagator", value_enum, default_value_t)]
    pub propagator: PropagationStrategy,

    /// The variable ordering heuristic.
    #[arg(short = 'S', long = "variable-selection", value_enum, default_value_t)]
    pub variable_selection: VariableSelection,

    /// The seed used by the random variable selection.
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// The number of seconds the search is allowed to run.
    ///
    /// If no time-out is provided, the search runs until it finishes.
    #[arg(short = 'T', long = "time-out")]
    pub time_out: Option<u64>,

    /// Print the statistics of the search.
    #[arg(short = 's', long = "statistics")]
    pub log_statistics: bool,

    /// Enable debug logging.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    configure_logging(args.verbose);
    statistics::configure(args.log_statistics, "%%", None);
    print_arcane_assert_warning_message!();

    let board = read_board(&args.instance)?;
    let mut model = TennerModel::build(&board, args.encoding)
        .with_context(|| format!("Failed to build a model for {}", args.instance.display()))?;

    let mut selector = args.variable_selection.create(args.seed);
    let mut termination = args
        .time_out
        .map(|seconds| TimeBudget::starting_now(Duration::from_secs(seconds)));
    let mut search = BacktrackingSearch::default();

    match search.satisfy(
        &mut model.csp,
        &args.propagator,
        selector.as_mut(),
        &mut termination,
    ) {
        SatisfactionResult::Satisfiable(solution) => {
            println!("{}", model.read_solution(&solution));
            println!("==========");
        }
        SatisfactionResult::Unsatisfiable => println!("UNSATISFIABLE"),
        SatisfactionResult::Unknown => println!("UNKNOWN"),
    }

    search.log_statistics();

    Ok(())
}

fn configure_logging(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn read_board(path: &Path) -> anyhow::Result<TennerBoard> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;

    let data = dzn_rs::parse::<i32>(data.as_bytes())
        .with_context(|| format!("Failed to parse DZN from {}", path.display()))?;

    extract_board(&data).with_context(|| format!("Invalid Tenner grid in {}", path.display()))
}

fn extract_board(data: &DataFile<i32>) -> anyhow::Result<TennerBoard> {
    let n: i32 = data
        .get("N")
        .copied()
        .ok_or_else(|| anyhow::anyhow!("Missing int parameter 'N' in data."))?;

    let n_usize: usize = n
        .try_into()
        .map_err(|_| anyhow::anyhow!("'N' should be an unsigned integer."))?;

    let board = data
        .array_2d::<i32>("Board", [n_usize, TENNER_WIDTH])
        .ok_or_else(|| anyhow::anyhow!("Missing 2d int array 'Board' of shape {n} x 10."))?;
    let sums = data
        .array_2d::<i32>("Sums", [1, TENNER_WIDTH])
        .ok_or_else(|| anyhow::anyhow!("Missing 2d int array 'Sums' of shape 1 x 10."))?;

    let rows = (0..n_usize)
        .map(|row| {
            (0..TENNER_WIDTH)
                .map(|column| {
                    board
                        .get([row, column])
                        .map(|&value| if value == EMPTY_CELL { -1 } else { value })
                        .ok_or_else(|| {
                            anyhow::anyhow!("Missing entry ({row}, {column}) in 'Board'.")
                        })
                })
                .collect::<anyhow::Result<Vec<_>>>()
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let sums = (0..TENNER_WIDTH)
        .map(|column| {
            sums.get([0, column])
                .copied()
                .ok_or_else(|| anyhow::anyhow!("Missing entry {column} in 'Sums'."))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(TennerBoard::new(rows, sums)?)
}

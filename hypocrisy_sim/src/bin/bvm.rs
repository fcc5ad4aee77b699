//! Binary voter model simulator CLI
//!
//! Runs `n_run` independent chains to consensus and compares the observed
//! red-win fraction and mean consensus time with their predictions.

use clap::Parser;
use hypocrisy_core::{Bvm, BvmParams};
use hypocrisy_env::Seed;
use hypocrisy_sim::cli::{self, CommonArgs};
use hypocrisy_sim::{SimError, SimulationRunner};
use tracing::info;

/// Binary voter model simulator
#[derive(Parser, Debug)]
#[command(name = "bvm", version)]
#[command(about = "Simulate the binary voter model until consensus", long_about = None)]
struct Args {
    /// Number of independent runs
    n_run: u64,

    /// Rate of copying a neighbour
    #[arg(allow_negative_numbers = true)]
    rc: f64,

    /// Number of agents
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Initial number of red agents
    #[arg(allow_negative_numbers = true)]
    nr_init: i64,

    /// Seed of the random number generator (0 or absent = wall clock)
    seed: Option<u64>,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(args: &Args) -> Result<(), SimError> {
    let params = BvmParams {
        rc: args.rc,
        n: args.n,
        nr_init: args.nr_init,
    };
    let model = Bvm::new(params)?;

    let mut runner = SimulationRunner::new(args.n_run)?.with_output(&args.common.output);
    if let Some(requested) = args.seed {
        runner = runner.with_seed(Seed::resolve(Some(requested))?);
    }

    info!(
        "n_run = {}, rc = {:.6}, n = {}, nr_init = {}",
        args.n_run, params.rc, params.n, params.nr_init
    );

    let report = runner.run(&model)?;
    cli::emit(&args.common, &params, &report)
}

fn main() {
    let args: Args = cli::parse_or_exit();
    cli::init_logging(&args.common);

    if let Err(e) = run(&args) {
        cli::exit_with(e);
    }
}

//! Voter model with hypocrisy simulator CLI
//!
//! Agents hold an external and an internal opinion. Runs `n_run`
//! independent chains until both opinions reach consensus.

use clap::Parser;
use hypocrisy_core::{Cvm, CvmParams};
use hypocrisy_env::Seed;
use hypocrisy_sim::cli::{self, CommonArgs};
use hypocrisy_sim::{SimError, SimulationRunner};
use tracing::info;

/// Voter model with hypocrisy simulator
#[derive(Parser, Debug)]
#[command(name = "cvm", version)]
#[command(about = "Simulate the voter model with hypocrisy until consensus", long_about = None)]
struct Args {
    /// Number of independent runs
    n_run: u64,

    /// Rate of copying a neighbour
    #[arg(allow_negative_numbers = true)]
    rc: f64,

    /// Rate of externalizing
    #[arg(allow_negative_numbers = true)]
    re: f64,

    /// Rate of internalizing
    #[arg(allow_negative_numbers = true)]
    ri: f64,

    /// Number of agents
    #[arg(allow_negative_numbers = true)]
    n: i64,

    /// Initial number of external red opinions
    #[arg(allow_negative_numbers = true)]
    nr_ext_init: i64,

    /// Initial number of internal red opinions
    #[arg(allow_negative_numbers = true)]
    nr_int_init: i64,

    /// Initial number of agents red both externally and internally
    #[arg(allow_negative_numbers = true)]
    nrr_init: i64,

    /// Seed of the random number generator (0 or absent = wall clock)
    seed: Option<u64>,

    #[command(flatten)]
    common: CommonArgs,
}

fn run(args: &Args) -> Result<(), SimError> {
    let params = CvmParams {
        rc: args.rc,
        re: args.re,
        ri: args.ri,
        n: args.n,
        nr_ext_init: args.nr_ext_init,
        nr_int_init: args.nr_int_init,
        nrr_init: args.nrr_init,
    };
    let model = Cvm::new(params)?;

    let mut runner = SimulationRunner::new(args.n_run)?.with_output(&args.common.output);
    if let Some(requested) = args.seed {
        runner = runner.with_seed(Seed::resolve(Some(requested))?);
    }

    info!(
        "n_run = {}, rc = {:.6}, re = {:.6}, ri = {:.6}, n = {}",
        args.n_run, params.rc, params.re, params.ri, params.n
    );
    info!(
        "nr_ext_init = {}, nr_int_init = {}, nrr_init = {}",
        params.nr_ext_init, params.nr_int_init, params.nrr_init
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

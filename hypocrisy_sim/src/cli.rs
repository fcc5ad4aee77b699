//! Command-line plumbing shared by the `bvm` and `cvm` binaries.

use crate::error::SimError;
use crate::exporter::DEFAULT_DYNAMICS_PATH;
use crate::runner::SimulationReport;

use clap::error::ErrorKind;
use clap::{Args, Parser};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Exit code for rejected invocations.
pub const EXIT_USAGE: i32 = 1;

/// Flags common to both simulators.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Trajectory file for run 0
    #[arg(short, long, default_value = DEFAULT_DYNAMICS_PATH)]
    pub output: PathBuf,

    /// Verbose output (logs every jump of run 0)
    #[arg(short, long)]
    pub verbose: bool,

    /// JSON output for scripted consumption
    #[arg(long)]
    pub json: bool,
}

/// Parses the command line, exiting with [`EXIT_USAGE`] on malformed input.
///
/// `--help` and `--version` keep clap's own output and exit code.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("ERROR: Incorrect command-line arguments.");
            let _ = e.print();
            std::process::exit(EXIT_USAGE);
        }
    }
}

/// Installs the global tracing subscriber.
///
/// Logs go to stdout at INFO (DEBUG with `--verbose`). In JSON mode only
/// warnings are logged, to stderr, so stdout carries the JSON document alone.
pub fn init_logging(common: &CommonArgs) {
    if common.json {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::WARN)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    } else {
        let level = if common.verbose { Level::DEBUG } else { Level::INFO };
        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}

/// Prints the final results, as log lines or as one JSON document.
pub fn emit<P: Serialize>(
    common: &CommonArgs,
    params: &P,
    report: &SimulationReport,
) -> Result<(), SimError> {
    if common.json {
        let summary = serde_json::json!({
            "model": report.model,
            "params": params,
            "seed": report.seed,
            "total_jumps": report.total_jumps,
            "trajectory_rows": report.trajectory_rows,
            "dynamics_path": report.dynamics_path,
            "summary": report.summary,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        report.log_summary();
    }
    Ok(())
}

/// Reports a fatal error on stderr and exits with [`EXIT_USAGE`].
pub fn exit_with(error: SimError) -> ! {
    eprintln!("ERROR: {}", error);
    std::process::exit(EXIT_USAGE);
}

//! End-to-end tests of the `bvm` and `cvm` binaries.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_in(dir: &Path, bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn simulator")
}

fn bvm(dir: &Path, args: &[&str]) -> Output {
    run_in(dir, env!("CARGO_BIN_EXE_bvm"), args)
}

fn cvm(dir: &Path, args: &[&str]) -> Output {
    run_in(dir, env!("CARGO_BIN_EXE_cvm"), args)
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json_summary(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_bvm_wrong_argument_count() {
    let dir = TempDir::new().unwrap();

    assert_eq!(bvm(dir.path(), &["10", "1.0", "50"]).status.code(), Some(1));
    assert_eq!(bvm(dir.path(), &["10", "1.0", "50", "25", "42", "7"]).status.code(), Some(1));
    assert!(!dir.path().join("dynamics.dat").exists());
}

#[test]
fn test_bvm_rejects_initial_condition_out_of_range() {
    let dir = TempDir::new().unwrap();

    for n in ["1", "10", "50"] {
        let above = (n.parse::<i64>().unwrap() + 1).to_string();
        for nr_init in ["-1", above.as_str()] {
            let output = bvm(dir.path(), &["10", "1.0", n, nr_init]);
            assert_eq!(output.status.code(), Some(1), "n={n} nr_init={nr_init}");
            assert!(stderr(&output).contains("Invalid initial conditions"));
        }
    }
    assert!(!dir.path().join("dynamics.dat").exists());
}

#[test]
fn test_cvm_rejects_nrr_outside_range() {
    let dir = TempDir::new().unwrap();

    // n = 10, nr_ext = 7, nr_int = 6: nrr must lie in [3, 6]
    for nrr in ["2", "7"] {
        let output = cvm(dir.path(), &["10", "1", "1", "1", "10", "7", "6", nrr, "1"]);
        assert_eq!(output.status.code(), Some(1), "nrr={nrr}");
        assert!(stderr(&output).contains("nrr_init"));
    }
}

#[test]
fn test_cvm_wrong_argument_count() {
    let dir = TempDir::new().unwrap();
    let output = cvm(dir.path(), &["10", "1", "1", "1", "10", "7", "6"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_zero_runs_rejected() {
    let dir = TempDir::new().unwrap();
    let output = bvm(dir.path(), &["0", "1.0", "10", "5", "1"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = bvm(dir.path(), &["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_bvm_writes_dynamics_file() {
    let dir = TempDir::new().unwrap();
    let output = bvm(dir.path(), &["20", "1.0", "10", "5", "3"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let text = std::fs::read_to_string(dir.path().join("dynamics.dat")).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("t,rho_R"));
    assert_eq!(lines.next(), Some("0.000000,0.500000"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SEED OF RANDOM NUMBER GENERATOR: 3"));
    assert!(stdout.contains("working on run 0 out of 20"));
    assert!(stdout.contains("predicted mean consensus time"));
}

#[test]
fn test_cvm_writes_dynamics_file() {
    let dir = TempDir::new().unwrap();
    let output = cvm(dir.path(), &["5", "1", "0.5", "2", "8", "4", "2", "1", "9", "--output", "run0.csv"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let text = std::fs::read_to_string(dir.path().join("run0.csv")).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("t,rho_R,rho_r,rho_Rr"));
    assert_eq!(lines.next(), Some("0.000000,0.500000,0.250000,0.125000"));
}

#[test]
fn test_fixed_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let args = ["100", "1.0", "50", "25", "42", "--json"];

    let first = bvm(dir.path(), &args);
    let second = bvm(dir.path(), &args);
    assert_eq!(first.status.code(), Some(0), "{}", stderr(&first));

    let a = json_summary(&first);
    let b = json_summary(&second);

    assert_eq!(a["seed"], 42);
    assert_eq!(a["summary"]["observed_red_fraction"], b["summary"]["observed_red_fraction"]);
    assert_eq!(a["summary"]["mean_time"], b["summary"]["mean_time"]);
    assert_eq!(a["params"]["nr_init"], 25);
}

#[test]
fn test_single_run_reports_nan_error() {
    let dir = TempDir::new().unwrap();
    let output = bvm(dir.path(), &["1", "1.0", "10", "5", "5", "--json"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    // serde_json renders NaN as null
    let summary = json_summary(&output);
    assert!(summary["summary"]["std_error"].is_null());
}

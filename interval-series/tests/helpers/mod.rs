//! Runs the `interval-series` binary and parses its report.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use regex::Regex;
use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct SolverOutput {
    pub(crate) success: bool,
    pub(crate) stdout: String,
}

pub(crate) fn run_binary(args: &[&str]) -> SolverOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_interval-series"));

    let mut child = Command::new(solver)
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("stdout is valid UTF-8");

    SolverOutput {
        success: status.success(),
        stdout,
    }
}

/// Parses the report of a series back into its values and distances.
pub(crate) fn parse_report(report: &str) -> (usize, Vec<i32>, Vec<i32>) {
    let header = Regex::new(r"All interval series\((\d+)\)").expect("valid regex");
    let entry = Regex::new(r"(-?\d+) <(-?\d+)>").expect("valid regex");
    let last = Regex::new(r"(-?\d+)\s*$").expect("valid regex");

    let size = header
        .captures(report)
        .expect("report has a header")
        .get(1)
        .expect("header has a size")
        .as_str()
        .parse()
        .expect("size is a number");

    let body = &report[report.find('\t').expect("report has a body")..];
    let (values, distances) = entry
        .captures_iter(body)
        .map(|captures| {
            (
                captures[1].parse::<i32>().expect("value is a number"),
                captures[2].parse::<i32>().expect("distance is a number"),
            )
        })
        .unzip::<_, _, Vec<_>, Vec<_>>();

    let mut values = values;
    values.push(
        last.captures(body)
            .expect("report ends with a value")[1]
            .parse()
            .expect("value is a number"),
    );

    (size, values, distances)
}

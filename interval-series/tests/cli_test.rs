#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::parse_report;
use helpers::run_binary;
use interval_series::all_interval::SeriesSolution;

fn assert_reports_valid_series(args: &[&str], expected_size: usize) {
    let output = run_binary(args);
    assert!(output.success, "solver failed: {}", output.stdout);

    let (size, values, distances) = parse_report(&output.stdout);
    assert_eq!(expected_size, size);

    let series = SeriesSolution::new(values, distances);
    assert!(series.is_valid(), "invalid series reported:\n{}", output.stdout);
}

#[test]
fn small_series_is_reported() {
    assert_reports_valid_series(&["--size", "8"], 8);
}

#[test]
fn report_wraps_long_series() {
    let output = run_binary(&["-o", "25"]);
    assert!(output.success);

    // The header, two full lines of 10 entries and a final line.
    assert_eq!(4, output.stdout.lines().count());
    assert_reports_valid_series(&["-o", "25"], 25);
}

#[test]
fn views_variant_is_reported() {
    assert_reports_valid_series(&["--size", "8", "--use-views"], 8);
}

#[test]
fn short_flag_selects_the_views_variant() {
    assert_reports_valid_series(&["-o", "8", "-v"], 8);
}

#[test]
fn version_flag_is_available() {
    let output = run_binary(&["-V"]);

    assert!(output.success);
    assert!(output.stdout.starts_with("interval-series"));
}

#[test]
fn verbose_run_logs_every_search_step() {
    let output = run_binary(&["--size", "6", "--verbose"]);

    assert!(output.success);
    assert!(output.stdout.contains("% solution over"));
    assert!(output.stdout.contains("All interval series(6)"));
}

#[test]
fn zero_node_limit_is_unknown() {
    let output = run_binary(&["--size", "200", "--node-limit", "0"]);

    assert!(output.success);
    assert_eq!("UNKNOWN", output.stdout.trim());
}

#[test]
fn invalid_size_fails() {
    let output = run_binary(&["--size", "0"]);

    assert!(!output.success);
}

#[test]
fn statistics_are_logged_on_request() {
    let output = run_binary(&["--size", "6", "--log-statistics"]);

    assert!(output.success);
    assert!(output.stdout.contains("%%%stat: numDecisions="));
    assert!(output.stdout.contains("%%%stat-end"));
}

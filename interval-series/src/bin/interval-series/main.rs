mod os_signal_termination;
mod result;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use interval_series::all_interval::AllIntervalModel;
use interval_series::all_interval::SeriesOptions;
use interval_series::all_interval::SeriesOutcome;
use interval_series::convert_case::Case;
use interval_series::engine::observer::LoggingObserver;
use interval_series::statistics::configure_statistic_logging;
use interval_series::termination::Combinator;
use interval_series::termination::DecisionBudget;
use interval_series::termination::TimeBudget;
use log::error;
use log::info;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::SeriesCliResult;

/// Finds an all-interval series (CSPLib #007): a permutation of {0, .., m - 1} whose consecutive
/// distances are a permutation of {1, .., m - 1}.
#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about
)]
struct Args {
    /// The size of the series.
    ///
    /// Possible values: i32, at least 1
    #[arg(
        short = 'o',
        long = "size",
        default_value_t = 1000,
        allow_negative_numbers = true,
        verbatim_doc_comment
    )]
    size: i32,

    /// Model every distance through an auxiliary difference variable and its absolute value
    /// instead of with a single distance constraint.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "use-views", verbatim_doc_comment)]
    use_views: bool,

    /// The time budget for the solver, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The maximum number of decisions the solver may take.
    ///
    /// Possible values: u64 (Optional)
    #[arg(long = "node-limit", verbatim_doc_comment)]
    node_limit: Option<u64>,

    /// Enables log message output from the solver, including a line for every step of the
    /// search.
    ///
    /// Possible values: bool
    #[arg(long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("%%%stat:", Some("%%%stat-end"), Some(Case::Camel), None);
    }
    let level_filter = if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SeriesCliResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    let options = SeriesOptions {
        size: args.size,
        use_auxiliary_views: args.use_views,
    };
    let mut model = AllIntervalModel::build(&options)?;

    let mut termination = Combinator::new(
        OsSignal::install()?,
        Combinator::new(
            args.time_limit
                .map(Duration::from_millis)
                .map(TimeBudget::starting_now),
            args.node_limit.map(DecisionBudget::new),
        ),
    );
    let mut observer = args.verbose.then_some(LoggingObserver);

    let outcome = model.solve(&mut termination, &mut observer);

    let mut stdout = std::io::stdout().lock();
    match outcome {
        SeriesOutcome::Solved(series) => writeln!(stdout, "{series}")?,
        SeriesOutcome::Infeasible => writeln!(stdout, "UNSATISFIABLE")?,
        SeriesOutcome::Cancelled => writeln!(stdout, "UNKNOWN")?,
    }
    drop(stdout);

    model.solver().log_statistics();

    Ok(())
}

use std::process::ExitCode;

use clap::ArgMatches;
use tracing::Level;

use math_crunch::{Outcome, QuizConfig, QuizResult, QuizRng, Session, StdConsole};

mod cli;

fn main() -> ExitCode {
    let matches = cli::cli().get_matches();
    init_logging(&matches);

    let config = cli::config_from_args(&matches);

    match play(config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so the quiz on stdout stays clean.
fn init_logging(matches: &ArgMatches) {
    let level = match matches.get_count("verbose") {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn play(config: QuizConfig) -> QuizResult<Outcome> {
    let rng = match config.seed {
        Some(seed) => QuizRng::new(seed),
        None => QuizRng::from_entropy(),
    };
    tracing::debug!(seed = rng.seed(), "seeded quiz");

    let mut session = Session::new(config, rng, StdConsole::stdio())?;
    session.run()
}

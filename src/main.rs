use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use kemeny_anneal::cli::CliArgs;
use kemeny_anneal::kemeny::solve_seeded;
use kemeny_anneal::report::RankingReport;
use kemeny_anneal::tournament::load_tournament;
use kemeny_anneal::KemenyError;
use tracing_subscriber::EnvFilter;

/// Log filter comes from `KEMENY_LOG`, e.g. `KEMENY_LOG=kemeny_anneal=debug`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("KEMENY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = CliArgs::parse();
    // Reject a bad schedule before reading the file.
    let config = match args.config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    };

    let tournament = match load_tournament(&args.file) {
        Ok(tournament) => tournament,
        Err(KemenyError::Io { source, .. }) => {
            tracing::debug!(error = %source, "tournament file unreadable");
            eprintln!(
                "Error: file \"{}\" could not be loaded",
                args.file.display()
            );
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("Error: file \"{}\" is malformed: {err}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let result = match solve_seeded(&tournament.weights, &config) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start.elapsed();

    println!(
        "{}",
        RankingReport::new(&tournament.names, &result.best, result.best_score)
    );
    println!("Runtime: {}ms", elapsed.as_secs_f64() * 1000.0);
    ExitCode::SUCCESS
}

use std::process::ExitCode;

use colored::Colorize;

mod driver;
mod error;
mod opts;

use crate::{driver::Outcome, error::CliError};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let fallback = if std::env::var_os(opts::env::DEBUG_VAR).is_some() {
        "tunecc=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point, resolves the command line and maps errors to exit codes.
fn main() -> ExitCode {
    init_tracing();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    match driver::run(&raw) {
        Ok(Outcome::Help(text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Options(resolved)) => {
            if resolved.verbose {
                print!("{}", resolved.render_plan());
            }
            ExitCode::SUCCESS
        }
        Err(CliError::Usage(rendered)) => {
            eprintln!("{}", rendered.trim_end());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{} {}", "tunecc error:".bright_red(), err);
            if matches!(err, CliError::MissingInput) {
                eprintln!("{}", opts::resolve::usage());
            }
            ExitCode::FAILURE
        }
    }
}

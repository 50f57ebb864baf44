//! LST price reporter - Main Entry Point

use clap::Parser;
use lst_prices::*;
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let config = Config::from_cli(Cli::parse());

    // Initialize logging
    let _logging_guard = match utils::setup_logging(&config) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("WARNING: logging disabled: {:#}", e);
            None
        }
    };
    debug!(?config, "Loaded configuration");

    let report = app::collect_results(&config)
        .await
        .and_then(|results| app::render(&results, config.output));

    match report {
        Ok(report) => {
            if config.output == OutputMode::Json {
                println!("{}", report);
            } else {
                print!("{}", report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(exit_code = e.exit_code(), error = ?e, "Run aborted");
            eprintln!("ERROR: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

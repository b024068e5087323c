//! azdo-varlibs - Main entry point

use std::error::Error;
use std::process::ExitCode;

use log::{debug, info};

use azdo_varlibs::{run_list_command, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_normalized();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting azdo-varlibs v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: org={:?}, project={:?}, pat_set={}, timeout={}s, batch={}",
        cli.org,
        cli.project,
        cli.pat.as_deref().is_some_and(|p| !p.is_empty()),
        cli.timeout,
        cli.batch
    );

    match run_list_command(&cli).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  Caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

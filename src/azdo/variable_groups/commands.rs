//! Variable library command handler

use std::time::Duration;

use log::{debug, info};

use crate::azdo::{AzdoClient, Settings};
use crate::cli::Cli;
use crate::error::Result;
use crate::output::{output_variable_libraries, sort_by_name};
use crate::ui::{create_spinner, finish_spinner};

/// Resolve parameters, fetch the project's variable libraries and print them
/// sorted by name.
///
/// Nothing is written to stdout unless every step succeeds.
pub async fn run_list_command(cli: &Cli) -> Result<()> {
    let settings = Settings::resolve(
        cli.pat.as_deref(),
        cli.org.as_deref(),
        cli.project.as_deref(),
    )?;
    debug!("Resolved settings: {:?}", settings);

    let client = AzdoClient::new(
        settings.pat.clone(),
        &cli.base_url,
        Duration::from_secs(cli.timeout),
    )?;

    let spinner = create_spinner(
        &format!(
            "Fetching variable libraries for '{}/{}'...",
            settings.organization, settings.project
        ),
        cli.batch,
    );
    let result = client
        .get_variable_libraries(&settings.organization, &settings.project)
        .await;
    finish_spinner(spinner);

    let mut libraries = result?.into_libraries();
    info!(
        "Found {} variable libraries in '{}/{}'",
        libraries.len(),
        settings.organization,
        settings.project
    );

    sort_by_name(&mut libraries);
    output_variable_libraries(&libraries)
}

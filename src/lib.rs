//! azdo-varlibs - List Azure DevOps variable libraries
//!
//! A CLI tool that fetches the variable libraries (variable groups) of an
//! Azure DevOps project and prints them as a table sorted by name.
//!
//! # Parameters
//!
//! Each parameter comes from its flag, or from the environment when the flag
//! is absent or empty:
//!
//! - `-org` / `AZDO_ORG` - organization name
//! - `-project` / `AZDO_PROJECT` - project name
//! - `-pat` / `AZDO_PAT` - personal access token
//!
//! # Example
//!
//! ```bash
//! # Flags
//! azdo-varlibs -org contoso -project web -pat <TOKEN>
//!
//! # Environment
//! export AZDO_ORG=contoso AZDO_PROJECT=web AZDO_PAT=<TOKEN>
//! azdo-varlibs
//! ```

pub mod azdo;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ui;

pub use azdo::{
    basic_auth_value, run_list_command, AzdoClient, Settings, VariableLibrariesResponse,
    VariableLibrary,
};
pub use cli::{normalize_args, Cli};
pub use error::{AzdoError, Result};
pub use output::{
    output_variable_libraries, render_variable_libraries, sort_by_name, write_variable_libraries,
};

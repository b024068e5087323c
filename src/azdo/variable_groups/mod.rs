//! Variable groups module - list variable libraries in a project

mod api;
mod commands;
mod models;

pub use commands::run_list_command;
pub use models::{VariableLibrariesResponse, VariableLibrary};

//! Azure DevOps API client module
//!
//! This module provides functionality to read variable libraries from the
//! Azure DevOps REST API.

mod client;
mod params;
pub mod variable_groups;

pub use client::{basic_auth_value, AzdoClient};
pub use params::{resolve_parameter, Parameter, Settings};
pub use variable_groups::{run_list_command, VariableLibrariesResponse, VariableLibrary};

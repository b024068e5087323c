//! Parameter resolution from CLI flags with environment fallback

use std::fmt;

use log::debug;

use crate::config::env;
use crate::error::{AzdoError, Result};

/// Describes one required parameter and where it can come from
#[derive(Debug, Clone, Copy)]
pub struct Parameter {
    /// Human-readable name used in error messages
    pub name: &'static str,
    /// Flag name without leading dashes
    pub flag: &'static str,
    /// Environment variable consulted when the flag is empty
    pub env_var: &'static str,
}

/// Personal access token parameter
pub const PAT: Parameter = Parameter {
    name: "personal access token",
    flag: "pat",
    env_var: env::PAT,
};

/// Organization parameter
pub const ORG: Parameter = Parameter {
    name: "organization",
    flag: "org",
    env_var: env::ORG,
};

/// Project parameter
pub const PROJECT: Parameter = Parameter {
    name: "project",
    flag: "project",
    env_var: env::PROJECT,
};

/// Resolved parameters for one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub pat: String,
    pub organization: String,
    pub project: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("pat", &"<redacted>")
            .field("organization", &self.organization)
            .field("project", &self.project)
            .finish()
    }
}

impl Settings {
    /// Resolve all parameters against the process environment
    pub fn resolve(
        pat: Option<&str>,
        organization: Option<&str>,
        project: Option<&str>,
    ) -> Result<Self> {
        Self::resolve_with(pat, organization, project, |key| std::env::var(key).ok())
    }

    /// Resolve all parameters using `lookup` for environment access
    pub fn resolve_with<F>(
        pat: Option<&str>,
        organization: Option<&str>,
        project: Option<&str>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            pat: resolve_parameter(&PAT, pat, &lookup)?,
            organization: resolve_parameter(&ORG, organization, &lookup)?,
            project: resolve_parameter(&PROJECT, project, &lookup)?,
        })
    }
}

/// Resolve a single parameter:
/// 1. Flag value (if non-empty)
/// 2. Environment variable (if non-empty)
pub fn resolve_parameter<F>(param: &Parameter, flag_value: Option<&str>, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = flag_value.filter(|v| !v.is_empty()) {
        debug!("Using {} from -{} flag", param.name, param.flag);
        return Ok(value.to_string());
    }

    if let Some(value) = lookup(param.env_var).filter(|v| !v.is_empty()) {
        debug!(
            "Using {} from {} environment variable",
            param.name, param.env_var
        );
        return Ok(value);
    }

    Err(AzdoError::MissingParameter {
        name: param.name,
        flag: param.flag,
        env_var: param.env_var,
    })
}

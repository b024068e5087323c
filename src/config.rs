/// Configuration constants for the Azure DevOps REST API
pub mod api {
    /// Service root for Azure DevOps Services
    pub const BASE_URL: &str = "https://dev.azure.com";

    /// Variable groups endpoint (relative to `{org}/{project}`)
    pub const VARIABLE_GROUPS: &str = "_apis/distributedtask/variablegroups";

    /// API version pinned for the variable groups endpoint
    pub const API_VERSION: &str = "6.0-preview.2";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Environment variable names used as flag fallbacks
pub mod env {
    /// Personal access token
    pub const PAT: &str = "AZDO_PAT";

    /// Organization name
    pub const ORG: &str = "AZDO_ORG";

    /// Project name
    pub const PROJECT: &str = "AZDO_PROJECT";

    /// Service root override
    pub const BASE_URL: &str = "AZDO_BASE_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 30;
}

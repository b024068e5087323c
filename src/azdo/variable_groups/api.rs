//! Variable group API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::azdo::AzdoClient;

use super::models::VariableLibrariesResponse;

impl AzdoClient {
    /// Build the variable groups URL for a project.
    ///
    /// Organization and project are substituted verbatim.
    pub fn variable_groups_url(&self, org: &str, project: &str) -> String {
        format!(
            "{}/{}/{}/{}?api-version={}",
            self.base_url(),
            org,
            project,
            api::VARIABLE_GROUPS,
            api::API_VERSION
        )
    }

    /// Get the variable libraries of a project (single request, no pagination)
    pub async fn get_variable_libraries(
        &self,
        org: &str,
        project: &str,
    ) -> Result<VariableLibrariesResponse> {
        let url = self.variable_groups_url(org, project);
        let error_context = format!("variable libraries for '{}/{}'", org, project);
        debug!("Fetching {} from: {}", error_context, url);

        let response = self.get(&url)?.send().await?;
        let libraries: VariableLibrariesResponse =
            self.parse_api_response(response, &error_context).await?;

        debug!(
            "Server reported count {:?} for {}",
            libraries.count(),
            error_context
        );
        Ok(libraries)
    }
}

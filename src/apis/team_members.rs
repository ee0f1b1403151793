//! Team members endpoints.

use tracing::instrument;

use crate::{
    client::SquareClient,
    error::SquareResult,
    models::{SearchTeamMembersRequest, SearchTeamMembersResponse},
};

/// Access to the Team members endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TeamMembersApi<'a> {
    pub(crate) client: &'a SquareClient,
}

impl TeamMembersApi<'_> {
    /// Search team members by location assignment and status.
    #[instrument(skip(self, body))]
    pub async fn search(
        &self,
        body: &SearchTeamMembersRequest,
    ) -> SquareResult<SearchTeamMembersResponse> {
        self.client.post("/v2/team-members/search", body).await
    }
}

//! Loyalty endpoints.

use tracing::instrument;

use crate::{
    client::SquareClient,
    error::SquareResult,
    models::{AccumulateLoyaltyPointsRequest, AccumulateLoyaltyPointsResponse},
};

/// Access to the Loyalty endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LoyaltyApi<'a> {
    pub(crate) client: &'a SquareClient,
}

impl LoyaltyApi<'_> {
    /// Add points to a loyalty account for a purchase.
    #[instrument(skip(self, body))]
    pub async fn accumulate_points(
        &self,
        account_id: &str,
        body: &AccumulateLoyaltyPointsRequest,
    ) -> SquareResult<AccumulateLoyaltyPointsResponse> {
        self.client
            .post(
                &format!("/v2/loyalty/accounts/{account_id}/accumulate"),
                body,
            )
            .await
    }
}

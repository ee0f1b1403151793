//! Orders endpoints.

use tracing::instrument;

use crate::{
    client::SquareClient,
    error::SquareResult,
    models::{
        BatchRetrieveOrdersRequest, BatchRetrieveOrdersResponse, CreateOrderRequest,
        CreateOrderResponse,
    },
};

/// Access to the Orders endpoints.
#[derive(Debug, Clone, Copy)]
pub struct OrdersApi<'a> {
    pub(crate) client: &'a SquareClient,
}

impl OrdersApi<'_> {
    /// Create an order at a location.
    #[instrument(skip(self, body))]
    pub async fn create(
        &self,
        location_id: &str,
        body: &CreateOrderRequest,
    ) -> SquareResult<CreateOrderResponse> {
        self.client
            .post(&format!("/v2/locations/{location_id}/orders"), body)
            .await
    }

    /// Retrieve up to 100 orders by id. Found orders and per-id errors
    /// come back in separate lists, passed through as the API returns
    /// them.
    #[instrument(skip(self, body))]
    pub async fn batch_retrieve(
        &self,
        location_id: &str,
        body: &BatchRetrieveOrdersRequest,
    ) -> SquareResult<BatchRetrieveOrdersResponse> {
        self.client
            .post(
                &format!("/v2/locations/{location_id}/orders/batch-retrieve"),
                body,
            )
            .await
    }
}

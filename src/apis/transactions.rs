//! Transactions endpoints.

use tracing::instrument;

use crate::{
    client::SquareClient,
    error::SquareResult,
    models::{ListTransactionsResponse, RetrieveTransactionResponse},
};

/// Access to the Transactions endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TransactionsApi<'a> {
    pub(crate) client: &'a SquareClient,
}

impl TransactionsApi<'_> {
    /// List transactions processed at a location, newest first by
    /// default. `begin_time` and `end_time` are RFC 3339 timestamps;
    /// the window defaults to the last day remotely.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        location_id: &str,
        sort_order: Option<&str>,
        begin_time: Option<&str>,
        end_time: Option<&str>,
        cursor: Option<&str>,
    ) -> SquareResult<ListTransactionsResponse> {
        let mut query = Vec::new();
        if let Some(sort_order) = sort_order {
            query.push(("sort_order", sort_order.to_string()));
        }
        if let Some(begin_time) = begin_time {
            query.push(("begin_time", begin_time.to_string()));
        }
        if let Some(end_time) = end_time {
            query.push(("end_time", end_time.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }

        self.client
            .get(&format!("/v2/locations/{location_id}/transactions"), &query)
            .await
    }

    /// Retrieve a transaction by id.
    #[instrument(skip(self))]
    pub async fn retrieve(
        &self,
        location_id: &str,
        transaction_id: &str,
    ) -> SquareResult<RetrieveTransactionResponse> {
        self.client
            .get(
                &format!("/v2/locations/{location_id}/transactions/{transaction_id}"),
                &[],
            )
            .await
    }
}

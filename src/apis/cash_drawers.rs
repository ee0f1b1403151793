//! Cash drawer endpoints (v1).

use reqwest::Method;
use tracing::instrument;

use crate::{
    client::SquareClient,
    error::SquareResult,
    http::ApiResponseBody,
    models::{V1CashDrawerShift, V1ListCashDrawerShiftsResponse},
};

/// Access to the v1 Cash drawers endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CashDrawersApi<'a> {
    pub(crate) client: &'a SquareClient,
}

impl CashDrawersApi<'_> {
    /// List a location's cash drawer shifts. `order` is `ASC` or `DESC`
    /// over `opened_at`; the time window defaults to the last 90 days
    /// remotely.
    ///
    /// The v1 endpoint answers with a bare JSON array, so the body is
    /// deserialized as a list and wrapped before the exchange context is
    /// attached.
    #[instrument(skip(self))]
    pub async fn list_shifts(
        &self,
        location_id: &str,
        order: Option<&str>,
        begin_time: Option<&str>,
        end_time: Option<&str>,
    ) -> SquareResult<V1ListCashDrawerShiftsResponse> {
        let mut query = Vec::new();
        if let Some(order) = order {
            query.push(("order", order.to_string()));
        }
        if let Some(begin_time) = begin_time {
            query.push(("begin_time", begin_time.to_string()));
        }
        if let Some(end_time) = end_time {
            query.push(("end_time", end_time.to_string()));
        }

        let (context, bytes) = self
            .client
            .execute(
                Method::GET,
                &format!("/v1/{location_id}/cash-drawer-shifts"),
                &query,
                None::<&()>,
            )
            .await?;

        let items: Vec<V1CashDrawerShift> = serde_json::from_slice(&bytes)?;
        let mut response = V1ListCashDrawerShiftsResponse {
            items: Some(items),
            http_context: None,
        };
        response.attach_context(context);
        Ok(response)
    }
}

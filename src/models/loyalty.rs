//! Loyalty accounts and events.

use serde::{Deserialize, Serialize};

use crate::http::HttpContext;
use crate::macros::{api_response, model_builder};
use crate::models::Error;

/// Points to add to an account, derived from an order or given directly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoyaltyEventAccumulatePoints {
    /// Loyalty program the points accrue under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_program_id: Option<String>,

    /// Points to add; required unless `order_id` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,

    /// Order to compute points from, for order-integrated programs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

model_builder! {
    model = LoyaltyEventAccumulatePoints,
    builder = LoyaltyEventAccumulatePointsBuilder,
    required = {},
    optional = {
        loyalty_program_id: String,
        points: i32,
        order_id: String,
    },
    clearable = {},
}

/// Request body for adding points to a loyalty account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccumulateLoyaltyPointsRequest {
    /// The points to add
    pub accumulate_points: LoyaltyEventAccumulatePoints,

    /// Caller-supplied deduplication key, passed through verbatim
    pub idempotency_key: String,

    /// Location where the purchase occurred
    pub location_id: String,
}

model_builder! {
    model = AccumulateLoyaltyPointsRequest,
    builder = AccumulateLoyaltyPointsRequestBuilder,
    required = {
        accumulate_points: LoyaltyEventAccumulatePoints,
        idempotency_key: String,
        location_id: String,
    },
    optional = {},
    clearable = {},
}

/// A change to a loyalty account balance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoyaltyEvent {
    /// Server-assigned event identifier
    pub id: String,

    /// What kind of change occurred, e.g. `ACCUMULATE_POINTS`
    #[serde(rename = "type")]
    pub event_type: String,

    /// Creation timestamp, RFC 3339
    pub created_at: String,

    /// Account whose balance changed
    pub loyalty_account_id: String,

    /// How the event was generated, e.g. `LOYALTY_API` or `SQUARE`
    pub source: String,

    /// Accumulation details, set when `type` is `ACCUMULATE_POINTS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accumulate_points: Option<LoyaltyEventAccumulatePoints>,

    /// Location the event is associated with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

model_builder! {
    model = LoyaltyEvent,
    builder = LoyaltyEventBuilder,
    required = {
        id: String,
        event_type: String,
        created_at: String,
        loyalty_account_id: String,
        source: String,
    },
    optional = {
        accumulate_points: LoyaltyEventAccumulatePoints,
        location_id: String,
    },
    clearable = {},
}

/// Response body for adding points to a loyalty account.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccumulateLoyaltyPointsResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// The resulting accumulation event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<LoyaltyEvent>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

api_response!(AccumulateLoyaltyPointsResponse);

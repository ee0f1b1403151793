//! Subscriptions and subscription events.

use serde::{Deserialize, Serialize};

use crate::http::HttpContext;
use crate::macros::{api_response, model_builder};
use crate::models::{Error, Money, Patch};

/// A recurring billing plan attached to a customer.
///
/// `card_id`, `tax_percentage` and `canceled_date` are clearable: an update
/// carrying one of them as an explicit `null` clears the value on the
/// subscription, while leaving the field out leaves it untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Subscription {
    /// Server-assigned subscription identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Location the subscription belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Subscription plan being billed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// Subscribing customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// First billing date, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Date the subscription was or will be canceled, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub canceled_date: Patch<String>,

    /// Current status, e.g. `ACTIVE` or `CANCELED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Tax applied to billed amounts, as a decimal percentage string
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub tax_percentage: Patch<String>,

    /// Invoices generated for the subscription, newest first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_ids: Option<Vec<String>>,

    /// Billed amount override replacing the plan's price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_override_money: Option<Money>,

    /// Version for optimistic concurrency on updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Creation timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Card on file charged each billing period
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub card_id: Patch<String>,

    /// Date the subscription is paid through, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_until_date: Option<String>,

    /// IANA timezone billing dates are computed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

model_builder! {
    model = Subscription,
    builder = SubscriptionBuilder,
    required = {},
    optional = {
        id: String,
        location_id: String,
        plan_id: String,
        customer_id: String,
        start_date: String,
        status: String,
        invoice_ids: Vec<String>,
        price_override_money: Money,
        version: i64,
        created_at: String,
        paid_until_date: String,
        timezone: String,
    },
    clearable = {
        canceled_date: String => clear_canceled_date,
        tax_percentage: String => clear_tax_percentage,
        card_id: String => clear_card_id,
    },
}

/// Request body for creating a subscription.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    /// Caller-supplied deduplication key, passed through verbatim
    pub idempotency_key: String,

    /// Location the subscription belongs to
    pub location_id: String,

    /// Subscription plan to bill
    pub plan_id: String,

    /// Subscribing customer
    pub customer_id: String,

    /// First billing date, `YYYY-MM-DD`; defaults to today remotely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Tax applied to billed amounts, as a decimal percentage string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_percentage: Option<String>,

    /// Billed amount override replacing the plan's price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_override_money: Option<Money>,

    /// Card on file to charge each billing period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,

    /// IANA timezone billing dates are computed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

model_builder! {
    model = CreateSubscriptionRequest,
    builder = CreateSubscriptionRequestBuilder,
    required = {
        idempotency_key: String,
        location_id: String,
        plan_id: String,
        customer_id: String,
    },
    optional = {
        start_date: String,
        tax_percentage: String,
        price_override_money: Money,
        card_id: String,
        timezone: String,
    },
    clearable = {},
}

/// Response body for creating a subscription.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateSubscriptionResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// The created subscription
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

/// Filter criteria for a subscription search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSubscriptionsFilter {
    /// Restrict results to these customers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ids: Option<Vec<String>>,

    /// Restrict results to these locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<String>>,
}

model_builder! {
    model = SearchSubscriptionsFilter,
    builder = SearchSubscriptionsFilterBuilder,
    required = {},
    optional = {
        customer_ids: Vec<String>,
        location_ids: Vec<String>,
    },
    clearable = {},
}

/// Query wrapper for a subscription search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSubscriptionsQuery {
    /// Filter criteria; an empty query matches everything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchSubscriptionsFilter>,
}

model_builder! {
    model = SearchSubscriptionsQuery,
    builder = SearchSubscriptionsQueryBuilder,
    required = {},
    optional = {
        filter: SearchSubscriptionsFilter,
    },
    clearable = {},
}

/// Request body for searching subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchSubscriptionsRequest {
    /// Continuation token from a previous response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// Page size cap, 1 to 200
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Search criteria
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<SearchSubscriptionsQuery>,
}

model_builder! {
    model = SearchSubscriptionsRequest,
    builder = SearchSubscriptionsRequestBuilder,
    required = {},
    optional = {
        cursor: String,
        limit: i32,
        query: SearchSubscriptionsQuery,
    },
    clearable = {},
}

/// Response body for searching subscriptions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchSubscriptionsResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// Matching subscriptions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriptions: Option<Vec<Subscription>>,

    /// Continuation token; absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

/// Response body for retrieving a subscription.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetrieveSubscriptionResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// The requested subscription
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

/// Request body for updating a subscription.
///
/// Only fields present on `subscription` are touched; clearable fields
/// carried as explicit `null` are cleared remotely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateSubscriptionRequest {
    /// Field values to change
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
}

model_builder! {
    model = UpdateSubscriptionRequest,
    builder = UpdateSubscriptionRequestBuilder,
    required = {},
    optional = {
        subscription: Subscription,
    },
    clearable = {},
}

/// Response body for updating a subscription.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateSubscriptionResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// The subscription after the update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

/// Response body for canceling a subscription.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CancelSubscriptionResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// The subscription with its `canceled_date` set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

/// One change in a subscription's history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionEvent {
    /// Server-assigned event identifier
    pub id: String,

    /// What happened, e.g. `START_SUBSCRIPTION` or `STOP_SUBSCRIPTION`
    pub subscription_event_type: String,

    /// Date the event takes effect, `YYYY-MM-DD`
    pub effective_date: String,

    /// Plan the subscription was on when the event occurred
    pub plan_id: String,
}

model_builder! {
    model = SubscriptionEvent,
    builder = SubscriptionEventBuilder,
    required = {
        id: String,
        subscription_event_type: String,
        effective_date: String,
        plan_id: String,
    },
    optional = {},
    clearable = {},
}

/// Response body for listing subscription events.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListSubscriptionEventsResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// Events, newest first
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_events: Option<Vec<SubscriptionEvent>>,

    /// Continuation token; absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

api_response!(
    CreateSubscriptionResponse,
    SearchSubscriptionsResponse,
    RetrieveSubscriptionResponse,
    UpdateSubscriptionResponse,
    CancelSubscriptionResponse,
    ListSubscriptionEventsResponse,
);

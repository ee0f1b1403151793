//! Cash drawer shifts (v1 API).

use serde::{Deserialize, Serialize};

use crate::http::HttpContext;
use crate::macros::{api_response, model_builder};
use crate::models::Money;

/// One opening-to-closing period of a register's cash drawer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct V1CashDrawerShift {
    /// Server-assigned shift identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Current state, e.g. `OPEN`, `ENDED` or `CLOSED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// When the drawer was opened, ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_at: Option<String>,

    /// When the drawer was ended, ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,

    /// When the drawer was closed, ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,

    /// Employee note describing the shift
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cash in the drawer at open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_cash_money: Option<Money>,

    /// Cash the drawer should hold, from recorded events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_cash_money: Option<Money>,

    /// Cash counted in the drawer at close
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_cash_money: Option<Money>,

    /// Device the drawer belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

model_builder! {
    model = V1CashDrawerShift,
    builder = V1CashDrawerShiftBuilder,
    required = {},
    optional = {
        id: String,
        event_type: String,
        opened_at: String,
        ended_at: String,
        closed_at: String,
        description: String,
        starting_cash_money: Money,
        expected_cash_money: Money,
        closed_cash_money: Money,
        device_id: String,
    },
    clearable = {},
}

/// Response body for listing cash drawer shifts.
///
/// The v1 endpoint answers with a bare JSON array; the endpoint method
/// wraps it into this model so the exchange context has somewhere to live.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct V1ListCashDrawerShiftsResponse {
    /// Shifts in the requested window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<V1CashDrawerShift>>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

api_response!(V1ListCashDrawerShiftsResponse);

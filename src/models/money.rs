//! Monetary amounts.

use serde::{Deserialize, Serialize};

use crate::macros::model_builder;

/// An amount of money in the smallest denomination of its currency.
///
/// `amount` is in base units (cents for USD); `currency` is an ISO 4217
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the smallest currency denomination; may be negative
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,

    /// ISO 4217 currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

model_builder! {
    model = Money,
    builder = MoneyBuilder,
    required = {},
    optional = {
        amount: i64,
        currency: String,
    },
    clearable = {},
}

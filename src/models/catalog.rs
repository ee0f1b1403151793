//! Catalog objects.

use serde::{Deserialize, Serialize};

use crate::macros::model_builder;
use crate::models::Money;

/// A discount definition in the seller's catalog.
///
/// Percentage discounts carry `percentage`; fixed-amount discounts carry
/// `amount_money`. `VARIABLE_*` discount types carry neither and take the
/// value at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogDiscount {
    /// Discount display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// How the discount is computed, e.g. `FIXED_PERCENTAGE`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<String>,

    /// Percentage as a decimal string, e.g. `"7.25"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<String>,

    /// Fixed discount amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,

    /// Whether applying the discount requires a manager PIN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_required: Option<bool>,

    /// Color of the discount button in point-of-sale UIs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_color: Option<String>,

    /// Whether the discount changes the basis taxes apply to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modify_tax_basis: Option<String>,
}

model_builder! {
    model = CatalogDiscount,
    builder = CatalogDiscountBuilder,
    required = {},
    optional = {
        name: String,
        discount_type: String,
        percentage: String,
        amount_money: Money,
        pin_required: bool,
        label_color: String,
        modify_tax_basis: String,
    },
    clearable = {},
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_discount_wire_shape() {
        let discount = CatalogDiscount::builder()
            .name("Happy hour")
            .discount_type("FIXED_PERCENTAGE")
            .percentage("15")
            .pin_required(false)
            .build();

        assert_eq!(
            serde_json::to_string(&discount).unwrap(),
            r#"{"name":"Happy hour","discount_type":"FIXED_PERCENTAGE","percentage":"15","pin_required":false}"#
        );
    }

    #[test]
    fn test_builder_round_trip() {
        let discount = CatalogDiscount::builder()
            .name("Comp")
            .discount_type("FIXED_AMOUNT")
            .amount_money(Money::builder().amount(500).currency("USD").build())
            .build();

        assert_eq!(discount.to_builder().build(), discount);
    }
}

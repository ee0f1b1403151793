//! Orders and line items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::http::HttpContext;
use crate::macros::{api_response, model_builder};
use crate::models::{Error, Money};

/// A quantity unit associated with a line item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderQuantityUnit {
    /// The unit quantities are measured in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<MeasurementUnit>,

    /// Number of decimal places quantities of this unit may carry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<i32>,
}

model_builder! {
    model = OrderQuantityUnit,
    builder = OrderQuantityUnitBuilder,
    required = {},
    optional = {
        measurement_unit: MeasurementUnit,
        precision: i32,
    },
    clearable = {},
}

/// A unit of measurement, standard or seller-defined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurementUnit {
    /// Seller-defined unit, set when `unit_type` is `TYPE_CUSTOM`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_unit: Option<MeasurementUnitCustom>,

    /// Standard area unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_unit: Option<String>,

    /// Standard weight unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,

    /// Standard generic (count) unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_unit: Option<String>,

    /// Standard time unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,

    /// Which of the unit families applies
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
}

model_builder! {
    model = MeasurementUnit,
    builder = MeasurementUnitBuilder,
    required = {},
    optional = {
        custom_unit: MeasurementUnitCustom,
        area_unit: String,
        weight_unit: String,
        generic_unit: String,
        time_unit: String,
        unit_type: String,
    },
    clearable = {},
}

/// A seller-defined unit of measurement.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeasurementUnitCustom {
    /// Unit name, e.g. `bushel`
    pub name: String,

    /// Unit abbreviation shown on receipts, e.g. `bsh`
    pub abbreviation: String,
}

model_builder! {
    model = MeasurementUnitCustom,
    builder = MeasurementUnitCustomBuilder,
    required = {
        name: String,
        abbreviation: String,
    },
    optional = {},
    clearable = {},
}

/// A modifier applied to a line item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderLineItemModifier {
    /// Unique identifier within the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Catalog object the modifier references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,

    /// Modifier display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Base price of the modifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price_money: Option<Money>,

    /// Total price of the modifier for the line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_money: Option<Money>,
}

model_builder! {
    model = OrderLineItemModifier,
    builder = OrderLineItemModifierBuilder,
    required = {},
    optional = {
        uid: String,
        catalog_object_id: String,
        name: String,
        base_price_money: Money,
        total_price_money: Money,
    },
    clearable = {},
}

/// A tax applied to a line item, referencing an order-level tax by uid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderLineItemAppliedTax {
    /// Unique identifier within the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// `uid` of the order-level tax being applied
    pub tax_uid: String,

    /// Amount of tax applied to the line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
}

model_builder! {
    model = OrderLineItemAppliedTax,
    builder = OrderLineItemAppliedTaxBuilder,
    required = {
        tax_uid: String,
    },
    optional = {
        uid: String,
        applied_money: Money,
    },
    clearable = {},
}

/// A discount applied to a line item, referencing an order-level discount
/// by uid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderLineItemAppliedDiscount {
    /// Unique identifier within the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// `uid` of the order-level discount being applied
    pub discount_uid: String,

    /// Amount of discount applied to the line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_money: Option<Money>,
}

model_builder! {
    model = OrderLineItemAppliedDiscount,
    builder = OrderLineItemAppliedDiscountBuilder,
    required = {
        discount_uid: String,
    },
    optional = {
        uid: String,
        applied_money: Money,
    },
    clearable = {},
}

/// One line of an order.
///
/// `quantity` is a decimal carried as a string, up to 5 decimal places.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// Unique identifier within the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Quantity purchased, as a decimal string
    pub quantity: String,

    /// Unit the quantity is measured in, when not a whole count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<OrderQuantityUnit>,

    /// Seller note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Catalog object the line item references
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,

    /// Name of the referenced item variation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_name: Option<String>,

    /// Application-defined metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,

    /// Modifiers applied to the line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<OrderLineItemModifier>>,

    /// Taxes applied to the line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_taxes: Option<Vec<OrderLineItemAppliedTax>>,

    /// Discounts applied to the line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_discounts: Option<Vec<OrderLineItemAppliedDiscount>>,

    /// Base price per unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price_money: Option<Money>,

    /// Base price times quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_total_price_money: Option<Money>,

    /// Gross sales amount before taxes and discounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_sales_money: Option<Money>,

    /// Total tax on the line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_money: Option<Money>,

    /// Total discount on the line item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount_money: Option<Money>,

    /// Line item total
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,
}

model_builder! {
    model = OrderLineItem,
    builder = OrderLineItemBuilder,
    required = {
        quantity: String,
    },
    optional = {
        uid: String,
        name: String,
        quantity_unit: OrderQuantityUnit,
        note: String,
        catalog_object_id: String,
        variation_name: String,
        metadata: HashMap<String, String>,
        modifiers: Vec<OrderLineItemModifier>,
        applied_taxes: Vec<OrderLineItemAppliedTax>,
        applied_discounts: Vec<OrderLineItemAppliedDiscount>,
        base_price_money: Money,
        variation_total_price_money: Money,
        gross_sales_money: Money,
        total_tax_money: Money,
        total_discount_money: Money,
        total_money: Money,
    },
    clearable = {},
}

/// An order placed at a seller location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned order identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Location the order was placed at
    pub location_id: String,

    /// Caller-defined reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// Customer associated with the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Line items making up the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<OrderLineItem>>,

    /// Current order state, e.g. `OPEN` or `COMPLETED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Creation timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Order total after taxes and discounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_money: Option<Money>,

    /// Version for optimistic concurrency on updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

model_builder! {
    model = Order,
    builder = OrderBuilder,
    required = {
        location_id: String,
    },
    optional = {
        id: String,
        reference_id: String,
        customer_id: String,
        line_items: Vec<OrderLineItem>,
        state: String,
        created_at: String,
        updated_at: String,
        total_money: Money,
        version: i32,
    },
    clearable = {},
}

/// Request body for creating an order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// The order to create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,

    /// Caller-supplied deduplication key, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

model_builder! {
    model = CreateOrderRequest,
    builder = CreateOrderRequestBuilder,
    required = {},
    optional = {
        order: Order,
        idempotency_key: String,
    },
    clearable = {},
}

/// Response body for creating an order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    /// The created order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,

    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

/// Request body for retrieving a batch of orders by ID.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchRetrieveOrdersRequest {
    /// IDs of the orders to retrieve, at most 100
    pub order_ids: Vec<String>,
}

model_builder! {
    model = BatchRetrieveOrdersRequest,
    builder = BatchRetrieveOrdersRequestBuilder,
    required = {
        order_ids: Vec<String>,
    },
    optional = {},
    clearable = {},
}

/// Response body for a batch order retrieval.
///
/// `orders` and `errors` are both per-item lists from the API, passed
/// through verbatim; a partially-successful batch carries both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchRetrieveOrdersResponse {
    /// Orders that were found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,

    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

api_response!(CreateOrderResponse, BatchRetrieveOrdersResponse);

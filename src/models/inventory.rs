//! Inventory counts.

use serde::{Deserialize, Serialize};

use crate::http::HttpContext;
use crate::macros::{api_response, model_builder};
use crate::models::Error;

/// The application a change or count originated from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceApplication {
    /// Product family, e.g. `SQUARE_POS` or `EXTERNAL_API`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// Application id, set when `product` is `EXTERNAL_API`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// Display name of the application
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

model_builder! {
    model = SourceApplication,
    builder = SourceApplicationBuilder,
    required = {},
    optional = {
        product: String,
        application_id: String,
        name: String,
    },
    clearable = {},
}

/// A verified in-person count of items on hand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryPhysicalCount {
    /// Server-assigned count identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Caller-defined reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// Item variation that was counted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_id: Option<String>,

    /// Type of the counted catalog object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_object_type: Option<String>,

    /// Inventory state of the counted items, e.g. `IN_STOCK`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Location the count took place at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Counted quantity, as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// Application the count was submitted from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceApplication>,

    /// Employee who performed the count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,

    /// When the count was taken, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,

    /// When the count was received, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

model_builder! {
    model = InventoryPhysicalCount,
    builder = InventoryPhysicalCountBuilder,
    required = {},
    optional = {
        id: String,
        reference_id: String,
        catalog_object_id: String,
        catalog_object_type: String,
        state: String,
        location_id: String,
        quantity: String,
        source: SourceApplication,
        employee_id: String,
        occurred_at: String,
        created_at: String,
    },
    clearable = {},
}

/// Response body for retrieving a physical count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetrieveInventoryPhysicalCountResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// The requested count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<InventoryPhysicalCount>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

api_response!(RetrieveInventoryPhysicalCountResponse);

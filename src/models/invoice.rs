//! Invoices.

use serde::{Deserialize, Serialize};

use crate::http::HttpContext;
use crate::macros::{api_response, model_builder};
use crate::models::{Address, Error};

/// The customer an invoice is sent to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvoiceRecipient {
    /// Customer the recipient details are drawn from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Recipient given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Recipient family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    /// Recipient email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Recipient postal address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Recipient phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Recipient company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

model_builder! {
    model = InvoiceRecipient,
    builder = InvoiceRecipientBuilder,
    required = {},
    optional = {
        customer_id: String,
        given_name: String,
        family_name: String,
        email_address: String,
        address: Address,
        phone_number: String,
        company_name: String,
    },
    clearable = {},
}

/// An invoice for an order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Invoice {
    /// Server-assigned invoice identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Version for optimistic concurrency on updates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    /// Location that owns the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Order the invoice bills for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Customer the invoice is addressed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_recipient: Option<InvoiceRecipient>,

    /// Seller-facing invoice number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Title shown on the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description shown on the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// When the invoice is scheduled to be delivered, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,

    /// Current status, e.g. `DRAFT` or `PAID`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// IANA timezone the invoice dates are interpreted in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Creation timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

model_builder! {
    model = Invoice,
    builder = InvoiceBuilder,
    required = {},
    optional = {
        id: String,
        version: i32,
        location_id: String,
        order_id: String,
        primary_recipient: InvoiceRecipient,
        invoice_number: String,
        title: String,
        description: String,
        scheduled_at: String,
        status: String,
        timezone: String,
        created_at: String,
        updated_at: String,
    },
    clearable = {},
}

/// Request body for updating a draft invoice.
///
/// Fields named in `fields_to_clear` are removed from the invoice
/// remotely; the list rides the request verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateInvoiceRequest {
    /// Field values to change, including the current `version`
    pub invoice: Invoice,

    /// Caller-supplied deduplication key, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,

    /// Invoice field names to clear, e.g. `payment_requests[0].reminders`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_to_clear: Option<Vec<String>>,
}

model_builder! {
    model = UpdateInvoiceRequest,
    builder = UpdateInvoiceRequestBuilder,
    required = {
        invoice: Invoice,
    },
    optional = {
        idempotency_key: String,
        fields_to_clear: Vec<String>,
    },
    clearable = {},
}

/// Response body for updating an invoice.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateInvoiceResponse {
    /// The invoice after the update
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<Invoice>,

    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

api_response!(UpdateInvoiceResponse);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_to_clear_rides_verbatim() {
        let request = UpdateInvoiceRequest::builder(
            Invoice::builder()
                .id("inv:0-ChCHu2mZEabLeeHahQnXDjZQECY")
                .version(1)
                .title("June services")
                .build(),
        )
        .idempotency_key("4ee82288-0910-499e-ab4c-5d0071dad1be")
        .fields_to_clear(vec!["description".to_string(), "scheduled_at".to_string()])
        .build();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["fields_to_clear"],
            serde_json::json!(["description", "scheduled_at"])
        );
        assert_eq!(json["invoice"]["version"], 1);
        assert_eq!(
            json["idempotency_key"],
            "4ee82288-0910-499e-ab4c-5d0071dad1be"
        );
    }

    #[test]
    fn test_builder_round_trip() {
        let request = UpdateInvoiceRequest::builder(
            Invoice::builder().id("inv_1").version(3).build(),
        )
        .fields_to_clear(vec!["title".to_string()])
        .build();

        assert_eq!(request.to_builder().build(), request);
    }
}

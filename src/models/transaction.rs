//! Transactions, tenders and refunds.

use serde::{Deserialize, Serialize};

use crate::http::HttpContext;
use crate::macros::{api_response, model_builder};
use crate::models::{Address, Error, Money};

/// Card details of a card tender.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TenderCardDetails {
    /// Card payment status, e.g. `CAPTURED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// How the card was provided, e.g. `SWIPED` or `KEYED`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_method: Option<String>,
}

model_builder! {
    model = TenderCardDetails,
    builder = TenderCardDetailsBuilder,
    required = {},
    optional = {
        status: String,
        entry_method: String,
    },
    clearable = {},
}

/// Cash details of a cash tender.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TenderCashDetails {
    /// Amount the buyer handed over
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_tendered_money: Option<Money>,

    /// Change returned to the buyer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_back_money: Option<Money>,
}

model_builder! {
    model = TenderCashDetails,
    builder = TenderCashDetailsBuilder,
    required = {},
    optional = {
        buyer_tendered_money: Money,
        change_back_money: Money,
    },
    clearable = {},
}

/// A payment method used in a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tender {
    /// Server-assigned tender identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Location the payment was taken at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Transaction the tender belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Creation timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Seller note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Amount charged to this tender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_money: Option<Money>,

    /// Tip amount on this tender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_money: Option<Money>,

    /// Processing fee taken on this tender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_fee_money: Option<Money>,

    /// Paying customer, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Payment method family, e.g. `CARD` or `CASH`
    #[serde(rename = "type")]
    pub tender_type: String,

    /// Card details, set when `type` is `CARD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_details: Option<TenderCardDetails>,

    /// Cash details, set when `type` is `CASH`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash_details: Option<TenderCashDetails>,
}

model_builder! {
    model = Tender,
    builder = TenderBuilder,
    required = {
        tender_type: String,
    },
    optional = {
        id: String,
        location_id: String,
        transaction_id: String,
        created_at: String,
        note: String,
        amount_money: Money,
        tip_money: Money,
        processing_fee_money: Money,
        customer_id: String,
        card_details: TenderCardDetails,
        cash_details: TenderCashDetails,
    },
    clearable = {},
}

/// A refund issued against a tender.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Refund {
    /// Server-assigned refund identifier
    pub id: String,

    /// Location the refund was issued at
    pub location_id: String,

    /// Reason the seller gave for the refund
    pub reason: String,

    /// Refunded amount
    pub amount_money: Money,

    /// Current status, e.g. `PENDING` or `APPROVED`
    pub status: String,

    /// Transaction the refunded tender belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    /// Tender the refund was issued against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tender_id: Option<String>,

    /// Creation timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Processing fee returned with the refund
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_fee_money: Option<Money>,
}

model_builder! {
    model = Refund,
    builder = RefundBuilder,
    required = {
        id: String,
        location_id: String,
        reason: String,
        amount_money: Money,
        status: String,
    },
    optional = {
        transaction_id: String,
        tender_id: String,
        created_at: String,
        processing_fee_money: Money,
    },
    clearable = {},
}

/// A payment or refund event at a location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    /// Server-assigned transaction identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Location the transaction was processed at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Creation timestamp, RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Payment methods used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenders: Option<Vec<Tender>>,

    /// Refunds issued against the transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,

    /// Caller-defined reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,

    /// Square product that processed the transaction, e.g. `REGISTER`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// Caller-supplied deduplication key the transaction was created with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Shipping address, when collected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    /// Order the transaction paid for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

model_builder! {
    model = Transaction,
    builder = TransactionBuilder,
    required = {},
    optional = {
        id: String,
        location_id: String,
        created_at: String,
        tenders: Vec<Tender>,
        refunds: Vec<Refund>,
        reference_id: String,
        product: String,
        client_id: String,
        shipping_address: Address,
        order_id: String,
    },
    clearable = {},
}

/// Response body for listing transactions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListTransactionsResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// Transactions in the requested window, newest first by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Transaction>>,

    /// Continuation token; absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

/// Response body for retrieving a transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RetrieveTransactionResponse {
    /// Errors reported by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Error>>,

    /// The requested transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction: Option<Transaction>,

    #[serde(skip)]
    pub http_context: Option<HttpContext>,
}

api_response!(ListTransactionsResponse, RetrieveTransactionResponse);

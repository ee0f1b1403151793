//! Postal addresses.

use serde::{Deserialize, Serialize};

use crate::macros::model_builder;

/// A physical address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// First line of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<String>,

    /// Second line of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,

    /// Third line of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_3: Option<String>,

    /// City or town
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,

    /// District below the city level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublocality: Option<String>,

    /// State, province or other top-level district
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrative_district_level_1: Option<String>,

    /// Postal or ZIP code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Two-letter ISO 3166-1 country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Recipient first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Recipient last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

model_builder! {
    model = Address,
    builder = AddressBuilder,
    required = {},
    optional = {
        address_line_1: String,
        address_line_2: String,
        address_line_3: String,
        locality: String,
        sublocality: String,
        administrative_district_level_1: String,
        postal_code: String,
        country: String,
        first_name: String,
        last_name: String,
    },
    clearable = {},
}

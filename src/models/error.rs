//! Structured errors returned by the Square API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::macros::model_builder;

/// One entry of the `errors` list Square returns on failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Error {
    /// High-level category, e.g. `INVALID_REQUEST_ERROR`
    pub category: String,

    /// Machine-readable code, e.g. `VALUE_TOO_LOW`
    pub code: String,

    /// Human-readable description of the problem
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Name of the request field the error applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

model_builder! {
    model = Error,
    builder = ErrorBuilder,
    required = {
        category: String,
        code: String,
    },
    optional = {
        detail: String,
        field: String,
    },
    clearable = {},
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.category)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

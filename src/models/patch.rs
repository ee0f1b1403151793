//! Tri-state request fields: absent, explicit null, or a value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that distinguishes "not sent" from "sent as null" from "sent
/// with a value".
///
/// Square update endpoints clear a previously-set field when the request
/// carries it as an explicit `null`; leaving it out leaves the remote value
/// untouched. `Option` cannot express that difference, so fields with clear
/// semantics use this type instead, paired with
/// `#[serde(default, skip_serializing_if = "Patch::is_absent")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patch<T> {
    /// Omitted from serialized output entirely.
    #[default]
    Absent,
    /// Serialized as an explicit `null`, clearing the remote value.
    Null,
    /// Serialized with this value.
    Value(T),
}

impl<T> Patch<T> {
    /// True when the field would be omitted from serialized output.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True when the field serializes as an explicit `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The carried value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Absent is dropped by skip_serializing_if before this runs.
            Self::Absent | Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(|opt| match opt {
            Some(value) => Self::Value(value),
            None => Self::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Default, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Patch::is_absent")]
        card_id: Patch<String>,
    }

    #[test]
    fn test_absent_is_omitted() {
        let json = serde_json::to_string(&Probe::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_null_serializes_as_null_token() {
        let probe = Probe {
            card_id: Patch::Null,
        };
        assert_eq!(serde_json::to_string(&probe).unwrap(), r#"{"card_id":null}"#);
    }

    #[test]
    fn test_value_serializes_as_value() {
        let probe = Probe {
            card_id: Patch::Value("ccof:qy5x8hHGYsgLrp4Q4GB".into()),
        };
        assert_eq!(
            serde_json::to_string(&probe).unwrap(),
            r#"{"card_id":"ccof:qy5x8hHGYsgLrp4Q4GB"}"#
        );
    }

    #[test]
    fn test_deserialize_keeps_three_states_apart() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert!(absent.card_id.is_absent());

        let null: Probe = serde_json::from_str(r#"{"card_id":null}"#).unwrap();
        assert!(null.card_id.is_null());

        let value: Probe = serde_json::from_str(r#"{"card_id":"ccof:x"}"#).unwrap();
        assert_eq!(value.card_id.value().map(String::as_str), Some("ccof:x"));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric event value, kept exactly as it arrived at the boundary.
///
/// Integers stay integers and floats stay floats; `Display` prints the same
/// digits that were received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(serde_json::Number);

impl Number {
    /// Returns `None` for NaN and infinities, which JSON cannot carry.
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self)
    }

    pub fn as_json(&self) -> &serde_json::Number {
        &self.0
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_i64() || self.0.is_u64()
    }
}

impl From<serde_json::Number> for Number {
    fn from(value: serde_json::Number) -> Self {
        Self(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self(value.into())
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The validated form of an inbound event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub number: Number,
}

/// Confirmation produced by a persistence adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveReceipt(String);

impl SaveReceipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SaveReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whatever the business logic returns; the entry adapter hands it back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response(String);

impl Response {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<SaveReceipt> for Response {
    fn from(receipt: SaveReceipt) -> Self {
        Self(receipt.0)
    }
}

impl From<String> for Response {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Response {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_keeps_input_digits() {
        let int: Number = serde_json::from_str("4").unwrap();
        assert_eq!(int.to_string(), "4");
        assert!(int.is_integer());

        let float: Number = serde_json::from_str("2.5").unwrap();
        assert_eq!(float.to_string(), "2.5");
        assert!(!float.is_integer());

        let negative = Number::from(-17i64);
        assert_eq!(negative.to_string(), "-17");
    }

    #[test]
    fn test_number_rejects_non_finite_floats() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
        assert!(Number::from_f64(0.5).is_some());
    }

    #[test]
    fn test_response_serializes_as_plain_string() {
        let response = Response::from(SaveReceipt::new("successfully saved to database: 4"));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, "\"successfully saved to database: 4\"");
    }
}

//! Attribute values carried in an object's `data` map.

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ObjectsError, Result};

/// Free-form attributes of an object, keyed by attribute name.
///
/// Key order carries no meaning; a sorted map keeps printed output stable.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A single attribute value.
///
/// Each variant maps to the JSON type of the same kind. Variants are tried
/// in declaration order when decoding, so `2019` is an [`Integer`],
/// integers past `i64::MAX` are [`Unsigned`] and `1849.99` a [`Float`].
///
/// [`Integer`]: AttributeValue::Integer
/// [`Unsigned`]: AttributeValue::Unsigned
/// [`Float`]: AttributeValue::Float
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Boolean(bool),
    /// Anything else the server sends back (null, arrays, nested objects).
    Other(serde_json::Value),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl AttributeValue {
    /// Interpret command-line input: integer, then float, then plain text.
    pub fn from_input(s: &str) -> Self {
        if let Ok(n) = s.parse::<i64>() {
            return Self::Integer(n);
        }
        if let Ok(n) = s.parse::<u64>() {
            return Self::Unsigned(n);
        }
        match s.parse::<f64>() {
            Ok(n) if n.is_finite() => Self::Float(n),
            _ => Self::Text(s.to_string()),
        }
    }
}

impl FromStr for AttributeValue {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_input(s))
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u64> for AttributeValue {
    fn from(n: u64) -> Self {
        Self::Unsigned(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Parse a `key=value` pair as given to `--attr`.
///
/// Only the first `=` splits; the value may itself contain `=`.
pub fn parse_attribute(s: &str) -> Result<(String, AttributeValue)> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| ObjectsError::InvalidAttribute(s.to_string()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(ObjectsError::InvalidAttribute(s.to_string()));
    }

    Ok((key.to_string(), AttributeValue::from_input(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_each_scalar_kind() {
        let attrs: Attributes = serde_json::from_value(json!({
            "year": 2019,
            "price": 1849.99,
            "CPU model": "Intel Core i9",
            "in stock": true
        }))
        .unwrap();

        assert_eq!(attrs["year"], AttributeValue::Integer(2019));
        assert_eq!(attrs["price"], AttributeValue::Float(1849.99));
        assert_eq!(attrs["CPU model"], AttributeValue::Text("Intel Core i9".into()));
        assert_eq!(attrs["in stock"], AttributeValue::Boolean(true));
    }

    #[test]
    fn test_integer_past_i64_keeps_precision() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"serial": 18446744073709551615}"#).unwrap();

        assert_eq!(attrs["serial"], AttributeValue::Unsigned(u64::MAX));
        assert_eq!(attrs["serial"].to_string(), "18446744073709551615");
        assert_eq!(
            serde_json::to_string(&attrs).unwrap(),
            r#"{"serial":18446744073709551615}"#
        );
    }

    #[test]
    fn test_unknown_shapes_fall_back_to_other() {
        let attrs: Attributes = serde_json::from_value(json!({
            "colors": ["red", "blue"],
            "note": null
        }))
        .unwrap();

        assert_eq!(attrs["colors"], AttributeValue::Other(json!(["red", "blue"])));
        assert_eq!(attrs["note"], AttributeValue::Other(serde_json::Value::Null));
    }

    #[test]
    fn test_encodes_to_matching_json_types() {
        let mut attrs = Attributes::new();
        attrs.insert("year".into(), 2019_i64.into());
        attrs.insert("price".into(), 1849.99_f64.into());
        attrs.insert("Hard disk size".into(), "1 TB".into());

        let value = serde_json::to_value(&attrs).unwrap();
        assert!(value["year"].is_i64());
        assert!(value["price"].is_f64());
        assert_eq!(value["Hard disk size"], "1 TB");
    }

    #[test]
    fn test_display_is_bare_value() {
        assert_eq!(AttributeValue::Integer(2019).to_string(), "2019");
        assert_eq!(AttributeValue::Float(2049.99).to_string(), "2049.99");
        assert_eq!(AttributeValue::Text("silver".into()).to_string(), "silver");
        assert_eq!(AttributeValue::Other(json!([1, 2])).to_string(), "[1,2]");
    }

    #[test]
    fn test_from_str_prefers_integer_then_float() {
        assert_eq!("2019".parse::<AttributeValue>().unwrap(), AttributeValue::Integer(2019));
        assert_eq!("1849.99".parse::<AttributeValue>().unwrap(), AttributeValue::Float(1849.99));
        assert_eq!(
            "1 TB".parse::<AttributeValue>().unwrap(),
            AttributeValue::Text("1 TB".into())
        );
        assert_eq!(
            "18446744073709551615".parse::<AttributeValue>().unwrap(),
            AttributeValue::Unsigned(u64::MAX)
        );
        // "inf" and "NaN" parse as f64 but have no JSON form
        assert_eq!("NaN".parse::<AttributeValue>().unwrap(), AttributeValue::Text("NaN".into()));
    }

    #[test]
    fn test_parse_attribute() {
        let (key, value) = parse_attribute("CPU model=Intel Core i9").unwrap();
        assert_eq!(key, "CPU model");
        assert_eq!(value, AttributeValue::Text("Intel Core i9".into()));

        let (key, value) = parse_attribute("expr=a=b").unwrap();
        assert_eq!(key, "expr");
        assert_eq!(value, AttributeValue::Text("a=b".into()));
    }

    #[test]
    fn test_parse_attribute_rejects_malformed() {
        assert!(matches!(
            parse_attribute("no-separator"),
            Err(ObjectsError::InvalidAttribute(_))
        ));
        assert!(matches!(
            parse_attribute("=value"),
            Err(ObjectsError::InvalidAttribute(_))
        ));
    }
}

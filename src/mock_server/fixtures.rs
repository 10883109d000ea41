//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{AttributeValue, Attributes, ObjectRecord};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Create an object without attributes (`"data": null`).
    pub fn object(id: &str, name: &str) -> ObjectRecord {
        ObjectRecord {
            id: id.to_string(),
            name: name.to_string(),
            data: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Create an object with the given attributes.
    pub fn object_with_data<I, K, V>(id: &str, name: &str, data: I) -> ObjectRecord
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        let mut object = Self::object(id, name);
        object.data = Some(
            data.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<Attributes>(),
        );
        object
    }

    /// The seed catalogue: three phones, one of them without data.
    pub fn default_objects() -> Vec<ObjectRecord> {
        vec![
            Self::object_with_data(
                "1",
                "Google Pixel 6 Pro",
                [("color", "Cloudy White"), ("capacity", "128 GB")],
            ),
            Self::object("2", "Apple iPhone 12 Mini, 256GB, Blue"),
            Self::object_with_data(
                "3",
                "Apple iPhone 12 Pro Max",
                [
                    ("color", AttributeValue::from("Cloudy White")),
                    ("capacity GB", AttributeValue::from(512_i64)),
                ],
            ),
        ]
    }
}

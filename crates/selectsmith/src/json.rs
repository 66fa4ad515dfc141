//! Thin JSON (de)serialization helpers.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize a value to compact JSON text.
///
/// Object keys appear in the order the value's `Serialize` impl emits them
/// (struct fields in declaration order); no pretty-printing.
pub fn serialize<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Parse JSON text into a value of type `T`.
///
/// The parsed fields become the value's own data while `T`'s inherent impl
/// supplies its operations. Malformed input surfaces as the serializer's own
/// error, untouched.
pub fn deserialize<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::geometry::Rectangle;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn serializes_fields_in_declaration_order() {
        let sample = Sample {
            name: "fragment".into(),
            count: 3,
        };
        assert_eq!(
            serialize(&sample).unwrap(),
            r#"{"name":"fragment","count":3}"#
        );
    }

    #[test]
    fn round_trips_plain_data() {
        let sample = Sample {
            name: "roundtrip".into(),
            count: 7,
        };
        let text = serialize(&sample).unwrap();
        assert_eq!(deserialize::<Sample>(&text).unwrap(), sample);
    }

    #[test]
    fn deserialized_rectangle_keeps_its_operations() {
        let rect: Rectangle = deserialize(r#"{"width":10.0,"height":20.0}"#).unwrap();
        assert_eq!(rect.area(), 200.0);
    }

    #[test]
    fn malformed_text_propagates_parse_error() {
        assert!(deserialize::<Sample>("{not json").is_err());
    }
}

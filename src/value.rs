//! Value types for free-form and array-capable attributes.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Reference to a subplot declared in the layout (e.g. "mapbox2", "x3").
pub type SubplotId = String;

/// Heterogeneous fixed-length array attribute, such as a `dtickrange` pair.
pub type InfoArray = Vec<Any>;

/// Value for schema attributes that accept any JSON-representable payload.
///
/// Attributes like `meta`, `uirevision` or bin boundaries are free-form in
/// the Plotly schema. Instead of an open dynamic type, the accepted shapes
/// are enumerated and each variant serializes transparently, so
/// `Any::from("abc")` lands on the wire as the bare string `"abc"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Any {
    String(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    List(Vec<Any>),
    /// Ordered key/value mapping. Entries serialize in insertion order.
    Object(Vec<(String, Any)>),
}

impl Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Any::String(value) => serializer.serialize_str(value),
            Any::Number(value) => serializer.serialize_f64(*value),
            Any::Int(value) => serializer.serialize_i64(*value),
            Any::Bool(value) => serializer.serialize_bool(*value),
            Any::List(items) => items.serialize(serializer),
            Any::Object(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<&str> for Any {
    fn from(value: &str) -> Self {
        Any::String(value.to_string())
    }
}

impl From<String> for Any {
    fn from(value: String) -> Self {
        Any::String(value)
    }
}

impl From<f64> for Any {
    fn from(value: f64) -> Self {
        Any::Number(value)
    }
}

impl From<i64> for Any {
    fn from(value: i64) -> Self {
        Any::Int(value)
    }
}

impl From<bool> for Any {
    fn from(value: bool) -> Self {
        Any::Bool(value)
    }
}

impl From<Vec<Any>> for Any {
    fn from(items: Vec<Any>) -> Self {
        Any::List(items)
    }
}

/// Attribute that accepts either one value for the whole trace or one value
/// per datum (`arrayOk` in the Plotly schema).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrayOk<T> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T> From<T> for ArrayOk<T> {
    fn from(value: T) -> Self {
        ArrayOk::Scalar(value)
    }
}

impl From<&str> for ArrayOk<String> {
    fn from(value: &str) -> Self {
        ArrayOk::Scalar(value.to_string())
    }
}

impl<T> From<Vec<T>> for ArrayOk<T> {
    fn from(values: Vec<T>) -> Self {
        ArrayOk::Array(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_scalars_serialize_transparently() {
        assert_eq!(serde_json::to_string(&Any::from("abc")).unwrap(), "\"abc\"");
        assert_eq!(serde_json::to_string(&Any::from(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Any::from(42i64)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Any::from(true)).unwrap(), "true");
    }

    #[test]
    fn test_any_object_preserves_insertion_order() {
        let value = Any::Object(vec![
            ("zebra".to_string(), Any::from(1i64)),
            ("apple".to_string(), Any::from(2i64)),
        ]);
        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"zebra":1,"apple":2}"#
        );
    }

    #[test]
    fn test_any_list_nests() {
        let value = Any::List(vec![Any::from("M3"), Any::from(3.0)]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"["M3",3.0]"#);
    }

    #[test]
    fn test_array_ok_scalar_and_array() {
        let scalar: ArrayOk<String> = "one label".into();
        assert_eq!(serde_json::to_string(&scalar).unwrap(), "\"one label\"");

        let array: ArrayOk<f64> = vec![0.2, 0.4].into();
        assert_eq!(serde_json::to_string(&array).unwrap(), "[0.2,0.4]");
    }
}

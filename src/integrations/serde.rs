use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Serialize,
    de::{self, Deserializer},
    ser::{Error as _, SerializeMap as _, Serializer},
};

use crate::{
    ast::InputValue,
    error::ClientError,
    span::SourcePosition,
    value::{Object, ScalarValue, Value},
};

impl Serialize for ScalarValue {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(i) => ser.serialize_i64(*i),
            Self::Float(f) => ser.serialize_f64(*f),
            Self::String(s) => ser.serialize_str(s),
            Self::Boolean(b) => ser.serialize_bool(*b),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a valid JSON value")
            }

            fn visit_bool<E: de::Error>(self, b: bool) -> Result<Self::Value, E> {
                Ok(Value::scalar(b))
            }

            fn visit_i64<E: de::Error>(self, n: i64) -> Result<Self::Value, E> {
                Ok(Value::scalar(n))
            }

            fn visit_u64<E: de::Error>(self, n: u64) -> Result<Self::Value, E> {
                // Integers beyond `i64` are kept as floating point, the way
                // JavaScript clients treat them anyway.
                Ok(i64::try_from(n).map_or_else(|_| Value::scalar(n as f64), Value::scalar))
            }

            fn visit_f64<E: de::Error>(self, f: f64) -> Result<Self::Value, E> {
                Ok(Value::scalar(f))
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                Ok(Value::scalar(s))
            }

            fn visit_string<E: de::Error>(self, s: String) -> Result<Self::Value, E> {
                Ok(Value::scalar(s))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
            where
                V: de::SeqAccess<'de>,
            {
                let mut vals = Vec::with_capacity(visitor.size_hint().unwrap_or(0));
                while let Some(v) = visitor.next_element()? {
                    vals.push(v);
                }
                Ok(Value::list(vals))
            }

            fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
            where
                V: de::MapAccess<'de>,
            {
                let mut obj = Object::with_capacity(visitor.size_hint().unwrap_or(0));
                while let Some((key, val)) = visitor.next_entry::<String, Value>()? {
                    obj.add_field(key, val);
                }
                Ok(Value::object(obj))
            }
        }

        de.deserialize_any(Visitor)
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(self.field_count()))?;
        for (f, v) in self {
            map.serialize_key(f)?;
            map.serialize_value(v)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => ser.serialize_unit(),
            Self::Scalar(s) => s.serialize(ser),
            Self::List(l) => l.serialize(ser),
            Self::Object(o) => o.serialize(ser),
            Self::DateTime(dt) => ser.serialize_str(&dt.to_rfc3339()),
            Self::Bytes(b) => match std::str::from_utf8(b) {
                Ok(s) => ser.serialize_str(s),
                Err(e) => Err(S::Error::custom(format_args!("bytes are not valid UTF-8: {e}"))),
            },
            Self::Stringable(s) => ser.collect_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        Value::deserialize(de).map(Self::from)
    }
}

impl From<Value> for InputValue {
    /// Converts a variable value into the literal it would be written as.
    ///
    /// Host-native values become strings, in their serialized form.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Scalar(s) => Self::Scalar(s),
            Value::List(l) => Self::list(l.into_iter().map(Self::from).collect()),
            Value::Object(o) => Self::object(
                o.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect::<IndexMap<_, _>>(),
            ),
            Value::DateTime(dt) => Self::scalar(dt.to_rfc3339()),
            Value::Bytes(b) => Self::scalar(String::from_utf8_lossy(&b).into_owned()),
            Value::Stringable(s) => Self::scalar(s.to_string()),
        }
    }
}

impl Serialize for InputValue {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null | Self::Variable(_) => ser.serialize_unit(),
            Self::Scalar(s) => s.serialize(ser),
            Self::Enum(e) => ser.serialize_str(e),
            Self::List(l) => l.iter().map(|x| &x.item).collect::<Vec<_>>().serialize(ser),
            Self::Object(o) => o
                .iter()
                .map(|(k, v)| (k.item.as_str(), &v.item))
                .collect::<IndexMap<_, _>>()
                .serialize(ser),
        }
    }
}

impl Serialize for SourcePosition {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(2))?;

        let line = self.line() + 1;
        map.serialize_key("line")?;
        map.serialize_value(&line)?;

        let column = self.column() + 1;
        map.serialize_key("column")?;
        map.serialize_value(&column)?;

        map.end()
    }
}

impl Serialize for ClientError {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        let mut map = ser.serialize_map(Some(1 + usize::from(self.location().is_some())))?;

        map.serialize_key("message")?;
        map.serialize_value(self.message())?;

        if let Some(location) = self.location() {
            map.serialize_key("locations")?;
            map.serialize_value(&[location])?;
        }

        map.end()
    }
}

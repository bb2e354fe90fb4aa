mod object;

use std::{fmt, sync::Arc};

use chrono::{DateTime, FixedOffset};
use derive_more::with_trait::{Display, From};

pub use self::object::Object;

/// A primitive value: the leaves of both [`Value`] trees and literal
/// [`InputValue`]s.
///
/// [`InputValue`]: crate::InputValue
#[expect(missing_docs, reason = "self-explanatory")]
#[derive(Clone, Debug, Display, From, PartialEq)]
pub enum ScalarValue {
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

impl ScalarValue {
    /// View the underlying string, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// View the underlying integer, if present.
    ///
    /// Floats are never truncated into integers.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// View the underlying float, if present.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// View the underlying boolean, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<i32> for ScalarValue {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

/// An opaque object exposing nothing but a string conversion.
///
/// This is the "stringable object" case of string coercion: a host may hand
/// in any type implementing [`Display`](fmt::Display), and string-based
/// scalars coerce it through its display form.
#[derive(Clone)]
pub struct Stringable(Arc<dyn fmt::Display + Send + Sync>);

impl Stringable {
    /// Wraps the given displayable value.
    pub fn new<T: fmt::Display + Send + Sync + 'static>(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl fmt::Display for Stringable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Stringable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Stringable").field(&self.0.to_string()).finish()
    }
}

impl PartialEq for Stringable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

/// Loosely-typed value tree exchanged with the host engine.
///
/// Used for internal values handed to `serialize`, for variables handed to
/// `parse_value`, and for the wire values produced by `serialize`.
///
/// Besides the JSON-like variants, it carries the host-native values the
/// scalars have to tell apart: parsed date-times, raw byte strings of unknown
/// encoding and opaque [`Stringable`] objects.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Explicit `null`.
    Null,
    /// Primitive value.
    Scalar(ScalarValue),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Ordered key/value map.
    Object(Object),
    /// Parsed point in time with a fixed UTC offset.
    DateTime(DateTime<FixedOffset>),
    /// Raw byte string, not necessarily valid UTF-8.
    Bytes(Vec<u8>),
    /// Opaque object exposing only its string form.
    Stringable(Stringable),
}

impl Value {
    /// Construct a `null` value.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct a scalar value.
    pub fn scalar<T: Into<ScalarValue>>(s: T) -> Self {
        Self::Scalar(s.into())
    }

    /// Construct a list value.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l)
    }

    /// Construct an object value.
    pub fn object(o: Object) -> Self {
        Self::Object(o)
    }

    /// Does this value represent `null`?
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// View the underlying scalar value, if present.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// View the underlying string value, if present.
    pub fn as_string_value(&self) -> Option<&str> {
        self.as_scalar().and_then(ScalarValue::as_str)
    }

    /// View the underlying integer value, if present.
    pub fn as_int_value(&self) -> Option<i64> {
        self.as_scalar().and_then(ScalarValue::as_int)
    }

    /// View the underlying float value, if present.
    pub fn as_float_value(&self) -> Option<f64> {
        self.as_scalar().and_then(ScalarValue::as_float)
    }

    /// View the underlying list, if present.
    pub fn as_list_value(&self) -> Option<&Vec<Self>> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    /// View the underlying object, if present.
    pub fn as_object_value(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// View the underlying date-time, if present.
    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Short name of the kind of this value, used where a value cannot be
    /// printed in full.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(ScalarValue::Int(_)) => "int",
            Self::Scalar(ScalarValue::Float(_)) => "float",
            Self::Scalar(ScalarValue::String(_)) => "string",
            Self::Scalar(ScalarValue::Boolean(_)) => "boolean",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::DateTime(_) => "date-time",
            Self::Bytes(_) => "bytes",
            Self::Stringable(_) => "stringable object",
        }
    }
}

impl From<ScalarValue> for Value {
    fn from(s: ScalarValue) -> Self {
        Self::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::scalar(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::scalar(s)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::scalar(i)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::scalar(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::scalar(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::scalar(b)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::DateTime(dt)
    }
}

impl From<Stringable> for Value {
    fn from(s: Stringable) -> Self {
        Self::Stringable(s)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScalarValue, Stringable, Value};

    #[test]
    fn scalar_accessors_do_not_convert() {
        let int = Value::scalar(12);
        let float = Value::scalar(12.0);
        let string = Value::scalar("12");

        assert_eq!(int.as_int_value(), Some(12));
        assert_eq!(float.as_int_value(), None);
        assert_eq!(string.as_int_value(), None);
        assert_eq!(string.as_string_value(), Some("12"));
        assert_eq!(float.as_float_value(), Some(12.0));
    }

    #[test]
    fn scalar_display() {
        assert_eq!(ScalarValue::from(1).to_string(), "1");
        assert_eq!(ScalarValue::from(1.5).to_string(), "1.5");
        assert_eq!(ScalarValue::from("foo").to_string(), "foo");
        assert_eq!(ScalarValue::from(true).to_string(), "true");
    }

    #[test]
    fn stringables_compare_by_display() {
        let a = Stringable::new("foo");
        let b = Stringable::new(String::from("foo"));

        assert_eq!(a, b);
        assert_ne!(a, Stringable::new("bar"));
        assert_eq!(format!("{a:?}"), "Stringable(\"foo\")");
    }

    #[test]
    fn option_converts_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::scalar("x"));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::list(vec![]).type_name(), "list");
        assert_eq!(Value::Bytes(vec![0xB1]).type_name(), "bytes");
        assert_eq!(Value::scalar(false).type_name(), "boolean");
    }
}

use std::{collections::HashMap, fmt};

use indexmap::IndexMap;

use crate::{
    span::Spanning,
    value::{Object, ScalarValue, Value},
};

/// Variables provided alongside a query document, keyed by name (without the
/// leading `$`).
pub type Variables = HashMap<String, InputValue>;

/// A literal value as it appears in a query document.
///
/// Literals are produced by the host engine's parser. They are _not_ constant
/// and might contain variables. Lists and objects variants are _spanned_, i.e.
/// they contain a reference to their position in the query, if available.
#[derive(Clone, Debug, PartialEq)]
#[expect(missing_docs, reason = "self-explanatory")]
pub enum InputValue {
    Null,
    Scalar(ScalarValue),
    Enum(String),
    Variable(String),
    List(Vec<Spanning<InputValue>>),
    Object(Vec<(Spanning<String>, Spanning<InputValue>)>),
}

impl InputValue {
    /// Construct a `null` literal.
    pub fn null() -> Self {
        Self::Null
    }

    /// Construct a scalar literal.
    pub fn scalar<T: Into<ScalarValue>>(v: T) -> Self {
        Self::Scalar(v.into())
    }

    /// Construct an enum literal.
    pub fn enum_value<T: AsRef<str>>(s: T) -> Self {
        Self::Enum(s.as_ref().into())
    }

    /// Construct a variable reference.
    pub fn variable<T: AsRef<str>>(v: T) -> Self {
        Self::Variable(v.as_ref().into())
    }

    /// Construct a [`Spanning::unlocated`] list.
    pub fn list(l: Vec<Self>) -> Self {
        Self::List(l.into_iter().map(Spanning::unlocated).collect())
    }

    /// Construct a [`Spanning::unlocated`] object.
    pub fn object<K: AsRef<str>>(o: IndexMap<K, Self>) -> Self {
        Self::Object(
            o.into_iter()
                .map(|(k, v)| {
                    (
                        Spanning::unlocated(k.as_ref().into()),
                        Spanning::unlocated(v),
                    )
                })
                .collect(),
        )
    }

    /// Does the literal represent a `null`?
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

    /// View the underlying int value, if present.
    pub fn as_int_value(&self) -> Option<i64> {
        self.as_scalar().and_then(ScalarValue::as_int)
    }

    /// Raw source text of a literal that carries a single value: strings,
    /// numbers, booleans and enums.
    ///
    /// Returns [`None`] for `null`, variables, lists and objects.
    pub fn raw_value(&self) -> Option<String> {
        match self {
            // `1.0` has to decode as a float again.
            Self::Scalar(ScalarValue::Float(f)) => Some(format!("{f:?}")),
            Self::Scalar(s) => Some(s.to_string()),
            Self::Enum(e) => Some(e.clone()),
            Self::Null | Self::Variable(_) | Self::List(_) | Self::Object(_) => None,
        }
    }

    /// Name of the syntax node kind of this literal, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NullValue",
            Self::Scalar(ScalarValue::Int(_)) => "IntValue",
            Self::Scalar(ScalarValue::Float(_)) => "FloatValue",
            Self::Scalar(ScalarValue::String(_)) => "StringValue",
            Self::Scalar(ScalarValue::Boolean(_)) => "BooleanValue",
            Self::Enum(_) => "EnumValue",
            Self::Variable(_) => "Variable",
            Self::List(_) => "ListValue",
            Self::Object(_) => "ObjectValue",
        }
    }

    /// Converts this literal into the equivalent untyped [`Value`] tree.
    ///
    /// Enums become strings. Variables are not resolved and become `null`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null | Self::Variable(_) => Value::Null,
            Self::Scalar(s) => Value::Scalar(s.clone()),
            Self::Enum(e) => Value::scalar(e.as_str()),
            Self::List(l) => Value::List(l.iter().map(|s| s.item.to_value()).collect()),
            Self::Object(o) => Value::Object(
                o.iter()
                    .map(|(k, v)| (k.item.as_str(), v.item.to_value()))
                    .collect::<Object>(),
            ),
        }
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Scalar(ScalarValue::String(s)) => {
                write!(f, "{}", serde_json::Value::from(s.as_str()))
            }
            Self::Scalar(ScalarValue::Float(v)) => write!(f, "{v:?}"),
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Enum(v) => write!(f, "{v}"),
            Self::Variable(v) => write!(f, "${v}"),
            Self::List(v) => {
                write!(f, "[")?;
                for (i, spanning) in v.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    spanning.item.fmt(f)?;
                }
                write!(f, "]")
            }
            Self::Object(o) => {
                write!(f, "{{")?;
                for (i, (k, v)) in o.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: ", k.item)?;
                    v.item.fmt(f)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl<T> From<Option<T>> for InputValue
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

impl From<&str> for InputValue {
    fn from(s: &str) -> Self {
        Self::scalar(s)
    }
}

impl From<String> for InputValue {
    fn from(s: String) -> Self {
        Self::scalar(s)
    }
}

impl From<i32> for InputValue {
    fn from(i: i32) -> Self {
        Self::scalar(i)
    }
}

impl From<i64> for InputValue {
    fn from(i: i64) -> Self {
        Self::scalar(i)
    }
}

impl From<f64> for InputValue {
    fn from(f: f64) -> Self {
        Self::scalar(f)
    }
}

impl From<bool> for InputValue {
    fn from(b: bool) -> Self {
        Self::scalar(b)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Value, graphql_input_value, graphql_value};

    use super::InputValue;

    #[test]
    fn input_value_fmt() {
        let value: InputValue = graphql_input_value!(null);
        assert_eq!(value.to_string(), "null");

        let value: InputValue = graphql_input_value!(123);
        assert_eq!(value.to_string(), "123");

        let value: InputValue = graphql_input_value!(12.3);
        assert_eq!(value.to_string(), "12.3");

        let value: InputValue = graphql_input_value!(12.0);
        assert_eq!(value.to_string(), "12.0");

        let value: InputValue = graphql_input_value!("FOO");
        assert_eq!(value.to_string(), "\"FOO\"");

        let value: InputValue = graphql_input_value!(r#"say "hi""#);
        assert_eq!(value.to_string(), r#""say \"hi\"""#);

        let value: InputValue = graphql_input_value!(true);
        assert_eq!(value.to_string(), "true");

        let value: InputValue = graphql_input_value!(BAR);
        assert_eq!(value.to_string(), "BAR");

        let value: InputValue = graphql_input_value!(@baz);
        assert_eq!(value.to_string(), "$baz");

        let value: InputValue = graphql_input_value!([1, 2]);
        assert_eq!(value.to_string(), "[1, 2]");

        let value: InputValue = graphql_input_value!({"foo": 1, "bar": 2});
        assert_eq!(value.to_string(), "{foo: 1, bar: 2}");
    }

    #[test]
    fn kinds() {
        assert_eq!(graphql_input_value!(1).kind(), "IntValue");
        assert_eq!(graphql_input_value!("s").kind(), "StringValue");
        assert_eq!(graphql_input_value!(@v).kind(), "Variable");
        assert_eq!(graphql_input_value!([]).kind(), "ListValue");
    }

    #[test]
    fn raw_value_only_for_single_value_literals() {
        assert_eq!(graphql_input_value!("x").raw_value().as_deref(), Some("x"));
        assert_eq!(graphql_input_value!(12).raw_value().as_deref(), Some("12"));
        assert_eq!(graphql_input_value!(1.0).raw_value().as_deref(), Some("1.0"));
        assert_eq!(graphql_input_value!(2.5).raw_value().as_deref(), Some("2.5"));
        assert_eq!(graphql_input_value!(ENUM).raw_value().as_deref(), Some("ENUM"));
        assert_eq!(graphql_input_value!(null).raw_value(), None);
        assert_eq!(graphql_input_value!([1]).raw_value(), None);
    }

    #[test]
    fn to_value_converts_nested_literals() {
        let literal = graphql_input_value!({"a": [{"b": "c"}], "d": [1, 2.5, true, E]});

        assert_eq!(
            literal.to_value(),
            graphql_value!({"a": [{"b": "c"}], "d": [1, 2.5, true, "E"]}),
        );
        assert_eq!(graphql_input_value!(null).to_value(), Value::Null);
    }
}

//! Arbitrary data encoded as JSON text.

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, CodecError, CoercionError, ErrorKind, ServerError, TraceRejection as _},
    span::Spanning,
    types::{
        base::{ParseLiteral, ParseValue, ScalarMeta, ScalarType, SerializeScalar},
        utilities::coerce_to_string,
    },
    value::Value,
};

/// Scalar transporting arbitrary data as a JSON string.
///
/// Internal values are encoded into JSON text on the way out, and inputs are
/// decoded from JSON text into [`Value`] trees on the way in.
///
/// ```rust
/// # use juniper_scalars::{graphql_value, Json, ParseValue as _, SerializeScalar as _};
/// #
/// let json = Json::new();
///
/// assert_eq!(
///     json.serialize(&graphql_value!({"a": [1, 2]})).ok(),
///     Some(graphql_value!(r#"{"a":[1,2]}"#)),
/// );
/// assert_eq!(json.parse_value(&graphql_value!("[1, 2]")), Ok(graphql_value!([1, 2])));
/// ```
#[derive(Clone, Debug)]
pub struct Json {
    meta: ScalarMeta,
}

impl Default for Json {
    fn default() -> Self {
        Self::new()
    }
}

impl Json {
    /// Builds a new [`Json`] scalar, named `JSON`.
    pub fn new() -> Self {
        Self {
            meta: ScalarMeta::new("JSON").description(
                "Arbitrary data encoded in JavaScript Object Notation. See https://www.json.org/.",
            ),
        }
    }

    /// Renames this [`Json`] scalar.
    #[must_use]
    pub fn rename(mut self, name: impl Into<ArcStr>) -> Self {
        self.meta.name = name.into();
        self
    }

    /// Sets the `description` of this [`Json`] scalar.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.meta = self.meta.description(description);
        self
    }

    fn decode(json: &str) -> Result<Value, ClientError> {
        serde_json::from_str(json).map_err(|e| ClientError::new(e.to_string()))
    }
}

impl ScalarType for Json {
    fn meta(&self) -> &ScalarMeta {
        &self.meta
    }
}

impl SerializeScalar for Json {
    fn serialize(&self, value: &Value) -> Result<Value, ServerError> {
        serde_json::to_string(value)
            .map(Value::from)
            .map_err(|e| ServerError::Codec(CodecError::from(e)))
            .traced(self.name())
    }
}

impl ParseValue for Json {
    type Parsed = Value;

    fn parse_value(&self, value: &Value) -> Result<Value, ClientError> {
        coerce_to_string(value, ErrorKind::Client)
            .map_err(CoercionError::into_client)
            .and_then(|s| Self::decode(&s))
            .traced(self.name())
    }
}

impl ParseLiteral for Json {
    fn parse_literal(
        &self,
        literal: &Spanning<InputValue>,
        _: &Variables,
    ) -> Result<Value, ClientError> {
        literal
            .item
            .raw_value()
            .ok_or_else(|| {
                ClientError::new(format!(
                    "Can only parse literals that contain a value, got {}",
                    literal.item,
                ))
            })
            .and_then(|raw| Self::decode(&raw))
            .map_err(|e| e.at(literal.start()))
            .traced(self.name())
    }
}

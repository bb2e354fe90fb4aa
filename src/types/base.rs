//! Traits implemented by every scalar.

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, ServerError},
    span::Spanning,
    value::Value,
};

/// Scalar type metadata, exposed to the host schema.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarMeta {
    /// Name of the scalar, unique within a schema.
    pub name: ArcStr,
    /// Description of the scalar, in Markdown.
    pub description: Option<ArcStr>,
}

impl ScalarMeta {
    /// Builds a new [`ScalarMeta`] type with the specified `name`.
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Named scalar type known to the host schema.
pub trait ScalarType {
    /// Metadata of this scalar.
    fn meta(&self) -> &ScalarMeta;

    /// Name of this scalar, as used in the schema.
    fn name(&self) -> &str {
        &self.meta().name
    }
}

/// Converts internal values into wire values.
pub trait SerializeScalar: ScalarType {
    /// Serializes an internal `value` to include in a response.
    ///
    /// # Errors
    ///
    /// If the `value` is not valid for this scalar. This is a server-side bug:
    /// such a value should never have been produced.
    fn serialize(&self, value: &Value) -> Result<Value, ServerError>;
}

/// Converts query variables into internal values.
pub trait ParseValue: ScalarType {
    /// Internal representation of a valid input.
    type Parsed: Into<Value>;

    /// Parses an externally provided `value` (a query variable) to use as an
    /// input.
    ///
    /// # Errors
    ///
    /// If the client sent a value that is not valid for this scalar.
    fn parse_value(&self, value: &Value) -> Result<Self::Parsed, ClientError>;
}

/// Converts literals hardcoded in a query document into internal values.
pub trait ParseLiteral: ParseValue {
    /// Parses an externally provided `literal` to use as an input.
    ///
    /// `variables` are the ones of the current operation, for scalars
    /// accepting compound literals that may reference them.
    ///
    /// # Errors
    ///
    /// If the literal is not valid for this scalar. The error points to the
    /// literal's position.
    fn parse_literal(
        &self,
        literal: &Spanning<InputValue>,
        variables: &Variables,
    ) -> Result<Self::Parsed, ClientError>;
}

/// A complete custom scalar, supporting all three conversions.
pub trait GraphQLScalar: SerializeScalar + ParseLiteral {}

impl<T: SerializeScalar + ParseLiteral + ?Sized> GraphQLScalar for T {}

/// Object-safe view of a [`GraphQLScalar`], for hosts keeping scalars of
/// different types in one registry (`Arc<dyn AnyScalar>`).
///
/// Parsed values are returned as [`Value`]s.
pub trait AnyScalar: Send + Sync {
    /// See [`ScalarType::meta()`].
    fn scalar_meta(&self) -> &ScalarMeta;

    /// See [`SerializeScalar::serialize()`].
    ///
    /// # Errors
    ///
    /// See [`SerializeScalar::serialize()`].
    fn to_output(&self, value: &Value) -> Result<Value, ServerError>;

    /// See [`ParseValue::parse_value()`].
    ///
    /// # Errors
    ///
    /// See [`ParseValue::parse_value()`].
    fn from_input(&self, value: &Value) -> Result<Value, ClientError>;

    /// See [`ParseLiteral::parse_literal()`].
    ///
    /// # Errors
    ///
    /// See [`ParseLiteral::parse_literal()`].
    fn from_literal(
        &self,
        literal: &Spanning<InputValue>,
        variables: &Variables,
    ) -> Result<Value, ClientError>;
}

impl<T: GraphQLScalar + Send + Sync> AnyScalar for T {
    fn scalar_meta(&self) -> &ScalarMeta {
        self.meta()
    }

    fn to_output(&self, value: &Value) -> Result<Value, ServerError> {
        self.serialize(value)
    }

    fn from_input(&self, value: &Value) -> Result<Value, ClientError> {
        self.parse_value(value).map(Into::into)
    }

    fn from_literal(
        &self,
        literal: &Spanning<InputValue>,
        variables: &Variables,
    ) -> Result<Value, ClientError> {
        self.parse_literal(literal, variables).map(Into::into)
    }
}

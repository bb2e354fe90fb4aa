//! Scalars validated against a regular expression.

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, CoercionError, ErrorKind, InvalidPattern, ServerError, TraceRejection as _},
    span::Spanning,
    types::{
        base::{ParseLiteral, ParseValue, ScalarMeta, ScalarType, SerializeScalar},
        utilities::{coerce_to_string, extract_string_from_literal, print_safe_str},
    },
    value::Value,
};

/// Compile-time definition of a [`Regex`] scalar.
///
/// ```rust
/// # use juniper_scalars::{ParseValue as _, Regex, RegexDefinition, Value};
/// #
/// struct Hex;
///
/// impl RegexDefinition for Hex {
///     const NAME: &'static str = "Hex";
///     const PATTERN: &'static str = "[0-9a-f]+";
/// }
///
/// let hex = Regex::from_definition::<Hex>();
///
/// assert!(hex.parse_value(&Value::scalar("c0ffee")).is_ok());
/// assert!(hex.parse_value(&Value::scalar("coffee")).is_err());
/// ```
pub trait RegexDefinition {
    /// Name of the scalar.
    const NAME: &'static str;

    /// Description of the scalar.
    const DESCRIPTION: Option<&'static str> = None;

    /// Pattern the whole value has to match.
    const PATTERN: &'static str;
}

/// String scalar whose values have to match a regular expression.
///
/// The pattern is always matched against the whole value, as if it was
/// surrounded by `^` and `$`.
#[derive(Clone, Debug)]
pub struct Regex {
    meta: ScalarMeta,
    pattern: ArcStr,
    regex: regex::Regex,
}

impl Regex {
    /// Builds a new [`Regex`] scalar with the given `name` and `pattern`.
    ///
    /// # Errors
    ///
    /// If the `pattern` is not a valid regular expression.
    pub fn new(name: impl Into<ArcStr>, pattern: impl Into<ArcStr>) -> Result<Self, InvalidPattern> {
        let pattern = pattern.into();
        let regex = regex::Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(Self {
            meta: ScalarMeta::new(name),
            pattern,
            regex,
        })
    }

    /// Builds a new [`Regex`] scalar out of its [`RegexDefinition`].
    ///
    /// # Panics
    ///
    /// If [`RegexDefinition::PATTERN`] is not a valid regular expression.
    pub fn from_definition<D: RegexDefinition>() -> Self {
        let scalar = Self::new(D::NAME, D::PATTERN)
            .unwrap_or_else(|e| panic!("`{}` regex scalar: {e}", D::NAME));
        match D::DESCRIPTION {
            Some(description) => scalar.description(description),
            None => scalar,
        }
    }

    /// Sets the `description` of this [`Regex`] scalar.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.meta = self.meta.description(description);
        self
    }

    /// Pattern of this [`Regex`] scalar, as it was given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Checks whether the whole `value` matches the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    fn mismatch_message(&self, value: &str) -> String {
        format!(
            "The given value {} did not match the regex {}.",
            print_safe_str(value),
            self.pattern,
        )
    }

    fn coerce(&self, value: &Value, kind: ErrorKind) -> Result<String, CoercionError> {
        let s = coerce_to_string(value, kind)?;
        if !self.is_match(&s) {
            return Err(CoercionError::new(kind, self.mismatch_message(&s)));
        }
        Ok(s)
    }
}

impl ScalarType for Regex {
    fn meta(&self) -> &ScalarMeta {
        &self.meta
    }
}

impl SerializeScalar for Regex {
    fn serialize(&self, value: &Value) -> Result<Value, ServerError> {
        self.coerce(value, ErrorKind::Server)
            .map(Value::from)
            .map_err(CoercionError::into_server)
            .traced(self.name())
    }
}

impl ParseValue for Regex {
    type Parsed = String;

    fn parse_value(&self, value: &Value) -> Result<String, ClientError> {
        self.coerce(value, ErrorKind::Client)
            .map_err(CoercionError::into_client)
            .traced(self.name())
    }
}

impl ParseLiteral for Regex {
    fn parse_literal(
        &self,
        literal: &Spanning<InputValue>,
        _: &Variables,
    ) -> Result<String, ClientError> {
        extract_string_from_literal(literal)
            .and_then(|s| {
                if self.is_match(s) {
                    Ok(s.to_owned())
                } else {
                    Err(ClientError::located(self.mismatch_message(s), literal.start()))
                }
            })
            .traced(self.name())
    }
}

/// Arbitrarily large non-negative integer, transported as a string of digits.
///
/// Use with [`Regex::from_definition()`].
#[derive(Clone, Copy, Debug)]
pub struct BigInt;

impl RegexDefinition for BigInt {
    const NAME: &'static str = "BigInt";
    const DESCRIPTION: Option<&'static str> =
        Some("An arbitrarily large non-negative integer, represented as a string of digits.");
    const PATTERN: &'static str = "[0-9]+";
}

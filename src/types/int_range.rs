//! Integers limited to an inclusive range.

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, ServerError, TraceRejection as _},
    span::Spanning,
    types::{
        base::{ParseLiteral, ParseValue, ScalarMeta, ScalarType, SerializeScalar},
        utilities::print_safe,
    },
    value::Value,
};

/// Compile-time definition of an [`IntRange`] scalar.
pub trait IntRangeDefinition {
    /// Name of the scalar.
    const NAME: &'static str;

    /// Description of the scalar.
    const DESCRIPTION: Option<&'static str> = None;

    /// Smallest allowed value.
    const MIN: i64;

    /// Largest allowed value.
    const MAX: i64;
}

/// Integer scalar accepting values between `min` and `max`, both inclusive.
///
/// Only actual integers are accepted: neither numeric strings nor floats are
/// converted.
///
/// ```rust
/// # use juniper_scalars::{IntRange, ParseValue as _, Value};
/// #
/// let month = IntRange::new("Month", 1, 12);
///
/// assert_eq!(month.parse_value(&Value::scalar(12)), Ok(12));
///
/// let err = month.parse_value(&Value::scalar(13)).unwrap_err();
/// assert_eq!(err.message(), "Value not in range 1-12: 13.");
/// ```
#[derive(Clone, Debug)]
pub struct IntRange {
    meta: ScalarMeta,
    min: i64,
    max: i64,
}

impl IntRange {
    /// Builds a new [`IntRange`] scalar with the given `name` and inclusive
    /// bounds.
    pub fn new(name: impl Into<ArcStr>, min: i64, max: i64) -> Self {
        Self {
            meta: ScalarMeta::new(name),
            min,
            max,
        }
    }

    /// Builds a new [`IntRange`] scalar out of its [`IntRangeDefinition`].
    pub fn from_definition<D: IntRangeDefinition>() -> Self {
        let scalar = Self::new(D::NAME, D::MIN, D::MAX);
        match D::DESCRIPTION {
            Some(description) => scalar.description(description),
            None => scalar,
        }
    }

    /// Sets the `description` of this [`IntRange`] scalar.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.meta = self.meta.description(description);
        self
    }

    /// Smallest allowed value.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Largest allowed value.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Checks whether the `value` lies within the bounds.
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn in_range(&self, value: &Value) -> Option<i64> {
        value.as_int_value().filter(|i| self.contains(*i))
    }

    fn out_of_range_message(&self, printed: impl std::fmt::Display) -> String {
        format!("Value not in range {}-{}: {printed}.", self.min, self.max)
    }
}

impl ScalarType for IntRange {
    fn meta(&self) -> &ScalarMeta {
        &self.meta
    }
}

impl SerializeScalar for IntRange {
    fn serialize(&self, value: &Value) -> Result<Value, ServerError> {
        self.in_range(value)
            .map(Value::from)
            .ok_or_else(|| ServerError::invariant(self.out_of_range_message(print_safe(value))))
            .traced(self.name())
    }
}

impl ParseValue for IntRange {
    type Parsed = i64;

    fn parse_value(&self, value: &Value) -> Result<i64, ClientError> {
        self.in_range(value)
            .ok_or_else(|| ClientError::new(self.out_of_range_message(print_safe(value))))
            .traced(self.name())
    }
}

impl ParseLiteral for IntRange {
    fn parse_literal(
        &self,
        literal: &Spanning<InputValue>,
        _: &Variables,
    ) -> Result<i64, ClientError> {
        literal
            .item
            .as_int_value()
            .filter(|i| self.contains(*i))
            .ok_or_else(|| {
                ClientError::located(self.out_of_range_message(&literal.item), literal.start())
            })
            .traced(self.name())
    }
}

//! Scalar allowing `null` only.

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, ServerError, TraceRejection as _},
    span::Spanning,
    types::base::{ParseLiteral, ParseValue, ScalarMeta, ScalarType, SerializeScalar},
    value::Value,
};

const MESSAGE: &str = "Only null is allowed.";

/// Scalar whose only valid value is `null`.
#[derive(Clone, Debug)]
pub struct NullScalar {
    meta: ScalarMeta,
}

impl Default for NullScalar {
    fn default() -> Self {
        Self::new()
    }
}

impl NullScalar {
    /// Builds a new [`NullScalar`], named `Null`.
    pub fn new() -> Self {
        Self {
            meta: ScalarMeta::new("Null"),
        }
    }

    /// Sets the `description` of this [`NullScalar`].
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.meta = self.meta.description(description);
        self
    }
}

impl ScalarType for NullScalar {
    fn meta(&self) -> &ScalarMeta {
        &self.meta
    }
}

impl SerializeScalar for NullScalar {
    fn serialize(&self, value: &Value) -> Result<Value, ServerError> {
        if value.is_null() {
            Ok(Value::Null)
        } else {
            Err(ServerError::invariant(MESSAGE)).traced(self.name())
        }
    }
}

impl ParseValue for NullScalar {
    type Parsed = Value;

    fn parse_value(&self, value: &Value) -> Result<Value, ClientError> {
        if value.is_null() {
            Ok(Value::Null)
        } else {
            Err(ClientError::new(MESSAGE)).traced(self.name())
        }
    }
}

impl ParseLiteral for NullScalar {
    fn parse_literal(
        &self,
        literal: &Spanning<InputValue>,
        _: &Variables,
    ) -> Result<Value, ClientError> {
        if literal.item.is_null() {
            Ok(Value::Null)
        } else {
            Err(ClientError::located(MESSAGE, literal.start())).traced(self.name())
        }
    }
}

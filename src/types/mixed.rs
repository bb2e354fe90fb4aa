//! Loose scalar allowing any value.

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, ServerError},
    span::Spanning,
    types::base::{ParseLiteral, ParseValue, ScalarMeta, ScalarType, SerializeScalar},
    value::{Object, Value},
};

/// Scalar passing any value through untouched.
///
/// Literals are converted into the equivalent [`Value`] tree, so a literal
/// and a variable holding the same JSON data parse into equal values.
///
/// ```rust
/// # use juniper_scalars::{graphql_input_value, graphql_value, Mixed, ParseLiteral as _, Spanning, Variables};
/// #
/// let literal = Spanning::unlocated(graphql_input_value!({"a": [{"b": "c"}], "d": ENUM}));
///
/// assert_eq!(
///     Mixed::new().parse_literal(&literal, &Variables::new()),
///     Ok(graphql_value!({"a": [{"b": "c"}], "d": "ENUM"})),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Mixed {
    meta: ScalarMeta,
}

impl Default for Mixed {
    fn default() -> Self {
        Self::new()
    }
}

impl Mixed {
    /// Builds a new [`Mixed`] scalar, named `Mixed`.
    pub fn new() -> Self {
        Self {
            meta: ScalarMeta::new("Mixed").description(
                "Loose type that allows any value. Be careful when passing in large `Int` or \
                 `Float` literals, as they may not be parsed correctly on the server side. Use \
                 `String` literals if you are dealing with really large numbers to be on the \
                 safe side.",
            ),
        }
    }

    /// Sets the `description` of this [`Mixed`] scalar.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.meta = self.meta.description(description);
        self
    }
}

/// Converts a literal into a [`Value`], substituting variables. Missing
/// variables become `null`, wherever they appear.
///
/// Variable values are constants: they are not resolved any further.
fn resolve(literal: &InputValue, variables: &Variables) -> Value {
    match literal {
        InputValue::Variable(name) => variables.get(name).map_or(Value::Null, InputValue::to_value),
        InputValue::List(l) => Value::list(l.iter().map(|v| resolve(&v.item, variables)).collect()),
        InputValue::Object(o) => Value::object(
            o.iter()
                .map(|(k, v)| (k.item.as_str(), resolve(&v.item, variables)))
                .collect::<Object>(),
        ),
        InputValue::Null | InputValue::Scalar(_) | InputValue::Enum(_) => literal.to_value(),
    }
}

impl ScalarType for Mixed {
    fn meta(&self) -> &ScalarMeta {
        &self.meta
    }
}

impl SerializeScalar for Mixed {
    fn serialize(&self, value: &Value) -> Result<Value, ServerError> {
        Ok(value.clone())
    }
}

impl ParseValue for Mixed {
    type Parsed = Value;

    fn parse_value(&self, value: &Value) -> Result<Value, ClientError> {
        Ok(value.clone())
    }
}

impl ParseLiteral for Mixed {
    fn parse_literal(
        &self,
        literal: &Spanning<InputValue>,
        variables: &Variables,
    ) -> Result<Value, ClientError> {
        Ok(resolve(&literal.item, variables))
    }
}

//! Coercion helpers shared by the string-based scalars.

use crate::{
    ast::InputValue,
    error::{ClientError, CoercionError, ErrorKind},
    span::Spanning,
    value::{ScalarValue, Value},
};

/// Checks whether the `value` has a string form.
///
/// That's the case for `null`, scalars, [`Stringable`] objects and byte
/// strings holding valid UTF-8.
///
/// [`Stringable`]: crate::Stringable
pub fn can_be_string(value: &Value) -> bool {
    match value {
        Value::Null | Value::Scalar(_) | Value::Stringable(_) => true,
        Value::Bytes(b) => std::str::from_utf8(b).is_ok(),
        Value::List(_) | Value::Object(_) | Value::DateTime(_) => false,
    }
}

/// Converts the `value` into its string form.
///
/// `null` becomes an empty string, booleans become `true`/`false`.
///
/// # Errors
///
/// If the `value` [can't be a string](can_be_string), raises the error
/// selected by `kind`.
pub fn coerce_to_string(value: &Value, kind: ErrorKind) -> Result<String, CoercionError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Scalar(s) => Ok(s.to_string()),
        Value::Stringable(s) => Ok(s.to_string()),
        Value::Bytes(b) => std::str::from_utf8(b)
            .map(ToOwned::to_owned)
            .map_err(|_| not_coercible(value, kind)),
        Value::List(_) | Value::Object(_) | Value::DateTime(_) => Err(not_coercible(value, kind)),
    }
}

fn not_coercible(value: &Value, kind: ErrorKind) -> CoercionError {
    CoercionError::new(
        kind,
        format!(
            "The given value {} can not be coerced to a string.",
            print_safe(value),
        ),
    )
}

/// Extracts the string out of a string `literal`.
///
/// # Errors
///
/// If the `literal` is not a string, naming its kind and pointing to its
/// position.
pub fn extract_string_from_literal(literal: &Spanning<InputValue>) -> Result<&str, ClientError> {
    literal.item.as_string_value().ok_or_else(|| {
        ClientError::located(
            format!(
                "Query error: Can only parse strings, got: {}",
                literal.item.kind(),
            ),
            literal.start(),
        )
    })
}

/// Renders the `value` for embedding into an error message.
///
/// Strings are JSON-quoted, numbers and booleans are printed bare, and
/// compound or opaque values are only named by their type.
pub fn print_safe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Scalar(ScalarValue::Boolean(b)) => b.to_string(),
        Value::Scalar(ScalarValue::Int(i)) => i.to_string(),
        Value::Scalar(ScalarValue::Float(f)) => format!("{f:?}"),
        Value::Scalar(ScalarValue::String(s)) => print_safe_str(s),
        Value::List(_)
        | Value::Object(_)
        | Value::DateTime(_)
        | Value::Bytes(_)
        | Value::Stringable(_) => value.type_name().into(),
    }
}

/// Renders a string for embedding into an error message.
pub fn print_safe_str(s: &str) -> String {
    if s.is_empty() {
        "(empty string)".into()
    } else {
        serde_json::Value::from(s).to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::{CoercionError, ErrorKind},
        graphql_input_value, graphql_value,
        span::{SourcePosition, Spanning},
        value::{Stringable, Value},
    };

    use super::{can_be_string, coerce_to_string, extract_string_from_literal, print_safe};

    #[test]
    fn string_eligibility() {
        assert!(can_be_string(&Value::Null));
        assert!(can_be_string(&graphql_value!(1.5)));
        assert!(can_be_string(&Value::Stringable(Stringable::new(7))));
        assert!(can_be_string(&Value::Bytes(b"abc".to_vec())));
        assert!(!can_be_string(&Value::Bytes(vec![0xB1, 0x31])));
        assert!(!can_be_string(&graphql_value!([1])));
        assert!(!can_be_string(&graphql_value!({"a": 1})));
    }

    #[test]
    fn coerces_scalars_to_strings() {
        let coerce = |v: Value| coerce_to_string(&v, ErrorKind::Client).ok();

        assert_eq!(coerce(Value::Null).as_deref(), Some(""));
        assert_eq!(coerce(graphql_value!(12)).as_deref(), Some("12"));
        assert_eq!(coerce(graphql_value!(true)).as_deref(), Some("true"));
        assert_eq!(coerce(graphql_value!("foo")).as_deref(), Some("foo"));
        assert_eq!(
            coerce(Value::Stringable(Stringable::new("bar"))).as_deref(),
            Some("bar"),
        );
    }

    #[test]
    fn raises_error_of_requested_kind() {
        let list = graphql_value!([1, 2]);

        let server = coerce_to_string(&list, ErrorKind::Server);
        let client = coerce_to_string(&list, ErrorKind::Client);

        assert!(matches!(server, Err(CoercionError::Server(_))));
        assert!(matches!(&client, Err(CoercionError::Client(_))));
        assert_eq!(
            client.map_err(|e| e.to_string()),
            Err("The given value list can not be coerced to a string.".into()),
        );
    }

    #[test]
    fn extracts_string_literals_only() {
        let pos = SourcePosition::new(6, 0, 6);
        let string = Spanning::start_end(&pos, &pos, graphql_input_value!("foo"));
        let int = Spanning::start_end(&pos, &pos, graphql_input_value!(12));

        assert_eq!(extract_string_from_literal(&string), Ok("foo"));

        let err = extract_string_from_literal(&int).unwrap_err();
        assert_eq!(err.message(), "Query error: Can only parse strings, got: IntValue");
        assert_eq!(err.location(), Some(pos));
    }

    #[test]
    fn prints_values_safely() {
        assert_eq!(print_safe(&Value::Null), "null");
        assert_eq!(print_safe(&graphql_value!(false)), "false");
        assert_eq!(print_safe(&graphql_value!(13)), "13");
        assert_eq!(print_safe(&graphql_value!(1.5)), "1.5");
        assert_eq!(print_safe(&graphql_value!(12.0)), "12.0");
        assert_eq!(print_safe(&graphql_value!("12")), "\"12\"");
        assert_eq!(print_safe(&graphql_value!("say \"hi\"")), r#""say \"hi\"""#);
        assert_eq!(print_safe(&graphql_value!("")), "(empty string)");
        assert_eq!(print_safe(&graphql_value!({"a": 1})), "object");
    }
}

//! Scalars validated by a predicate over their string form.

use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, CoercionError, ErrorKind, ServerError, TraceRejection as _},
    span::Spanning,
    types::{
        base::{ParseLiteral, ParseValue, ScalarMeta, ScalarType, SerializeScalar},
        utilities::{coerce_to_string, extract_string_from_literal, print_safe_str},
    },
    value::Value,
};

/// Compile-time definition of a [`StringScalar`].
pub trait StringDefinition {
    /// Name of the scalar.
    const NAME: &'static str;

    /// Description of the scalar.
    const DESCRIPTION: Option<&'static str> = None;

    /// Checks whether the given string is a valid value of the scalar.
    fn is_valid(value: &str) -> bool;
}

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// String scalar whose values are checked by an arbitrary predicate.
///
/// ```rust
/// # use juniper_scalars::{ParseValue as _, StringScalar, Value};
/// #
/// let lowercase = StringScalar::new("Lowercase", |s| s.chars().all(char::is_lowercase))
///     .description("Lowercase letters only.");
///
/// assert!(lowercase.parse_value(&Value::scalar("abc")).is_ok());
///
/// let err = lowercase.parse_value(&Value::scalar("aBc")).unwrap_err();
/// assert_eq!(err.message(), r#"The given string "aBc" is not a valid Lowercase."#);
/// ```
#[derive(Clone)]
pub struct StringScalar {
    meta: ScalarMeta,
    is_valid: Predicate,
}

impl StringScalar {
    /// Builds a new [`StringScalar`] with the given `name`, accepting the
    /// strings `is_valid` returns `true` for.
    pub fn new<F>(name: impl Into<ArcStr>, is_valid: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            meta: ScalarMeta::new(name),
            is_valid: Arc::new(is_valid),
        }
    }

    /// Builds a new [`StringScalar`] out of its [`StringDefinition`].
    pub fn from_definition<D: StringDefinition + 'static>() -> Self {
        let scalar = Self::new(D::NAME, D::is_valid);
        match D::DESCRIPTION {
            Some(description) => scalar.description(description),
            None => scalar,
        }
    }

    /// Sets the `description` of this [`StringScalar`].
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.meta = self.meta.description(description);
        self
    }

    /// Checks whether the given string is valid for this scalar.
    pub fn is_valid(&self, value: &str) -> bool {
        (self.is_valid)(value)
    }

    fn invalid_message(&self, value: &str) -> String {
        format!(
            "The given string {} is not a valid {}.",
            print_safe_str(value),
            self.meta.name,
        )
    }

    fn coerce(&self, value: &Value, kind: ErrorKind) -> Result<String, CoercionError> {
        let s = coerce_to_string(value, kind)?;
        if !self.is_valid(&s) {
            return Err(CoercionError::new(kind, self.invalid_message(&s)));
        }
        Ok(s)
    }
}

impl fmt::Debug for StringScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringScalar")
            .field("meta", &self.meta)
            .finish_non_exhaustive()
    }
}

impl ScalarType for StringScalar {
    fn meta(&self) -> &ScalarMeta {
        &self.meta
    }
}

impl SerializeScalar for StringScalar {
    fn serialize(&self, value: &Value) -> Result<Value, ServerError> {
        self.coerce(value, ErrorKind::Server)
            .map(Value::from)
            .map_err(CoercionError::into_server)
            .traced(self.name())
    }
}

impl ParseValue for StringScalar {
    type Parsed = String;

    fn parse_value(&self, value: &Value) -> Result<String, ClientError> {
        self.coerce(value, ErrorKind::Client)
            .map_err(CoercionError::into_client)
            .traced(self.name())
    }
}

impl ParseLiteral for StringScalar {
    fn parse_literal(
        &self,
        literal: &Spanning<InputValue>,
        _: &Variables,
    ) -> Result<String, ClientError> {
        extract_string_from_literal(literal)
            .and_then(|s| {
                if self.is_valid(s) {
                    Ok(s.to_owned())
                } else {
                    Err(ClientError::located(self.invalid_message(s), literal.start()))
                }
            })
            .traced(self.name())
    }
}

/// Longest local part allowed by RFC 5321, section 4.5.3.1.1.
const MAX_LOCAL_PART_LEN: usize = 64;

/// Longest forward-path allowed by RFC 5321, without the angle brackets.
const MAX_ADDRESS_LEN: usize = 254;

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(concat!(
        // Local part: dot-atom or quoted string.
        r##"^(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*"##,
        r##"|"(?:[^"\\\r\n]|\\[\x20-\x7E])*")"##,
        "@",
        // Domain: host name or address literal.
        r"(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*",
        r"|\[[^\[\]\\\r\n]+\])$",
    ))
    .expect("email regex should compile")
});

/// [RFC 5321](https://tools.ietf.org/html/rfc5321) compliant email address.
///
/// Use with [`StringScalar::from_definition()`].
///
/// Only the syntax is checked: domains need not be fully qualified, so
/// `user@localhost` is accepted.
#[derive(Clone, Copy, Debug)]
pub struct Email;

impl StringDefinition for Email {
    const NAME: &'static str = "Email";
    const DESCRIPTION: Option<&'static str> =
        Some("A [RFC 5321](https://tools.ietf.org/html/rfc5321) compliant email.");

    fn is_valid(value: &str) -> bool {
        let Some((local, _)) = value.rsplit_once('@') else {
            return false;
        };
        local.len() <= MAX_LOCAL_PART_LEN
            && value.len() <= MAX_ADDRESS_LEN
            && EMAIL_REGEX.is_match(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::Variables,
        error::ServerError,
        graphql_input_value, graphql_value,
        span::Spanning,
        types::base::{ParseLiteral as _, ParseValue as _, ScalarType as _, SerializeScalar as _},
        value::{Stringable, Value},
    };

    use super::{Email, StringDefinition, StringScalar};

    struct MyStringScalar;

    impl StringDefinition for MyStringScalar {
        const NAME: &'static str = "MyStringScalar";
        const DESCRIPTION: Option<&'static str> = Some("Bar");

        fn is_valid(value: &str) -> bool {
            value == "foo"
        }
    }

    fn scalars() -> [StringScalar; 2] {
        [
            StringScalar::from_definition::<MyStringScalar>(),
            StringScalar::new("MyStringScalar", |s| s == "foo").description("Bar"),
        ]
    }

    #[test]
    fn carries_metadata() {
        for scalar in scalars() {
            assert_eq!(scalar.name(), "MyStringScalar");
            assert_eq!(scalar.meta().description.as_deref(), Some("Bar"));
        }
    }

    #[test]
    fn serializes_valid_strings() {
        for scalar in scalars() {
            assert_eq!(scalar.serialize(&graphql_value!("foo")).ok(), Some(graphql_value!("foo")));
            assert_eq!(
                scalar.serialize(&Value::Stringable(Stringable::new("foo"))).ok(),
                Some(graphql_value!("foo")),
            );
        }
    }

    #[test]
    fn serialize_rejects_invalid_values() {
        for scalar in scalars() {
            let err = scalar.serialize(&graphql_value!("bar")).unwrap_err();
            assert!(matches!(err, ServerError::Invariant(_)));
            assert_eq!(err.to_string(), "The given string \"bar\" is not a valid MyStringScalar.");

            let err = scalar.serialize(&graphql_value!({})).unwrap_err();
            assert_eq!(err.to_string(), "The given value object can not be coerced to a string.");
        }
    }

    #[test]
    fn parse_value_names_the_scalar() {
        for scalar in scalars() {
            assert_eq!(scalar.parse_value(&graphql_value!("foo")), Ok("foo".into()));

            let err = scalar.parse_value(&graphql_value!("")).unwrap_err();
            assert_eq!(
                err.message(),
                "The given string (empty string) is not a valid MyStringScalar.",
            );

            let err = scalar.parse_value(&graphql_value!([])).unwrap_err();
            assert!(err.message().ends_with("can not be coerced to a string."));
        }
    }

    #[test]
    fn parse_literal_accepts_string_literals_only() {
        let vars = Variables::new();

        for scalar in scalars() {
            let literal = Spanning::unlocated(graphql_input_value!("foo"));
            assert_eq!(scalar.parse_literal(&literal, &vars), Ok("foo".into()));

            let literal = Spanning::unlocated(graphql_input_value!("bar"));
            let err = scalar.parse_literal(&literal, &vars).unwrap_err();
            assert_eq!(err.message(), "The given string \"bar\" is not a valid MyStringScalar.");

            let literal = Spanning::unlocated(graphql_input_value!(12));
            let err = scalar.parse_literal(&literal, &vars).unwrap_err();
            assert!(err.message().contains("IntValue"));
        }
    }

    #[test]
    fn email_accepts_valid_addresses() {
        let email = StringScalar::from_definition::<Email>();
        let vars = Variables::new();

        assert_eq!(
            email.meta().description.as_deref(),
            Some("A [RFC 5321](https://tools.ietf.org/html/rfc5321) compliant email."),
        );
        for input in [
            "foo@bar",
            "john.doe@example.com",
            "o'reilly+tag@sub.example.co.uk",
            "\"john doe\"@example.com",
            "admin@[192.168.0.1]",
        ] {
            assert_eq!(
                email.parse_value(&graphql_value!((input))),
                Ok(input.into()),
                "rejects input: {input:?}",
            );
        }
        assert_eq!(email.serialize(&graphql_value!("foo@bar")).ok(), Some(graphql_value!("foo@bar")));
        assert_eq!(
            email.parse_literal(&Spanning::unlocated(graphql_input_value!("foo@bar")), &vars),
            Ok("foo@bar".into()),
        );
    }

    #[test]
    fn email_rejects_invalid_addresses() {
        let email = StringScalar::from_definition::<Email>();

        let err = email.parse_value(&graphql_value!("foo")).unwrap_err();
        assert_eq!(err.message(), "The given string \"foo\" is not a valid Email.");

        let err = email.serialize(&graphql_value!("foo")).unwrap_err();
        assert_eq!(err.to_string(), "The given string \"foo\" is not a valid Email.");

        let long_local = format!("{}@example.com", "a".repeat(65));
        for input in [
            "",
            "@bar",
            "foo@",
            "foo@@bar",
            "foo bar@baz",
            ".foo@bar",
            "foo..bar@baz",
            "foo@-bar",
            "foo@bar.",
            long_local.as_str(),
        ] {
            assert!(
                email.parse_value(&graphql_value!((input))).is_err(),
                "allows input: {input:?}",
            );
        }
    }
}

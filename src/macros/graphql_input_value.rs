//! [`graphql_input_value!`] macro implementation.
//!
//! [`graphql_input_value!`]: graphql_input_value

/// Constructs literal [`InputValue`]s via GraphQL-like syntax, the way a host
/// parser would hand them over (without source positions).
///
/// - A bare `ident` is an [`InputValue::Enum`]; to capture an outer variable
///   as a scalar, surround it with parens: `(var)`.
/// - `@ident` is an [`InputValue::Variable`].
/// - Object keys are single tokens (string literals or parenthesized
///   expressions) convertible [`Into`]`<`[`String`]`>`.
///
/// ```rust
/// # use juniper_scalars::{graphql_input_value, InputValue};
/// #
/// let captured = 42;
///
/// let literal: InputValue = graphql_input_value!({
///     "list": [1, -2, "three", FOUR],
///     "var": @five,
///     "captured": (captured),
///     "none": null,
/// });
///
/// assert_eq!(
///     literal.to_string(),
///     r#"{list: [1, -2, "three", FOUR], var: $five, captured: 42, none: null}"#,
/// );
/// ```
///
/// [`InputValue`]: crate::InputValue
/// [`InputValue::Enum`]: crate::InputValue::Enum
/// [`InputValue::Variable`]: crate::InputValue::Variable
#[macro_export]
macro_rules! graphql_input_value {
    //////////
    // List //
    //////////

    (@@list [$($done:expr,)*] ()) => {
        vec![$($done,)*]
    };

    (@@list [$($done:expr,)*] ($($cur:tt)+)) => {
        vec![$($done,)* $crate::graphql_input_value!($($cur)+)]
    };

    (@@list [$($done:expr,)*] ($($cur:tt)+) , $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@list [$($done,)* $crate::graphql_input_value!($($cur)+),] () $($rest)*
        )
    };

    (@@list [$($done:expr,)*] ($($cur:tt)*) $next:tt $($rest:tt)*) => {
        $crate::graphql_input_value!(@@list [$($done,)*] ($($cur)* $next) $($rest)*)
    };

    ////////////
    // Object //
    ////////////

    (@@object [$($done:expr,)*]) => {
        vec![$($done,)*]
    };

    (@@object [$($done:expr,)*] $key:tt : $($rest:tt)*) => {
        $crate::graphql_input_value!(@@field [$($done,)*] $key () $($rest)*)
    };

    (@@field [$($done:expr,)*] $key:tt ($($cur:tt)+)) => {
        vec![$($done,)* $crate::graphql_input_value!(@@entry $key $($cur)+)]
    };

    (@@field [$($done:expr,)*] $key:tt ($($cur:tt)+) , $($rest:tt)*) => {
        $crate::graphql_input_value!(
            @@object [$($done,)* $crate::graphql_input_value!(@@entry $key $($cur)+),] $($rest)*
        )
    };

    (@@field [$($done:expr,)*] $key:tt ($($cur:tt)*) $next:tt $($rest:tt)*) => {
        $crate::graphql_input_value!(@@field [$($done,)*] $key ($($cur)* $next) $($rest)*)
    };

    (@@entry $key:tt $($value:tt)+) => {
        (
            $crate::Spanning::unlocated(::std::string::String::from($key)),
            $crate::Spanning::unlocated($crate::graphql_input_value!($($value)+)),
        )
    };

    //////////////
    // Defaults //
    //////////////

    ([ $($elems:tt)* ]) => {
        $crate::InputValue::list($crate::graphql_input_value!(@@list [] () $($elems)*))
    };

    ({ $($fields:tt)* }) => {
        $crate::InputValue::Object($crate::graphql_input_value!(@@object [] $($fields)*))
    };

    (null) => ($crate::InputValue::null());

    (true) => ($crate::InputValue::from(true));

    (false) => ($crate::InputValue::from(false));

    (@ $var:ident) => ($crate::InputValue::variable(stringify!($var)));

    ($enum:ident) => ($crate::InputValue::enum_value(stringify!($enum)));

    (($e:expr)) => ($crate::InputValue::from($e));

    ($e:expr) => ($crate::InputValue::from($e));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::Spanning;

    type V = crate::InputValue;

    #[test]
    fn scalar() {
        let val = 42;

        assert_eq!(graphql_input_value!(null), V::Null);
        assert_eq!(graphql_input_value!(1), V::scalar(1));
        assert_eq!(graphql_input_value!(-1), V::scalar(-1));
        assert_eq!(graphql_input_value!("val"), V::scalar("val"));
        assert_eq!(graphql_input_value!(1.34), V::scalar(1.34));
        assert_eq!(graphql_input_value!(false), V::scalar(false));
        assert_eq!(graphql_input_value!((val)), V::scalar(42));
    }

    #[test]
    fn enum_and_variable() {
        assert_eq!(graphql_input_value!(ENUM), V::enum_value("ENUM"));
        assert_eq!(graphql_input_value!(@var), V::variable("var"));
    }

    #[test]
    fn list() {
        assert_eq!(graphql_input_value!([]), V::list(vec![]));
        assert_eq!(
            graphql_input_value!([1, [2], -3,]),
            V::list(vec![V::scalar(1), V::list(vec![V::scalar(2)]), V::scalar(-3)]),
        );
    }

    #[test]
    fn object() {
        assert_eq!(graphql_input_value!({}), V::Object(vec![]));
        assert_eq!(
            graphql_input_value!({"key": {"inner": @var}, "other": [ENUM]}),
            V::Object(vec![
                (
                    Spanning::unlocated("key".into()),
                    Spanning::unlocated(V::Object(vec![(
                        Spanning::unlocated("inner".into()),
                        Spanning::unlocated(V::variable("var")),
                    )])),
                ),
                (
                    Spanning::unlocated("other".into()),
                    Spanning::unlocated(V::list(vec![V::enum_value("ENUM")])),
                ),
            ]),
        );
    }
}

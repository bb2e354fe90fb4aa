//! [`graphql_value!`] macro implementation.
//!
//! [`graphql_value!`]: graphql_value

/// Constructs [`Value`]s via JSON-like syntax.
///
/// [`Value::Object`] keys are single tokens convertible
/// [`Into`]`<`[`String`]`>`; wrap a longer key expression in parens.
///
/// ```rust
/// # use juniper_scalars::{graphql_value, Value};
/// #
/// let code = 200;
///
/// let value: Value = graphql_value!({
///     "code": code,
///     "success": (code == 200),
///     "payload": ["key", null, 1.5],
/// });
///
/// assert_eq!(
///     value.as_object_value().and_then(|o| o.get_field_value("code")),
///     Some(&Value::scalar(200)),
/// );
/// ```
///
/// [`Value`]: crate::Value
/// [`Value::Object`]: crate::Value::Object
#[macro_export]
macro_rules! graphql_value {
    ///////////
    // Array //
    ///////////

    // Done, last element still pending.
    (@array [$($elems:expr,)*] ($($cur:tt)+)) => {
        $crate::Value::list(vec![$($elems,)* $crate::graphql_value!($($cur)+)])
    };

    // Done.
    (@array [$($elems:expr,)*] ()) => {
        $crate::Value::list(vec![$($elems,)*])
    };

    // Comma after the current element.
    (@array [$($elems:expr,)*] ($($cur:tt)+) , $($rest:tt)*) => {
        $crate::graphql_value!(
            @array [$($elems,)* $crate::graphql_value!($($cur)+),] () $($rest)*
        )
    };

    // Munch a token into the current element.
    (@array [$($elems:expr,)*] ($($cur:tt)*) $next:tt $($rest:tt)*) => {
        $crate::graphql_value!(@array [$($elems,)*] ($($cur)* $next) $($rest)*)
    };

    ////////////
    // Object //
    ////////////

    // Done.
    (@object $object:ident) => {};

    // Start of the next entry.
    (@object $object:ident $key:tt : $($rest:tt)*) => {
        $crate::graphql_value!(@entry $object $key () $($rest)*);
    };

    // Insert the last entry without trailing comma.
    (@entry $object:ident $key:tt ($($value:tt)+)) => {
        let _ = $object.add_field($key, $crate::graphql_value!($($value)+));
    };

    // Insert the current entry followed by comma.
    (@entry $object:ident $key:tt ($($value:tt)+) , $($rest:tt)*) => {
        let _ = $object.add_field($key, $crate::graphql_value!($($value)+));
        $crate::graphql_value!(@object $object $($rest)*);
    };

    // Munch a token into the current value.
    (@entry $object:ident $key:tt ($($value:tt)*) $next:tt $($rest:tt)*) => {
        $crate::graphql_value!(@entry $object $key ($($value)* $next) $($rest)*);
    };

    //////////////
    // Defaults //
    //////////////

    ([ $($arr:tt)* ]) => {
        $crate::graphql_value!(@array [] () $($arr)*)
    };

    ({}) => {
        $crate::Value::object($crate::Object::with_capacity(0))
    };

    ({ $($map:tt)+ }) => {
        $crate::Value::object({
            let mut object = $crate::Object::with_capacity(0);
            $crate::graphql_value!(@object object $($map)+);
            object
        })
    };

    (null) => ($crate::Value::null());

    (($e:expr)) => ($crate::Value::from($e));

    ($e:expr) => ($crate::Value::from($e));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::Object;

    type V = crate::Value;

    #[test]
    fn null() {
        assert_eq!(graphql_value!(null), V::Null);
    }

    #[test]
    fn scalar() {
        let val = 42;

        assert_eq!(graphql_value!(1), V::scalar(1));
        assert_eq!(graphql_value!(-1), V::scalar(-1));
        assert_eq!(graphql_value!("val"), V::scalar("val"));
        assert_eq!(graphql_value!(1.34), V::scalar(1.34));
        assert_eq!(graphql_value!(false), V::scalar(false));
        assert_eq!(graphql_value!(1 + 2), V::scalar(3));
        assert_eq!(graphql_value!(val), V::scalar(42));
    }

    #[test]
    fn list() {
        assert_eq!(graphql_value!([]), V::list(vec![]));
        assert_eq!(graphql_value!([null]), V::list(vec![V::Null]));
        assert_eq!(
            graphql_value!(["string", [2 + 3], true,]),
            V::list(vec![
                V::scalar("string"),
                V::list(vec![V::scalar(5)]),
                V::scalar(true),
            ]),
        );
    }

    #[test]
    fn object() {
        let key = "key";

        assert_eq!(graphql_value!({}), V::object(Object::with_capacity(0)));
        assert_eq!(
            graphql_value!({(key): {"inner": [1, null]}, "other": -2.5}),
            V::object(
                [
                    (
                        "key",
                        V::object(
                            [("inner", V::list(vec![V::scalar(1), V::Null]))]
                                .into_iter()
                                .collect(),
                        ),
                    ),
                    ("other", V::scalar(-2.5)),
                ]
                .into_iter()
                .collect(),
            ),
        );
    }
}

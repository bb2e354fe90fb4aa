#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Required by the `__scalars_trace*!` macros.
#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

#[doc(hidden)]
#[macro_use]
pub mod macros;
mod ast;
pub mod error;
mod integrations;
mod span;
pub mod types;
mod value;

pub use crate::{
    ast::{InputValue, Variables},
    error::{ClientError, CodecError, CoercionError, ErrorKind, InvalidPattern, ServerError},
    span::{SourcePosition, Span, Spanning},
    types::{
        base::{
            AnyScalar, GraphQLScalar, ParseLiteral, ParseValue, ScalarMeta, ScalarType,
            SerializeScalar,
        },
        date::{DateFormat, DateScalar},
        int_range::{IntRange, IntRangeDefinition},
        json::Json,
        mixed::Mixed,
        null::NullScalar,
        regex::{BigInt, Regex, RegexDefinition},
        string::{Email, StringDefinition, StringScalar},
        utilities::{
            can_be_string, coerce_to_string, extract_string_from_literal, print_safe,
            print_safe_str,
        },
    },
    value::{Object, ScalarValue, Stringable, Value},
};

//! Declarative macros.

#[macro_use]
mod graphql_input_value;
#[macro_use]
mod graphql_value;
#[macro_use]
mod tracing;

//! Provides GraphQL implementations for foreign crates.

mod serde;

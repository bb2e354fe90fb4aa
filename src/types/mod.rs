//! Custom scalar types and the helpers they are built with.

pub mod base;
pub mod date;
pub mod int_range;
pub mod json;
pub mod mixed;
pub mod null;
pub mod regex;
pub mod string;
pub mod utilities;

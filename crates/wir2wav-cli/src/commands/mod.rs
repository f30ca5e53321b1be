//! CLI command implementations

pub mod convert;
pub mod info;
pub mod json_output;

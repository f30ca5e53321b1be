//! wir2wav End-to-End Test Infrastructure
//!
//! Synthetic WIR fixtures shared by the integration tests:
//!
//! - [`fixtures::WirBuilder`] builds WIR file images byte by byte
//! - [`fixtures::WirTree`] lays them out in a temporary directory
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wir2wav-tests
//! ```

pub mod fixtures;

pub use fixtures::{floats, WirBuilder, WirTree};

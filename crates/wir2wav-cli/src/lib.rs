//! wir2wav CLI library.
//!
//! Driver layer around `wir2wav-format`: input discovery, configuration,
//! atomic output writes and the `convert` / `info` commands.

pub mod commands;
pub mod config;
pub mod discovery;
pub mod output;

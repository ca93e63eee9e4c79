//! Test-only bootstrap helpers for unit tests in this crate.

pub mod logging;

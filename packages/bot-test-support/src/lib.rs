//! Bot test support utilities
//!
//! This crate provides utilities for integration tests: a scripted
//! proximity oracle and unified logging initialization.

pub mod logging;
pub mod oracle;

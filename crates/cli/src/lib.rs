//! Testboard CLI
//!
//! Command-line client for test-run video dashboards: watch new test runs
//! arrive, filter them, inspect videos and logs, and trigger cleanups.

pub mod commands;
pub mod config;
pub mod output;
pub mod render;

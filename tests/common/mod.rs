//! Common test utilities for plc-deploy CLI tests.
//!
//! - `TestEnv`: isolated working directory and home, plus CLI helpers
//! - Fixtures: a small artifact bundle written on demand

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The console sink lives in `ui::console` next to the renderers it uses.

mod json;

pub use json::JsonEventSink;

//! Domain Layer
//!
//! Entities, value objects, policies, pure services, and the ports that the
//! infrastructure layer implements. Nothing in here performs I/O.

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;

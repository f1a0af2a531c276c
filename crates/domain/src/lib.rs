//! Domain layer for the meeting insight engines
//!
//! Contains the value objects and entities shared by the sentiment and
//! priority analyzers. This layer has no I/O and no async code; schema
//! repair of untrusted analysis data lives here as lenient deserialization.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;

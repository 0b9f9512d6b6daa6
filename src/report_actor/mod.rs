//! Report persistence: entity hooks and the report error type.

pub mod entity;
pub mod error;

pub use error::*;

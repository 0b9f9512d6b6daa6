//! Product persistence: entity hooks and the product error type.

pub mod entity;
pub mod error;

pub use error::*;

//! Typed clients for the report and product resource actors.
//!
//! Each client is a thin wrapper around a [`ResourceClient`](crate::actor_framework::ResourceClient)
//! and implements the service port the sync slice depends on.

#[macro_use]
mod macros;

pub mod product_client;
pub mod report_client;

pub use product_client::*;
pub use report_client::*;

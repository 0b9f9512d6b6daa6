//! Keeps the cached report list consistent with the report service, and
//! decrements product stock when a report is added.

pub mod error;
pub mod events;
pub mod ports;
pub mod slice;
pub mod stock;


pub use error::*;
pub use events::*;
pub use ports::*;
pub use slice::*;
pub use stock::*;

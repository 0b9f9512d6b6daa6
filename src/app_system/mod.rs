//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod error;
pub mod report_system;
pub mod store;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use report_system::*;
pub use store::*;
pub use telemetry::*;

// devclock Core - Domain Values, Ports & the Time Advancer
// NO transport dependencies: adapters live in devclock-sdk

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::{AdvanceReport, TimeAdvancer};
pub use domain::{BlockTimestamp, DevMethod, Seconds, DEFAULT_ADVANCE_SECONDS};
pub use error::{ClockError, Result};
pub use port::NodeRpc;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Domain Layer - Values exchanged with a development node

pub mod block;
pub mod method;
pub mod seconds;

// Re-exports
pub use block::BlockTimestamp;
pub use method::DevMethod;
pub use seconds::{Seconds, DEFAULT_ADVANCE_SECONDS};

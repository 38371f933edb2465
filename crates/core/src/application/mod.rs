// Application Layer - Use Cases

pub mod time_advancer;

// Re-exports
pub use time_advancer::{AdvanceReport, TimeAdvancer};

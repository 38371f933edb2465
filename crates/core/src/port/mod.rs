// Port Layer - Interfaces for external dependencies

pub mod node_rpc;

// Re-exports
pub use node_rpc::NodeRpc;

// Node RPC Port (transport-agnostic, allows recording doubles in tests)

use crate::domain::DevMethod;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// JSON-RPC access to a development node
///
/// `params` is always sent positionally; an empty vec must reach the wire
/// as `[]`.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// Issue one request and wait for its result
    async fn call(&self, method: DevMethod, params: Vec<Value>) -> Result<Value>;
}

#[async_trait]
impl<T: NodeRpc + ?Sized> NodeRpc for &T {
    async fn call(&self, method: DevMethod, params: Vec<Value>) -> Result<Value> {
        (**self).call(method, params).await
    }
}

#[async_trait]
impl<T: NodeRpc + ?Sized> NodeRpc for Arc<T> {
    async fn call(&self, method: DevMethod, params: Vec<Value>) -> Result<Value> {
        (**self).call(method, params).await
    }
}

//! In-process fake development node for end-to-end tests
//!
//! Speaks JSON-RPC over HTTP on `127.0.0.1:<ephemeral>` and records every
//! call it receives, including the raw `params` text.

use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::types::ErrorObjectOwned;
use jsonrpsee::RpcModule;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Timestamp of block 0
pub const GENESIS_TIMESTAMP: u64 = 1_704_110_400;

/// One request as received by the fake node
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: String,
    /// `params` exactly as sent; `None` when the member was omitted
    pub raw_params: Option<String>,
}

impl RecordedCall {
    pub fn params(&self) -> Value {
        self.raw_params
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or(Value::Null)
    }
}

#[derive(Default)]
struct NodeState {
    calls: Vec<RecordedCall>,
    pending_offset: u64,
    blocks: Vec<u64>,
}

impl NodeState {
    fn record(&mut self, method: &str, raw_params: Option<&str>) {
        debug!(method, raw_params, "fake node received call");
        self.calls.push(RecordedCall {
            method: method.to_string(),
            raw_params: raw_params.map(str::to_owned),
        });
    }

    fn latest_timestamp(&self) -> u64 {
        self.blocks.last().copied().unwrap_or(GENESIS_TIMESTAMP)
    }
}

type SharedState = Arc<Mutex<NodeState>>;

/// JSON-RPC "invalid params"
pub const INVALID_PARAMS_CODE: i32 = -32602;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Full,
    NoTimeTravel,
    RejectIncreaseTime,
}

/// Running fake node; stops when dropped
pub struct FakeDevNode {
    addr: SocketAddr,
    state: SharedState,
    _handle: ServerHandle,
}

impl FakeDevNode {
    /// Node supporting `evm_increaseTime`, `evm_mine` and `eth_getBlockByNumber`
    pub async fn start() -> Self {
        Self::spawn(Mode::Full).await
    }

    /// Node without the `evm_*` test-control methods (like a production node)
    pub async fn start_without_time_travel() -> Self {
        Self::spawn(Mode::NoTimeTravel).await
    }

    /// Node whose `evm_increaseTime` records the call, then answers with an error
    pub async fn start_rejecting_increase_time() -> Self {
        Self::spawn(Mode::RejectIncreaseTime).await
    }

    async fn spawn(mode: Mode) -> Self {
        let state: SharedState = Arc::new(Mutex::new(NodeState {
            blocks: vec![GENESIS_TIMESTAMP],
            ..Default::default()
        }));

        let mut module = RpcModule::new(state.clone());

        if mode != Mode::NoTimeTravel {
            module
                .register_method("evm_increaseTime", move |params, state, _| {
                    let mut state = state.lock().unwrap();
                    state.record("evm_increaseTime", params.as_str());

                    if mode == Mode::RejectIncreaseTime {
                        return Err(ErrorObjectOwned::owned(
                            INVALID_PARAMS_CODE,
                            "evm_increaseTime rejected",
                            None::<()>,
                        ));
                    }

                    let seconds: u64 = params.one()?;
                    state.pending_offset += seconds;
                    Ok::<Value, ErrorObjectOwned>(json!(state.pending_offset))
                })
                .unwrap();

            module
                .register_method("evm_mine", |params, state, _| {
                    let mut state = state.lock().unwrap();
                    state.record("evm_mine", params.as_str());

                    let next = state.latest_timestamp() + state.pending_offset;
                    state.pending_offset = 0;
                    state.blocks.push(next);
                    Ok::<Value, ErrorObjectOwned>(json!("0x0"))
                })
                .unwrap();
        }

        module
            .register_method("eth_getBlockByNumber", |params, state, _| {
                let mut state = state.lock().unwrap();
                state.record("eth_getBlockByNumber", params.as_str());

                let number = state.blocks.len() - 1;
                Ok::<Value, ErrorObjectOwned>(json!({
                    "number": format!("{:#x}", number),
                    "timestamp": format!("{:#x}", state.latest_timestamp()),
                }))
            })
            .unwrap();

        let server = Server::builder().build("127.0.0.1:0").await.unwrap();
        let addr = server.local_addr().unwrap();
        let handle = server.start(module);

        Self {
            addr,
            state,
            _handle: handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.method).collect()
    }

    pub fn block_count(&self) -> usize {
        self.state.lock().unwrap().blocks.len()
    }
}

/// URL of a local port with nothing listening on it
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

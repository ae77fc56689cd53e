use serde::Deserialize;
use serde_json::{Map, Value};

/// One financial ledger in the ring. Deserialized straight from the
/// ledgers JSON file; the sequence order defines ring adjacency.
///
/// Field naming in the input file is mixed: the options and RPC flags are
/// camelCase, the account fields snake_case. The renames below match the
/// file format exactly.
#[derive(Debug, Clone, Deserialize)]
pub struct Ledger {
    pub name: String,
    pub currency: String,
    pub plugin: String,
    pub store: String,
    #[serde(default, rename = "optionsCommon")]
    pub options_common: Map<String, Value>,
    #[serde(default, rename = "optionsLeft")]
    pub options_left: Map<String, Value>,
    #[serde(default, rename = "optionsRight")]
    pub options_right: Map<String, Value>,
    pub left_account: String,
    pub right_account: String,
    /// Peer uses a single RPC endpoint. Takes precedence over `rpc_uris`.
    #[serde(default, rename = "rpcUri")]
    pub rpc_uri: bool,
    /// Peer uses a per-account RPC endpoint map.
    #[serde(default, rename = "rpcUris")]
    pub rpc_uris: bool,
}

/// Which side of a node a ledger sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Index of a node's peer on the given side, wrapping circularly.
///
/// The left neighbor is the next index, the right neighbor the previous
/// one. The right case adds `ring_size` before the modulo so the
/// intermediate value never goes negative.
pub fn peer_index(side: Side, n: usize, ring_size: usize) -> usize {
    match side {
        Side::Left => (n + 1) % ring_size,
        Side::Right => (n + ring_size - 1) % ring_size,
    }
}

/// Published port for node `i`, as a string: "2010", "3010", ...
///
/// This is decimal concatenation of `i + 2` and "010", not `i + 2010`:
/// node 9 publishes port 11010.
pub fn node_port(i: usize) -> String {
    format!("{}010", i + 2)
}

/// Internal API port for node `i`: "2100", "3100", ...
pub fn api_port(i: usize) -> String {
    format!("{}100", i + 2)
}

/// RPC endpoint exposed by the peer at index `peer`.
pub fn peer_rpc_uri(peer: usize) -> String {
    format!("http://ilp-kit{}:{}/api/peers/rpc", peer, node_port(peer))
}

/// ILP address prefix owned by node `i`.
pub fn ilp_prefix(i: usize) -> String {
    format!("test.dev.kit{}.", i)
}

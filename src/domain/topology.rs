use serde::Serialize;
use serde_json::{Map, Value};

use super::{Diagnostics, Ledger, Side, ilp_prefix, node_port, peer_index, peer_rpc_uri};

/// Connector-side configuration for one ledger entry, as embedded in the
/// CONNECTOR_LEDGERS environment value. Field order here is serialization
/// order, so it must stay: currency, plugin, store, options.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceConfig {
    pub currency: String,
    pub plugin: String,
    /// Absent on the synthetic connector entry, which has no backing store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    pub options: Map<String, Value>,
}

/// One entry of the CONNECTOR_ROUTES environment value. A node carries a
/// single default route (empty prefix) pointing at the next ledger in the
/// ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub target_prefix: String,
    pub connector_ledger: String,
    pub connector_account: String,
}

/// Build the connector configuration for `ledger` as seen from node `n`,
/// sitting on the given side of the node.
///
/// Options are a shallow merge of the common set and the side-specific set;
/// side keys win on collision. When the ledger peers over RPC, the merged
/// options gain the peer's endpoint: a bare `rpcUri` string, or an
/// `rpcUris` map keyed by the account on the far side of the ledger.
/// `rpcUri` wins when both flags are set.
pub fn build_config(
    n: usize,
    ledger: &Ledger,
    side: Side,
    ring_size: usize,
    diag: &dyn Diagnostics,
) -> ServiceConfig {
    let mut options = ledger.options_common.clone();
    let side_options = match side {
        Side::Left => &ledger.options_left,
        Side::Right => &ledger.options_right,
    };
    options.extend(side_options.iter().map(|(k, v)| (k.clone(), v.clone())));

    let peer = peer_index(side, n, ring_size);
    if ledger.rpc_uri {
        let uri = peer_rpc_uri(peer);
        diag.log(n, &uri);
        options.insert("rpcUri".to_string(), Value::String(uri));
    } else if ledger.rpc_uris {
        let account = match side {
            Side::Left => &ledger.right_account,
            Side::Right => &ledger.left_account,
        };
        let uri = peer_rpc_uri(peer);
        diag.log(n, &format!("{{ {}: {} }}", account, uri));
        let mut uris = Map::new();
        uris.insert(account.clone(), Value::String(uri));
        options.insert("rpcUris".to_string(), Value::Object(uris));
    }

    ServiceConfig {
        currency: ledger.currency.clone(),
        plugin: ledger.plugin.clone(),
        store: Some(ledger.store.clone()),
        options,
    }
}

/// Fixed-shape config for node `i`'s own connector account on its local
/// ledger. Keyed by the node's ILP prefix in the connector-ledgers map.
fn connector_account_config(i: usize) -> ServiceConfig {
    let mut options = Map::new();
    options.insert(
        "account".to_string(),
        Value::String(format!(
            "http://ilp-kit{}:{}/ledger/accounts/connector",
            i,
            node_port(i)
        )),
    );
    options.insert("password".to_string(), Value::String("password".to_string()));
    options.insert("username".to_string(), Value::String("connector".to_string()));

    ServiceConfig {
        currency: "USD".to_string(),
        plugin: "ilp-plugin-bells".to_string(),
        store: None,
        options,
    }
}

/// Connector-ledgers map for node `i`: the node's own connector account,
/// the ledger at `i` on its right side, and the ledger at `i+1` (wrapped)
/// on its left side, in that key order.
pub fn connector_ledgers(
    i: usize,
    ledgers: &[Ledger],
    diag: &dyn Diagnostics,
) -> Result<Map<String, Value>, serde_json::Error> {
    let ring_size = ledgers.len();
    let next = (i + 1) % ring_size;

    let mut entries = Map::new();
    entries.insert(
        ilp_prefix(i),
        serde_json::to_value(connector_account_config(i))?,
    );
    entries.insert(
        ledgers[i].name.clone(),
        serde_json::to_value(build_config(i, &ledgers[i], Side::Right, ring_size, diag))?,
    );
    entries.insert(
        ledgers[next].name.clone(),
        serde_json::to_value(build_config(i, &ledgers[next], Side::Left, ring_size, diag))?,
    );

    let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
    diag.log(i, &format!("[ {} ]", keys.join(", ")));

    Ok(entries)
}

/// Connector-routes list for node `i`: one default route to the next ledger
/// in the ring, addressed at its right-side account.
pub fn connector_routes(i: usize, ledgers: &[Ledger], diag: &dyn Diagnostics) -> Vec<Route> {
    let next = (i + 1) % ledgers.len();
    let ledger = &ledgers[next];
    let routes = vec![Route {
        target_prefix: String::new(),
        connector_ledger: ledger.name.clone(),
        connector_account: ledger.right_account.clone(),
    }];

    diag.log(i, &format!("-> {} ({})", ledger.name, ledger.right_account));
    routes
}

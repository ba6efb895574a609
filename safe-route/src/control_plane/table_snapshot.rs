//! Point-in-time normalized view of the host's routing table.

use crate::host::{ListenerTable, RouteTableProvider};
use crate::routing::route_key::RouteKey;

/// One listener's normalized table: uri, labels, and route keys sorted by
/// path for deterministic inspection. Sorting is for determinism and
/// debuggability only; the filter compares keys structurally.
#[derive(Clone, Debug)]
pub struct ListenerSnapshot {
    pub uri: String,
    pub labels: Vec<String>,
    pub routes: Vec<RouteKey>,
}

impl ListenerSnapshot {
    pub(crate) fn from_table(table: ListenerTable) -> Self {
        let mut routes: Vec<RouteKey> = table.routes.iter().map(RouteKey::from_entry).collect();
        routes.sort_by(|a, b| a.path().cmp(b.path()));

        Self {
            uri: table.uri,
            labels: table.labels,
            routes,
        }
    }

    /// Structural membership check; ordering plays no part in it.
    pub fn contains(&self, key: &RouteKey) -> bool {
        self.routes.contains(key)
    }
}

/// Fresh per-invocation read of every listener's table. Reflects the state
/// at the instant matching begins; the host may move on afterwards.
#[derive(Clone, Debug)]
pub struct TableSnapshot {
    pub listeners: Vec<ListenerSnapshot>,
}

impl TableSnapshot {
    /// Pure read over the provider; must not mutate the host.
    pub(crate) async fn capture(provider: &dyn RouteTableProvider) -> Self {
        let listeners = provider
            .listener_tables()
            .await
            .into_iter()
            .map(ListenerSnapshot::from_table)
            .collect();

        Self { listeners }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

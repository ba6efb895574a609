//! Provider serving a fixed set of listener tables.

use async_trait::async_trait;
use safe_route::{ListenerTable, RouteTableProvider};

/// Reports the same tables on every read.
pub struct StaticTableProvider {
    tables: Vec<ListenerTable>,
}

impl StaticTableProvider {
    pub fn new(tables: Vec<ListenerTable>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl RouteTableProvider for StaticTableProvider {
    async fn listener_tables(&self) -> Vec<ListenerTable> {
        self.tables.clone()
    }
}

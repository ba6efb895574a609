//! Provider that fails the test if the guard reads the table.

use async_trait::async_trait;
use safe_route::{ListenerTable, RouteTableProvider};

/// Panics on any table read; proves that validation runs first.
pub struct PanickingProvider;

#[async_trait]
impl RouteTableProvider for PanickingProvider {
    async fn listener_tables(&self) -> Vec<ListenerTable> {
        panic!("route table must not be read for this input");
    }
}

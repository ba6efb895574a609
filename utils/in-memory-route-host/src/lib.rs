/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! In-memory implementation of the safe-route host seams.
//!
//! Backs the loader binary and the integration tests with a server whose
//! listeners and tables live in process memory. The committer re-validates at
//! commit time and applies batches all-or-nothing, so duplicates planned
//! against a stale snapshot surface as conflicts instead of silently
//! double-registering.

use async_trait::async_trait;
use safe_route::{
    CommitError, ListenerTable, RouteCommitter, RouteEntry, RouteKey, RouteSpec,
    RouteTableProvider,
};
use std::collections::HashSet;
use tokio::sync::Mutex;

/// Uri of the listener created lazily when a commit arrives while no
/// listener exists yet.
pub const DEFAULT_LISTENER_URI: &str = "inmem://default";

struct ListenerState {
    uri: String,
    labels: Vec<String>,
    routes: Vec<RouteSpec>,
}

impl ListenerState {
    fn keys(&self) -> HashSet<RouteKey> {
        self.routes
            .iter()
            .map(|route| RouteKey::new(&route.method, &route.path))
            .collect()
    }
}

/// An in-process host server: zero or more listeners, each owning its own
/// routing table and collision namespace.
///
/// Commit semantics: every route in the batch is added to every listener that
/// does not already serve its key. A route that is new for no listener raises
/// a conflict, a path that is not absolute raises a rejection, and either way
/// the whole batch is validated before anything is applied.
#[derive(Default)]
pub struct InMemoryRouteHost {
    listeners: Mutex<Vec<ListenerState>>,
}

impl InMemoryRouteHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a listener with pre-registered routes.
    pub async fn add_listener(&self, uri: &str, labels: Vec<String>, seed: Vec<RouteSpec>) {
        let mut listeners = self.listeners.lock().await;
        listeners.push(ListenerState {
            uri: uri.to_string(),
            labels,
            routes: seed,
        });
    }

    /// Registers a route directly on one listener, bypassing any guard. Test
    /// hook for mutating the table behind a snapshot's back.
    pub async fn inject_route(&self, uri: &str, route: RouteSpec) {
        let mut listeners = self.listeners.lock().await;
        if let Some(listener) = listeners.iter_mut().find(|listener| listener.uri == uri) {
            listener.routes.push(route);
        }
    }

    pub async fn listener_count(&self) -> usize {
        self.listeners.lock().await.len()
    }

    /// Raw entries currently served by the listener at `uri`, in
    /// registration order.
    pub async fn routes_on(&self, uri: &str) -> Vec<RouteEntry> {
        let listeners = self.listeners.lock().await;
        listeners
            .iter()
            .find(|listener| listener.uri == uri)
            .map(|listener| {
                listener
                    .routes
                    .iter()
                    .map(|route| RouteEntry::new(&route.method, &route.path))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl RouteTableProvider for InMemoryRouteHost {
    async fn listener_tables(&self) -> Vec<ListenerTable> {
        let listeners = self.listeners.lock().await;
        listeners
            .iter()
            .map(|listener| ListenerTable {
                uri: listener.uri.clone(),
                labels: listener.labels.clone(),
                routes: listener
                    .routes
                    .iter()
                    .map(|route| RouteEntry::new(&route.method, &route.path))
                    .collect(),
            })
            .collect()
    }
}

#[async_trait]
impl RouteCommitter for InMemoryRouteHost {
    async fn commit(&self, routes: &[RouteSpec]) -> Result<(), CommitError> {
        let mut listeners = self.listeners.lock().await;

        for route in routes {
            if !route.path.starts_with('/') {
                return Err(CommitError::rejected(format!(
                    "path must start with '/': {}",
                    route.path
                )));
            }
        }

        if listeners.is_empty() {
            listeners.push(ListenerState {
                uri: DEFAULT_LISTENER_URI.to_string(),
                labels: Vec::new(),
                routes: Vec::new(),
            });
        }

        // Validate the whole batch before touching any table.
        let tables: Vec<(usize, HashSet<RouteKey>)> = listeners
            .iter()
            .enumerate()
            .map(|(index, listener)| (index, listener.keys()))
            .collect();

        let mut targets: Vec<(usize, RouteSpec)> = Vec::new();
        let mut batch_keys: HashSet<RouteKey> = HashSet::new();

        for route in routes {
            let key = RouteKey::new(&route.method, &route.path);

            if !batch_keys.insert(key.clone()) {
                return Err(CommitError::conflict(format!(
                    "duplicate route within batch: {} {}",
                    route.method, route.path
                )));
            }

            let mut lacking = 0;
            for (index, keys) in &tables {
                if !keys.contains(&key) {
                    targets.push((*index, route.clone()));
                    lacking += 1;
                }
            }

            if lacking == 0 {
                return Err(CommitError::conflict(format!(
                    "route already registered on every listener: {} {}",
                    route.method, route.path
                )));
            }
        }

        for (index, route) in targets {
            listeners[index].routes.push(route);
        }

        Ok(())
    }
}

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

//! # safe-route
//!
//! `safe-route` guards a host server's route table. Given candidate route
//! descriptors and the currently active routing table, it decides which
//! candidates are new, and registers exactly that subset in a single commit.
//!
//! The host server stays behind two injected seams: [`RouteTableProvider`]
//! (read side, reports each listener's active routes) and [`RouteCommitter`]
//! (write side, adds a batch of routes or raises). [`RouteGuard`] owns the
//! pipeline between them: input validation, per-listener table snapshot,
//! collision filtering, one commit.
//!
//! ```
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use safe_route::{
//!     CommitError, ListenerTable, RouteCommitter, RouteEntry, RouteGuard, RouteSpec,
//!     RouteTableProvider,
//! };
//!
//! struct StaticHost;
//!
//! #[async_trait]
//! impl RouteTableProvider for StaticHost {
//!     async fn listener_tables(&self) -> Vec<ListenerTable> {
//!         vec![ListenerTable {
//!             uri: "http://localhost:8080".to_string(),
//!             labels: vec!["api".to_string()],
//!             routes: vec![RouteEntry::new("GET", "/a")],
//!         }]
//!     }
//! }
//!
//! #[async_trait]
//! impl RouteCommitter for StaticHost {
//!     async fn commit(&self, _routes: &[RouteSpec]) -> Result<(), CommitError> {
//!         Ok(())
//!     }
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let host = Arc::new(StaticHost);
//! let guard = RouteGuard::new("doc-guard", host.clone(), host);
//!
//! let registered = guard
//!     .safe_route(vec![RouteSpec::new("get", "/a"), RouteSpec::new("GET", "/b")])
//!     .await
//!     .unwrap();
//!
//! // `GET /a` is already served (method comparison is case-insensitive), so
//! // only `/b` reaches the committer.
//! assert_eq!(registered, vec![RouteSpec::new("GET", "/b")]);
//! # });
//! ```
//!
//! ## Registration contract
//!
//! Exactly one of `Ok(registered)` or `Err(error)` comes back per call; there
//! is no partial-success reporting. An input that is empty, or whose every
//! candidate already collides, succeeds with an empty list and never touches
//! the committer. Candidates carrying a key already seen earlier in the same
//! batch are dropped rather than double-registered:
//!
//! ```
//! # use std::sync::Arc;
//! # use async_trait::async_trait;
//! # use safe_route::{
//! #     CommitError, ListenerTable, RouteCommitter, RouteGuard, RouteSpec,
//! #     RouteTableProvider,
//! # };
//! # struct EmptyHost;
//! # #[async_trait]
//! # impl RouteTableProvider for EmptyHost {
//! #     async fn listener_tables(&self) -> Vec<ListenerTable> {
//! #         Vec::new()
//! #     }
//! # }
//! # #[async_trait]
//! # impl RouteCommitter for EmptyHost {
//! #     async fn commit(&self, _routes: &[RouteSpec]) -> Result<(), CommitError> {
//! #         Ok(())
//! #     }
//! # }
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let host = Arc::new(EmptyHost);
//! let guard = RouteGuard::new("doc-guard", host.clone(), host);
//!
//! let registered = guard
//!     .safe_route(vec![RouteSpec::new("GET", "/c"), RouteSpec::new("get", "/c")])
//!     .await
//!     .unwrap();
//! assert_eq!(registered, vec![RouteSpec::new("GET", "/c")]);
//!
//! assert!(guard.safe_route(Vec::new()).await.unwrap().is_empty());
//! # });
//! ```
//!
//! ## Internal architecture map
//!
//! - API facade: outward [`RouteGuard`] / [`RouteSpec`] surface
//! - Control plane: input guard, table snapshot, registration lifecycle
//! - Routing: route-key identity and collision-filter policy
//!
//! ## Concurrency caveat
//!
//! The guard holds no lock between the snapshot read and the commit. If
//! another actor mutates the table inside that window, the collision decision
//! can be stale; a committer that re-validates at commit time surfaces this
//! as a conflict error, which the guard passes through unmodified.
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events. Library code emits events and
//! does not install a global subscriber. Binaries and tests are responsible
//! for one-time `tracing_subscriber` initialization at process boundaries.

mod control_plane;
mod routing;

mod host;
pub use host::{
    CommitError, CommitErrorKind, ListenerTable, RouteCommitter, RouteEntry, RouteTableProvider,
};

mod route_spec;
pub use route_spec::{RouteInput, RouteSpec};

#[doc(hidden)]
pub mod observability;

mod route_guard;
pub use route_guard::{RouteGuard, SafeRouteError};

pub use control_plane::input_guard::ValidationError;
pub use control_plane::table_snapshot::{ListenerSnapshot, TableSnapshot};
pub use routing::collision_filter::{AdmissionDecision, AdmissionPlan, Disposition};
pub use routing::route_key::RouteKey;

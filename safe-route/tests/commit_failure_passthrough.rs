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

mod support;

use in_memory_route_host::InMemoryRouteHost;
use integration_test_utils::{init_logging, route, FailingCommitter, StaticTableProvider};
use safe_route::{CommitError, CommitErrorKind, ListenerTable, RouteGuard, SafeRouteError};
use std::sync::Arc;

fn one_empty_listener() -> Arc<StaticTableProvider> {
    Arc::new(StaticTableProvider::new(vec![ListenerTable {
        uri: "http://localhost:8080".to_string(),
        labels: Vec::new(),
        routes: Vec::new(),
    }]))
}

#[tokio::test(flavor = "multi_thread")]
async fn conflict_from_the_committer_arrives_unmodified() {
    init_logging();

    let committer = Arc::new(FailingCommitter::new(CommitError::conflict(
        "GET /a raced a concurrent registration",
    )));
    let guard = RouteGuard::new("passthrough", one_empty_listener(), committer);

    let err = guard.safe_route(route("GET", "/a")).await.unwrap_err();

    assert_eq!(
        err,
        SafeRouteError::Commit(CommitError::conflict(
            "GET /a raced a concurrent registration"
        ))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn rejection_from_the_committer_arrives_unmodified() {
    init_logging();

    let committer = Arc::new(FailingCommitter::new(CommitError::rejected(
        "handler is not callable",
    )));
    let guard = RouteGuard::new("passthrough", one_empty_listener(), committer);

    let err = guard.safe_route(route("GET", "/a")).await.unwrap_err();

    assert_eq!(
        err,
        SafeRouteError::Commit(CommitError::rejected("handler is not callable"))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_path_is_rejected_by_the_host_end_to_end() {
    init_logging();

    let host = Arc::new(InMemoryRouteHost::new());
    host.add_listener("http://localhost:8080", Vec::new(), Vec::new())
        .await;
    let guard = support::make_guard("passthrough", &host);

    let err = guard.safe_route(route("GET", "no-slash")).await.unwrap_err();

    match err {
        SafeRouteError::Commit(commit_err) => {
            assert_eq!(commit_err.kind(), CommitErrorKind::Rejected);
        }
        other => panic!("expected a commit error, got: {other}"),
    }
    assert!(host.routes_on("http://localhost:8080").await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn stale_snapshot_duplicate_surfaces_as_a_conflict() {
    init_logging();

    // The guard plans against a snapshot the host has since moved past; the
    // committer's own re-validation catches the duplicate.
    let stale_provider = one_empty_listener();
    let host = Arc::new(InMemoryRouteHost::new());
    host.add_listener("http://localhost:8080", Vec::new(), vec![route("GET", "/a")])
        .await;
    let guard = RouteGuard::new("passthrough", stale_provider, host.clone());

    let err = guard.safe_route(route("GET", "/a")).await.unwrap_err();

    match err {
        SafeRouteError::Commit(commit_err) => {
            assert_eq!(commit_err.kind(), CommitErrorKind::Conflict);
        }
        other => panic!("expected a commit error, got: {other}"),
    }
    assert_eq!(host.routes_on("http://localhost:8080").await.len(), 1);
}

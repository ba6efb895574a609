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

use crate::route_spec::RouteSpec;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One route currently registered on a listener, as the host reports it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
}

impl RouteEntry {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
        }
    }
}

/// A listener's live routing table: its base uri, label set, and the routes
/// it currently serves. Raw host data; normalization happens in the snapshot.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ListenerTable {
    pub uri: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// Read side of the host seam: reports the active routing table per listener.
///
/// Implementations must not mutate the host. The guard reads a fresh table on
/// every invocation and never caches across calls.
#[async_trait]
pub trait RouteTableProvider: Send + Sync {
    async fn listener_tables(&self) -> Vec<ListenerTable>;
}

/// Write side of the host seam: adds a batch of routes in one call.
///
/// The committer either adds every route or raises a [`CommitError`]. The
/// guard surfaces that error unmodified and leaves whatever the primitive
/// already committed in place; it attempts no rollback of its own.
#[async_trait]
pub trait RouteCommitter: Send + Sync {
    async fn commit(&self, routes: &[RouteSpec]) -> Result<(), CommitError>;
}

/// Failure kinds a committer can raise.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommitErrorKind {
    /// The batch collides with the live table, e.g. a route that appeared
    /// after the snapshot was taken.
    Conflict,
    /// Any other rejection: malformed route, invalid path syntax, host limits.
    Rejected,
}

/// Error raised by a [`RouteCommitter`], carried through to the caller as-is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommitError {
    kind: CommitErrorKind,
    message: String,
}

impl CommitError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: CommitErrorKind::Conflict,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            kind: CommitErrorKind::Rejected,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> CommitErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for CommitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CommitErrorKind::Conflict => write!(f, "route conflict: {}", self.message),
            CommitErrorKind::Rejected => {
                write!(f, "route registration rejected: {}", self.message)
            }
        }
    }
}

impl Error for CommitError {}

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

use crate::control_plane::input_guard::ValidationError;
use crate::control_plane::registration::RegistrationLifecycle;
use crate::control_plane::table_snapshot::TableSnapshot;
use crate::host::{CommitError, RouteCommitter, RouteTableProvider};
use crate::route_spec::{RouteInput, RouteSpec};
use crate::routing::collision_filter::AdmissionPlan;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tracing::debug;

/// Failure of one guarded registration call.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SafeRouteError {
    /// The input failed structural validation; no table access happened.
    Validation(ValidationError),
    /// The committer rejected the admitted batch; carried through unmodified.
    Commit(CommitError),
}

impl Display for SafeRouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SafeRouteError::Validation(err) => write!(f, "route input rejected: {err}"),
            SafeRouteError::Commit(err) => write!(f, "route registration failed: {err}"),
        }
    }
}

impl Error for SafeRouteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SafeRouteError::Validation(err) => Some(err),
            SafeRouteError::Commit(err) => Some(err),
        }
    }
}

/// Guard in front of a host server's route table.
///
/// Owns no table state of its own: every invocation reads a fresh snapshot
/// through the provider, filters the candidates against it, and commits the
/// collision-free remainder in a single call.
///
/// No lock is held between the snapshot read and the commit. If another actor
/// mutates the table in that window the collision decision can be stale; a
/// committer that re-validates at commit time surfaces this as a conflict,
/// which arrives here unmodified.
pub struct RouteGuard {
    name: String,
    provider: Arc<dyn RouteTableProvider>,
    committer: Arc<dyn RouteCommitter>,
}

impl RouteGuard {
    pub fn new(
        name: &str,
        provider: Arc<dyn RouteTableProvider>,
        committer: Arc<dyn RouteCommitter>,
    ) -> Self {
        debug!(guard = name, "creating route guard");

        Self {
            name: name.to_string(),
            provider,
            committer,
        }
    }

    /// Registers whichever of `routes` are new for the host, in one commit.
    ///
    /// Accepts one descriptor or a sequence of them. Returns the routes that
    /// were actually registered: a subset of or equal to the input, each key
    /// at most once. An empty or all-colliding input succeeds with an empty
    /// list and never reaches the committer.
    pub async fn safe_route(
        &self,
        routes: impl Into<RouteInput>,
    ) -> Result<Vec<RouteSpec>, SafeRouteError> {
        RegistrationLifecycle::new(self.provider.as_ref(), self.committer.as_ref())
            .register(&self.name, routes.into())
            .await
    }

    /// Dry run: validates, snapshots, and filters without committing.
    pub async fn plan(
        &self,
        routes: impl Into<RouteInput>,
    ) -> Result<AdmissionPlan, SafeRouteError> {
        RegistrationLifecycle::new(self.provider.as_ref(), self.committer.as_ref())
            .plan(&self.name, routes.into())
            .await
    }

    /// Normalized per-listener view of the live routing table.
    pub async fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(self.provider.as_ref()).await
    }
}

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

//! Registration lifecycle orchestration around the collision filter.

use crate::control_plane::input_guard;
use crate::control_plane::table_snapshot::TableSnapshot;
use crate::host::{RouteCommitter, RouteTableProvider};
use crate::observability::{events, fields};
use crate::route_guard::SafeRouteError;
use crate::route_spec::{RouteInput, RouteSpec};
use crate::routing::collision_filter::{self, AdmissionPlan, Disposition};
use tracing::{debug, warn};

const COMPONENT: &str = "registration_lifecycle";

fn skip_reason(disposition: Disposition) -> &'static str {
    match disposition {
        Disposition::AlreadyRegistered => fields::REASON_ALREADY_REGISTERED,
        Disposition::DuplicateInBatch => fields::REASON_DUPLICATE_IN_BATCH,
        Disposition::Admitted => fields::NONE,
    }
}

/// Short-lived coordinator for one guarded registration: input guard, table
/// snapshot, collision filter, single commit, in strict sequence. No lock is
/// held across the snapshot-to-commit window.
pub(crate) struct RegistrationLifecycle<'a> {
    provider: &'a dyn RouteTableProvider,
    committer: &'a dyn RouteCommitter,
}

impl<'a> RegistrationLifecycle<'a> {
    pub(crate) fn new(
        provider: &'a dyn RouteTableProvider,
        committer: &'a dyn RouteCommitter,
    ) -> Self {
        Self {
            provider,
            committer,
        }
    }

    /// Validates and filters without committing.
    pub(crate) async fn plan(
        &self,
        guard: &str,
        input: RouteInput,
    ) -> Result<AdmissionPlan, SafeRouteError> {
        let candidates = input.into_vec();

        if let Err(err) = input_guard::validate(&candidates) {
            warn!(
                event = events::INPUT_REJECTED,
                component = COMPONENT,
                guard,
                err = %err,
                "rejecting route input before table access"
            );
            return Err(SafeRouteError::Validation(err));
        }

        let snapshot = TableSnapshot::capture(self.provider).await;
        debug!(
            event = events::SNAPSHOT_CAPTURED,
            component = COMPONENT,
            guard,
            listener_count = snapshot.listener_count(),
            "captured routing table snapshot"
        );

        let plan = collision_filter::plan_admissions(candidates, &snapshot);
        for decision in &plan.decisions {
            if decision.disposition != Disposition::Admitted {
                debug!(
                    event = events::CANDIDATE_SKIPPED,
                    component = COMPONENT,
                    guard,
                    route = %fields::format_route(&decision.route),
                    reason = skip_reason(decision.disposition),
                    "candidate excluded from registration"
                );
            }
        }

        Ok(plan)
    }

    /// Runs the full pipeline once. Exactly one of `Ok(registered)` or
    /// `Err(error)` comes back; there is no partial-success reporting.
    pub(crate) async fn register(
        &self,
        guard: &str,
        input: RouteInput,
    ) -> Result<Vec<RouteSpec>, SafeRouteError> {
        debug!(
            event = events::REGISTER_START,
            component = COMPONENT,
            guard,
            "starting guarded route registration"
        );

        let plan = self.plan(guard, input).await?;

        if plan.is_noop() {
            debug!(
                event = events::REGISTER_NOOP,
                component = COMPONENT,
                guard,
                reason = fields::REASON_NOTHING_NEW,
                "nothing new to register"
            );
            return Ok(Vec::new());
        }

        match self.committer.commit(&plan.admitted).await {
            Ok(()) => {
                debug!(
                    event = events::COMMIT_OK,
                    component = COMPONENT,
                    guard,
                    admitted_count = plan.admitted.len(),
                    "committed admitted routes"
                );
                Ok(plan.admitted)
            }
            Err(err) => {
                warn!(
                    event = events::COMMIT_FAILED,
                    component = COMPONENT,
                    guard,
                    err = %err,
                    "route committer rejected the batch"
                );
                Err(SafeRouteError::Commit(err))
            }
        }
    }
}

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

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Caller-supplied intent to register one route.
///
/// `method` is compared case-insensitively and `path` verbatim when the guard
/// checks for collisions; both ride through to the committer exactly as the
/// caller wrote them. `payload` carries the host framework's handler/options
/// blob — the guard never inspects it.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RouteSpec {
    pub method: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub payload: Value,
}

impl RouteSpec {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            payload: Value::Null,
        }
    }

    /// Attaches the opaque handler/options payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}

/// One route descriptor, or a sequence of them.
///
/// This is the outward calling convention: `safe_route` accepts whatever
/// converts into `RouteInput`, and manifests deserialize either shape. Any
/// other shape fails deserialization before the guard pipeline runs.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RouteInput {
    Single(RouteSpec),
    Many(Vec<RouteSpec>),
}

impl RouteInput {
    pub(crate) fn into_vec(self) -> Vec<RouteSpec> {
        match self {
            RouteInput::Single(route) => vec![route],
            RouteInput::Many(routes) => routes,
        }
    }
}

impl From<RouteSpec> for RouteInput {
    fn from(route: RouteSpec) -> Self {
        RouteInput::Single(route)
    }
}

impl From<Vec<RouteSpec>> for RouteInput {
    fn from(routes: Vec<RouteSpec>) -> Self {
        RouteInput::Many(routes)
    }
}

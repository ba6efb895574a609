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

use safe_route::RouteInput;
use serde::Deserialize;

/// Manifest layout for one guarded registration run.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub guard_name: String,
    pub listeners: Vec<ListenerSeed>,
    /// One route descriptor or an array of them.
    pub candidate_routes: RouteInput,
}

/// A listener to create before the guarded run, with its pre-registered
/// routes.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerSeed {
    pub uri: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub routes: Vec<SeedRoute>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedRoute {
    pub method: String,
    pub path: String,
}

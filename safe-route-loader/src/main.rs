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

mod config;

use crate::config::Manifest;
use clap::Parser;
use in_memory_route_host::InMemoryRouteHost;
use safe_route::observability::fields;
use safe_route::{Disposition, RouteGuard, RouteSpec};
use std::fs::File;
use std::io::Read;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command()]
struct LoaderArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,

    /// Print the admission plan without mutating the table.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt::try_init();

    info!("Started safe-route-loader");

    let args = LoaderArgs::parse();
    let mut file =
        File::open(&args.config).map_err(|e| format!("manifest not found: {e:?}"))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| format!("unable to read manifest: {e:?}"))?;

    let manifest: Manifest =
        json5::from_str(&contents).map_err(|e| format!("unable to parse manifest: {e:?}"))?;

    let host = Arc::new(InMemoryRouteHost::new());
    for listener in &manifest.listeners {
        let seed: Vec<RouteSpec> = listener
            .routes
            .iter()
            .map(|route| RouteSpec::new(&route.method, &route.path))
            .collect();
        host.add_listener(&listener.uri, listener.labels.clone(), seed)
            .await;
        info!(
            uri = %listener.uri,
            labels = %fields::format_labels(&listener.labels),
            "seeded listener"
        );
    }

    let guard = RouteGuard::new(&manifest.guard_name, host.clone(), host.clone());

    let plan = guard.plan(manifest.candidate_routes.clone()).await?;
    for decision in &plan.decisions {
        match decision.disposition {
            Disposition::Admitted => info!(
                route = %fields::format_route(&decision.route),
                new_for = decision.new_for.len(),
                "would register"
            ),
            Disposition::AlreadyRegistered => warn!(
                route = %fields::format_route(&decision.route),
                "skipping: already registered on every listener"
            ),
            Disposition::DuplicateInBatch => warn!(
                route = %fields::format_route(&decision.route),
                "skipping: duplicate within candidate batch"
            ),
        }
    }

    if args.dry_run {
        info!(admitted = plan.admitted.len(), "dry run complete; table untouched");
        return Ok(());
    }

    let registered = guard.safe_route(manifest.candidate_routes).await?;
    info!(registered = registered.len(), "registration committed");

    for listener in guard.snapshot().await.listeners {
        info!(
            uri = %listener.uri,
            labels = %fields::format_labels(&listener.labels),
            routes = listener.routes.len(),
            "final listener table"
        );
        for key in &listener.routes {
            info!("  {key}");
        }
    }

    Ok(())
}

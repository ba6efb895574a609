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

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use safe_route::{
    CommitError, ListenerTable, RouteCommitter, RouteEntry, RouteGuard, RouteSpec,
    RouteTableProvider,
};
use std::sync::Arc;
use tokio::runtime::Builder;

const LISTENER_ROWS: usize = 4;
const TABLE_ROWS: usize = 256;
const CANDIDATE_ROWS: usize = 64;

struct SyntheticHost {
    tables: Vec<ListenerTable>,
}

#[async_trait]
impl RouteTableProvider for SyntheticHost {
    async fn listener_tables(&self) -> Vec<ListenerTable> {
        self.tables.clone()
    }
}

struct NoopCommitter;

#[async_trait]
impl RouteCommitter for NoopCommitter {
    async fn commit(&self, _routes: &[RouteSpec]) -> Result<(), CommitError> {
        Ok(())
    }
}

fn build_host() -> Arc<SyntheticHost> {
    let tables = (0..LISTENER_ROWS)
        .map(|listener| ListenerTable {
            uri: format!("http://localhost:{}", 8080 + listener),
            labels: Vec::new(),
            routes: (0..TABLE_ROWS)
                .map(|row| RouteEntry::new("GET", &format!("/bench/{row}")))
                .collect(),
        })
        .collect();

    Arc::new(SyntheticHost { tables })
}

fn build_candidates() -> Vec<RouteSpec> {
    // Half the candidates collide with every listener table, half are new.
    (0..CANDIDATE_ROWS)
        .map(|row| {
            if row % 2 == 0 {
                RouteSpec::new("get", &format!("/bench/{row}"))
            } else {
                RouteSpec::new("POST", &format!("/bench/{row}"))
            }
        })
        .collect()
}

fn filter_criterion(c: &mut Criterion) {
    let runtime = Builder::new_current_thread()
        .build()
        .expect("benchmark runtime should build");

    let guard = RouteGuard::new("bench", build_host(), Arc::new(NoopCommitter));
    let candidates = build_candidates();

    let mut group = c.benchmark_group("collision_filter");
    group.bench_function("plan_half_colliding", |b| {
        b.iter(|| {
            let plan = runtime
                .block_on(guard.plan(candidates.clone()))
                .expect("plan should succeed");
            black_box(plan.admitted.len());
        });
    });
    group.finish();
}

criterion_group!(benches, filter_criterion);
criterion_main!(benches);

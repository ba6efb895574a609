//! Collision-filter decision policy.

use crate::control_plane::table_snapshot::TableSnapshot;
use crate::route_spec::RouteSpec;
use crate::routing::route_key::RouteKey;
use std::collections::HashSet;

/// Why a candidate was kept or excluded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Disposition {
    /// New for at least one listener, or the host has no listeners yet.
    Admitted,
    /// Every listener already serves this key.
    AlreadyRegistered,
    /// An earlier candidate in the same batch carries the same key.
    DuplicateInBatch,
}

/// Per-candidate outcome, in input order.
#[derive(Clone, Debug)]
pub struct AdmissionDecision {
    pub route: RouteSpec,
    pub disposition: Disposition,
    /// Uris of the listeners whose table lacks this key.
    pub new_for: Vec<String>,
}

/// The filter's full output: the deduplicated admitted list handed to the
/// committer, plus one decision per candidate for inspection and logging.
#[derive(Clone, Debug)]
pub struct AdmissionPlan {
    pub admitted: Vec<RouteSpec>,
    pub decisions: Vec<AdmissionDecision>,
}

impl AdmissionPlan {
    /// True when nothing would reach the committer.
    pub fn is_noop(&self) -> bool {
        self.admitted.is_empty()
    }
}

/// Pure decision function: candidates plus snapshot in, plan out.
///
/// A candidate is admitted when its key is absent from at least one
/// listener's table, or when the host has no listeners at all. Each admitted
/// key appears exactly once in the output regardless of how many listeners
/// lack it; later candidates repeating a key already seen in the batch are
/// excluded rather than double-registered.
pub(crate) fn plan_admissions(
    candidates: Vec<RouteSpec>,
    snapshot: &TableSnapshot,
) -> AdmissionPlan {
    let mut seen: HashSet<RouteKey> = HashSet::new();
    let mut admitted = Vec::new();
    let mut decisions = Vec::with_capacity(candidates.len());

    for route in candidates {
        let key = RouteKey::from_spec(&route);

        if !seen.insert(key.clone()) {
            decisions.push(AdmissionDecision {
                route,
                disposition: Disposition::DuplicateInBatch,
                new_for: Vec::new(),
            });
            continue;
        }

        let new_for: Vec<String> = snapshot
            .listeners
            .iter()
            .filter(|listener| !listener.contains(&key))
            .map(|listener| listener.uri.clone())
            .collect();

        if snapshot.listeners.is_empty() || !new_for.is_empty() {
            admitted.push(route.clone());
            decisions.push(AdmissionDecision {
                route,
                disposition: Disposition::Admitted,
                new_for,
            });
        } else {
            decisions.push(AdmissionDecision {
                route,
                disposition: Disposition::AlreadyRegistered,
                new_for,
            });
        }
    }

    AdmissionPlan {
        admitted,
        decisions,
    }
}

#[cfg(test)]
mod tests {
    use super::{plan_admissions, Disposition};
    use crate::control_plane::table_snapshot::{ListenerSnapshot, TableSnapshot};
    use crate::route_spec::RouteSpec;
    use crate::routing::route_key::RouteKey;

    fn snapshot_of(listeners: Vec<(&str, Vec<(&str, &str)>)>) -> TableSnapshot {
        TableSnapshot {
            listeners: listeners
                .into_iter()
                .map(|(uri, routes)| ListenerSnapshot {
                    uri: uri.to_string(),
                    labels: Vec::new(),
                    routes: routes
                        .into_iter()
                        .map(|(method, path)| RouteKey::new(method, path))
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn admits_routes_absent_from_the_table() {
        let snapshot = snapshot_of(vec![("a", vec![("GET", "/a")])]);
        let plan = plan_admissions(
            vec![RouteSpec::new("GET", "/a"), RouteSpec::new("GET", "/b")],
            &snapshot,
        );

        assert_eq!(plan.admitted, vec![RouteSpec::new("GET", "/b")]);
        assert_eq!(plan.decisions[0].disposition, Disposition::AlreadyRegistered);
        assert_eq!(plan.decisions[1].disposition, Disposition::Admitted);
    }

    #[test]
    fn method_collision_is_case_insensitive() {
        let snapshot = snapshot_of(vec![("a", vec![("GET", "/a")])]);
        let plan = plan_admissions(vec![RouteSpec::new("get", "/a")], &snapshot);

        assert!(plan.is_noop());
    }

    #[test]
    fn path_collision_is_case_sensitive() {
        let snapshot = snapshot_of(vec![("a", vec![("GET", "/a")])]);
        let plan = plan_admissions(vec![RouteSpec::new("GET", "/A")], &snapshot);

        assert_eq!(plan.admitted, vec![RouteSpec::new("GET", "/A")]);
    }

    #[test]
    fn zero_listeners_admit_every_candidate() {
        let snapshot = snapshot_of(Vec::new());
        let plan = plan_admissions(
            vec![RouteSpec::new("GET", "/a"), RouteSpec::new("POST", "/a")],
            &snapshot,
        );

        assert_eq!(plan.admitted.len(), 2);
        assert!(plan
            .decisions
            .iter()
            .all(|decision| decision.disposition == Disposition::Admitted));
    }

    #[test]
    fn route_on_one_listener_does_not_block_the_other() {
        let snapshot = snapshot_of(vec![("a", vec![("GET", "/x")]), ("b", Vec::new())]);
        let plan = plan_admissions(vec![RouteSpec::new("GET", "/x")], &snapshot);

        assert_eq!(plan.admitted, vec![RouteSpec::new("GET", "/x")]);
        assert_eq!(plan.decisions[0].new_for, vec!["b".to_string()]);
    }

    #[test]
    fn candidate_present_on_every_listener_is_excluded() {
        let snapshot = snapshot_of(vec![
            ("a", vec![("GET", "/x")]),
            ("b", vec![("get", "/x")]),
        ]);
        let plan = plan_admissions(vec![RouteSpec::new("GET", "/x")], &snapshot);

        assert!(plan.is_noop());
        assert_eq!(plan.decisions[0].disposition, Disposition::AlreadyRegistered);
        assert!(plan.decisions[0].new_for.is_empty());
    }

    #[test]
    fn candidate_new_for_several_listeners_is_admitted_once() {
        let snapshot = snapshot_of(vec![("a", Vec::new()), ("b", Vec::new())]);
        let plan = plan_admissions(vec![RouteSpec::new("GET", "/y")], &snapshot);

        assert_eq!(plan.admitted, vec![RouteSpec::new("GET", "/y")]);
        assert_eq!(
            plan.decisions[0].new_for,
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn duplicate_within_batch_keeps_first_occurrence() {
        let snapshot = snapshot_of(Vec::new());
        let plan = plan_admissions(
            vec![RouteSpec::new("GET", "/c"), RouteSpec::new("get", "/c")],
            &snapshot,
        );

        assert_eq!(plan.admitted, vec![RouteSpec::new("GET", "/c")]);
        assert_eq!(plan.decisions[1].disposition, Disposition::DuplicateInBatch);
    }

    #[test]
    fn empty_candidates_yield_an_empty_plan() {
        let snapshot = snapshot_of(vec![("a", vec![("GET", "/a")])]);
        let plan = plan_admissions(Vec::new(), &snapshot);

        assert!(plan.is_noop());
        assert!(plan.decisions.is_empty());
    }
}

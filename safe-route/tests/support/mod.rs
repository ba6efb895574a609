use in_memory_route_host::InMemoryRouteHost;
use safe_route::RouteGuard;
use std::sync::Arc;

pub(crate) fn make_guard(name: &str, host: &Arc<InMemoryRouteHost>) -> RouteGuard {
    RouteGuard::new(name, host.clone(), host.clone())
}

//! Shorthand constructors for route descriptors and table entries.

use safe_route::{RouteEntry, RouteSpec};

pub fn route(method: &str, path: &str) -> RouteSpec {
    RouteSpec::new(method, path)
}

pub fn entry(method: &str, path: &str) -> RouteEntry {
    RouteEntry::new(method, path)
}

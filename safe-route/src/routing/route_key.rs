//! Route identity used for collision comparison.

use crate::host::RouteEntry;
use crate::route_spec::RouteSpec;
use std::fmt::{Display, Formatter};

/// Comparable identity of one route: uppercased method plus verbatim path.
///
/// Computed on demand and never persisted. Path equality is exact and
/// case-sensitive; there is no pattern awareness of any kind.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RouteKey {
    method: String,
    path: String,
}

impl RouteKey {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
        }
    }

    pub(crate) fn from_spec(spec: &RouteSpec) -> Self {
        Self::new(&spec.method, &spec.path)
    }

    pub(crate) fn from_entry(entry: &RouteEntry) -> Self {
        Self::new(&entry.method, &entry.path)
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Display for RouteKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

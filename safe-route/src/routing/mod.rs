//! Routing policy layer.
//!
//! Owns route-key identity and the collision-filter decision policy. The
//! filter is a pure function of the candidate list and a table snapshot: it
//! never raises and never touches the host.

pub(crate) mod collision_filter;
pub(crate) mod route_key;

//! Observability layer: canonical event names and structured field helpers.

pub mod events;
pub mod fields;

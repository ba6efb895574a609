//! Structural validation of caller-supplied route descriptors.

use crate::route_spec::RouteSpec;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection raised before any table access when a descriptor is structurally
/// unusable. Fatal for the call; never retried.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    EmptyMethod { index: usize },
    EmptyPath { index: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyMethod { index } => {
                write!(f, "route descriptor at index {index} has an empty method")
            }
            ValidationError::EmptyPath { index } => {
                write!(f, "route descriptor at index {index} has an empty path")
            }
        }
    }
}

impl Error for ValidationError {}

/// Fails fast on the first descriptor lacking a method or a path.
pub(crate) fn validate(routes: &[RouteSpec]) -> Result<(), ValidationError> {
    for (index, route) in routes.iter().enumerate() {
        if route.method.is_empty() {
            return Err(ValidationError::EmptyMethod { index });
        }
        if route.path.is_empty() {
            return Err(ValidationError::EmptyPath { index });
        }
    }
    Ok(())
}

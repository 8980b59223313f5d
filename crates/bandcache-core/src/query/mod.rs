//! Read-only queries over a snapshot.
//!
//! Both queries are pure functions of the collections they are given; the
//! store hands them a consistent snapshot and never holds its lock while
//! they run.

pub mod concerts;
pub mod filter;

use thiserror::Error;

pub use concerts::concerts_for;
pub use filter::{ArtistFilter, MAX_YEAR, MIN_YEAR};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid {param} {value:?}: {reason}")]
    InvalidArgument {
        param: &'static str,
        value: String,
        reason: String,
    },
}

impl QueryError {
    pub(crate) fn invalid(param: &'static str, value: &str, reason: impl Into<String>) -> Self {
        QueryError::InvalidArgument {
            param,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

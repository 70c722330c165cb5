// third-party imports
use thiserror::Error;

/// Error is an error which may occur when configuring a matcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("wildcard token must not be empty")]
    EmptyWildcard,
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

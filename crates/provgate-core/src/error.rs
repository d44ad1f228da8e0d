use thiserror::Error;

/// Single error enum for all provgate operations.
///
/// Authorization outcomes are never errors: a denied request is `false`
/// from `is_authorized`, and a policy that cannot build a query returns
/// `None` from `query_uri`. Errors only surface when a descriptor string
/// cannot be parsed at all.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("provider uri is missing a scheme")]
    MissingScheme,

    #[error("provider uri is missing an authority")]
    MissingAuthority,

    #[error("provider uri contains an empty path segment")]
    EmptyPathSegment,

    #[error("malformed provider uri: {0}")]
    Malformed(String),
}

pub type PolicyResult<T> = Result<T, PolicyError>;

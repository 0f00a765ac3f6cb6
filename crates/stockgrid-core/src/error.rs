use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Message surfaced to users whenever a remote fetch fails.
pub const GENERIC_FAILURE_NOTICE: &str = "Something went wrong, Please try again later!";

/// Validation and contract errors exposed by `stockgrid-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown field '{value}', expected one of {expected}")]
    UnknownField { value: String, expected: String },
    #[error("invalid page size {value}, expected one of 5, 10, 25")]
    InvalidPageSize { value: usize },

    #[error("instrument id must be a positive integer: '{value}'")]
    InvalidInstrumentId { value: String },
    #[error("instrument {id} is not present in the loaded instrument list")]
    UnknownInstrument { id: u64 },

    #[error("date cannot be blank: '{value}'")]
    InvalidDate { value: String },
    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("base url is not configured; set STOCKGRID_API_URL or pass --base-url")]
    MissingBaseUrl,
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },
    #[error("timeout must be greater than zero")]
    InvalidTimeout,
    #[error("environment variable {name} is not valid: '{value}'")]
    InvalidEnvValue { name: &'static str, value: String },

    #[error("nothing to export: the value series is empty")]
    EmptyExport,

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Failure of a remote collection fetch.
///
/// Timeouts, non-2xx statuses and undecodable payloads are not distinguished; they all
/// collapse into a network failure. The detail is kept for logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    detail: String,
}

impl FetchError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub const fn code(&self) -> &'static str {
        "fetch.network_failure"
    }

    pub const fn notice(&self) -> &'static str {
        GENERIC_FAILURE_NOTICE
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "network failure: {}", self.detail)
    }
}

impl std::error::Error for FetchError {}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_keeps_detail_but_exposes_generic_notice() {
        let error = FetchError::network("connection refused");
        assert_eq!(error.detail(), "connection refused");
        assert_eq!(error.notice(), GENERIC_FAILURE_NOTICE);
        assert_eq!(error.to_string(), "network failure: connection refused");
    }
}

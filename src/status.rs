// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Classification of Kubernetes API status errors.
//!
//! Errors coming back from the API server carry a structured status (a
//! symbolic reason plus an HTTP-like code). By the time they reach a caller
//! they are usually wrapped in one or more layers of context, so the helpers
//! here search the whole `source()` chain for the first error exposing such a
//! status.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Status;
use kube::core::ErrorResponse;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::str::FromStr;

/// HTTP status code used by the API server for missing objects.
pub const NOT_FOUND_CODE: i32 = 404;

/// Symbolic reason reported in a Kubernetes `Status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReason {
    Unknown,
    Unauthorized,
    Forbidden,
    NotFound,
    AlreadyExists,
    Conflict,
    Gone,
    Invalid,
    ServerTimeout,
    Timeout,
    TooManyRequests,
    BadRequest,
    MethodNotAllowed,
    InternalError,
    ServiceUnavailable,
    /// A reason this crate does not know by name
    Other(String),
}

impl StatusReason {
    pub fn as_str(&self) -> &str {
        match self {
            StatusReason::Unknown => "",
            StatusReason::Unauthorized => "Unauthorized",
            StatusReason::Forbidden => "Forbidden",
            StatusReason::NotFound => "NotFound",
            StatusReason::AlreadyExists => "AlreadyExists",
            StatusReason::Conflict => "Conflict",
            StatusReason::Gone => "Gone",
            StatusReason::Invalid => "Invalid",
            StatusReason::ServerTimeout => "ServerTimeout",
            StatusReason::Timeout => "Timeout",
            StatusReason::TooManyRequests => "TooManyRequests",
            StatusReason::BadRequest => "BadRequest",
            StatusReason::MethodNotAllowed => "MethodNotAllowed",
            StatusReason::InternalError => "InternalError",
            StatusReason::ServiceUnavailable => "ServiceUnavailable",
            StatusReason::Other(reason) => reason,
        }
    }
}

impl From<&str> for StatusReason {
    fn from(s: &str) -> Self {
        match s {
            "" => StatusReason::Unknown,
            "Unauthorized" => StatusReason::Unauthorized,
            "Forbidden" => StatusReason::Forbidden,
            "NotFound" => StatusReason::NotFound,
            "AlreadyExists" => StatusReason::AlreadyExists,
            "Conflict" => StatusReason::Conflict,
            "Gone" => StatusReason::Gone,
            "Invalid" => StatusReason::Invalid,
            "ServerTimeout" => StatusReason::ServerTimeout,
            "Timeout" => StatusReason::Timeout,
            "TooManyRequests" => StatusReason::TooManyRequests,
            "BadRequest" => StatusReason::BadRequest,
            "MethodNotAllowed" => StatusReason::MethodNotAllowed,
            "InternalError" => StatusReason::InternalError,
            "ServiceUnavailable" => StatusReason::ServiceUnavailable,
            other => StatusReason::Other(other.to_string()),
        }
    }
}

impl FromStr for StatusReason {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StatusReason::from(s))
    }
}

impl fmt::Display for StatusReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusReason::Unknown => f.write_str("Unknown"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Implemented by errors that can be converted to an API `Status`.
pub trait ApiStatus {
    fn status(&self) -> Status;
}

impl ApiStatus for ErrorResponse {
    fn status(&self) -> Status {
        Status {
            status: Some(self.status.clone()),
            message: Some(self.message.clone()),
            reason: Some(self.reason.clone()),
            code: Some(i32::from(self.code)),
            ..Default::default()
        }
    }
}

/// An error carrying a full API `Status`, optionally caused by another error.
#[derive(Debug, Clone)]
pub struct StatusError {
    status: Status,
    cause: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl StatusError {
    pub fn new(status: Status) -> Self {
        Self {
            status,
            cause: None,
        }
    }

    /// Attach the underlying error that led to this status
    pub fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Build the error the API server returns for a missing object.
    pub fn not_found(resource: &str, name: &str) -> Self {
        Self::new(Status {
            status: Some("Failure".to_string()),
            message: Some(format!("{} \"{}\" not found", resource, name)),
            reason: Some(StatusReason::NotFound.as_str().to_string()),
            code: Some(NOT_FOUND_CODE),
            ..Default::default()
        })
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status.message.as_deref() {
            Some(message) if !message.is_empty() => f.write_str(message),
            _ => write!(
                f,
                "API status {} ({})",
                self.status.code.unwrap_or_default(),
                StatusReason::from(self.status.reason.as_deref().unwrap_or_default())
            ),
        }
    }
}

impl StdError for StatusError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

impl ApiStatus for StatusError {
    fn status(&self) -> Status {
        self.status.clone()
    }
}

/// Returns true if the error, or anything in its source chain, reports a
/// missing object. `None` is never "not found".
pub fn is_not_found(err: Option<&(dyn StdError + 'static)>) -> bool {
    if err.is_none() {
        return false;
    }
    let (reason, code) = reason_and_code_for_error(err);
    reason == StatusReason::NotFound || code == NOT_FOUND_CODE
}

/// [`is_not_found`] for callers holding a concrete error.
pub fn is_not_found_error<E: StdError + 'static>(err: &E) -> bool {
    is_not_found(Some(err))
}

/// Reason and code of the first error in the chain exposing an API status,
/// or `(Unknown, 0)` when none does.
pub fn reason_and_code_for_error(err: Option<&(dyn StdError + 'static)>) -> (StatusReason, i32) {
    let Some(err) = err else {
        return (StatusReason::Unknown, 0);
    };

    let status = status_of(err).or_else(|| {
        std::iter::successors(err.source(), |&e| e.source()).find_map(status_of)
    });

    match status {
        Some(status) => (
            StatusReason::from(status.reason.as_deref().unwrap_or_default()),
            status.code.unwrap_or_default(),
        ),
        None => (StatusReason::Unknown, 0),
    }
}

fn status_of(err: &(dyn StdError + 'static)) -> Option<Status> {
    if let Some(e) = err.downcast_ref::<StatusError>() {
        return Some(e.status());
    }
    if let Some(e) = err.downcast_ref::<ErrorResponse>() {
        return Some(e.status());
    }
    match err.downcast_ref::<kube::Error>() {
        Some(kube::Error::Api(response)) => Some(response.status()),
        _ => None,
    }
}

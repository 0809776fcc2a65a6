// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Error types for the removal path.

use std::net::IpAddr;

use thiserror::Error;

use crate::object_type::ObjectType;
use crate::status::SaiStatus;

/// Failure to parse the string or numeric form of a SAI value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown object type: {0}")]
    ObjectType(String),

    #[error("unknown status: {0}")]
    Status(String),

    #[error("unknown status code: {0}")]
    StatusCode(i32),

    #[error("malformed object id: {0}")]
    ObjectId(String),
}

/// Failure to render an object identity as a command key.
#[derive(Debug, Error)]
pub enum SerializeError {
    /// `SAI_OBJECT_TYPE_NULL` names no object.
    #[error("object type {0} is not a valid removal target")]
    InvalidObjectType(ObjectType),

    /// An object id was supplied for a type keyed by a structured entry.
    #[error("object type {0} is not identified by an object id")]
    NotObjectIdType(ObjectType),

    /// The entry kind does not belong to the requested object type.
    #[error("entry of type {got} cannot be removed as {expected}")]
    ObjectTypeMismatch {
        expected: ObjectType,
        got: ObjectType,
    },

    /// Prefix mask bits are not contiguous.
    #[error("invalid prefix mask {mask}")]
    InvalidPrefixMask { mask: IpAddr },

    /// Two addresses of one entry belong to different families.
    #[error("address family mismatch: {left} vs {right}")]
    AddressFamilyMismatch { left: IpAddr, right: IpAddr },

    /// JSON rendering failed.
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure while waiting for the remote executor.
#[derive(Debug, Error)]
pub enum WaitError {
    /// No response within the configured bound.
    #[error("response timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The response queue was closed by the executor side.
    #[error("response queue disconnected")]
    Disconnected,

    /// The response did not carry a known status.
    #[error("invalid status in response: {0}")]
    InvalidStatus(String),
}

/// Errors surfaced by remove and bulk remove.
///
/// A non-success status reported by the remote executor is not an error;
/// it is returned as `Ok(status)`.
#[derive(Debug, Error)]
pub enum RemoveError {
    /// The identity could not be canonicalized. Nothing was recorded or sent.
    #[error("serialization failed: {0}")]
    Serialization(#[from] SerializeError),

    /// Local enqueue on the command channel failed.
    #[error("command channel error: {0}")]
    Channel(#[source] anyhow::Error),

    /// Completion wait failed.
    #[error("wait for response failed: {0}")]
    Wait(#[from] WaitError),
}

impl RemoveError {
    /// SAI status code equivalent of this error.
    pub fn status(&self) -> SaiStatus {
        match self {
            Self::Serialization(_) => SaiStatus::InvalidParameter,
            Self::Channel(_) | Self::Wait(_) => SaiStatus::Failure,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Wait(WaitError::Timeout { .. }))
    }
}

/// Result type for removal operations.
pub type RemoveResult<T> = Result<T, RemoveError>;

// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! SAI status codes as reported by the remote executor.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum SaiStatus {
    Success = 0,
    Failure = -1,
    NotSupported = -2,
    NoMemory = -3,
    InsufficientResources = -4,
    InvalidParameter = -5,
    ItemAlreadyExists = -6,
    ItemNotFound = -7,
    BufferOverflow = -8,
    InvalidPortNumber = -9,
    InvalidPortMember = -10,
    InvalidVlanId = -11,
    Uninitialized = -12,
    TableFull = -13,
    MandatoryAttributeMissing = -14,
    NotImplemented = -15,
    AddrNotFound = -16,
    ObjectInUse = -17,
    InvalidObjectType = -18,
    InvalidObjectId = -19,
    InvalidNvStorage = -20,
    NvStorageFull = -21,
    SwUpgradeVersionMismatch = -22,
    NotExecuted = -23,
}

impl SaiStatus {
    const ALL: &'static [SaiStatus] = &[
        Self::Success,
        Self::Failure,
        Self::NotSupported,
        Self::NoMemory,
        Self::InsufficientResources,
        Self::InvalidParameter,
        Self::ItemAlreadyExists,
        Self::ItemNotFound,
        Self::BufferOverflow,
        Self::InvalidPortNumber,
        Self::InvalidPortMember,
        Self::InvalidVlanId,
        Self::Uninitialized,
        Self::TableFull,
        Self::MandatoryAttributeMissing,
        Self::NotImplemented,
        Self::AddrNotFound,
        Self::ObjectInUse,
        Self::InvalidObjectType,
        Self::InvalidObjectId,
        Self::InvalidNvStorage,
        Self::NvStorageFull,
        Self::SwUpgradeVersionMismatch,
        Self::NotExecuted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SAI_STATUS_SUCCESS",
            Self::Failure => "SAI_STATUS_FAILURE",
            Self::NotSupported => "SAI_STATUS_NOT_SUPPORTED",
            Self::NoMemory => "SAI_STATUS_NO_MEMORY",
            Self::InsufficientResources => "SAI_STATUS_INSUFFICIENT_RESOURCES",
            Self::InvalidParameter => "SAI_STATUS_INVALID_PARAMETER",
            Self::ItemAlreadyExists => "SAI_STATUS_ITEM_ALREADY_EXISTS",
            Self::ItemNotFound => "SAI_STATUS_ITEM_NOT_FOUND",
            Self::BufferOverflow => "SAI_STATUS_BUFFER_OVERFLOW",
            Self::InvalidPortNumber => "SAI_STATUS_INVALID_PORT_NUMBER",
            Self::InvalidPortMember => "SAI_STATUS_INVALID_PORT_MEMBER",
            Self::InvalidVlanId => "SAI_STATUS_INVALID_VLAN_ID",
            Self::Uninitialized => "SAI_STATUS_UNINITIALIZED",
            Self::TableFull => "SAI_STATUS_TABLE_FULL",
            Self::MandatoryAttributeMissing => "SAI_STATUS_MANDATORY_ATTRIBUTE_MISSING",
            Self::NotImplemented => "SAI_STATUS_NOT_IMPLEMENTED",
            Self::AddrNotFound => "SAI_STATUS_ADDR_NOT_FOUND",
            Self::ObjectInUse => "SAI_STATUS_OBJECT_IN_USE",
            Self::InvalidObjectType => "SAI_STATUS_INVALID_OBJECT_TYPE",
            Self::InvalidObjectId => "SAI_STATUS_INVALID_OBJECT_ID",
            Self::InvalidNvStorage => "SAI_STATUS_INVALID_NV_STORAGE",
            Self::NvStorageFull => "SAI_STATUS_NV_STORAGE_FULL",
            Self::SwUpgradeVersionMismatch => "SAI_STATUS_SW_UPGRADE_VERSION_MISMATCH",
            Self::NotExecuted => "SAI_STATUS_NOT_EXECUTED",
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for SaiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaiStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| ParseError::Status(s.to_string()))
    }
}

impl TryFrom<i32> for SaiStatus {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|st| st.code() == value)
            .ok_or(ParseError::StatusCode(value))
    }
}

// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Opaque SAI object handles.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// 64-bit SAI object id, serialized as `oid:0x<hex>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub u64);

impl ObjectId {
    pub const NULL: ObjectId = ObjectId(0);

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oid:0x{:x}", self.0)
    }
}

impl FromStr for ObjectId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::ObjectId(s.to_string());
        let hex = s.strip_prefix("oid:0x").ok_or_else(malformed)?;
        u64::from_str_radix(hex, 16).map(Self).map_err(|_| malformed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_format() {
        assert_eq!(ObjectId::NULL.to_string(), "oid:0x0");
        assert_eq!(
            ObjectId(0x21000000000000).to_string(),
            "oid:0x21000000000000"
        );
        assert_eq!(ObjectId(0xABCDEF).to_string(), "oid:0xabcdef");
    }

    #[test]
    fn test_object_id_parse() {
        assert_eq!("oid:0x2a".parse::<ObjectId>(), Ok(ObjectId(42)));
        assert!("0x2a".parse::<ObjectId>().is_err());
        assert_eq!(
            "oid:0xzz".parse::<ObjectId>(),
            Err(ParseError::ObjectId("oid:0xzz".to_string()))
        );
    }
}

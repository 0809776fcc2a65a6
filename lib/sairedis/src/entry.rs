// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Structured entry keys for object types that have no object id.
//!
//! Every entry kind serializes to compact JSON with sorted field names,
//! which is the identity half of its command key.

use std::fmt;
use std::net::IpAddr;

use serde_json::{json, Value};

use crate::error::SerializeError;
use crate::object_id::ObjectId;
use crate::object_type::ObjectType;

/// An entry kind that can be removed by value.
pub trait SaiEntry: Clone + Send + Sync {
    const OBJECT_TYPE: ObjectType;

    fn to_json(&self) -> Result<Value, SerializeError>;

    fn serialize_entry(&self) -> Result<String, SerializeError> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }
}

/// MAC address, formatted as uppercase colon separated octets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}

/// Address plus mask, as SAI carries route destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IpPrefix {
    pub addr: IpAddr,
    pub mask: IpAddr,
}

impl IpPrefix {
    /// Prefix from an address and a prefix length. Lengths past the
    /// address width saturate to a host prefix.
    pub fn new(addr: IpAddr, len: u8) -> Self {
        let mask = match addr {
            IpAddr::V4(_) => {
                let len = u32::from(len.min(32));
                let bits = u32::MAX.checked_shl(32 - len).unwrap_or(0);
                IpAddr::from(bits.to_be_bytes())
            }
            IpAddr::V6(_) => {
                let len = u32::from(len.min(128));
                let bits = u128::MAX.checked_shl(128 - len).unwrap_or(0);
                IpAddr::from(bits.to_be_bytes())
            }
        };
        Self { addr, mask }
    }

    /// Number of leading one bits in the mask.
    pub fn prefix_len(&self) -> Result<u32, SerializeError> {
        let (ones, zeros, width) = match (self.addr, self.mask) {
            (IpAddr::V4(_), IpAddr::V4(mask)) => {
                let m = u32::from(mask);
                (m.leading_ones(), m.trailing_zeros(), 32)
            }
            (IpAddr::V6(_), IpAddr::V6(mask)) => {
                let m = u128::from(mask);
                (m.leading_ones(), m.trailing_zeros(), 128)
            }
            (left, right) => {
                return Err(SerializeError::AddressFamilyMismatch { left, right });
            }
        };

        if ones + zeros != width {
            return Err(SerializeError::InvalidPrefixMask { mask: self.mask });
        }
        Ok(ones)
    }

    pub fn serialize(&self) -> Result<String, SerializeError> {
        Ok(format!("{}/{}", self.addr, self.prefix_len()?))
    }
}

fn same_family(left: IpAddr, right: IpAddr) -> Result<(), SerializeError> {
    if left.is_ipv4() == right.is_ipv4() {
        Ok(())
    } else {
        Err(SerializeError::AddressFamilyMismatch { left, right })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FdbEntry {
    pub switch_id: ObjectId,
    pub mac_address: MacAddress,
    pub bv_id: ObjectId,
}

impl SaiEntry for FdbEntry {
    const OBJECT_TYPE: ObjectType = ObjectType::FdbEntry;

    fn to_json(&self) -> Result<Value, SerializeError> {
        Ok(json!({
            "bvid": self.bv_id.to_string(),
            "mac": self.mac_address.to_string(),
            "switch_id": self.switch_id.to_string(),
        }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NeighborEntry {
    pub switch_id: ObjectId,
    pub rif_id: ObjectId,
    pub ip_address: IpAddr,
}

impl SaiEntry for NeighborEntry {
    const OBJECT_TYPE: ObjectType = ObjectType::NeighborEntry;

    fn to_json(&self) -> Result<Value, SerializeError> {
        Ok(json!({
            "ip": self.ip_address.to_string(),
            "rif": self.rif_id.to_string(),
            "switch_id": self.switch_id.to_string(),
        }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RouteEntry {
    pub switch_id: ObjectId,
    pub vr_id: ObjectId,
    pub destination: IpPrefix,
}

impl SaiEntry for RouteEntry {
    const OBJECT_TYPE: ObjectType = ObjectType::RouteEntry;

    fn to_json(&self) -> Result<Value, SerializeError> {
        Ok(json!({
            "dest": self.destination.serialize()?,
            "switch_id": self.switch_id.to_string(),
            "vr": self.vr_id.to_string(),
        }))
    }
}

/// MPLS in-segment entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct InsegEntry {
    pub switch_id: ObjectId,
    pub label: u32,
}

impl SaiEntry for InsegEntry {
    const OBJECT_TYPE: ObjectType = ObjectType::InsegEntry;

    fn to_json(&self) -> Result<Value, SerializeError> {
        Ok(json!({
            "label": self.label.to_string(),
            "switch_id": self.switch_id.to_string(),
        }))
    }
}

/// Source-specific or any-source multicast match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum McastEntryType {
    Sg,
    Xg,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IpmcEntry {
    pub switch_id: ObjectId,
    pub vr_id: ObjectId,
    pub entry_type: McastEntryType,
    pub destination: IpAddr,
    pub source: IpAddr,
}

impl SaiEntry for IpmcEntry {
    const OBJECT_TYPE: ObjectType = ObjectType::IpmcEntry;

    fn to_json(&self) -> Result<Value, SerializeError> {
        same_family(self.destination, self.source)?;
        let entry_type = match self.entry_type {
            McastEntryType::Sg => "SAI_IPMC_ENTRY_TYPE_SG",
            McastEntryType::Xg => "SAI_IPMC_ENTRY_TYPE_XG",
        };
        Ok(json!({
            "destination": self.destination.to_string(),
            "source": self.source.to_string(),
            "switch_id": self.switch_id.to_string(),
            "type": entry_type,
            "vr_id": self.vr_id.to_string(),
        }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct L2mcEntry {
    pub switch_id: ObjectId,
    pub bv_id: ObjectId,
    pub entry_type: McastEntryType,
    pub destination: IpAddr,
    pub source: IpAddr,
}

impl SaiEntry for L2mcEntry {
    const OBJECT_TYPE: ObjectType = ObjectType::L2mcEntry;

    fn to_json(&self) -> Result<Value, SerializeError> {
        same_family(self.destination, self.source)?;
        let entry_type = match self.entry_type {
            McastEntryType::Sg => "SAI_L2MC_ENTRY_TYPE_SG",
            McastEntryType::Xg => "SAI_L2MC_ENTRY_TYPE_XG",
        };
        Ok(json!({
            "bv_id": self.bv_id.to_string(),
            "destination": self.destination.to_string(),
            "source": self.source.to_string(),
            "switch_id": self.switch_id.to_string(),
            "type": entry_type,
        }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct McastFdbEntry {
    pub switch_id: ObjectId,
    pub mac_address: MacAddress,
    pub bv_id: ObjectId,
}

impl SaiEntry for McastFdbEntry {
    const OBJECT_TYPE: ObjectType = ObjectType::McastFdbEntry;

    fn to_json(&self) -> Result<Value, SerializeError> {
        Ok(json!({
            "bv_id": self.bv_id.to_string(),
            "mac_address": self.mac_address.to_string(),
            "switch_id": self.switch_id.to_string(),
        }))
    }
}

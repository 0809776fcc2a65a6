// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Identity codec: object identities to command keys.

use std::fmt;

use crate::entry::{
    FdbEntry, InsegEntry, IpmcEntry, L2mcEntry, McastFdbEntry, NeighborEntry, RouteEntry,
    SaiEntry,
};
use crate::error::SerializeError;
use crate::object_id::ObjectId;
use crate::object_type::ObjectType;

/// Identifying data for one object to remove.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectIdentity {
    ObjectId(ObjectId),
    Fdb(FdbEntry),
    Neighbor(NeighborEntry),
    Route(RouteEntry),
    Inseg(InsegEntry),
    Ipmc(IpmcEntry),
    L2mc(L2mcEntry),
    McastFdb(McastFdbEntry),
}

impl ObjectIdentity {
    /// Object type fixed by the entry kind, `None` for object ids.
    pub fn entry_type(&self) -> Option<ObjectType> {
        match self {
            Self::ObjectId(_) => None,
            Self::Fdb(_) => Some(FdbEntry::OBJECT_TYPE),
            Self::Neighbor(_) => Some(NeighborEntry::OBJECT_TYPE),
            Self::Route(_) => Some(RouteEntry::OBJECT_TYPE),
            Self::Inseg(_) => Some(InsegEntry::OBJECT_TYPE),
            Self::Ipmc(_) => Some(IpmcEntry::OBJECT_TYPE),
            Self::L2mc(_) => Some(L2mcEntry::OBJECT_TYPE),
            Self::McastFdb(_) => Some(McastFdbEntry::OBJECT_TYPE),
        }
    }

    fn serialize_entry(&self) -> Result<String, SerializeError> {
        match self {
            Self::ObjectId(oid) => Ok(oid.to_string()),
            Self::Fdb(e) => e.serialize_entry(),
            Self::Neighbor(e) => e.serialize_entry(),
            Self::Route(e) => e.serialize_entry(),
            Self::Inseg(e) => e.serialize_entry(),
            Self::Ipmc(e) => e.serialize_entry(),
            Self::L2mc(e) => e.serialize_entry(),
            Self::McastFdb(e) => e.serialize_entry(),
        }
    }
}

impl From<ObjectId> for ObjectIdentity {
    fn from(oid: ObjectId) -> Self {
        Self::ObjectId(oid)
    }
}

impl From<FdbEntry> for ObjectIdentity {
    fn from(e: FdbEntry) -> Self {
        Self::Fdb(e)
    }
}

impl From<NeighborEntry> for ObjectIdentity {
    fn from(e: NeighborEntry) -> Self {
        Self::Neighbor(e)
    }
}

impl From<RouteEntry> for ObjectIdentity {
    fn from(e: RouteEntry) -> Self {
        Self::Route(e)
    }
}

impl From<InsegEntry> for ObjectIdentity {
    fn from(e: InsegEntry) -> Self {
        Self::Inseg(e)
    }
}

impl From<IpmcEntry> for ObjectIdentity {
    fn from(e: IpmcEntry) -> Self {
        Self::Ipmc(e)
    }
}

impl From<L2mcEntry> for ObjectIdentity {
    fn from(e: L2mcEntry) -> Self {
        Self::L2mc(e)
    }
}

impl From<McastFdbEntry> for ObjectIdentity {
    fn from(e: McastFdbEntry) -> Self {
        Self::McastFdb(e)
    }
}

/// Render `identity` as the identity half of a command key for `object_type`.
///
/// Deterministic and free of side effects. Object ids are only accepted
/// for object-id types; entries only for their own type.
pub fn canonicalize(
    object_type: ObjectType,
    identity: &ObjectIdentity,
) -> Result<String, SerializeError> {
    if object_type == ObjectType::Null {
        return Err(SerializeError::InvalidObjectType(object_type));
    }

    match identity.entry_type() {
        None if object_type.is_entry_type() => Err(SerializeError::NotObjectIdType(object_type)),
        Some(got) if got != object_type => Err(SerializeError::ObjectTypeMismatch {
            expected: object_type,
            got,
        }),
        _ => identity.serialize_entry(),
    }
}

/// Key written to the command channel.
///
/// A single-object key names one object; a bulk key names a batch and
/// carries only the member count.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CommandKey(String);

impl CommandKey {
    pub fn single(object_type: ObjectType, serialized_id: &str) -> Self {
        Self(format!("{}:{}", object_type, serialized_id))
    }

    pub fn bulk(object_type: ObjectType, count: usize) -> Self {
        Self(format!("{}:{}", object_type, count))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommandKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;
    use crate::entry::{IpPrefix, MacAddress};

    fn route(third_octet: u8, len: u8) -> RouteEntry {
        RouteEntry {
            switch_id: ObjectId(0x21000000000000),
            vr_id: ObjectId(0x3000000000022),
            destination: IpPrefix::new(IpAddr::V4(Ipv4Addr::new(10, 0, third_octet, 0)), len),
        }
    }

    #[test]
    fn test_canonicalize_object_id() {
        let id = ObjectIdentity::from(ObjectId(0x1000000000001));
        assert_eq!(
            canonicalize(ObjectType::Port, &id).unwrap(),
            "oid:0x1000000000001"
        );
    }

    #[test]
    fn test_canonicalize_is_deterministic() {
        let id = ObjectIdentity::from(route(1, 24));
        let first = canonicalize(ObjectType::RouteEntry, &id).unwrap();
        let second = canonicalize(ObjectType::RouteEntry, &id.clone()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_canonicalize_is_injective_within_type() {
        let ids: Vec<ObjectIdentity> = vec![
            route(1, 24).into(),
            route(2, 24).into(),
            route(1, 16).into(),
            route(1, 32).into(),
        ];
        let keys: HashSet<String> = ids
            .iter()
            .map(|id| canonicalize(ObjectType::RouteEntry, id).unwrap())
            .collect();
        assert_eq!(keys.len(), ids.len());

        let fdb = |last: u8| -> ObjectIdentity {
            FdbEntry {
                switch_id: ObjectId(1),
                mac_address: MacAddress([0, 0, 0, 0, 0, last]),
                bv_id: ObjectId(2),
            }
            .into()
        };
        assert_ne!(
            canonicalize(ObjectType::FdbEntry, &fdb(1)).unwrap(),
            canonicalize(ObjectType::FdbEntry, &fdb(2)).unwrap()
        );
    }

    #[test]
    fn test_canonicalize_rejects_mismatches() {
        let route_id = ObjectIdentity::from(route(1, 24));
        assert!(matches!(
            canonicalize(ObjectType::FdbEntry, &route_id),
            Err(SerializeError::ObjectTypeMismatch {
                expected: ObjectType::FdbEntry,
                got: ObjectType::RouteEntry,
            })
        ));

        let oid = ObjectIdentity::from(ObjectId(5));
        assert!(matches!(
            canonicalize(ObjectType::NeighborEntry, &oid),
            Err(SerializeError::NotObjectIdType(ObjectType::NeighborEntry))
        ));
        assert!(matches!(
            canonicalize(ObjectType::Null, &oid),
            Err(SerializeError::InvalidObjectType(ObjectType::Null))
        ));
    }

    #[test]
    fn test_canonicalize_rejects_malformed_entry() {
        let mut bad = route(1, 24);
        bad.destination.mask = IpAddr::V4(Ipv4Addr::new(255, 255, 0, 255));
        let id = ObjectIdentity::from(bad);
        assert!(matches!(
            canonicalize(ObjectType::RouteEntry, &id),
            Err(SerializeError::InvalidPrefixMask { .. })
        ));
    }

    #[test]
    fn test_command_keys() {
        let key = CommandKey::single(ObjectType::Port, "oid:0x1");
        assert_eq!(key.as_str(), "SAI_OBJECT_TYPE_PORT:oid:0x1");

        let key = CommandKey::bulk(ObjectType::FdbEntry, 3);
        assert_eq!(key.to_string(), "SAI_OBJECT_TYPE_FDB_ENTRY:3");
    }
}

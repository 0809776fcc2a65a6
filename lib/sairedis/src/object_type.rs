// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! SAI object types and common API kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// SAI object type tag.
///
/// Serialized form is the SAI enum name, e.g. `SAI_OBJECT_TYPE_ROUTE_ENTRY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    Null,
    Port,
    Lag,
    VirtualRouter,
    NextHop,
    NextHopGroup,
    RouterInterface,
    AclTable,
    AclEntry,
    AclCounter,
    AclRange,
    HostIf,
    MirrorSession,
    SamplePacket,
    Stp,
    HostIfTrapGroup,
    Policer,
    Wred,
    QosMap,
    Queue,
    Scheduler,
    SchedulerGroup,
    BufferPool,
    BufferProfile,
    IngressPriorityGroup,
    LagMember,
    Hash,
    Udf,
    UdfMatch,
    UdfGroup,
    FdbEntry,
    Switch,
    HostIfTrap,
    HostIfTableEntry,
    NeighborEntry,
    RouteEntry,
    Vlan,
    VlanMember,
    HostIfPacket,
    TunnelMap,
    Tunnel,
    TunnelTermTableEntry,
    FdbFlush,
    NextHopGroupMember,
    StpPort,
    RpfGroup,
    RpfGroupMember,
    L2mcGroup,
    L2mcGroupMember,
    IpmcGroup,
    IpmcGroupMember,
    L2mcEntry,
    IpmcEntry,
    McastFdbEntry,
    HostIfUserDefinedTrap,
    Bridge,
    BridgePort,
    TunnelMapEntry,
    InsegEntry,
}

impl ObjectType {
    pub const ALL: &'static [ObjectType] = &[
        Self::Null,
        Self::Port,
        Self::Lag,
        Self::VirtualRouter,
        Self::NextHop,
        Self::NextHopGroup,
        Self::RouterInterface,
        Self::AclTable,
        Self::AclEntry,
        Self::AclCounter,
        Self::AclRange,
        Self::HostIf,
        Self::MirrorSession,
        Self::SamplePacket,
        Self::Stp,
        Self::HostIfTrapGroup,
        Self::Policer,
        Self::Wred,
        Self::QosMap,
        Self::Queue,
        Self::Scheduler,
        Self::SchedulerGroup,
        Self::BufferPool,
        Self::BufferProfile,
        Self::IngressPriorityGroup,
        Self::LagMember,
        Self::Hash,
        Self::Udf,
        Self::UdfMatch,
        Self::UdfGroup,
        Self::FdbEntry,
        Self::Switch,
        Self::HostIfTrap,
        Self::HostIfTableEntry,
        Self::NeighborEntry,
        Self::RouteEntry,
        Self::Vlan,
        Self::VlanMember,
        Self::HostIfPacket,
        Self::TunnelMap,
        Self::Tunnel,
        Self::TunnelTermTableEntry,
        Self::FdbFlush,
        Self::NextHopGroupMember,
        Self::StpPort,
        Self::RpfGroup,
        Self::RpfGroupMember,
        Self::L2mcGroup,
        Self::L2mcGroupMember,
        Self::IpmcGroup,
        Self::IpmcGroupMember,
        Self::L2mcEntry,
        Self::IpmcEntry,
        Self::McastFdbEntry,
        Self::HostIfUserDefinedTrap,
        Self::Bridge,
        Self::BridgePort,
        Self::TunnelMapEntry,
        Self::InsegEntry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "SAI_OBJECT_TYPE_NULL",
            Self::Port => "SAI_OBJECT_TYPE_PORT",
            Self::Lag => "SAI_OBJECT_TYPE_LAG",
            Self::VirtualRouter => "SAI_OBJECT_TYPE_VIRTUAL_ROUTER",
            Self::NextHop => "SAI_OBJECT_TYPE_NEXT_HOP",
            Self::NextHopGroup => "SAI_OBJECT_TYPE_NEXT_HOP_GROUP",
            Self::RouterInterface => "SAI_OBJECT_TYPE_ROUTER_INTERFACE",
            Self::AclTable => "SAI_OBJECT_TYPE_ACL_TABLE",
            Self::AclEntry => "SAI_OBJECT_TYPE_ACL_ENTRY",
            Self::AclCounter => "SAI_OBJECT_TYPE_ACL_COUNTER",
            Self::AclRange => "SAI_OBJECT_TYPE_ACL_RANGE",
            Self::HostIf => "SAI_OBJECT_TYPE_HOSTIF",
            Self::MirrorSession => "SAI_OBJECT_TYPE_MIRROR_SESSION",
            Self::SamplePacket => "SAI_OBJECT_TYPE_SAMPLEPACKET",
            Self::Stp => "SAI_OBJECT_TYPE_STP",
            Self::HostIfTrapGroup => "SAI_OBJECT_TYPE_HOSTIF_TRAP_GROUP",
            Self::Policer => "SAI_OBJECT_TYPE_POLICER",
            Self::Wred => "SAI_OBJECT_TYPE_WRED",
            Self::QosMap => "SAI_OBJECT_TYPE_QOS_MAP",
            Self::Queue => "SAI_OBJECT_TYPE_QUEUE",
            Self::Scheduler => "SAI_OBJECT_TYPE_SCHEDULER",
            Self::SchedulerGroup => "SAI_OBJECT_TYPE_SCHEDULER_GROUP",
            Self::BufferPool => "SAI_OBJECT_TYPE_BUFFER_POOL",
            Self::BufferProfile => "SAI_OBJECT_TYPE_BUFFER_PROFILE",
            Self::IngressPriorityGroup => "SAI_OBJECT_TYPE_INGRESS_PRIORITY_GROUP",
            Self::LagMember => "SAI_OBJECT_TYPE_LAG_MEMBER",
            Self::Hash => "SAI_OBJECT_TYPE_HASH",
            Self::Udf => "SAI_OBJECT_TYPE_UDF",
            Self::UdfMatch => "SAI_OBJECT_TYPE_UDF_MATCH",
            Self::UdfGroup => "SAI_OBJECT_TYPE_UDF_GROUP",
            Self::FdbEntry => "SAI_OBJECT_TYPE_FDB_ENTRY",
            Self::Switch => "SAI_OBJECT_TYPE_SWITCH",
            Self::HostIfTrap => "SAI_OBJECT_TYPE_HOSTIF_TRAP",
            Self::HostIfTableEntry => "SAI_OBJECT_TYPE_HOSTIF_TABLE_ENTRY",
            Self::NeighborEntry => "SAI_OBJECT_TYPE_NEIGHBOR_ENTRY",
            Self::RouteEntry => "SAI_OBJECT_TYPE_ROUTE_ENTRY",
            Self::Vlan => "SAI_OBJECT_TYPE_VLAN",
            Self::VlanMember => "SAI_OBJECT_TYPE_VLAN_MEMBER",
            Self::HostIfPacket => "SAI_OBJECT_TYPE_HOSTIF_PACKET",
            Self::TunnelMap => "SAI_OBJECT_TYPE_TUNNEL_MAP",
            Self::Tunnel => "SAI_OBJECT_TYPE_TUNNEL",
            Self::TunnelTermTableEntry => "SAI_OBJECT_TYPE_TUNNEL_TERM_TABLE_ENTRY",
            Self::FdbFlush => "SAI_OBJECT_TYPE_FDB_FLUSH",
            Self::NextHopGroupMember => "SAI_OBJECT_TYPE_NEXT_HOP_GROUP_MEMBER",
            Self::StpPort => "SAI_OBJECT_TYPE_STP_PORT",
            Self::RpfGroup => "SAI_OBJECT_TYPE_RPF_GROUP",
            Self::RpfGroupMember => "SAI_OBJECT_TYPE_RPF_GROUP_MEMBER",
            Self::L2mcGroup => "SAI_OBJECT_TYPE_L2MC_GROUP",
            Self::L2mcGroupMember => "SAI_OBJECT_TYPE_L2MC_GROUP_MEMBER",
            Self::IpmcGroup => "SAI_OBJECT_TYPE_IPMC_GROUP",
            Self::IpmcGroupMember => "SAI_OBJECT_TYPE_IPMC_GROUP_MEMBER",
            Self::L2mcEntry => "SAI_OBJECT_TYPE_L2MC_ENTRY",
            Self::IpmcEntry => "SAI_OBJECT_TYPE_IPMC_ENTRY",
            Self::McastFdbEntry => "SAI_OBJECT_TYPE_MCAST_FDB_ENTRY",
            Self::HostIfUserDefinedTrap => "SAI_OBJECT_TYPE_HOSTIF_USER_DEFINED_TRAP",
            Self::Bridge => "SAI_OBJECT_TYPE_BRIDGE",
            Self::BridgePort => "SAI_OBJECT_TYPE_BRIDGE_PORT",
            Self::TunnelMapEntry => "SAI_OBJECT_TYPE_TUNNEL_MAP_ENTRY",
            Self::InsegEntry => "SAI_OBJECT_TYPE_INSEG_ENTRY",
        }
    }

    /// Whether objects of this type are named by a structured entry
    /// instead of an object id.
    pub fn is_entry_type(&self) -> bool {
        matches!(
            self,
            Self::FdbEntry
                | Self::NeighborEntry
                | Self::RouteEntry
                | Self::InsegEntry
                | Self::IpmcEntry
                | Self::L2mcEntry
                | Self::McastFdbEntry
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|ot| ot.as_str() == s)
            .ok_or_else(|| ParseError::ObjectType(s.to_string()))
    }
}

/// Logical operation kind a completion is awaited for.
///
/// The removal path only waits on [`CommonApi::Remove`], for single and
/// bulk removals alike. The other kinds name the remaining operations of
/// the executor protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonApi {
    Create,
    Remove,
    Set,
    Get,
    BulkCreate,
    BulkRemove,
    BulkSet,
    BulkGet,
}

impl CommonApi {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "SAI_COMMON_API_CREATE",
            Self::Remove => "SAI_COMMON_API_REMOVE",
            Self::Set => "SAI_COMMON_API_SET",
            Self::Get => "SAI_COMMON_API_GET",
            Self::BulkCreate => "SAI_COMMON_API_BULK_CREATE",
            Self::BulkRemove => "SAI_COMMON_API_BULK_REMOVE",
            Self::BulkSet => "SAI_COMMON_API_BULK_SET",
            Self::BulkGet => "SAI_COMMON_API_BULK_GET",
        }
    }
}

impl fmt::Display for CommonApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

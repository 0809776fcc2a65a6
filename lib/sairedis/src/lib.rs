// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! SAI object removal over a shared key-value command channel.
//!
//! A removal is translated into a command key, optionally recorded,
//! written to the command channel, and completed by waiting for the
//! remote executor's status:
//!
//! ```text
//! identity ──► canonicalize ──► record (r| / R|) ──► del / set ──► wait_for ──► status
//! ```
//!
//! Single removals issue `del <type>:<id>`. Bulk removals issue one
//! `set <type>:<count>` whose fields are the member ids, followed by a
//! single wait whose outcome applies to every member.

pub mod builder;
pub mod channel;
pub mod codec;
pub mod config;
pub mod entry;
pub mod error;
pub mod object_id;
pub mod object_type;
pub mod recorder;
pub mod remover;
pub mod response;
pub mod status;

// Identity codec
pub use codec::{canonicalize, CommandKey, ObjectIdentity};
pub use entry::{
    FdbEntry, InsegEntry, IpPrefix, IpmcEntry, L2mcEntry, MacAddress, McastEntryType,
    McastFdbEntry, NeighborEntry, RouteEntry, SaiEntry,
};
pub use object_id::ObjectId;
pub use object_type::{CommonApi, ObjectType};
pub use status::SaiStatus;

// Error types
pub use error::{ParseError, RemoveError, RemoveResult, SerializeError, WaitError};

// Configuration
pub use config::{RecordConfig, RecordConfigBuilder, SaiRedisConfig};

// Recording
pub use recorder::{FileRecordSink, MemoryRecordSink, RecordEvent, RecordSink, Recorder};

// Channel & synchronization
pub use channel::{
    Command, CommandChannel, FieldValueTuple, InProcessChannel, BULK_REMOVE_OP, REMOVE_OP,
};
pub use response::{
    waiter_for, AsyncModeWaiter, PendingRequest, Response, ResponseQueueWaiter, ResponseSender,
    ResponseWaiter, GET_RESPONSE_OP,
};

// Removal
pub use builder::{remover_from_config, RemoverBuilder};
pub use remover::{Remover, VirtualIdRelease};

// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Single and bulk object removal.
//!
//! Each call runs canonicalize → record → write → wait in order. The
//! record, write and wait steps run under one lock, so record order
//! matches channel order. The waiter discards responses owed to waits
//! that timed out or were cancelled, so a status always belongs to the
//! command that was just written.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::channel::{CommandChannel, FieldValueTuple, BULK_REMOVE_OP, REMOVE_OP};
use crate::codec::{canonicalize, CommandKey, ObjectIdentity};
use crate::entry::SaiEntry;
use crate::error::{RemoveError, RemoveResult};
use crate::object_id::ObjectId;
use crate::object_type::{CommonApi, ObjectType};
use crate::recorder::{RecordEvent, Recorder};
use crate::response::{PendingRequest, ResponseWaiter};
use crate::status::SaiStatus;

/// Releases the virtual id of a removed switch.
pub trait VirtualIdRelease: Send + Sync {
    fn release(&self, switch_id: ObjectId);
}

impl<F> VirtualIdRelease for F
where
    F: Fn(ObjectId) + Send + Sync,
{
    fn release(&self, switch_id: ObjectId) {
        self(switch_id)
    }
}

pub struct Remover<C, W>
where
    C: CommandChannel,
    W: ResponseWaiter,
{
    channel: C,
    waiter: W,
    recorder: Arc<Recorder>,
    vid_release: Option<Arc<dyn VirtualIdRelease>>,
    api_lock: Mutex<()>,
}

impl<C, W> Remover<C, W>
where
    C: CommandChannel,
    W: ResponseWaiter,
{
    pub fn new(channel: C, waiter: W, recorder: Arc<Recorder>) -> Self {
        Self {
            channel,
            waiter,
            recorder,
            vid_release: None,
            api_lock: Mutex::new(()),
        }
    }

    pub fn with_virtual_id_release(mut self, release: Arc<dyn VirtualIdRelease>) -> Self {
        self.vid_release = Some(release);
        self
    }

    pub fn recorder(&self) -> &Arc<Recorder> {
        &self.recorder
    }

    /// Remove one object.
    ///
    /// A non-success status from the executor is returned as `Ok`. A
    /// successfully removed switch has its virtual id released; objects
    /// that belonged to it are not cleaned up here.
    pub async fn remove(
        &self,
        object_type: ObjectType,
        identity: &ObjectIdentity,
    ) -> RemoveResult<SaiStatus> {
        let serialized = canonicalize(object_type, identity)?;
        let status = self.remove_serialized(object_type, &serialized).await?;

        if let ObjectIdentity::ObjectId(oid) = identity {
            self.after_remove(object_type, *oid, status);
        }

        Ok(status)
    }

    pub async fn remove_object(
        &self,
        object_type: ObjectType,
        object_id: ObjectId,
    ) -> RemoveResult<SaiStatus> {
        let identity = ObjectIdentity::ObjectId(object_id);
        self.remove(object_type, &identity).await
    }

    pub async fn remove_entry<E: SaiEntry>(&self, entry: &E) -> RemoveResult<SaiStatus> {
        let serialized = entry.serialize_entry()?;
        self.remove_serialized(E::OBJECT_TYPE, &serialized).await
    }

    /// Remove by an already serialized identity.
    pub async fn remove_serialized(
        &self,
        object_type: ObjectType,
        serialized_id: &str,
    ) -> RemoveResult<SaiStatus> {
        let key = CommandKey::single(object_type, serialized_id);

        tracing::debug!(%key, "generic remove key");

        let _guard = self.api_lock.lock().await;

        if self.recorder.is_enabled() {
            self.recorder.record(&RecordEvent::Remove { key: &key });
        }

        self.channel
            .del(key.as_str(), REMOVE_OP)
            .await
            .map_err(RemoveError::Channel)?;

        let status = self
            .waiter
            .wait_for(&PendingRequest::new(CommonApi::Remove, key))
            .await?;

        Ok(status)
    }

    /// Remove a batch of objects of one type with a single command and a
    /// single wait.
    ///
    /// Returns one status per identity. The executor reports one
    /// aggregate outcome for the batch, so all slots carry that outcome.
    pub async fn bulk_remove(
        &self,
        object_type: ObjectType,
        identities: &[ObjectIdentity],
    ) -> RemoveResult<Vec<SaiStatus>> {
        let serialized = identities
            .iter()
            .map(|identity| canonicalize(object_type, identity))
            .collect::<Result<Vec<_>, _>>()?;

        self.bulk_remove_serialized(object_type, &serialized).await
    }

    pub async fn bulk_remove_objects(
        &self,
        object_type: ObjectType,
        object_ids: &[ObjectId],
    ) -> RemoveResult<Vec<SaiStatus>> {
        let identities: Vec<ObjectIdentity> =
            object_ids.iter().copied().map(ObjectIdentity::from).collect();
        self.bulk_remove(object_type, &identities).await
    }

    pub async fn bulk_remove_entries<E: SaiEntry>(
        &self,
        entries: &[E],
    ) -> RemoveResult<Vec<SaiStatus>> {
        let ids = entries
            .iter()
            .map(|entry| entry.serialize_entry())
            .collect::<Result<Vec<_>, _>>()?;

        self.bulk_remove_serialized(E::OBJECT_TYPE, &ids).await
    }

    pub async fn bulk_remove_serialized(
        &self,
        object_type: ObjectType,
        serialized_ids: &[String],
    ) -> RemoveResult<Vec<SaiStatus>> {
        // removal carries no attributes, every value is empty
        let entries: Vec<FieldValueTuple> = serialized_ids
            .iter()
            .map(|id| (id.clone(), String::new()))
            .collect();

        // key: object_type:count, field: object id, value: empty
        let key = CommandKey::bulk(object_type, entries.len());

        tracing::debug!(%key, count = entries.len(), "bulk remove");

        let _guard = self.api_lock.lock().await;

        if self.recorder.is_enabled() {
            self.recorder.record(&RecordEvent::BulkRemove {
                object_type,
                entries: &entries,
            });
        }

        if !entries.is_empty() {
            self.channel
                .set(key.as_str(), &entries, BULK_REMOVE_OP)
                .await
                .map_err(RemoveError::Channel)?;
        }

        let status = self
            .waiter
            .wait_for(&PendingRequest::new(CommonApi::Remove, key))
            .await?;

        Ok(vec![status; entries.len()])
    }

    fn after_remove(&self, object_type: ObjectType, object_id: ObjectId, status: SaiStatus) {
        if object_type != ObjectType::Switch || !status.is_success() {
            return;
        }

        tracing::info!(switch_id = %object_id, "removing switch id");

        if let Some(release) = &self.vid_release {
            release.release(object_id);
        }
    }
}

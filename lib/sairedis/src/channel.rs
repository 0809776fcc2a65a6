// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Command channel trait and implementations.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Field/value pair of a `set` command.
pub type FieldValueTuple = (String, String);

/// Operation label of a single remove.
pub const REMOVE_OP: &str = "remove";

/// Operation label of a bulk remove.
pub const BULK_REMOVE_OP: &str = "bulkremove";

/// Write side of the key-value command channel.
///
/// Success only means the command was enqueued; the outcome of applying
/// it arrives through a [`ResponseWaiter`](crate::response::ResponseWaiter).
#[async_trait]
pub trait CommandChannel: Send + Sync {
    async fn del(&self, key: &str, op: &str) -> Result<()>;
    async fn set(&self, key: &str, values: &[FieldValueTuple], op: &str) -> Result<()>;
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: CommandChannel + ?Sized> CommandChannel for Arc<T> {
    async fn del(&self, key: &str, op: &str) -> Result<()> {
        (**self).del(key, op).await
    }

    async fn set(&self, key: &str, values: &[FieldValueTuple], op: &str) -> Result<()> {
        (**self).set(key, values, op).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Command as seen by the executor side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Del {
        key: String,
        op: String,
    },
    Set {
        key: String,
        values: Vec<FieldValueTuple>,
        op: String,
    },
}

impl Command {
    pub fn key(&self) -> &str {
        match self {
            Self::Del { key, .. } | Self::Set { key, .. } => key,
        }
    }

    pub fn op(&self) -> &str {
        match self {
            Self::Del { op, .. } | Self::Set { op, .. } => op,
        }
    }
}

/// In-process channel, used for testing and embedding.
pub struct InProcessChannel {
    tx: mpsc::UnboundedSender<Command>,
}

impl InProcessChannel {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Command>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl CommandChannel for InProcessChannel {
    async fn del(&self, key: &str, op: &str) -> Result<()> {
        self.tx.send(Command::Del {
            key: key.to_string(),
            op: op.to_string(),
        })?;
        Ok(())
    }

    async fn set(&self, key: &str, values: &[FieldValueTuple], op: &str) -> Result<()> {
        self.tx.send(Command::Set {
            key: key.to_string(),
            values: values.to_vec(),
            op: op.to_string(),
        })?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in_process"
    }
}

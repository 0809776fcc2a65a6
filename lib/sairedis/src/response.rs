// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Completion synchronization with the remote executor.
//!
//! Every issued command is followed by exactly one wait. The executor
//! answers with a `getresponse` message whose key is the serialized
//! status. Only one request is outstanding per channel and responses
//! arrive in command order. A wait that times out or is dropped still has
//! a response owed to it; the next wait discards that many `getresponse`
//! messages before taking its own.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};

use crate::channel::FieldValueTuple;
use crate::codec::CommandKey;
use crate::config::SaiRedisConfig;
use crate::error::WaitError;
use crate::object_type::CommonApi;
use crate::status::SaiStatus;

/// Operation label of executor responses.
pub const GET_RESPONSE_OP: &str = "getresponse";

/// The request a wait is correlated with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub api: CommonApi,
    pub key: CommandKey,
}

impl PendingRequest {
    pub fn new(api: CommonApi, key: CommandKey) -> Self {
        Self { api, key }
    }
}

#[async_trait]
pub trait ResponseWaiter: Send + Sync {
    /// Block until the executor reports completion of `request`.
    async fn wait_for(&self, request: &PendingRequest) -> Result<SaiStatus, WaitError>;
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: ResponseWaiter + ?Sized> ResponseWaiter for Arc<T> {
    async fn wait_for(&self, request: &PendingRequest) -> Result<SaiStatus, WaitError> {
        (**self).wait_for(request).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Waiter used when sync mode is off: every command counts as applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncModeWaiter;

#[async_trait]
impl ResponseWaiter for AsyncModeWaiter {
    async fn wait_for(&self, request: &PendingRequest) -> Result<SaiStatus, WaitError> {
        tracing::trace!(
            api = %request.api,
            key = %request.key,
            "sync mode off, assuming success"
        );
        Ok(SaiStatus::Success)
    }

    fn name(&self) -> &'static str {
        "async_mode"
    }
}

/// Message posted by the executor side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub key: String,
    pub op: String,
    pub values: Vec<FieldValueTuple>,
}

impl Response {
    pub fn status(status: SaiStatus) -> Self {
        Self {
            key: status.to_string(),
            op: GET_RESPONSE_OP.to_string(),
            values: Vec::new(),
        }
    }
}

/// Executor-side handle of a [`ResponseQueueWaiter`].
#[derive(Clone)]
pub struct ResponseSender {
    tx: mpsc::UnboundedSender<Response>,
}

impl ResponseSender {
    pub fn send(&self, response: Response) -> Result<()> {
        self.tx.send(response)?;
        Ok(())
    }

    pub fn send_status(&self, status: SaiStatus) -> Result<()> {
        self.send(Response::status(status))
    }
}

/// Waits on a queue of executor responses with a bounded timeout.
pub struct ResponseQueueWaiter {
    rx: Mutex<mpsc::UnboundedReceiver<Response>>,
    timeout: Duration,
    /// Responses owed to waits that gave up before receiving them.
    abandoned: AtomicUsize,
}

/// Responses a single wait still has to consume from the queue.
///
/// Whatever is left when the guard drops is handed back to the waiter, so
/// a timed out or cancelled wait leaves its late response to be skipped.
struct Owed<'a> {
    abandoned: &'a AtomicUsize,
    count: usize,
}

impl Drop for Owed<'_> {
    fn drop(&mut self) {
        if self.count > 0 {
            self.abandoned.fetch_add(self.count, Ordering::SeqCst);
        }
    }
}

impl ResponseQueueWaiter {
    pub fn new(timeout: Duration) -> (Self, ResponseSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                rx: Mutex::new(rx),
                timeout,
                abandoned: AtomicUsize::new(0),
            },
            ResponseSender { tx },
        )
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Late responses the next wait will discard.
    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResponseWaiter for ResponseQueueWaiter {
    async fn wait_for(&self, request: &PendingRequest) -> Result<SaiStatus, WaitError> {
        let deadline = tokio::time::Instant::now() + self.timeout;
        let mut owed = Owed {
            abandoned: &self.abandoned,
            count: 1,
        };

        let mut rx = self.rx.lock().await;
        owed.count += self.abandoned.swap(0, Ordering::SeqCst);

        loop {
            let response = match tokio::time::timeout_at(deadline, rx.recv()).await {
                Ok(Some(response)) => response,
                Ok(None) => {
                    owed.count = 0;
                    return Err(WaitError::Disconnected);
                }
                Err(_) => {
                    let duration_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                    tracing::error!(
                        api = %request.api,
                        key = %request.key,
                        duration_ms,
                        "failed to get response"
                    );
                    return Err(WaitError::Timeout { duration_ms });
                }
            };

            if response.op != GET_RESPONSE_OP {
                tracing::debug!(
                    op = %response.op,
                    key = %response.key,
                    "skipping non-response message"
                );
                continue;
            }

            owed.count -= 1;
            if owed.count > 0 {
                tracing::warn!(
                    status = %response.key,
                    remaining = owed.count - 1,
                    "discarding late response of an abandoned request"
                );
                continue;
            }

            return response
                .key
                .parse::<SaiStatus>()
                .map_err(|_| WaitError::InvalidStatus(response.key));
        }
    }

    fn name(&self) -> &'static str {
        "response_queue"
    }
}

/// Waiter matching `config.sync_mode`.
///
/// In sync mode the returned sender must be handed to whatever delivers
/// executor responses; in async mode there is nothing to deliver.
pub fn waiter_for(config: &SaiRedisConfig) -> (Arc<dyn ResponseWaiter>, Option<ResponseSender>) {
    if config.sync_mode {
        let (waiter, sender) = ResponseQueueWaiter::new(config.response_timeout);
        (Arc::new(waiter), Some(sender))
    } else {
        (Arc::new(AsyncModeWaiter), None)
    }
}

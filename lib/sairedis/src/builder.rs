// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Builder for [`Remover`].

use std::sync::Arc;

use anyhow::Result;

use super::channel::CommandChannel;
use super::config::SaiRedisConfig;
use super::recorder::Recorder;
use super::remover::{Remover, VirtualIdRelease};
use super::response::{waiter_for, ResponseSender, ResponseWaiter};

/// Builder for constructing a `Remover`.
///
/// # Example
///
/// ```ignore
/// let remover = RemoverBuilder::new(channel, AsyncModeWaiter)
///     .recorder(Arc::new(Recorder::from_config(&config.record)?))
///     .virtual_id_release(|switch_id| allocator.free(switch_id))
///     .build();
/// ```
pub struct RemoverBuilder<C, W>
where
    C: CommandChannel,
    W: ResponseWaiter,
{
    channel: C,
    waiter: W,
    recorder: Option<Arc<Recorder>>,
    vid_release: Option<Arc<dyn VirtualIdRelease>>,
}

impl<C, W> RemoverBuilder<C, W>
where
    C: CommandChannel,
    W: ResponseWaiter,
{
    pub fn new(channel: C, waiter: W) -> Self {
        Self {
            channel,
            waiter,
            recorder: None,
            vid_release: None,
        }
    }

    /// Share a recorder with other components of the process.
    ///
    /// Default: recording disabled.
    pub fn recorder(mut self, recorder: Arc<Recorder>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Called with the switch id after a switch is removed successfully.
    pub fn virtual_id_release(mut self, release: impl VirtualIdRelease + 'static) -> Self {
        self.vid_release = Some(Arc::new(release));
        self
    }

    pub fn build(self) -> Remover<C, W> {
        let recorder = self
            .recorder
            .unwrap_or_else(|| Arc::new(Recorder::disabled()));
        let remover = Remover::new(self.channel, self.waiter, recorder);
        match self.vid_release {
            Some(release) => remover.with_virtual_id_release(release),
            None => remover,
        }
    }
}

/// Build a remover for `channel` with recorder and waiter taken from `config`.
///
/// The returned sender is `Some` in sync mode and must be fed with the
/// executor's responses.
pub fn remover_from_config<C: CommandChannel>(
    channel: C,
    config: &SaiRedisConfig,
) -> Result<(Remover<C, Arc<dyn ResponseWaiter>>, Option<ResponseSender>)> {
    let recorder = Arc::new(Recorder::from_config(&config.record)?);
    let (waiter, sender) = waiter_for(config);

    tracing::debug!(
        channel = channel.name(),
        waiter = waiter.name(),
        record = recorder.is_enabled(),
        "creating remover"
    );

    let remover = RemoverBuilder::new(channel, waiter)
        .recorder(recorder)
        .build();
    Ok((remover, sender))
}

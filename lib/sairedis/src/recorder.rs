// SPDX-FileCopyrightText: Copyright (c) 2025-2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Recording of issued operations for replay and debugging.
//!
//! Lines follow the replay format:
//!
//! ```text
//! r|SAI_OBJECT_TYPE_PORT:oid:0x1000000000002
//! R|SAI_OBJECT_TYPE_FDB_ENTRY||{"bvid":...}|||{"bvid":...}|
//! ```
//!
//! Recording is best effort: a sink failure is logged and never fails
//! the operation being recorded.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;

use crate::channel::FieldValueTuple;
use crate::codec::CommandKey;
use crate::config::RecordConfig;
use crate::object_type::ObjectType;

/// One recorded operation.
#[derive(Debug, Clone, Copy)]
pub enum RecordEvent<'a> {
    /// Single remove, `r|<key>`.
    Remove { key: &'a CommandKey },
    /// Bulk remove, `R|<type>||<id>|<value>...`. Capital `R` marks bulk.
    BulkRemove {
        object_type: ObjectType,
        entries: &'a [FieldValueTuple],
    },
}

impl fmt::Display for RecordEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remove { key } => write!(f, "r|{}", key),
            Self::BulkRemove {
                object_type,
                entries,
            } => {
                write!(f, "R|{}", object_type)?;
                for (field, value) in entries.iter() {
                    write!(f, "||{}|{}", field, value)?;
                }
                Ok(())
            }
        }
    }
}

/// Destination for recorded lines.
pub trait RecordSink: Send + Sync {
    fn write_line(&self, line: &str) -> Result<()>;

    /// Reopen the underlying output, e.g. after log rotation.
    fn reopen(&self) -> Result<()> {
        Ok(())
    }
}

/// Appends timestamped lines to a file.
pub struct FileRecordSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileRecordSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = Self::open_writer(&path)?;
        Self::write_marker(&mut writer, &path)?;

        tracing::info!(path = %path.display(), "recording started");

        Ok(Self {
            path,
            writer: Mutex::new(writer),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_writer(path: &Path) -> Result<BufWriter<File>> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(BufWriter::new(file))
    }

    fn write_marker(writer: &mut BufWriter<File>, path: &Path) -> Result<()> {
        writeln!(writer, "{}|#|recording on: {}", timestamp(), path.display())?;
        writer.flush()?;
        Ok(())
    }
}

fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d.%H:%M:%S%.6f")
        .to_string()
}

impl RecordSink for FileRecordSink {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock();
        writeln!(writer, "{}|{}", timestamp(), line)?;
        writer.flush()?;
        Ok(())
    }

    fn reopen(&self) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.flush()?;
        *writer = Self::open_writer(&self.path)?;
        Self::write_marker(&mut writer, &self.path)?;
        tracing::info!(path = %self.path.display(), "recording file reopened");
        Ok(())
    }
}

impl Drop for FileRecordSink {
    fn drop(&mut self) {
        let writer = self.writer.get_mut();
        let _ = writeln!(writer, "{}|#|recording stopped", timestamp());
        let _ = writer.flush();
    }
}

/// Keeps raw lines in memory.
#[derive(Default)]
pub struct MemoryRecordSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryRecordSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl RecordSink for MemoryRecordSink {
    fn write_line(&self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

/// Enable-gated recorder shared by all operations of a process.
///
/// Whether recording is on is decided when the recorder is built and
/// never changes afterwards.
#[derive(Clone, Default)]
pub struct Recorder {
    sink: Option<Arc<dyn RecordSink>>,
}

impl Recorder {
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// File-backed recorder when recording is enabled, disabled otherwise.
    pub fn from_config(config: &RecordConfig) -> Result<Self> {
        if !config.enabled {
            return Ok(Self::disabled());
        }
        let sink = FileRecordSink::open(config.path())?;
        Ok(Self::new(Arc::new(sink)))
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&self, event: &RecordEvent<'_>) {
        let Some(sink) = &self.sink else {
            return;
        };

        if let Err(e) = sink.write_line(&event.to_string()) {
            tracing::warn!(error = %e, "failed to record operation");
        }
    }

    pub fn reopen(&self) -> Result<()> {
        match &self.sink {
            Some(sink) => sink.reopen(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Recorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recorder")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

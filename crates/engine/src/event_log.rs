//! JSON-lines event log.
//!
//! The terminal is in raw mode on the alternate screen while the game runs, so
//! nothing can be printed. Instead every core event can be appended to a file
//! as one JSON object per line:
//!
//! ```text
//! {"t_ms":0,"event":"reset"}
//! {"t_ms":0,"event":"spawned","kind":"t","x":3}
//! {"t_ms":420,"event":"input","command":"moveLeft","applied":true}
//! {"t_ms":19000,"event":"locked","kind":"t","x":3,"y":18,"lines_cleared":0}
//! ```
//!
//! Player input is logged as an `input` record ahead of the core events it
//! caused, with `applied` false when the command was gated or blocked.
//!
//! A write error switches the log off for the rest of the session; the game
//! keeps running.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::{CoreEvent, GameCommand};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub t_ms: u64,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines_cleared: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied: Option<bool>,
}

impl EventRecord {
    pub fn new(t_ms: u64, event: &CoreEvent) -> Self {
        let mut rec = Self {
            t_ms,
            event: event.as_str(),
            kind: None,
            x: None,
            y: None,
            lines_cleared: None,
            command: None,
            applied: None,
        };
        match *event {
            CoreEvent::Spawned { kind, x } => {
                rec.kind = Some(kind.as_str());
                rec.x = Some(x);
            }
            CoreEvent::Locked {
                kind,
                x,
                y,
                lines_cleared,
            } => {
                rec.kind = Some(kind.as_str());
                rec.x = Some(x);
                rec.y = Some(y);
                rec.lines_cleared = Some(lines_cleared);
            }
            CoreEvent::GameOver { kind } => {
                rec.kind = Some(kind.as_str());
            }
            CoreEvent::Paused | CoreEvent::Resumed | CoreEvent::Reset => {}
        }
        rec
    }

    /// Record for a player command and whether it changed anything
    pub fn input(t_ms: u64, command: GameCommand, applied: bool) -> Self {
        Self {
            t_ms,
            event: "input",
            kind: None,
            x: None,
            y: None,
            lines_cleared: None,
            command: Some(command.as_str()),
            applied: Some(applied),
        }
    }
}

pub struct EventLog {
    out: Box<dyn Write>,
    buf: Vec<u8>,
    failed: bool,
    written: u64,
}

impl EventLog {
    pub fn new<W: Write + 'static>(out: W) -> Self {
        Self {
            out: Box::new(out),
            buf: Vec::with_capacity(256),
            failed: false,
            written: 0,
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open event log {}", path.display()))?;
        Ok(Self::new(file))
    }

    /// Append one core event. Does nothing once a previous write has failed.
    pub fn record(&mut self, t_ms: u64, event: &CoreEvent) {
        self.write_record(&EventRecord::new(t_ms, event));
    }

    /// Append one player command.
    pub fn record_input(&mut self, t_ms: u64, command: GameCommand, applied: bool) {
        self.write_record(&EventRecord::input(t_ms, command, applied));
    }

    fn write_record(&mut self, rec: &EventRecord) {
        if self.failed {
            return;
        }

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, rec).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if self.out.write_all(&self.buf).is_err() || self.out.flush().is_err() {
            self.failed = true;
            return;
        }
        self.written += 1;
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn records_written(&self) -> u64 {
        self.written
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog")
            .field("failed", &self.failed)
            .field("written", &self.written)
            .finish()
    }
}

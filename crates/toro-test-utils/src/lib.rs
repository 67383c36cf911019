//! Test utilities and mock types for toro development.
//!
//! Provides mock implementations of the boundary traits
//! ([`Renderer`], [`TerminationSignal`], [`EventSource`]) and grid
//! fixtures for constructing test scenarios.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::io;

use crossbeam_channel::{Receiver, Sender};
use toro_core::{Cell, EventSource, GridView, Renderer, TerminationSignal};

pub use fixtures::{block, blinker, glider, grid_from_rows};

/// Mock implementation of [`Renderer`].
///
/// Records a copy of every frame it is asked to draw. Optionally fails
/// once a fixed number of frames have been drawn.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: Vec<Vec<Cell>>,
    fail_after: Option<usize>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return an error from `render` once `frames` frames are recorded.
    pub fn failing_after(frames: usize) -> Self {
        Self {
            frames: Vec::new(),
            fail_after: Some(frames),
        }
    }

    /// Row-major snapshots of every frame drawn, oldest first.
    pub fn frames(&self) -> &[Vec<Cell>] {
        &self.frames
    }

    /// Number of frames drawn.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, grid: &dyn GridView) -> io::Result<()> {
        if self.fail_after == Some(self.frames.len()) {
            return Err(io::Error::other("display lost"));
        }
        self.frames.push(grid.cells().to_vec());
        Ok(())
    }
}

/// Mock implementation of [`TerminationSignal`].
///
/// Reports a termination request on the poll numbered `terminate_on`
/// (1-based) and on no other.
pub struct ScriptedTermination {
    terminate_on: usize,
    polls: usize,
}

impl ScriptedTermination {
    /// Request termination on the `n`th poll.
    pub fn after_polls(n: usize) -> Self {
        Self {
            terminate_on: n,
            polls: 0,
        }
    }

    /// Never request termination.
    pub fn never() -> Self {
        Self::after_polls(usize::MAX)
    }

    /// Number of polls observed so far.
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl TerminationSignal for ScriptedTermination {
    fn poll_termination(&mut self) -> bool {
        self.polls += 1;
        self.polls == self.terminate_on
    }
}

/// Mock implementation of [`EventSource`] fed from a channel.
///
/// Each value sent on the paired [`Sender`] is returned from one
/// `wait_event` call. Dropping the sender makes `wait_event` fail with
/// `BrokenPipe`.
pub struct ChannelEventSource {
    rx: Receiver<io::Result<()>>,
}

/// Create a connected sender and [`ChannelEventSource`].
pub fn channel_events() -> (Sender<io::Result<()>>, ChannelEventSource) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (tx, ChannelEventSource { rx })
}

impl EventSource for ChannelEventSource {
    fn wait_event(&mut self) -> io::Result<()> {
        match self.rx.recv() {
            Ok(event) => event,
            Err(_) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "event channel closed",
            )),
        }
    }
}

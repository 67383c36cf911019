//! Background keyboard listener.
//!
//! [`KeyListener`] owns a named thread that blocks on an
//! [`EventSource`] and hands each event to the simulation thread through
//! a single-slot crossbeam channel. The listener never blocks on the
//! channel: if a request is already pending, the new one is dropped.
//! The simulation thread drains the slot with a non-blocking
//! `try_recv` once per tick.
//!
//! There is no cancellation. The thread stays blocked in `wait_event`
//! until the process exits, or leaves on its own when the event source
//! fails or the listener is dropped.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError};
use toro_core::{EventSource, TerminationSignal};

/// Name of the listener thread.
pub const INPUT_THREAD_NAME: &str = "toro-input";

/// Receiving half of the input handoff, owned by the simulation thread.
pub struct KeyListener {
    rx: Receiver<()>,
    handle: JoinHandle<()>,
}

impl KeyListener {
    /// Spawn the listener thread over `source`.
    ///
    /// Returns `Err` if the OS refuses to create the thread.
    pub fn spawn<E>(source: E) -> io::Result<Self>
    where
        E: EventSource + Send + 'static,
    {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let handle = thread::Builder::new()
            .name(INPUT_THREAD_NAME.into())
            .spawn(move || listen(source, tx))?;
        Ok(Self { rx, handle })
    }

    /// Whether the listener thread is still running.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl TerminationSignal for KeyListener {
    /// A pending event, or a listener that has stopped, both count as a
    /// request to terminate.
    fn poll_termination(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => true,
        }
    }
}

fn listen<E: EventSource>(mut source: E, tx: Sender<()>) {
    tracing::debug!("input listener started");
    loop {
        if let Err(err) = source.wait_event() {
            tracing::warn!(%err, "input source failed, listener exiting");
            return;
        }
        match tx.try_send(()) {
            Ok(()) => tracing::trace!("termination request queued"),
            Err(TrySendError::Full(())) => tracing::trace!("termination request already pending"),
            Err(TrySendError::Disconnected(())) => {
                tracing::debug!("simulation gone, listener exiting");
                return;
            }
        }
    }
}

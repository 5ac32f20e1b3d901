// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Off-thread destruction of discarded trees.

use std::io;
use std::sync::mpsc::{self, SendError, Sender};
use std::sync::OnceLock;
use std::thread::{self, JoinHandle};

use crate::Paragraph;

/// A single worker thread that drops whatever it is sent.
///
/// Handing a value to [`defer_drop`](Self::defer_drop) never blocks and never reports back. If
/// the worker has gone away the value is dropped on the calling thread instead. Dropping the
/// queue drains what is pending and joins the worker.
#[derive(Debug)]
pub struct TeardownQueue<T: Send + 'static> {
    sender: Option<Sender<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> TeardownQueue<T> {
    /// Starts the worker thread.
    pub fn spawn(name: &str) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<T>();
        let worker = thread::Builder::new()
            .name(name.into())
            .spawn(move || {
                for value in receiver {
                    drop(value);
                }
            })?;
        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Drops `value` on the worker thread.
    pub fn defer_drop(&self, value: T) {
        let Some(sender) = &self.sender else {
            return;
        };
        if let Err(SendError(value)) = sender.send(value) {
            log::debug!("teardown worker is gone; dropping inline");
            drop(value);
        }
    }
}

impl<T: Send + 'static> Drop for TeardownQueue<T> {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop once the backlog is drained.
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("teardown worker panicked");
            }
        }
    }
}

static PARAGRAPH_TEARDOWN: OnceLock<Option<TeardownQueue<Paragraph>>> = OnceLock::new();

/// Hands an unfinished tree to the process-wide teardown worker.
pub(crate) fn discard(tree: Paragraph) {
    let queue = PARAGRAPH_TEARDOWN.get_or_init(|| {
        TeardownQueue::spawn("paragraph-teardown")
            .inspect_err(|err| log::warn!("cannot start teardown worker: {err}"))
            .ok()
    });
    match queue {
        Some(queue) => {
            log::debug!("deferring teardown of {} nodes", tree.node_count());
            queue.defer_drop(tree);
        }
        None => drop(tree),
    }
}

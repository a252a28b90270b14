// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Superseding background jobs.
//!
//! A [`TaskSlot`] runs at most one live job at a time: submitting a new job cancels the one in
//! flight, and its [`TaskReceiver`] only ever yields the result of the latest submission.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::mpsc;

/// Cooperative cancellation flag shared with a running job.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the job to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// A finished job and the submission it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completed<T> {
    pub generation: u64,
    pub value: T,
}

/// Submits jobs to the blocking pool, one live job at a time.
#[derive(Debug)]
pub struct TaskSlot<T> {
    generation: Arc<AtomicU64>,
    current: Option<CancelToken>,
    tx: mpsc::UnboundedSender<Completed<T>>,
}

/// Receives the results of a [`TaskSlot`], skipping superseded ones.
#[derive(Debug)]
pub struct TaskReceiver<T> {
    generation: Arc<AtomicU64>,
    rx: mpsc::UnboundedReceiver<Completed<T>>,
}

/// Creates a connected slot and receiver.
pub fn task_slot<T: Send + 'static>() -> (TaskSlot<T>, TaskReceiver<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let generation = Arc::new(AtomicU64::new(0));
    let slot = TaskSlot {
        generation: generation.clone(),
        current: None,
        tx,
    };
    (slot, TaskReceiver { generation, rx })
}

impl<T: Send + 'static> TaskSlot<T> {
    /// Cancels the job in flight and starts `job`, returning its generation.
    ///
    /// The job gets a token it should poll; returning `None` means it gave up and delivers
    /// nothing. Must be called inside a tokio runtime.
    pub fn submit<F>(&mut self, job: F) -> u64
    where
        F: FnOnce(&CancelToken) -> Option<T> + Send + 'static,
    {
        self.cancel();
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let token = CancelToken::new();
        self.current = Some(token.clone());

        let tx = self.tx.clone();
        tokio::task::spawn_blocking(move || {
            let Some(value) = job(&token) else {
                tracing::debug!(generation, "job gave up");
                return;
            };
            if token.is_cancelled() {
                tracing::debug!(generation, "dropping result of cancelled job");
                return;
            }
            // The receiver may be gone, nobody is waiting then.
            let _ = tx.send(Completed { generation, value });
        });
        generation
    }

    /// Cancels the job in flight, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }

    /// The generation of the latest submission, 0 before the first one.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl<T> Drop for TaskSlot<T> {
    fn drop(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

impl<T> TaskReceiver<T> {
    /// Waits for the result of the latest submission.
    ///
    /// Results of superseded jobs are discarded. Returns `None` once the slot is dropped and
    /// every pending result has been drained.
    pub async fn recv(&mut self) -> Option<Completed<T>> {
        while let Some(done) = self.rx.recv().await {
            if done.generation == self.generation.load(Ordering::Acquire) {
                return Some(done);
            }
            tracing::debug!(generation = done.generation, "discarding stale result");
        }
        None
    }
}

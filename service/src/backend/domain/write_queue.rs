//! Single-writer queue shared by every service that mutates the record store.
//!
//! The store has no uniqueness constraints, so a duplicate check followed by
//! an append is only safe if no other writer runs in between. Holding the
//! queue's guard across the whole read-check-write sequence gives that
//! guarantee for writers inside this process. Waiters are served in FIFO
//! order. Writers in other processes are not covered.

use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone, Default)]
pub struct WriteQueue {
    lock: Arc<Mutex<()>>,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for our turn; the write slot is released when the guard drops
    pub async fn acquire(&self) -> OwnedMutexGuard<()> {
        self.lock.clone().lock_owned().await
    }
}

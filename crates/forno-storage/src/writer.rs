//! Fire-and-forget save writer.
//!
//! Persistence writes (save cart, save profile) must never block the UI
//! thread: commands go over a crossbeam channel to a dedicated thread that
//! applies them against the store. Failures are logged, not retried.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver, Sender};
use forno_core::errors::StorageError;
use tracing::warn;

use crate::store::LocalStore;

const CHANNEL_BOUND: usize = 256;

/// A write command for the save writer thread.
pub enum SaveCommand {
    Put { key: &'static str, json: String },
    Delete { key: &'static str },
    FlushSync(std::sync::mpsc::SyncSender<()>),
    Shutdown,
}

/// Accepts save commands via a channel and applies them on a dedicated
/// thread. Dropping the writer signals shutdown.
pub struct SaveWriter {
    tx: Sender<SaveCommand>,
    handle: Option<JoinHandle<()>>,
}

impl SaveWriter {
    /// Spawn the writer thread against the given store.
    pub fn new(store: Arc<LocalStore>) -> Self {
        let (tx, rx) = bounded(CHANNEL_BOUND);

        let handle = thread::Builder::new()
            .name("forno-save-writer".to_string())
            .spawn(move || writer_loop(store, rx))
            .expect("failed to spawn save writer thread");

        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Queue an upsert. Returns an error only if the writer thread is gone.
    pub fn put(&self, key: &'static str, json: String) -> Result<(), StorageError> {
        self.tx
            .send(SaveCommand::Put { key, json })
            .map_err(|_| StorageError::WriterDisconnected)
    }

    /// Queue a delete.
    pub fn delete(&self, key: &'static str) -> Result<(), StorageError> {
        self.tx
            .send(SaveCommand::Delete { key })
            .map_err(|_| StorageError::WriterDisconnected)
    }

    /// Block until every queued command has been applied. Used by tests and
    /// orderly shutdown; normal operation never waits.
    pub fn flush_sync(&self) -> Result<(), StorageError> {
        let (done_tx, done_rx) = std::sync::mpsc::sync_channel(0);
        self.tx
            .send(SaveCommand::FlushSync(done_tx))
            .map_err(|_| StorageError::WriterDisconnected)?;
        done_rx
            .recv()
            .map_err(|_| StorageError::WriterDisconnected)
    }
}

impl Drop for SaveWriter {
    fn drop(&mut self) {
        let _ = self.tx.send(SaveCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn writer_loop(store: Arc<LocalStore>, rx: Receiver<SaveCommand>) {
    for cmd in rx {
        match cmd {
            SaveCommand::Put { key, json } => {
                if let Err(e) = store.put_raw(key, &json) {
                    warn!(key, error = %e, "save failed; in-memory state remains authoritative");
                }
            }
            SaveCommand::Delete { key } => {
                if let Err(e) = store.delete(key) {
                    warn!(key, error = %e, "delete failed");
                }
            }
            SaveCommand::FlushSync(done_tx) => {
                // Commands are applied in order, so reaching this point
                // means everything queued before it has been written.
                let _ = done_tx.send(());
            }
            SaveCommand::Shutdown => break,
        }
    }
}

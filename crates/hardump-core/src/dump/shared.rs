//! Thread-safe handle for hosts that dispatch hooks from several threads.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::Result;
use crate::flow::Flow;

use super::HarDump;

/// Clonable handle; every append holds the lock, so entries never interleave.
#[derive(Clone)]
pub struct SharedHarDump {
    inner: Arc<Mutex<Option<HarDump>>>,
}

impl SharedHarDump {
    pub fn new(dump: HarDump) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(dump))),
        }
    }

    /// Appends one entry. Ignored (with a warning) after `done`.
    pub fn response(&self, flow: &Flow) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_mut() {
            Some(dump) => dump.response(flow),
            None => tracing::warn!(url = %flow.request.url, "response after done; flow dropped"),
        }
    }

    pub fn len(&self) -> usize {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.as_ref().map_or(0, HarDump::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the document. Later calls return `Ok(0)`.
    pub fn done(&self) -> Result<usize> {
        let taken = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match taken {
            Some(dump) => dump.done(),
            None => Ok(0),
        }
    }
}

// src/shared.rs
//! A captioner that can be shared between threads.
//!
//! Registration reads the last entry's number and appends after it, so the
//! whole resolve-append-render step runs under one lock. Clones share the
//! same registry.

use crate::captioner::{CaptionOutput, CaptionRequest, Captioner};
use crate::config::CaptionerConfig;
use crate::error::CaptionError;
use crate::registry::CaptionEntry;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SharedCaptioner {
    inner: Arc<Mutex<Captioner>>,
}

impl SharedCaptioner {
    pub fn new(config: CaptionerConfig) -> Self {
        Self::from(Captioner::new(config))
    }

    pub fn caption(&self, request: &CaptionRequest) -> Result<CaptionOutput, CaptionError> {
        self.inner.lock().caption(request)
    }

    pub fn full(&self, name: &str, caption: &str) -> Result<CaptionOutput, CaptionError> {
        self.inner.lock().full(name, caption)
    }

    pub fn cite(&self, name: &str) -> Result<CaptionOutput, CaptionError> {
        self.inner.lock().cite(name)
    }

    pub fn num(&self, name: &str) -> Result<CaptionOutput, CaptionError> {
        self.inner.lock().num(name)
    }

    /// A copy of the entry for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<CaptionEntry> {
        self.inner.lock().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().registry().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().registry().is_empty()
    }

    /// A copy of every entry in registration order.
    pub fn snapshot(&self) -> Vec<CaptionEntry> {
        self.inner.lock().registry().entries().cloned().collect()
    }

    pub fn listing(&self) -> String {
        self.inner.lock().listing()
    }

    /// Runs `f` with exclusive access, for multi-call sequences that must not interleave.
    pub fn with<R>(&self, f: impl FnOnce(&mut Captioner) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl From<Captioner> for SharedCaptioner {
    fn from(captioner: Captioner) -> Self {
        Self {
            inner: Arc::new(Mutex::new(captioner)),
        }
    }
}

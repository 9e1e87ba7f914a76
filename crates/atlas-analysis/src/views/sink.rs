//! Presentation boundary.

use super::payloads::ViewPayload;
use super::types::ViewName;

/// Receives recomputed views, in dependency-table order, after the
/// selection change that produced them has been committed.
pub trait ViewSink {
    fn emit(&mut self, payload: &ViewPayload);
}

/// Keeps every emitted payload in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    emitted: Vec<ViewPayload>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> &[ViewPayload] {
        &self.emitted
    }

    /// Names of the emitted views, in emission order.
    pub fn views(&self) -> Vec<ViewName> {
        self.emitted.iter().map(ViewPayload::view).collect()
    }

    /// Drain the recorded payloads.
    pub fn take(&mut self) -> Vec<ViewPayload> {
        std::mem::take(&mut self.emitted)
    }
}

impl ViewSink for RecordingSink {
    fn emit(&mut self, payload: &ViewPayload) {
        self.emitted.push(payload.clone());
    }
}

//! # Copy Feedback
//!
//! Transient "Copiado" acknowledgments, one per copied field. Instead of a
//! timer object per row there is a single map from field identifier to
//! expiry instant, swept by the owner's periodic tick. Re-copying a field
//! replaces its expiry, restarting the window.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::app::models::fields::FieldId;

/// How long a copy acknowledgment stays visible
pub const ACK_WINDOW: Duration = Duration::from_secs(1);

/// Per-field copy acknowledgment state
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    /// Expiry instant per acknowledged field
    pending: HashMap<FieldId, Instant>,
}

impl CopyFeedback {
    /// Create an empty feedback map
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `field` acknowledged as of `now`
    ///
    /// A pending acknowledgment for the same field is replaced, so the
    /// window restarts rather than stacking.
    pub fn mark(&mut self, field: FieldId, now: Instant) {
        self.pending.insert(field, now + ACK_WINDOW);
    }

    /// Whether `field` is acknowledged at `now`
    pub fn is_acknowledged(&self, field: FieldId, now: Instant) -> bool {
        self.pending.get(&field).is_some_and(|expiry| now < *expiry)
    }

    /// Drop every acknowledgment that has expired by `now`
    pub fn sweep(&mut self, now: Instant) {
        self.pending.retain(|_, expiry| now < *expiry);
    }

    /// Whether any acknowledgment is still pending
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Clear all acknowledgments
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

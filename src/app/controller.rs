//! # Application Controller
//!
//! Single owner of the mutable display state. User actions (input, submit,
//! copy, reset) mutate state directly; lookup completions arrive as
//! messages on the lookup service channel and are applied here, on the
//! controller's task, so no other thread ever writes the models.

use std::time::Instant;

use anyhow::Result;

use crate::app::cnpj;
use crate::app::display::{self, Section};
use crate::app::models::copy_feedback::CopyFeedback;
use crate::app::models::fields::FieldId;
use crate::app::models::search::SearchModel;
use crate::app::services::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use crate::app::services::lookup::LookupService;

/// Orchestrates the lookup pipeline and owns its state
pub struct AppController {
    search: SearchModel,
    feedback: CopyFeedback,
    lookup: LookupService,
    clipboard: Box<dyn Clipboard>,
}

impl AppController {
    /// Create a controller with the real registry endpoint and clipboard
    ///
    /// Falls back to an in-memory clipboard when the system clipboard is
    /// unavailable (headless sessions); copying still acknowledges.
    pub fn new() -> Self {
        let clipboard: Box<dyn Clipboard> = match SystemClipboard::new() {
            Ok(clipboard) => Box::new(clipboard),
            Err(e) => {
                tracing::warn!("system clipboard unavailable, using memory buffer: {e}");
                Box::new(MemoryClipboard::new())
            }
        };
        Self::with_parts(LookupService::new(), clipboard)
    }

    /// Create a controller from explicit parts (used by tests)
    pub fn with_parts(lookup: LookupService, clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            search: SearchModel::new(),
            feedback: CopyFeedback::new(),
            lookup,
            clipboard,
        }
    }

    /// Current search state
    pub fn search(&self) -> &SearchModel {
        &self.search
    }

    /// Current copy-acknowledgment state
    pub fn feedback(&self) -> &CopyFeedback {
        &self.feedback
    }

    /// Normalize and store new input, returning the normalized form
    pub fn input_changed(&mut self, raw: &str) -> &str {
        self.search.set_input(raw)
    }

    /// Submit the current input, dispatching a lookup if it validates
    ///
    /// On a validation failure the error message is set and no request goes
    /// out. On success the prior error is cleared eagerly and the lookup
    /// runs in the background; its completion is applied by
    /// [`pump_completions`](Self::pump_completions) or
    /// [`wait_for_completion`](Self::wait_for_completion).
    pub fn submit(&mut self) -> bool {
        match cnpj::validate(self.search.input()) {
            Ok(number) => {
                let number = number.to_string();
                let seq = self.lookup.dispatch(number);
                self.search.begin_lookup(seq);
                true
            }
            Err(e) => {
                tracing::debug!("rejected submit: {e}");
                self.search.set_error(e.to_string());
                false
            }
        }
    }

    /// Apply every completion that has already arrived
    ///
    /// Returns how many were accepted; stale completions are discarded by
    /// the search model.
    pub fn pump_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Some(outcome) = self.lookup.poll_outcome() {
            if self.search.apply_completion(outcome.seq, outcome.result) {
                applied += 1;
            }
        }
        applied
    }

    /// Await the next completion and apply it
    ///
    /// Returns false if it was stale or the service channel closed.
    pub async fn wait_for_completion(&mut self) -> bool {
        match self.lookup.recv_outcome().await {
            Some(outcome) => self.search.apply_completion(outcome.seq, outcome.result),
            None => false,
        }
    }

    /// Copy a field's value to the clipboard and acknowledge it
    ///
    /// No-op when the field has no value in the current record. Returns
    /// whether a copy happened.
    pub fn copy_field(&mut self, field: FieldId) -> Result<bool> {
        let Some(record) = self.search.record() else {
            return Ok(false);
        };
        let Some(value) = field.resolve(record) else {
            return Ok(false);
        };

        let value = value.to_string();
        self.clipboard.set_text(value)?;
        self.feedback.mark(field, Instant::now());
        Ok(true)
    }

    /// Drop expired copy acknowledgments; call periodically
    pub fn tick(&mut self) {
        self.feedback.sweep(Instant::now());
    }

    /// Clear input, record, error, and pending acknowledgments
    pub fn reset(&mut self) {
        self.search.reset();
        self.feedback.clear();
    }

    /// Display sections for the current record, empty when there is none
    pub fn sections(&self) -> Vec<Section> {
        self.search
            .record()
            .map(display::build_sections)
            .unwrap_or_default()
    }
}

impl Default for AppController {
    fn default() -> Self {
        Self::new()
    }
}

//! # Search Model
//!
//! Owns the lookup state the display reads: the normalized input, the last
//! successful record, and the current error message. Lookups are sequence
//! numbered so a slow completion from an older search can never overwrite
//! the result of a newer one.

use crate::app::cnpj;
use crate::app::errors::LookupError;
use crate::app::models::company::CompanyRecord;

/// Display-facing lookup state
#[derive(Debug, Clone, Default)]
pub struct SearchModel {
    /// Normalized input, at most 14 digits
    input: String,
    /// Last successful lookup, kept across failed attempts
    record: Option<CompanyRecord>,
    /// Message from the last failed attempt
    error: Option<String>,
    /// Sequence number of the most recently issued lookup
    latest_seq: u64,
}

impl SearchModel {
    /// Create an empty search model
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the input with the normalized form of `raw`
    pub fn set_input(&mut self, raw: &str) -> &str {
        self.input = cnpj::normalize(raw);
        &self.input
    }

    /// Current normalized input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Last successful record, if any
    pub fn record(&self) -> Option<&CompanyRecord> {
        self.record.as_ref()
    }

    /// Current error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record that a lookup with `seq` was issued
    ///
    /// The previous error is cleared eagerly so a stale message is not shown
    /// while the request is in flight.
    pub fn begin_lookup(&mut self, seq: u64) {
        self.latest_seq = seq;
        self.error = None;
    }

    /// Set an error without a lookup in flight (validation failures)
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Apply a lookup completion, returning whether it was accepted
    ///
    /// Completions carrying a sequence number other than the latest issued
    /// one are stale and discarded. Success replaces the record and clears
    /// the error; failure sets the error and leaves the record untouched.
    pub fn apply_completion(
        &mut self,
        seq: u64,
        result: Result<CompanyRecord, LookupError>,
    ) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale lookup completion");
            return false;
        }

        match result {
            Ok(record) => {
                self.record = Some(record);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Clear input, record, and error unconditionally
    pub fn reset(&mut self) {
        self.input.clear();
        self.record = None;
        self.error = None;
    }
}

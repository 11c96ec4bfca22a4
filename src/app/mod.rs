//! # Lookup Application Core
//!
//! The request/response/state pipeline behind the CNPJ lookup screen:
//!
//! ```text
//! input ──► normalize ──► validate ──► LookupService ──► mpsc channel
//!                                                             │
//!            display sections ◄── SearchModel ◄── AppController (one task)
//! ```
//!
//! All mutable state lives in the controller's task; network completions
//! and copy-acknowledgment expiry reach it only as messages and ticks.

pub mod cnpj;
pub mod controller;
pub mod display;
pub mod errors;
pub mod models;
pub mod services;

pub use cnpj::{normalize, validate, CNPJ_DIGITS};
pub use controller::AppController;
pub use display::{build_sections, DisplayRow, Section, COPIED, NOT_AVAILABLE};
pub use errors::{LookupError, ValidationError};
pub use models::{CompanyField, CompanyRecord, CopyFeedback, FieldId, PartnerEntry, PartnerField, SearchModel};
pub use services::{Clipboard, LookupOutcome, LookupService, MemoryClipboard, Transport};

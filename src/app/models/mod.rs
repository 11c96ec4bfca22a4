//! # Models Module
//!
//! State owned by the lookup pipeline: the decoded company record, the
//! search state (input, result, error), field identifiers for the display
//! rows, and the transient copy-acknowledgment flags.

pub mod company;
pub mod copy_feedback;
pub mod fields;
pub mod search;

pub use company::{CompanyRecord, PartnerEntry};
pub use copy_feedback::{CopyFeedback, ACK_WINDOW};
pub use fields::{CompanyField, FieldId, PartnerField};
pub use search::SearchModel;

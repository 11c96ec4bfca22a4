//! # Services Layer
//!
//! External-resource seams used by the controller: the registry lookup
//! client and the clipboard. Both sit behind traits so tests can run
//! without a network or a window system.

pub mod clipboard;
pub mod lookup;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use lookup::{LookupOutcome, LookupService, ReqwestTransport, Transport};

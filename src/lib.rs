//! # Consulta CNPJ - Company Registry Lookup
//!
//! Looks up a Brazilian company registry number (CNPJ) against the public
//! ReceitaWS API and turns the response into labeled display rows with
//! copy-to-clipboard feedback.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐  raw input  ┌───────────────┐  dispatch   ┌───────────────┐
//! │   CLI /  │────────────►│ AppController │────────────►│ LookupService │
//! │ Renderer │             │  (owns state) │             │  (reqwest)    │
//! └──────────┘             └───────────────┘◄────────────└───────────────┘
//!      ▲                          │            mpsc completions
//!      └── sections / "Copiado" ──┘
//! ```
//!
//! The controller is the single owner of mutable state; lookup completions
//! reach it as sequence-numbered messages, and stale completions from
//! superseded searches are discarded.

pub mod app;
pub mod cmd_args;
pub mod config;

// Re-export main types for easy access
pub use app::*;

//! # Error Taxonomy
//!
//! Domain errors for the lookup pipeline. Every failure is terminal for the
//! attempt that raised it; the message is shown to the user verbatim and the
//! only recovery is re-submitting or resetting.

use thiserror::Error;

/// Rejections raised before a lookup is attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The normalized input does not have exactly 14 digits
    #[error("informe um CNPJ válido com 14 dígitos (recebido: {found})")]
    WrongLength { found: usize },
}

/// Failures raised by the lookup client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The HTTP round-trip itself failed
    #[error("falha na consulta: {0}")]
    Network(String),

    /// The registry answered with a zero-length body
    #[error("nenhum dado recebido do serviço de consulta")]
    EmptyResponse,

    /// The body was present but not a decodable JSON object
    #[error("falha ao analisar a resposta do serviço de consulta")]
    MalformedResponse,
}

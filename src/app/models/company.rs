//! # Company Record
//!
//! Typed view of the ReceitaWS lookup payload. Every field is optional:
//! the registry omits fields freely and the display layer substitutes
//! "N/A" for anything absent. Unknown keys in the payload are ignored.

use bytes::Bytes;
use serde::Deserialize;

use crate::app::errors::LookupError;

/// Decoded registry payload for one CNPJ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompanyRecord {
    pub nome: Option<String>,
    pub fantasia: Option<String>,
    pub situacao: Option<String>,
    pub tipo: Option<String>,
    pub abertura: Option<String>,
    pub capital_social: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub cep: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    /// Partners/shareholders (QSA) listed for the company
    #[serde(default)]
    pub qsa: Vec<PartnerEntry>,
}

/// One partner entry from the QSA list
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartnerEntry {
    pub nome: Option<String>,
    /// Role within the company, e.g. "49-Sócio-Administrador"
    pub qual: Option<String>,
}

impl CompanyRecord {
    /// Decode a response body into a record
    ///
    /// Classifies the two body-level failure modes: a zero-length body is
    /// `EmptyResponse`, and anything that does not parse as a JSON object
    /// with the expected field types is `MalformedResponse`.
    pub fn from_body(body: &Bytes) -> Result<Self, LookupError> {
        if body.is_empty() {
            return Err(LookupError::EmptyResponse);
        }

        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("response body failed to decode: {e}");
            LookupError::MalformedResponse
        })
    }
}

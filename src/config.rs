//! Configuration constants and utilities for consulta-cnpj
//!
//! The registry endpoint is fixed; an environment variable override exists
//! so tests and alternate deployments can point at a different host.

/// Default base URL of the registry lookup endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://www.receitaws.com.br/v1/cnpj";

/// Environment variable name for overriding the API base URL
pub const API_BASE_URL_ENV_VAR: &str = "CONSULTA_CNPJ_API_URL";

/// Get the API base URL, checking the environment variable first
pub fn get_api_base_url() -> String {
    std::env::var_os(API_BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

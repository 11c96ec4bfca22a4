//! # Lookup Service
//!
//! Issues registry lookups and hands their completions back to the state
//! owner as messages. The HTTP round-trip sits behind the [`Transport`]
//! trait so tests can substitute canned bodies and failures; the real
//! implementation is a reqwest GET with no custom headers and no retry.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

use crate::app::errors::LookupError;
use crate::app::models::company::CompanyRecord;
use crate::config;

/// One finished lookup, delivered over the service channel
#[derive(Debug)]
pub struct LookupOutcome {
    /// Sequence number assigned when the lookup was dispatched
    pub seq: u64,
    /// The 14-digit number that was looked up
    pub cnpj: String,
    /// Decoded record or the failure that ended the attempt
    pub result: Result<CompanyRecord, LookupError>,
}

/// Minimal outbound HTTP capability: perform a GET, return bytes or fail
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Bytes>;
}

/// Transport backed by a shared reqwest client
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Bytes> {
        let response = self.client.get(url).send().await?;
        // Status is not inspected: the registry reports lookup problems in
        // the body, which the decoder surfaces downstream.
        Ok(response.bytes().await?)
    }
}

/// Service for registry lookups
///
/// Owns the outbound transport and the channel completions travel on.
/// Dispatched lookups run on spawned tasks; the owner of the display state
/// drains completions with [`poll_outcome`](Self::poll_outcome) or
/// [`recv_outcome`](Self::recv_outcome) on its own task, so no completion
/// ever touches shared state from a foreign thread.
pub struct LookupService {
    transport: Arc<dyn Transport>,
    api_base: String,
    /// Sequence number of the last dispatched lookup
    last_seq: u64,
    outcome_rx: mpsc::Receiver<LookupOutcome>,
    outcome_tx: mpsc::Sender<LookupOutcome>,
}

impl LookupService {
    /// Create a service pointed at the configured registry endpoint
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()), config::get_api_base_url())
    }

    /// Create a service with a custom transport and endpoint
    pub fn with_transport(transport: Arc<dyn Transport>, api_base: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::channel(10);
        Self {
            transport,
            api_base: api_base.into(),
            last_seq: 0,
            outcome_rx,
            outcome_tx,
        }
    }

    /// Request URL for a validated 14-digit number
    fn request_url(&self, cnpj: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), cnpj)
    }

    /// Perform one lookup, suspending until the round-trip finishes
    pub async fn lookup(&self, cnpj: &str) -> Result<CompanyRecord, LookupError> {
        Self::fetch(self.transport.clone(), self.request_url(cnpj)).await
    }

    async fn fetch(
        transport: Arc<dyn Transport>,
        url: String,
    ) -> Result<CompanyRecord, LookupError> {
        tracing::debug!(%url, "issuing registry lookup");
        let body = transport
            .get(&url)
            .await
            .map_err(|e| LookupError::Network(format!("{e:#}")))?;
        CompanyRecord::from_body(&body)
    }

    /// Dispatch a lookup on a spawned task, returning its sequence number
    ///
    /// The completion arrives on the service channel as a [`LookupOutcome`]
    /// carrying the same sequence number. In-flight lookups are never
    /// cancelled; the caller discards outcomes whose number is stale.
    pub fn dispatch(&mut self, cnpj: String) -> u64 {
        self.last_seq += 1;
        let seq = self.last_seq;

        let transport = self.transport.clone();
        let url = self.request_url(&cnpj);
        let outcome_tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let result = Self::fetch(transport, url).await;
            if let Err(e) = &result {
                tracing::debug!(seq, "lookup failed: {e}");
            }
            // The receiver may be gone if the owner shut down
            let _ = outcome_tx.send(LookupOutcome { seq, cnpj, result }).await;
        });

        seq
    }

    /// Sequence number of the most recently dispatched lookup
    pub fn last_seq(&self) -> u64 {
        self.last_seq
    }

    /// Take one pending completion without blocking
    pub fn poll_outcome(&mut self) -> Option<LookupOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Await the next completion
    pub async fn recv_outcome(&mut self) -> Option<LookupOutcome> {
        self.outcome_rx.recv().await
    }
}

impl Default for LookupService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Transport serving canned responses keyed by URL suffix
    struct FakeTransport {
        responses: HashMap<String, Result<Bytes, String>>,
        /// Extra latency per URL suffix, for out-of-order tests
        delays: HashMap<String, Duration>,
    }

    impl FakeTransport {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                delays: HashMap::new(),
            }
        }

        fn respond(mut self, cnpj: &str, body: &str) -> Self {
            self.responses
                .insert(cnpj.to_string(), Ok(Bytes::copy_from_slice(body.as_bytes())));
            self
        }

        fn respond_bytes(mut self, cnpj: &str, body: &[u8]) -> Self {
            self.responses
                .insert(cnpj.to_string(), Ok(Bytes::copy_from_slice(body)));
            self
        }

        fn fail(mut self, cnpj: &str, message: &str) -> Self {
            self.responses
                .insert(cnpj.to_string(), Err(message.to_string()));
            self
        }

        fn delay(mut self, cnpj: &str, delay: Duration) -> Self {
            self.delays.insert(cnpj.to_string(), delay);
            self
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get(&self, url: &str) -> Result<Bytes> {
            let cnpj = url.rsplit('/').next().unwrap_or_default();
            if let Some(delay) = self.delays.get(cnpj) {
                tokio::time::sleep(*delay).await;
            }
            match self.responses.get(cnpj) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(message)) => Err(anyhow::anyhow!("{message}")),
                None => Err(anyhow::anyhow!("no canned response for {url}")),
            }
        }
    }

    fn service(transport: FakeTransport) -> LookupService {
        LookupService::with_transport(Arc::new(transport), "https://registry.test/v1/cnpj")
    }

    #[test]
    fn request_url_should_interpolate_the_number() {
        let service = service(FakeTransport::new());
        assert_eq!(
            service.request_url("11222333000181"),
            "https://registry.test/v1/cnpj/11222333000181"
        );
    }

    #[test]
    fn request_url_should_tolerate_trailing_slash() {
        let service =
            LookupService::with_transport(Arc::new(FakeTransport::new()), "https://r.test/v1/cnpj/");
        assert_eq!(service.request_url("1"), "https://r.test/v1/cnpj/1");
    }

    #[tokio::test]
    async fn lookup_should_decode_a_well_formed_object() {
        let service = service(FakeTransport::new().respond(
            "11222333000181",
            r#"{"nome": "ACME LTDA", "situacao": "ATIVA"}"#,
        ));

        let record = service.lookup("11222333000181").await.unwrap();
        assert_eq!(record.nome.as_deref(), Some("ACME LTDA"));
        assert_eq!(record.situacao.as_deref(), Some("ATIVA"));
    }

    #[tokio::test]
    async fn lookup_should_map_transport_failures_to_network() {
        let service = service(FakeTransport::new().fail("11222333000181", "connection refused"));

        match service.lookup("11222333000181").await {
            Err(LookupError::Network(message)) => assert!(message.contains("connection refused")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lookup_should_flag_empty_bodies() {
        let service = service(FakeTransport::new().respond_bytes("11222333000181", b""));
        assert_eq!(
            service.lookup("11222333000181").await,
            Err(LookupError::EmptyResponse)
        );
    }

    #[tokio::test]
    async fn lookup_should_flag_undecodable_bodies() {
        let service = service(FakeTransport::new().respond("11222333000181", "not json"));
        assert_eq!(
            service.lookup("11222333000181").await,
            Err(LookupError::MalformedResponse)
        );
    }

    #[tokio::test]
    async fn dispatch_should_deliver_the_outcome_with_its_sequence_number() {
        let mut service = service(FakeTransport::new().respond(
            "11222333000181",
            r#"{"nome": "ACME LTDA"}"#,
        ));

        let seq = service.dispatch("11222333000181".to_string());
        assert_eq!(seq, 1);

        let outcome = service.recv_outcome().await.unwrap();
        assert_eq!(outcome.seq, seq);
        assert_eq!(outcome.cnpj, "11222333000181");
        assert_eq!(outcome.result.unwrap().nome.as_deref(), Some("ACME LTDA"));
    }

    #[tokio::test]
    async fn dispatch_should_assign_increasing_sequence_numbers() {
        let mut service = service(
            FakeTransport::new()
                .respond("11111111111111", "{}")
                .respond("22222222222222", "{}"),
        );

        let first = service.dispatch("11111111111111".to_string());
        let second = service.dispatch("22222222222222".to_string());
        assert!(second > first);
        assert_eq!(service.last_seq(), second);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_older_lookup_should_complete_after_newer_one() {
        let mut service = service(
            FakeTransport::new()
                .respond("11111111111111", r#"{"nome": "OLD"}"#)
                .delay("11111111111111", Duration::from_secs(5))
                .respond("22222222222222", r#"{"nome": "NEW"}"#),
        );

        let first = service.dispatch("11111111111111".to_string());
        let second = service.dispatch("22222222222222".to_string());

        let outcome_a = service.recv_outcome().await.unwrap();
        let outcome_b = service.recv_outcome().await.unwrap();

        // The undelayed newer request finishes first
        assert_eq!(outcome_a.seq, second);
        assert_eq!(outcome_b.seq, first);
    }
}

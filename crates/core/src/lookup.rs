//! Address lookup collaborators.
//!
//! [`AddressLookup`] is the seam between the workflow and whatever produces candidates.
//! Implementations do not re-validate their inputs; callers validate first.

use crate::config::CoreConfig;
use crate::constants::LOOKUP_PATH;
use crate::generator::generate_addresses;
use crate::{LookupError, LookupResult};
use api_shared::{Address, LookupParams, LookupRes};
use reqwest::StatusCode;
use std::time::Duration;

/// Performs one address lookup per call.
///
/// Implementations report "no match" as [`LookupError::NotFound`] rather than an empty
/// list.
#[allow(async_fn_in_trait)]
pub trait AddressLookup {
    async fn lookup(&self, postcode: &str, street_number: &str) -> LookupResult<Vec<Address>>;
}

/// Lookup client talking to the REST API's `GET /lookup` endpoint.
///
/// Any non-success reply that carries a lookup envelope (400 included) is reported as
/// [`LookupError::NotFound`]; connection failures and undecodable bodies are
/// [`LookupError::Transport`].
#[derive(Clone, Debug)]
pub struct HttpLookupClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpLookupClient {
    /// Builds a client for the lookup API at `cfg.lookup_url()`.
    ///
    /// No request timeout is configured; the server bounds its own latency.
    pub fn new(cfg: &CoreConfig) -> LookupResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("addressbook/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}{}", cfg.lookup_url(), LOOKUP_PATH),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AddressLookup for HttpLookupClient {
    async fn lookup(&self, postcode: &str, street_number: &str) -> LookupResult<Vec<Address>> {
        let params = LookupParams {
            postcode: Some(postcode.to_owned()),
            streetnumber: Some(street_number.to_owned()),
        };

        let response = self
            .http
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }

        let body: LookupRes = response
            .json()
            .await
            .map_err(|e| LookupError::Transport(format!("invalid lookup response: {e}")))?;

        match body {
            LookupRes::Ok { details } if status.is_success() => Ok(details),
            _ if !status.is_success() => Err(LookupError::NotFound),
            _ => Err(LookupError::Transport(
                format!("lookup replied {status} with an error envelope"),
            )),
        }
    }
}

/// In-process lookup backed by the mock address generator.
#[derive(Clone, Debug, Default)]
pub struct GeneratedLookup {
    delay: Duration,
}

impl GeneratedLookup {
    /// Creates a lookup that waits `delay` before answering.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl AddressLookup for GeneratedLookup {
    async fn lookup(&self, postcode: &str, street_number: &str) -> LookupResult<Vec<Address>> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        generate_addresses(postcode, street_number).ok_or(LookupError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_endpoint_joins_base_url_and_path() {
        let cfg = CoreConfig::new("http://localhost:4000/".into(), Duration::ZERO).unwrap();
        let client = HttpLookupClient::new(&cfg).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:4000/lookup");
    }

    #[tokio::test]
    async fn generated_lookup_maps_no_match_to_not_found() {
        let lookup = GeneratedLookup::default();
        assert_eq!(
            lookup.lookup("0000", "1").await.expect_err("no match"),
            LookupError::NotFound
        );
        assert!(!lookup.lookup("1234", "1").await.expect("match").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn generated_lookup_waits_for_its_delay() {
        let lookup = GeneratedLookup::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        lookup.lookup("1234", "1").await.expect("match");
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test]
    async fn http_client_reports_unreachable_server_as_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept HTTP connections.
        let cfg = CoreConfig::new("http://127.0.0.1:9".into(), Duration::ZERO).unwrap();
        let client = HttpLookupClient::new(&cfg).unwrap();
        let err = client.lookup("1234", "1").await.expect_err("no server");
        assert!(matches!(err, LookupError::Transport(_)));
    }
}

//! Typed client for the donation REST API.
//!
//! Three endpoints are consumed, none defined here:
//!
//! * `GET /shelters` — the shelter directory;
//! * `GET /shelters/results` — aggregate contribution totals;
//! * `POST /shelters/contribute` — submit a contribution.
//!
//! Any non-2xx response is treated as a failure ([`ClientError::Status`]).
//! Timeout and transport policy live in the underlying [`reqwest::Client`];
//! nothing here retries on its own — the submit retry is user-driven.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use donation_flow::ContributeRequest;

use crate::config::Config;
use crate::errors::{ClientError, Result};

// ─────────────────────────────────────────────────────────
// Response shapes
// ─────────────────────────────────────────────────────────

/// One entry of the shelter directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelter {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct SheltersResponse {
    shelters: Vec<Shelter>,
}

/// Aggregate results shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ShelterResults {
    /// Number of contributors so far.
    pub contributors: u64,
    /// Total contributed amount in euros.
    pub contribution: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
}

/// Body of a successful `POST /shelters/contribute`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContributeResponse {
    pub messages: Vec<ApiMessage>,
}

// ─────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────

/// The submission collaborator the wizard controller drives.
///
/// Abstracted so tests can script outcomes without a network.
#[async_trait]
pub trait ContributeApi: Send + Sync {
    async fn submit_contribution(&self, body: &ContributeRequest) -> Result<ContributeResponse>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with the configured endpoint and request timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(ApiClient {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /shelters`
    pub async fn get_shelters(&self) -> Result<Vec<Shelter>> {
        let url = format!("{}/shelters", self.base_url);
        let response = check_status(self.client.get(&url).send().await?)?;
        let body: SheltersResponse = response.json().await?;
        debug!("Fetched {} shelters", body.shelters.len());
        Ok(body.shelters)
    }

    /// `GET /shelters/results`
    pub async fn get_shelter_results(&self) -> Result<ShelterResults> {
        let url = format!("{}/shelters/results", self.base_url);
        let response = check_status(self.client.get(&url).send().await?)?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContributeApi for ApiClient {
    /// `POST /shelters/contribute`
    async fn submit_contribution(&self, body: &ContributeRequest) -> Result<ContributeResponse> {
        let url = format!("{}/shelters/contribute", self.base_url);
        let response = check_status(self.client.post(&url).json(body).send().await?)?;
        Ok(response.json().await?)
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(response.status().as_u16()))
    }
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────

use std::time::Duration;

use anyhow::{Context, Result};
use board::{BoardConfig, BoardError, ParkRequest, Snapshot, StatusUpdate};
use reqwest::{Client, Response};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP transport for the three board endpoints.
#[derive(Clone, Debug)]
pub struct BoardClient {
    http: Client,
    config: BoardConfig,
}

impl BoardClient {
    pub fn new(config: BoardConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub async fn fetch_snapshot(&self) -> Result<Snapshot, BoardError> {
        let response = self
            .http
            .get(self.config.full_status_url())
            .send()
            .await
            .map_err(transport)?;
        let response = ensure_success(response)?;
        let body = response.bytes().await.map_err(transport)?;
        Snapshot::decode(&body)
    }

    pub async fn post_status(&self, update: &StatusUpdate) -> Result<(), BoardError> {
        let response = self
            .http
            .post(self.config.update_status_url())
            .json(update)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).map(drop)
    }

    pub async fn post_park(&self, request: &ParkRequest) -> Result<(), BoardError> {
        let response = self
            .http
            .post(self.config.park_url())
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).map(drop)
    }
}

fn ensure_success(response: Response) -> Result<Response, BoardError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BoardError::Status(status.as_u16()))
    }
}

fn transport(err: reqwest::Error) -> BoardError {
    if err.is_decode() {
        BoardError::Decode(err.to_string())
    } else {
        BoardError::Transport(err.to_string())
    }
}

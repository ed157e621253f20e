// src/jinka/client.rs

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::json;

use super::models::{Ad, AdsResponse, LoginResponse};
use super::JinkaError;

const DEFAULT_BASE_URL: &str = "https://api.jinka.fr/apiv2";

const LOGIN_TIMEOUT: Duration = Duration::from_secs(12);
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Thin wrapper over the two alert-API endpoints. One request per call,
/// no retry, no pagination; any failure surfaces as a terminal error.
pub struct JinkaClient {
    client: Client,
    base_url: String,
}

impl JinkaClient {
    pub fn new() -> Result<Self, JinkaError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, JinkaError> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| JinkaError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// POST /auth/login -> bearer token.
    pub fn login(&self, email: &str, password: &str) -> Result<String, JinkaError> {
        let resp = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .timeout(LOGIN_TIMEOUT)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .map_err(|e| JinkaError::Auth(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(JinkaError::Auth(format!("HTTP {status}")));
        }

        let body: LoginResponse = resp.json().map_err(|e| JinkaError::Auth(e.to_string()))?;
        Ok(body.token)
    }

    /// GET /alert/{id}/ads with the bearer token. A response without an
    /// `ads` field reads as an empty alert.
    pub fn fetch_ads(&self, token: &str, alert_id: &str) -> Result<Vec<Ad>, JinkaError> {
        let resp = self
            .client
            .get(format!("{}/alert/{}/ads", self.base_url, alert_id))
            .bearer_auth(token)
            .send()
            .map_err(|e| JinkaError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(JinkaError::Fetch(format!("HTTP {status}")));
        }

        let body: AdsResponse = resp.json().map_err(|e| JinkaError::Fetch(e.to_string()))?;
        Ok(body.ads)
    }
}

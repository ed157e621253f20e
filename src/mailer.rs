// src/mailer.rs

use chrono::{DateTime, Local};
use reqwest::blocking::Client;
use serde_json::json;
use std::error::Error;
use std::fmt;

use crate::config::MailConfig;
use crate::domain::{round_pct, Opportunity};

#[derive(Debug)]
pub enum MailerError {
    RequestFailed(String),
    ApiError(String),
}

impl fmt::Display for MailerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailerError::RequestFailed(msg) => write!(f, "Request failed: {msg}"),
            MailerError::ApiError(msg) => write!(f, "API error: {msg}"),
        }
    }
}

impl Error for MailerError {}

/// Compose the digest for a non-empty batch of new opportunities.
///
/// Subject carries the count and timestamp; the body is one block per
/// listing, blocks separated by a blank line.
pub fn compose_digest(
    opportunities: &[Opportunity],
    min_yield: f64,
    now: DateTime<Local>,
) -> (String, String) {
    let stamp = now.format("%d/%m/%Y %H:%M");
    let subject = format!(
        "[Jinka] {} annonce(s) ≥ {} % brut ({stamp})",
        opportunities.len(),
        round_pct(min_yield),
    );

    let lines: Vec<String> = opportunities
        .iter()
        .map(|o| {
            format!(
                "{} | {} m² | {} € | {} % brut\n{}",
                o.title,
                o.surface,
                o.price,
                o.yield_pct(),
                o.url
            )
        })
        .collect();

    (subject, lines.join("\n\n"))
}

/// Sends the digest to a single recipient through the transactional-mail
/// HTTP API. A send failure is fatal for the batch run.
pub struct DigestMailer {
    api_url: String,
    api_key: String,
    from: String,
    to: String,
    client: Client,
}

impl DigestMailer {
    pub fn new(cfg: &MailConfig) -> Self {
        Self {
            api_url: cfg.api_url.clone(),
            api_key: cfg.api_key.clone(),
            from: cfg.from.clone(),
            to: cfg.to.clone(),
            client: Client::new(),
        }
    }

    pub fn send_digest(
        &self,
        opportunities: &[Opportunity],
        min_yield: f64,
        now: DateTime<Local>,
    ) -> Result<(), MailerError> {
        let (subject, body) = compose_digest(opportunities, min_yield, now);

        let payload = json!({
            "sender": { "name": "Jinka Yield Bot", "email": self.from },
            "to": [ { "email": self.to } ],
            "subject": subject,
            "textContent": body
        });

        let resp = self
            .client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let error_body = resp.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MailerError::ApiError(format!(
                "Failed to send digest: {error_body}"
            )));
        }

        Ok(())
    }
}

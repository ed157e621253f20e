// src/notion.rs

use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::fmt;

use crate::config::NotionConfig;
use crate::domain::Opportunity;

const DEFAULT_API_URL: &str = "https://api.notion.com/v1/pages";
const NOTION_VERSION: &str = "2022-06-28";

#[derive(Debug)]
pub enum NotionError {
    RequestFailed(String),
    ApiError(String),
}

impl fmt::Display for NotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotionError::RequestFailed(msg) => write!(f, "Request failed: {msg}"),
            NotionError::ApiError(msg) => write!(f, "API error: {msg}"),
        }
    }
}

impl Error for NotionError {}

/// Mirrors each opportunity as one page in a Notion database.
pub struct NotionClient {
    api_url: String,
    token: String,
    database_id: String,
    client: Client,
}

impl NotionClient {
    pub fn new(cfg: &NotionConfig) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: cfg.token.clone(),
            database_id: cfg.database_id.clone(),
            client: Client::new(),
        }
    }

    /// The fixed property schema of the target database.
    pub fn page_payload(&self, opp: &Opportunity) -> Value {
        json!({
            "parent": { "database_id": self.database_id },
            "properties": {
                "Titre": {
                    "title": [ { "text": { "content": opp.title } } ]
                },
                "Prix": { "number": opp.price },
                "Surface": { "number": opp.surface },
                "Rendement brut": { "number": opp.yield_pct() },
                "URL": { "url": opp.url }
            }
        })
    }

    pub fn create_page(&self, opp: &Opportunity) -> Result<(), NotionError> {
        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .header("Content-Type", "application/json")
            .header("Notion-Version", NOTION_VERSION)
            .json(&self.page_payload(opp))
            .send()
            .map_err(|e| NotionError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(NotionError::ApiError(format!("HTTP {status}: {body}")));
        }

        Ok(())
    }
}

/// Push every record through `push_one`, isolating failures: a failed push
/// is logged and the remaining records are still attempted. Returns how many
/// succeeded.
pub fn push_all<F>(opportunities: &[Opportunity], mut push_one: F) -> usize
where
    F: FnMut(&Opportunity) -> Result<(), NotionError>,
{
    let mut pushed = 0;

    for opp in opportunities {
        match push_one(opp) {
            Ok(()) => pushed += 1,
            Err(e) => eprintln!("⚠️ Notion push failed for {}: {e}", opp.id),
        }
    }

    pushed
}

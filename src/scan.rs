// src/scan.rs

use crate::config::JinkaCredentials;
use crate::domain::{select_opportunities, FilterConfig, Opportunity};
use crate::jinka::{JinkaClient, JinkaError};
use crate::rents::RentTable;

/// Result of one authenticate → fetch → screen pass.
///
/// `total_fetched` is kept so callers can tell an empty alert apart from
/// "ads came back but none qualified".
#[derive(Debug)]
pub struct ScanOutcome {
    pub total_fetched: usize,
    pub opportunities: Vec<Opportunity>,
}

pub fn scan_alert(
    client: &JinkaClient,
    credentials: &JinkaCredentials,
    alert_id: &str,
    rents: &RentTable,
    cfg: &FilterConfig,
) -> Result<ScanOutcome, JinkaError> {
    let token = client.login(&credentials.email, &credentials.password)?;
    let ads = client.fetch_ads(&token, alert_id)?;

    let opportunities = select_opportunities(&ads, rents, cfg);

    Ok(ScanOutcome {
        total_fetched: ads.len(),
        opportunities,
    })
}

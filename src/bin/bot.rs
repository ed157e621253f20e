// bin/bot.rs
//
// Unattended poller meant for a scheduler (cron / CI) that guarantees
// non-overlapping invocations. Any fatal error exits non-zero; the seen-id
// store is only persisted once new listings have actually been dispatched,
// so a failed digest re-notifies on the next run (at-least-once delivery).

use std::error::Error;

use chrono::Local;

use jinka_yield::config::Config;
use jinka_yield::dedup::SeenIds;
use jinka_yield::domain::{round_pct, Opportunity};
use jinka_yield::jinka::JinkaClient;
use jinka_yield::mailer::DigestMailer;
use jinka_yield::notion::{push_all, NotionClient};
use jinka_yield::rents::RentTable;
use jinka_yield::scan::scan_alert;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    // Fail fast on the pieces a batch run cannot do without.
    let credentials = config.jinka()?;
    let alert_id = config.bot_alert_id()?;
    let mailer = DigestMailer::new(config.bot_mail()?);

    let rents = match &config.rent_csv {
        Some(source) => RentTable::load(source)?,
        None => RentTable::builtin(),
    };
    println!("📐 Rent table loaded ({} sectors)", rents.len());

    let mut seen = SeenIds::load(&config.seen_file)?;

    let client = JinkaClient::new()?;
    let outcome = scan_alert(&client, credentials, alert_id, &rents, &config.filter)?;

    let qualifying = outcome.opportunities.len();
    let fresh: Vec<Opportunity> = outcome
        .opportunities
        .into_iter()
        .filter(|o| !seen.contains(&o.id))
        .collect();

    println!(
        "🔎 {} ad(s) fetched, {qualifying} qualifying, {} new",
        outcome.total_fetched,
        fresh.len()
    );

    if !fresh.is_empty() {
        // Digest first; ids are marked seen only once the send succeeded.
        mailer.send_digest(&fresh, config.filter.min_yield, Local::now())?;
        println!(
            "📧 Digest sent: {} listing(s) ≥ {} % brut",
            fresh.len(),
            round_pct(config.filter.min_yield)
        );

        for o in &fresh {
            seen.mark(&o.id);
        }

        if let Some(notion_cfg) = &config.notion {
            let notion = NotionClient::new(notion_cfg);
            let pushed = push_all(&fresh, |o| notion.create_page(o));
            println!("🗂️ Notion: {pushed}/{} page(s) created", fresh.len());
        }
    } else {
        println!("Nothing new to notify.");
    }

    seen.persist(&config.seen_file)?;
    println!("✅ Seen-id store persisted ({} ids)", seen.len());

    Ok(())
}

mod digest_tests;
mod export_tests;
mod router_tests;
mod scoring_tests;

use crate::jinka::Ad;

/// A scoreable ad in the builtin 31000 sector; tweak fields per test.
pub fn sample_ad(id: &str) -> Ad {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": "T3 lumineux proche métro",
        "price": 100_000,
        "surface": 70.0,
        "zipcode": "31000",
        "url": format!("https://www.jinka.fr/ad/{id}")
    }))
    .expect("sample ad should deserialize")
}

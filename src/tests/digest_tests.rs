// src/tests/digest_tests.rs

use chrono::{Local, TimeZone};

use crate::domain::Opportunity;
use crate::mailer::compose_digest;

fn opportunity(id: &str, yield_fraction: f64) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: format!("T3 {id}"),
        price: 100_000,
        surface: 70.0,
        zipcode: "31000".to_string(),
        monthly_rent: 987.0,
        gross_yield: yield_fraction,
        url: format!("https://www.jinka.fr/ad/{id}"),
    }
}

#[test]
fn subject_carries_count_threshold_and_timestamp() {
    let now = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 0).unwrap();
    let opps = [opportunity("a1", 0.1107), opportunity("a2", 0.095)];

    let (subject, _) = compose_digest(&opps, 0.09, now);

    assert_eq!(subject, "[Jinka] 2 annonce(s) ≥ 9 % brut (14/03/2025 09:26)");
}

#[test]
fn body_lists_each_listing_separated_by_blank_lines() {
    let now = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 0).unwrap();
    let opps = [opportunity("a1", 0.1107), opportunity("a2", 0.095)];

    let (_, body) = compose_digest(&opps, 0.09, now);

    let blocks: Vec<&str> = body.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(
        blocks[0],
        "T3 a1 | 70 m² | 100000 € | 11.07 % brut\nhttps://www.jinka.fr/ad/a1"
    );
    assert_eq!(
        blocks[1],
        "T3 a2 | 70 m² | 100000 € | 9.5 % brut\nhttps://www.jinka.fr/ad/a2"
    );
}

// src/tests/export_tests.rs

use crate::domain::Opportunity;
use crate::spreadsheets::{opportunities_to_csv, CSV_HEADERS};

fn opportunity(id: &str, title: &str) -> Opportunity {
    Opportunity {
        id: id.to_string(),
        title: title.to_string(),
        price: 100_000,
        surface: 70.0,
        zipcode: "31000".to_string(),
        monthly_rent: 987.0,
        gross_yield: 0.110691,
        url: format!("https://www.jinka.fr/ad/{id}"),
    }
}

/// Minimal RFC 4180 reader, enough to check our own writer.
fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for line in text.lines() {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut chars = line.chars().peekable();
        let mut quoted = false;

        while let Some(c) = chars.next() {
            match c {
                '"' if !quoted && field.is_empty() => quoted = true,
                '"' if quoted => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        quoted = false;
                    }
                }
                ',' if !quoted => fields.push(std::mem::take(&mut field)),
                c => field.push(c),
            }
        }
        fields.push(field);
        rows.push(fields);
    }

    rows
}

#[test]
fn export_parses_back_to_the_displayed_rows() {
    let opps = [
        opportunity("a1", "T3 lumineux proche métro"),
        opportunity("a2", "Studio refait à neuf"),
    ];

    let rows = parse_csv(&opportunities_to_csv(&opps));

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], CSV_HEADERS.to_vec());
    assert_eq!(
        rows[1],
        vec![
            "T3 lumineux proche métro",
            "100000",
            "70",
            "31000",
            "987",
            "11.07",
            "https://www.jinka.fr/ad/a1",
        ]
    );
    assert_eq!(rows[2][0], "Studio refait à neuf");
}

#[test]
fn titles_with_delimiters_and_quotes_survive_the_round_trip() {
    let opps = [opportunity("a1", "Grand T4, balcon, vue \"Garonne\"")];

    let rows = parse_csv(&opportunities_to_csv(&opps));

    assert_eq!(rows[1][0], "Grand T4, balcon, vue \"Garonne\"");
}

#[test]
fn empty_export_still_carries_the_header() {
    let rows = parse_csv(&opportunities_to_csv(&[]));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], CSV_HEADERS.to_vec());
}

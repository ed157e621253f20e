// spreadsheets/export_csv.rs
//
// The delimited twin of the rendered table: same columns, same values, so a
// parsed-back export reproduces exactly what the page displayed.

use crate::domain::Opportunity;

pub const CSV_HEADERS: [&str; 7] = [
    "Titre",
    "Prix (€)",
    "Surf (m²)",
    "CP",
    "Loyer théorique (€)",
    "Rdt brut %",
    "URL",
];

pub fn opportunities_to_csv(opportunities: &[Opportunity]) -> String {
    let mut out = String::new();

    let header: Vec<String> = CSV_HEADERS.iter().map(|h| csv_field(h)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for o in opportunities {
        let row = [
            csv_field(&o.title),
            o.price.to_string(),
            o.surface.to_string(),
            csv_field(&o.zipcode),
            o.monthly_rent.round().to_string(),
            o.yield_pct().to_string(),
            csv_field(&o.url),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// RFC 4180 quoting: wrap when the field carries a delimiter, quote, or
/// newline, doubling embedded quotes.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

// src/rents.rs

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs;
use std::time::Duration;

#[derive(Debug)]
pub enum RentError {
    Read(String),
    Http(String),
    Parse(String),
}

impl fmt::Display for RentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentError::Read(msg) => write!(f, "rent table read error: {msg}"),
            RentError::Http(msg) => write!(f, "rent table download error: {msg}"),
            RentError::Parse(msg) => write!(f, "rent table parse error: {msg}"),
        }
    }
}

impl Error for RentError {}

/// Median monthly rent in €/m², keyed by zipcode.
///
/// A zipcode missing from the table makes the listing unscoreable; that is
/// a silent exclusion downstream, never an error here.
#[derive(Debug, Clone)]
pub struct RentTable {
    by_zip: HashMap<String, f64>,
}

impl RentTable {
    /// The in-process mapping the batch bot falls back to (Toulouse sectors).
    pub fn builtin() -> Self {
        let by_zip = [
            ("31000", 14.1),
            ("31300", 12.4),
            ("31400", 12.9),
            ("31200", 11.2),
            ("31500", 11.7),
            ("31100", 11.5),
        ]
        .into_iter()
        .map(|(zip, med)| (zip.to_string(), med))
        .collect();

        Self { by_zip }
    }

    /// Load a delimited table (`secteur`, `med_m2` columns) from a local
    /// path or an `http(s)://` URL.
    pub fn load(source: &str) -> Result<Self, RentError> {
        let text = if source.starts_with("http://") || source.starts_with("https://") {
            fetch_text(source)?
        } else {
            fs::read_to_string(source).map_err(|e| RentError::Read(format!("{source}: {e}")))?
        };

        Self::parse_csv(&text)
    }

    /// Parse CSV text. The delimiter (`,` or `;`) is taken from the header
    /// line; column order is free and extra columns are ignored.
    pub fn parse_csv(text: &str) -> Result<Self, RentError> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| RentError::Parse("empty rent table".to_string()))?;
        let delim = if header.contains(';') { ';' } else { ',' };

        let columns: Vec<&str> = header.split(delim).map(str::trim).collect();
        let zip_col = find_column(&columns, "secteur")?;
        let rent_col = find_column(&columns, "med_m2")?;

        let mut by_zip = HashMap::new();
        for (i, line) in lines.enumerate() {
            let fields: Vec<&str> = line.split(delim).map(str::trim).collect();
            let zip = fields.get(zip_col).copied().unwrap_or_default();
            let raw_rent = fields.get(rent_col).copied().unwrap_or_default();

            if zip.is_empty() {
                return Err(RentError::Parse(format!("line {}: empty secteur", i + 2)));
            }
            let med_m2: f64 = raw_rent
                .parse()
                .map_err(|_| RentError::Parse(format!("line {}: bad med_m2 '{raw_rent}'", i + 2)))?;

            by_zip.insert(zip.to_string(), med_m2);
        }

        if by_zip.is_empty() {
            return Err(RentError::Parse("rent table has no data rows".to_string()));
        }

        Ok(Self { by_zip })
    }

    pub fn median_rent(&self, zip: &str) -> Option<f64> {
        self.by_zip.get(zip).copied()
    }

    pub fn len(&self) -> usize {
        self.by_zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_zip.is_empty()
    }
}

fn find_column(columns: &[&str], name: &str) -> Result<usize, RentError> {
    columns
        .iter()
        .position(|c| c.eq_ignore_ascii_case(name))
        .ok_or_else(|| RentError::Parse(format!("missing '{name}' column")))
}

fn fetch_text(url: &str) -> Result<String, RentError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()
        .map_err(|e| RentError::Http(e.to_string()))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| RentError::Http(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(RentError::Http(format!("HTTP {status} from {url}")));
    }

    resp.text().map_err(|e| RentError::Http(e.to_string()))
}

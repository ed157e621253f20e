use serde::{Deserialize, Deserializer};

// ad
//  ├── id            (string or number upstream)
//  ├── title
//  ├── price         (€, integer)
//  ├── surface       (m²)
//  ├── zipcode / postal_code   (either field, string or number)
//  └── url

#[derive(Debug, Deserialize)]
pub struct AdsResponse {
    #[serde(default)]
    pub ads: Vec<Ad>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ad {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    pub price: i64,
    pub surface: f64,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub zipcode: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub postal_code: Option<String>,
    pub url: String,
}

impl Ad {
    /// The rent-lookup key; the API populates one of the two fields.
    pub fn zip(&self) -> Option<&str> {
        self.zipcode.as_deref().or(self.postal_code.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// Jinka is loose about scalar types, so ids and zipcodes are accepted as
// either JSON strings or numbers and normalized to strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(x) => x.to_string(),
    })
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(x) => x.to_string(),
    }))
}

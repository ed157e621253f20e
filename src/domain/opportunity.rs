// src/domain/opportunity.rs

/// Operator-supplied screening thresholds.
///
/// `min_yield` and `surcharge` are fractions (0.09 = 9 %); percentages only
/// exist at the display boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub max_price: i64,
    pub min_surface: f64,
    pub min_yield: f64,
    pub surcharge: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_price: 150_000,
            min_surface: 60.0,
            min_yield: 0.09,
            surcharge: 0.07,
        }
    }
}

/// A listing that passed every screening stage, ready for the output sinks.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub price: i64,
    pub surface: f64,
    pub zipcode: String,
    /// Theoretical rent for one month, `med_m2 * surface`.
    pub monthly_rent: f64,
    /// Gross yield as a fraction of the surcharged price.
    pub gross_yield: f64,
    pub url: String,
}

impl Opportunity {
    /// Yield as a percentage rounded to 2 decimals, the only form shown to
    /// users (mail, Notion, table, exports).
    pub fn yield_pct(&self) -> f64 {
        super::round_pct(self.gross_yield)
    }
}

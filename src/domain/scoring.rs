// src/domain/scoring.rs
//
// The single home of the screening rules. Both entry points go through
// `select_opportunities`; neither is allowed its own copy of the formula.

use std::cmp::Ordering;

use crate::domain::{FilterConfig, Opportunity};
use crate::jinka::Ad;
use crate::rents::RentTable;

/// Gross yield of a listing given the median monthly rent per m².
///
/// `(med_m2 * surface * 12) / (price * (1 + surcharge))`
pub fn gross_yield(price: i64, surface: f64, med_m2: f64, surcharge: f64) -> f64 {
    let annual_rent = med_m2 * surface * 12.0;
    annual_rent / (price as f64 * (1.0 + surcharge))
}

/// Screen one ad. `None` means rejected; a missing rent entry for the ad's
/// zipcode is an ordinary rejection, not an error.
pub fn evaluate(ad: &Ad, rents: &RentTable, cfg: &FilterConfig) -> Option<Opportunity> {
    if ad.price > cfg.max_price || ad.surface < cfg.min_surface {
        return None;
    }

    let zipcode = ad.zip()?;
    let med_m2 = rents.median_rent(zipcode)?;

    let brut = gross_yield(ad.price, ad.surface, med_m2, cfg.surcharge);
    if brut < cfg.min_yield {
        return None;
    }

    Some(Opportunity {
        id: ad.id.clone(),
        title: ad.title.clone(),
        price: ad.price,
        surface: ad.surface,
        zipcode: zipcode.to_string(),
        monthly_rent: med_m2 * ad.surface,
        gross_yield: brut,
        url: ad.url.clone(),
    })
}

/// Screen a whole fetch result, best yield first.
pub fn select_opportunities(ads: &[Ad], rents: &RentTable, cfg: &FilterConfig) -> Vec<Opportunity> {
    let mut out: Vec<Opportunity> = ads.iter().filter_map(|ad| evaluate(ad, rents, cfg)).collect();

    out.sort_by(|a, b| {
        b.gross_yield
            .partial_cmp(&a.gross_yield)
            .unwrap_or(Ordering::Equal)
    });

    out
}

/// Fraction -> percentage rounded to 2 decimals (0.110691... -> 11.07).
pub fn round_pct(fraction: f64) -> f64 {
    (fraction * 10_000.0).round() / 100.0
}

use maud::{html, Markup};
use url::form_urlencoded;

use crate::config::Config;
use crate::domain::{round_pct, FilterConfig};

/// The analysis parameters, exactly as the form carries them. Every request
/// re-reads the full set; there is no server-side parameter state.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub alert_id: String,
    pub max_price: i64,
    pub min_surface: f64,
    /// The form speaks percentages; [`FormValues::filter_config`] converts.
    pub min_yield_pct: f64,
    pub surcharge: f64,
    /// Rent-table path or URL; blank means the builtin mapping.
    pub rents: String,
}

impl FormValues {
    /// Prefill from the startup configuration.
    pub fn defaults(config: &Config) -> Self {
        Self {
            alert_id: config.alert_id.clone().unwrap_or_default(),
            max_price: config.filter.max_price,
            min_surface: config.filter.min_surface,
            min_yield_pct: round_pct(config.filter.min_yield),
            surcharge: config.filter.surcharge,
            rents: config.rent_csv.clone().unwrap_or_default(),
        }
    }

    pub fn filter_config(&self) -> FilterConfig {
        FilterConfig {
            max_price: self.max_price,
            min_surface: self.min_surface,
            min_yield: self.min_yield_pct / 100.0,
            surcharge: self.surcharge,
        }
    }

    /// Re-encode as a query string so the download links replay the exact
    /// parameters of the rendered table.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("alert_id", &self.alert_id)
            .append_pair("max_price", &self.max_price.to_string())
            .append_pair("min_surface", &self.min_surface.to_string())
            .append_pair("min_yield", &self.min_yield_pct.to_string())
            .append_pair("surcharge", &self.surcharge.to_string())
            .append_pair("rents", &self.rents)
            .finish()
    }
}

pub fn params_form(values: &FormValues) -> Markup {
    html! {
        section class="card" {
            h3 { "⚙️ Paramètres" }
            form class="params" action="/analyze" method="get" {
                label {
                    "ID de l'alerte"
                    input type="text" name="alert_id" value=(values.alert_id) placeholder="ex : 123456" required;
                }
                label {
                    "Prix max (€)"
                    input type="number" name="max_price" value=(values.max_price) min="0" step="5000";
                }
                label {
                    "Surface min (m²)"
                    input type="number" name="min_surface" value=(values.min_surface) min="0" step="5";
                }
                label {
                    "Rendement brut min (%)"
                    input type="number" name="min_yield" value=(values.min_yield_pct) min="0" step="0.1";
                }
                label {
                    "Frais d'acquisition (fraction)"
                    input type="number" name="surcharge" value=(values.surcharge) min="0" max="1" step="0.01";
                }
                label {
                    "CSV loyers (URL ou chemin, vide = table intégrée)"
                    input type="text" name="rents" value=(values.rents);
                }
                button type="submit" { "🚀 Analyser maintenant" }
            }
        }
    }
}

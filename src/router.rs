use std::collections::HashMap;

use astra::Request;
use chrono::Local;
use url::form_urlencoded;

use crate::app::AppCtx;
use crate::domain::Opportunity;
use crate::errors::ServerError;
use crate::jinka::{JinkaClient, JinkaError};
use crate::responses::{csv_response, html_response, ResultResp};
use crate::scan::scan_alert;
use crate::spreadsheets::{export_opportunities_xlsx, opportunities_to_csv};
use crate::templates::pages::{home_page, results_page, ResultsVm};
use crate::templates::{Flash, FormValues};

pub fn handle(req: Request, ctx: &AppCtx) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(home_page(&FormValues::defaults(&ctx.config))),
        ("GET", "/analyze") => {
            let values = parse_form_values(&req, ctx)?;
            html_response(results_page(&run_analysis(ctx, values)))
        }
        ("GET", "/export") => {
            let values = parse_form_values(&req, ctx)?;
            let rows = scan_for_export(ctx, &values)?;
            csv_response(opportunities_to_csv(&rows), "opportunites.csv")
        }
        ("GET", "/export/xlsx") => {
            let values = parse_form_values(&req, ctx)?;
            let rows = scan_for_export(ctx, &values)?;
            export_opportunities_xlsx(&rows)
        }
        _ => Err(ServerError::NotFound),
    }
}

/// Run the full pipeline for one trigger and fold every outcome, including
/// the failure categories, into the page view-model.
fn run_analysis(ctx: &AppCtx, values: FormValues) -> ResultsVm {
    let rents = match ctx.rent_table(&values.rents) {
        Ok(rents) => rents,
        Err(e) => return failure_vm(values, format!("Erreur chargement loyers : {e}")),
    };

    let credentials = match ctx.config.jinka() {
        Ok(credentials) => credentials,
        Err(e) => return failure_vm(values, format!("Identifiants Jinka absents : {e}")),
    };

    let client = match JinkaClient::new() {
        Ok(client) => client,
        Err(e) => return failure_vm(values, format!("Erreur appel API : {e}")),
    };

    let cfg = values.filter_config();
    match scan_alert(&client, credentials, &values.alert_id, &rents, &cfg) {
        Err(JinkaError::Auth(e)) => {
            failure_vm(values, format!("Échec authentification Jinka : {e}"))
        }
        Err(e) => failure_vm(values, format!("Erreur appel API : {e}")),
        Ok(outcome) if outcome.total_fetched == 0 => ResultsVm {
            values,
            banner: Flash::Info,
            message: "Aucune annonce renvoyée (alerte vide ou ID incorrect).".to_string(),
            rows: Vec::new(),
        },
        Ok(outcome) if outcome.opportunities.is_empty() => ResultsVm {
            values,
            banner: Flash::Warning,
            message: format!(
                "{} annonce(s) récupérée(s), aucune ne remplit les critères.",
                outcome.total_fetched
            ),
            rows: Vec::new(),
        },
        Ok(outcome) => {
            let message = format!(
                "💡 {} opportunité(s) ≥ {} % brut trouvées le {}",
                outcome.opportunities.len(),
                values.min_yield_pct,
                Local::now().format("%d/%m/%Y %H:%M"),
            );
            ResultsVm {
                values,
                banner: Flash::Success,
                message,
                rows: outcome.opportunities,
            }
        }
    }
}

fn failure_vm(values: FormValues, message: String) -> ResultsVm {
    ResultsVm {
        values,
        banner: Flash::Error,
        message,
        rows: Vec::new(),
    }
}

/// The download routes replay the scan with the page's exact parameters;
/// here a pipeline failure is a plain error response rather than a banner.
fn scan_for_export(ctx: &AppCtx, values: &FormValues) -> Result<Vec<Opportunity>, ServerError> {
    let rents = ctx
        .rent_table(&values.rents)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;
    let credentials = ctx
        .config
        .jinka()
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;
    let client = JinkaClient::new().map_err(|e| ServerError::BadRequest(e.to_string()))?;

    let cfg = values.filter_config();
    scan_alert(&client, credentials, &values.alert_id, &rents, &cfg)
        .map(|outcome| outcome.opportunities)
        .map_err(|e| ServerError::BadRequest(e.to_string()))
}

fn parse_form_values(req: &Request, ctx: &AppCtx) -> Result<FormValues, ServerError> {
    let params = parse_query(req);
    let defaults = FormValues::defaults(&ctx.config);

    let alert_id = params
        .get("alert_id")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| (!defaults.alert_id.is_empty()).then(|| defaults.alert_id.clone()))
        .ok_or_else(|| ServerError::BadRequest("ID d'alerte manquant".to_string()))?;

    Ok(FormValues {
        alert_id,
        max_price: parse_param(&params, "max_price", defaults.max_price)?,
        min_surface: parse_param(&params, "min_surface", defaults.min_surface)?,
        min_yield_pct: parse_param(&params, "min_yield", defaults.min_yield_pct)?,
        surcharge: parse_param(&params, "surcharge", defaults.surcharge)?,
        rents: params
            .get("rents")
            .map(|s| s.trim().to_string())
            .unwrap_or(defaults.rents),
    })
}

fn parse_param<T: std::str::FromStr>(
    params: &HashMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, ServerError> {
    match params.get(key).map(|s| s.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("paramètre {key} invalide : {raw}"))),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    if let Some(q) = req.uri().query() {
        for (k, v) in form_urlencoded::parse(q.as_bytes()) {
            map.insert(k.into_owned(), v.into_owned());
        }
    }

    map
}

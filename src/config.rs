// src/config.rs

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::domain::FilterConfig;

#[derive(Debug)]
pub enum ConfigError {
    MissingVar(&'static str),
    BadValue(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "{name} environment variable not set")
            }
            ConfigError::BadValue(name, raw) => {
                write!(f, "{name} has an unparsable value: {raw}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct JinkaCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone)]
pub struct NotionConfig {
    pub token: String,
    pub database_id: String,
}

/// Everything read from the environment, resolved once at startup.
///
/// The web server tolerates absent mail/Notion settings (it uses neither);
/// the batch runner checks its required pieces through [`Config::bot_mail`]
/// and [`Config::bot_alert_id`] before doing any network work.
#[derive(Debug, Clone)]
pub struct Config {
    pub jinka: Option<JinkaCredentials>,
    pub alert_id: Option<String>,
    pub mail: Option<MailConfig>,
    pub notion: Option<NotionConfig>,
    pub rent_csv: Option<String>,
    pub seen_file: PathBuf,
    pub bind_addr: String,
    pub filter: FilterConfig,
}

const DEFAULT_MAIL_API_URL: &str = "https://api.brevo.com/v3/smtp/email";
const DEFAULT_SEEN_FILE: &str = "data/seen_ids.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let jinka = match (env::var("JINKA_MAIL"), env::var("JINKA_PASS")) {
            (Ok(email), Ok(password)) => Some(JinkaCredentials { email, password }),
            _ => None,
        };

        // The mail sink is on only when fully configured; the batch runner
        // refuses to start without it, the web server never looks at it.
        let mail = match (env::var("MAIL_API_KEY"), env::var("MAIL_FROM"), env::var("MAIL_TO")) {
            (Ok(api_key), Ok(from), Ok(to)) => Some(MailConfig {
                api_url: env::var("MAIL_API_URL")
                    .unwrap_or_else(|_| DEFAULT_MAIL_API_URL.to_string()),
                api_key,
                from,
                to,
            }),
            _ => None,
        };

        let notion = match (env::var("NOTION_TOKEN"), env::var("NOTION_DATABASE_ID")) {
            (Ok(token), Ok(database_id)) => Some(NotionConfig { token, database_id }),
            _ => None,
        };

        Ok(Config {
            jinka,
            alert_id: env::var("JINKA_ALERT_ID").ok(),
            mail,
            notion,
            rent_csv: env::var("RENT_CSV").ok(),
            seen_file: env::var("SEEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SEEN_FILE)),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            filter: FilterConfig {
                max_price: read_env("MAX_PRICE", FilterConfig::default().max_price)?,
                min_surface: read_env("MIN_SURFACE", FilterConfig::default().min_surface)?,
                min_yield: read_env("MIN_YIELD", FilterConfig::default().min_yield)?,
                surcharge: read_env("ACQUISITION_SURCHARGE", FilterConfig::default().surcharge)?,
            },
        })
    }

    pub fn jinka(&self) -> Result<&JinkaCredentials, ConfigError> {
        self.jinka.as_ref().ok_or(ConfigError::MissingVar("JINKA_MAIL / JINKA_PASS"))
    }

    pub fn bot_mail(&self) -> Result<&MailConfig, ConfigError> {
        self.mail
            .as_ref()
            .ok_or(ConfigError::MissingVar("MAIL_API_KEY / MAIL_FROM / MAIL_TO"))
    }

    pub fn bot_alert_id(&self) -> Result<&str, ConfigError> {
        self.alert_id
            .as_deref()
            .ok_or(ConfigError::MissingVar("JINKA_ALERT_ID"))
    }
}

fn read_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::BadValue(name, raw)),
        Err(_) => Ok(default),
    }
}

mod form_tests;
mod home_tests;

use std::path::PathBuf;

use astra::{Body, Request};

use crate::app::AppCtx;
use crate::config::Config;
use crate::domain::FilterConfig;

/// A context with no environment access: builtin defaults, no credentials.
pub fn test_ctx() -> AppCtx {
    AppCtx::new(test_config())
}

pub fn test_ctx_without_alert() -> AppCtx {
    let mut config = test_config();
    config.alert_id = None;
    AppCtx::new(config)
}

fn test_config() -> Config {
    Config {
        jinka: None,
        alert_id: Some("123456".to_string()),
        mail: None,
        notion: None,
        rent_csv: None,
        seen_file: PathBuf::from("data/seen_ids.json"),
        bind_addr: "127.0.0.1:3000".to_string(),
        filter: FilterConfig::default(),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("test request should build")
}

pub fn body_string(resp: &mut astra::Response) -> String {
    use std::io::Read;

    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("body should read");
    String::from_utf8(bytes).expect("body should be utf-8")
}

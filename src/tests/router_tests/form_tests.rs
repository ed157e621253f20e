// src/tests/router_tests/form_tests.rs

use crate::errors::ServerError;
use crate::handle;
use crate::templates::FormValues;
use crate::tests::router_tests::{get, test_ctx, test_ctx_without_alert};

#[test]
fn unparsable_number_is_a_bad_request() {
    let ctx = test_ctx();

    let err = handle(get("/analyze?alert_id=123456&max_price=cher"), &ctx).unwrap_err();
    match err {
        ServerError::BadRequest(msg) => assert!(msg.contains("max_price"), "got: {msg}"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn missing_alert_id_without_default_is_a_bad_request() {
    let ctx = test_ctx_without_alert();

    let err = handle(get("/analyze?max_price=150000"), &ctx).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn export_with_bad_parameter_is_a_bad_request() {
    let ctx = test_ctx();

    let err = handle(get("/export?alert_id=123456&min_yield=neuf"), &ctx).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn yield_floor_percentage_converts_to_a_fraction() {
    let values = FormValues {
        alert_id: "123456".to_string(),
        max_price: 150_000,
        min_surface: 60.0,
        min_yield_pct: 9.0,
        surcharge: 0.07,
        rents: String::new(),
    };

    let cfg = values.filter_config();
    assert!((cfg.min_yield - 0.09).abs() < 1e-12);
    assert_eq!(cfg.max_price, 150_000);
}

#[test]
fn query_string_round_trips_through_the_export_links() {
    let values = FormValues {
        alert_id: "123456".to_string(),
        max_price: 150_000,
        min_surface: 60.0,
        min_yield_pct: 9.5,
        surcharge: 0.07,
        rents: "https://example.com/loyers.csv".to_string(),
    };

    let query = values.query_string();
    assert!(query.contains("alert_id=123456"));
    assert!(query.contains("min_yield=9.5"));
    // the URL is percent-encoded so it survives as a single parameter
    assert!(query.contains("rents=https%3A%2F%2Fexample.com%2Floyers.csv"));
}

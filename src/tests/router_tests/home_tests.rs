// src/tests/router_tests/home_tests.rs

use crate::errors::ServerError;
use crate::handle;
use crate::tests::router_tests::{body_string, get, test_ctx};

#[test]
fn home_renders_the_parameter_form() {
    let ctx = test_ctx();

    let mut resp = handle(get("/"), &ctx).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Analyser maintenant"));
    for field in ["alert_id", "max_price", "min_surface", "min_yield", "surcharge", "rents"] {
        assert!(body.contains(&format!("name=\"{field}\"")), "missing {field}");
    }
    // prefilled from the context
    assert!(body.contains("123456"));
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = test_ctx();

    let err = handle(get("/nope"), &ctx).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn post_to_home_is_not_found() {
    let ctx = test_ctx();
    let req = http::Request::builder()
        .method("POST")
        .uri("/")
        .body(astra::Body::empty())
        .unwrap();

    let err = handle(req, &ctx).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

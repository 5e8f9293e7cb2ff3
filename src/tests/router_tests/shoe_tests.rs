// src/tests/router_tests/shoe_tests.rs

use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle_at;
use crate::tests::utils::{body_string, expect_err, get, test_catalog, test_now};
use astra::Body;
use http::Method;

fn shoe_body(slug: &str) -> String {
    let resp = handle_at(
        get(&format!("/shoe/{slug}")),
        &test_catalog(),
        &AppConfig::default(),
        test_now(),
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    body_string(resp)
}

#[test]
fn old_sale_shoe_page() {
    let body = shoe_body("old-sale");

    assert!(body.contains(r#"data-variant="on-sale""#));
    assert!(body.contains(">Sale</span>"));
    assert!(body.contains("1 Color<"));
    assert!(body.contains("line-through"));
    assert!(body.contains("$100.00"));
    assert!(body.contains("$60.00"));
}

#[test]
fn fresh_drop_shoe_page() {
    let body = shoe_body("fresh-drop");

    assert!(body.contains(r#"data-variant="new-release""#));
    assert!(body.contains("Just released!"));
    assert!(body.contains("3 Colors"));
    assert!(!body.contains("shoe-card__sale-price"));
}

#[test]
fn zero_sale_price_shoe_page() {
    let body = shoe_body("free-new");

    assert!(body.contains(r#"data-variant="on-sale""#));
    assert!(!body.contains("Just released!"));
    assert!(body.contains("$0.00"));
}

#[test]
fn plain_shoe_page() {
    let body = shoe_body("plain-jane");

    assert!(body.contains(r#"data-variant="default""#));
    assert!(body.contains("0 Colors"));
    assert!(!body.contains("shoe-card__flag"));
}

#[test]
fn unknown_slug_is_not_found() {
    let err = expect_err(handle_at(
        get("/shoe/nope"),
        &test_catalog(),
        &AppConfig::default(),
        test_now(),
    ));
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_to_response(err).status(), 404);
}

#[test]
fn empty_slug_is_not_found() {
    let err = expect_err(handle_at(get("/shoe/"), &test_catalog(), &AppConfig::default(), test_now()));
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn post_is_not_found() {
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/shoe/old-sale")
        .body(Body::empty())
        .unwrap();
    let err = expect_err(handle_at(req, &test_catalog(), &AppConfig::default(), test_now()));
    assert!(matches!(err, ServerError::NotFound));
}

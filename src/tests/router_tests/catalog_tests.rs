// src/tests/router_tests/catalog_tests.rs

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::errors::ServerError;
use crate::router::handle_at;
use chrono::TimeDelta;
use crate::tests::utils::{body_string, expect_err, get, test_catalog, test_now};

#[test]
fn catalog_lists_every_shoe() {
    let resp = handle_at(get("/"), &test_catalog(), &AppConfig::default(), test_now()).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    for slug in ["old-sale", "fresh-drop", "free-new", "plain-jane"] {
        assert!(
            body.contains(&format!(r#"href="/shoe/{slug}""#)),
            "catalog is missing a link to {slug}"
        );
    }
}

#[test]
fn catalog_shows_each_variant() {
    let resp = handle_at(get("/"), &test_catalog(), &AppConfig::default(), test_now()).unwrap();
    let body = body_string(resp);

    assert_eq!(body.matches(r#"data-variant="on-sale""#).count(), 2);
    assert_eq!(body.matches(r#"data-variant="new-release""#).count(), 1);
    assert_eq!(body.matches(r#"data-variant="default""#).count(), 1);
    assert_eq!(body.matches("Just released!").count(), 1);
}

#[test]
fn default_sort_is_newest() {
    let resp = handle_at(get("/"), &test_catalog(), &AppConfig::default(), test_now()).unwrap();
    let body = body_string(resp);

    let fresh = body.find("/shoe/fresh-drop").unwrap();
    let old = body.find("/shoe/old-sale").unwrap();
    assert!(fresh < old);
    assert!(body.contains(r#"<option value="newest" selected>"#));
}

#[test]
fn price_sort_puts_cheapest_first() {
    let resp = handle_at(
        get("/?sort=price"),
        &test_catalog(),
        &AppConfig::default(),
        test_now(),
    )
    .unwrap();
    let body = body_string(resp);

    let cheapest = body.find("/shoe/free-new").unwrap();
    let priciest = body.find("/shoe/fresh-drop").unwrap();
    assert!(cheapest < priciest);
    assert!(body.contains(r#"<option value="price" selected>"#));
}

#[test]
fn unknown_sort_is_bad_request() {
    let err = expect_err(handle_at(
        get("/?sort=colors"),
        &test_catalog(),
        &AppConfig::default(),
        test_now(),
    ));
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn empty_catalog_renders_placeholder() {
    let resp = handle_at(
        get("/"),
        &Catalog::default(),
        &AppConfig::default(),
        test_now(),
    )
    .unwrap();
    assert!(body_string(resp).contains("No shoes in the catalog yet."));
}

#[test]
fn shorter_window_drops_new_release_badge() {
    let cfg = AppConfig {
        release_window: TimeDelta::days(1),
        ..AppConfig::default()
    };
    let resp = handle_at(get("/"), &test_catalog(), &cfg, test_now()).unwrap();
    let body = body_string(resp);

    assert!(!body.contains("Just released!"));
    assert_eq!(body.matches(r#"data-variant="default""#).count(), 2);
}

#[test]
fn bundled_catalog_loads() {
    let catalog = Catalog::load("data/shoes.json").unwrap();
    assert!(!catalog.is_empty());
}

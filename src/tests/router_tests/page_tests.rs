use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, request, sample_app, test_app};
use http::Method;

#[test]
fn home_page_renders_every_hotel() {
    let app = sample_app();

    let resp = get(&app, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("csvFileInput"));
    assert!(body.contains(r#"hx-post="/panels/close-all""#));
    assert!(body.contains(
        r#"hx-trigger="click[!event.target.closest('.review-tooltip, .ai-badge')] from:body""#
    ));
    assert!(body.contains(r#"<span id="property-count">3</span>"#));
    assert_eq!(body.matches(r#"class="hotel-card""#).count(), 3);
    assert_eq!(body.matches(r#"class="review-tooltip""#).count(), 3);

    let h1 = body.find(r#"id="hotel-h1""#).unwrap();
    let h2 = body.find(r#"id="hotel-h2""#).unwrap();
    let h3 = body.find(r#"id="hotel-h3""#).unwrap();
    assert!(h1 < h2 && h2 < h3);
}

#[test]
fn hotel_fields_and_placeholders() {
    let app = sample_app();
    let body = body_string(get(&app, "/hotels"));

    // Partial, not a page.
    assert!(!body.contains("<html"));

    assert!(body.contains("Exceptional"));
    assert!(body.contains("3,120 reviews"));
    assert!(body.contains("Very Good"));

    // Bracketed pros capped at three, pipe cons, comma pros.
    assert!(body.contains("Breakfast"));
    assert!(!body.contains("Rooftop"));
    assert!(body.contains("Small lifts"));
    assert!(body.contains("Cozy"));

    // Record with nothing but a title.
    assert!(body.contains(">0 reviews<"));
    assert!(body.contains("No summary available."));
    assert!(body.contains("No pros listed"));
    assert!(body.contains("No cons listed"));
    assert!(body.contains("-/10"));
}

#[test]
fn empty_app_renders_no_cards() {
    let app = test_app();
    let body = body_string(get(&app, "/hotels"));
    assert!(body.contains(r#"<span id="property-count">0</span>"#));
    assert!(!body.contains("hotel-card"));
}

#[test]
fn stylesheet_is_served() {
    let app = test_app();
    let resp = get(&app, "/static/main.css");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".review-tooltip.show"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();
    let result = handle(request(Method::GET, "/nope", ""), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

use crate::errors::ServerError;
use crate::responses::html::LOAD_MESSAGE_HEADER;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post, request, sample_app, test_app, SAMPLE_CSV};
use http::Method;

#[test]
fn upload_replaces_batch_and_reports_count() {
    let app = sample_app();
    let csv = "listing_id,title_norm,rating\nn1,New Hotel,8.9\nn2,Other Hotel,9.2\n";

    let resp = post(&app, "/upload", csv);
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get(LOAD_MESSAGE_HEADER).and_then(|v| v.to_str().ok()),
        Some("Loaded 2 hotels from CSV!")
    );

    let body = body_string(resp);
    assert!(body.starts_with(r#"<section id="listing">"#));
    assert!(body.contains(r#"<span id="property-count">2</span>"#));
    assert!(body.contains("New Hotel"));
    assert!(!body.contains("Hotel Artemide"));

    let page = body_string(get(&app, "/hotels"));
    assert_eq!(page.matches(r#"class="hotel-card""#).count(), 2);
}

#[test]
fn failed_upload_keeps_previous_batch() {
    let app = sample_app();
    let bad = b"listing_id,title_norm\nx1,\xff\xfe broken\n";

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .body(astra::Body::from(bad.to_vec()))
        .unwrap();
    let result = handle(req, &app);
    match result {
        Err(ServerError::BadRequest(msg)) => assert!(msg.starts_with("Error parsing CSV:")),
        other => panic!("expected bad request, got {:?}", other.map(|r| r.status())),
    }

    let page = body_string(get(&app, "/hotels"));
    assert_eq!(page.matches(r#"class="hotel-card""#).count(), 3);
    assert!(page.contains("Hotel Artemide"));
}

#[test]
fn empty_upload_is_a_valid_empty_batch() {
    let app = sample_app();

    let resp = post(&app, "/upload", "listing_id,title_norm\n");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get(LOAD_MESSAGE_HEADER).and_then(|v| v.to_str().ok()),
        Some("Loaded 0 hotels from CSV!")
    );
    assert!(!body_string(resp).contains("hotel-card"));
}

#[test]
fn upload_resets_open_panels() {
    let app = sample_app();
    post(&app, "/panels/toggle?id=h1", "");
    assert_eq!(app.lock().unwrap().panels.shown(), Some("h1"));

    post(&app, "/upload", SAMPLE_CSV);
    assert_eq!(app.lock().unwrap().panels.shown(), None);

    let page = body_string(get(&app, "/hotels"));
    assert!(!page.contains("review-tooltip show"));
}

#[test]
fn get_upload_is_not_a_route() {
    let app = test_app();
    let result = handle(request(Method::GET, "/upload", ""), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn oversized_upload_is_rejected_and_batch_kept() {
    let app = sample_app().with_upload_limit(64);
    let csv = format!("listing_id,title_norm\n{}", "n1,Big Hotel\n".repeat(20));

    let result = handle(request(Method::POST, "/upload", &csv), &app);
    match result {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("exceeds 64 bytes")),
        other => panic!("expected bad request, got {:?}", other.map(|r| r.status())),
    }

    let page = body_string(get(&app, "/hotels"));
    assert!(page.contains("Hotel Artemide"));
    assert!(!page.contains("Big Hotel"));
}

#[test]
fn upload_at_the_limit_is_accepted() {
    let csv = "listing_id,title_norm\nn1,Small Hotel\n";
    let app = test_app().with_upload_limit(csv.len() as u64);

    let resp = post(&app, "/upload", csv);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Small Hotel"));
}

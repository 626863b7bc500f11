use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post, request, sample_app};
use http::Method;

fn shown_count(app: &crate::state::App) -> usize {
    body_string(get(app, "/hotels")).matches("review-tooltip show").count()
}

#[test]
fn toggle_opens_panel_out_of_band() {
    let app = sample_app();

    let body = body_string(post(&app, "/panels/toggle?id=h1", ""));
    assert_eq!(body.matches("hx-swap-oob").count(), 1);
    assert!(body.contains(r#"class="review-tooltip show" id="tooltip-h1""#));
    assert_eq!(shown_count(&app), 1);
}

#[test]
fn opening_second_panel_closes_first() {
    let app = sample_app();
    post(&app, "/panels/toggle?id=h1", "");

    let body = body_string(post(&app, "/panels/toggle?id=h2", ""));
    assert_eq!(body.matches("hx-swap-oob").count(), 2);
    assert!(body.contains(r#"class="review-tooltip" id="tooltip-h1""#));
    assert!(body.contains(r#"class="review-tooltip show" id="tooltip-h2""#));

    assert_eq!(shown_count(&app), 1);
    assert_eq!(app.lock().unwrap().panels.shown(), Some("h2"));
}

#[test]
fn toggle_again_hides() {
    let app = sample_app();
    post(&app, "/panels/toggle?id=h3", "");
    post(&app, "/panels/toggle?id=h3", "");
    assert_eq!(shown_count(&app), 0);
}

#[test]
fn close_control_hides_own_panel_only() {
    let app = sample_app();
    post(&app, "/panels/toggle?id=h1", "");

    let noop = body_string(post(&app, "/panels/close?id=h2", ""));
    assert!(noop.is_empty());
    assert_eq!(shown_count(&app), 1);

    let body = body_string(post(&app, "/panels/close?id=h1", ""));
    assert!(body.contains(r#"class="review-tooltip" id="tooltip-h1""#));
    assert_eq!(shown_count(&app), 0);
}

#[test]
fn outside_click_closes_everything() {
    let app = sample_app();
    post(&app, "/panels/toggle?id=h2", "");

    let body = body_string(post(&app, "/panels/close-all", ""));
    assert!(body.contains(r#"id="tooltip-h2""#));
    assert_eq!(shown_count(&app), 0);

    let again = body_string(post(&app, "/panels/close-all", ""));
    assert!(again.is_empty());
}

#[test]
fn unknown_panel_is_not_found() {
    let app = sample_app();
    let result = handle(request(Method::POST, "/panels/toggle?id=zzz", ""), &app);
    assert!(matches!(result, Err(ServerError::NotFound)));
    assert_eq!(app.lock().unwrap().panels.shown(), None);
}

#[test]
fn missing_panel_id_is_bad_request() {
    let app = sample_app();
    let result = handle(request(Method::POST, "/panels/toggle", ""), &app);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn full_page_load_starts_with_panels_hidden() {
    let app = sample_app();
    post(&app, "/panels/toggle?id=h1", "");

    let page = body_string(get(&app, "/"));
    assert_eq!(page.matches("review-tooltip show").count(), 0);
    assert!(page.contains(r#"class="review-tooltip" id="tooltip-h1""#));
    assert_eq!(app.lock().unwrap().panels.shown(), None);

    // The panel can be opened again from the fresh page.
    post(&app, "/panels/toggle?id=h1", "");
    assert_eq!(shown_count(&app), 1);
}

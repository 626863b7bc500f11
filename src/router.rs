use crate::errors::ServerError;
use crate::loader::parse_hotels;
use crate::panels::PanelController;
use crate::responses::{html_response, html_response_with_message, stylesheet_response, ResultResp};
use crate::state::{App, AppState};
use crate::templates::{self, listing_section, review_panel};
use astra::Request;
use maud::{html, Markup};
use std::io::Read;
use tracing::{debug, info, warn};
use url::form_urlencoded;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let mut state = app.lock()?;
            // A full page is a fresh render: every panel starts hidden.
            state.panels.reset();
            html_response(templates::pages::home_page(&mut state))
        }
        ("GET", "/hotels") => {
            let mut state = app.lock()?;
            html_response(listing_section(&mut state))
        }
        ("GET", "/static/main.css") => stylesheet_response(),

        ("POST", "/upload") => upload(&mut req, app),

        ("POST", "/panels/toggle") => {
            let id = panel_id(&req)?;
            panel_transition(app, &id, PanelController::toggle)
        }
        ("POST", "/panels/close") => {
            let id = panel_id(&req)?;
            panel_transition(app, &id, PanelController::close)
        }
        ("POST", "/panels/close-all") => {
            let mut state = app.lock()?;
            let changed = state.panels.close_all();
            html_response(changed_panels(&state, &changed))
        }

        _ => Err(ServerError::NotFound),
    }
}

/// True for requests sent by htmx, which expect fragments rather than pages.
pub fn is_htmx(req: &Request) -> bool {
    req.headers().contains_key("HX-Request")
}

/// Replaces the batch with the uploaded CSV. A body that fails to parse
/// leaves the current batch untouched.
fn upload(req: &mut Request, app: &App) -> ResultResp {
    let limit = app.max_upload_bytes();
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(limit.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Error reading upload: {e}")))?;

    if body.len() as u64 > limit {
        warn!(limit, "upload rejected: too large");
        return Err(ServerError::BadRequest(format!(
            "Error parsing CSV: upload exceeds {limit} bytes"
        )));
    }

    let hotels = parse_hotels(body.as_slice()).map_err(|e| {
        warn!(error = %e, "upload rejected");
        ServerError::from(e)
    })?;
    let count = hotels.len();

    let mut state = app.lock()?;
    state.replace_batch(hotels);
    info!(count, source = "upload", "hotels loaded");

    let message = format!("Loaded {count} hotels from CSV!");
    html_response_with_message(listing_section(&mut state), &message)
}

fn panel_transition(
    app: &App,
    id: &str,
    transition: fn(&mut PanelController, &str) -> Vec<String>,
) -> ResultResp {
    let mut state = app.lock()?;
    if state.find(id).is_none() {
        return Err(ServerError::NotFound);
    }
    let changed = transition(&mut state.panels, id);
    debug!(panel = id, shown = ?state.panels.shown(), "panel transition");
    html_response(changed_panels(&state, &changed))
}

/// Re-rendered panels for every id whose visibility changed, each marked
/// for an out-of-band swap.
fn changed_panels(state: &AppState, changed: &[String]) -> Markup {
    html! {
        @for id in changed {
            @if let Some(hotel) = state.find(id) {
                (review_panel(hotel, state.panels.is_shown(id), true))
            }
        }
    }
}

fn panel_id(req: &Request) -> Result<String, ServerError> {
    req.uri()
        .query()
        .and_then(|q| {
            form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "id")
                .map(|(_, value)| value.into_owned())
        })
        .ok_or_else(|| ServerError::BadRequest("missing panel id".into()))
}

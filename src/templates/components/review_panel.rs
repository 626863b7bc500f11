// src/templates/components/review_panel.rs

use crate::domain::{parse_list, HotelRecord};
use maud::{html, Markup};
use url::form_urlencoded;

/// Pros and cons shown per panel.
pub const MAX_LIST_ITEMS: usize = 3;

/// `/panels/{action}?id=...` with the id form-encoded.
pub fn panel_url(action: &str, id: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("id", id)
        .finish();
    format!("/panels/{action}?{query}")
}

pub fn panel_items(raw: Option<&str>) -> Vec<String> {
    let mut items = parse_list(raw);
    items.truncate(MAX_LIST_ITEMS);
    items
}

/// Collapsible review summary for one hotel.
///
/// With `oob` set the panel is marked for an htmx out-of-band swap, so a
/// response can carry several panels that replace themselves by id.
pub fn review_panel(hotel: &HotelRecord, shown: bool, oob: bool) -> Markup {
    let id = hotel.key();
    let pros = panel_items(hotel.llm_pros.as_deref());
    let cons = panel_items(hotel.llm_cons.as_deref());

    html! {
        div
            class=(if shown { "review-tooltip show" } else { "review-tooltip" })
            id=(format!("tooltip-{id}"))
            hx-swap-oob=[oob.then_some("outerHTML")]
        {
            div class="tooltip-header" {
                div class="tooltip-title" { i class="fa-solid fa-robot" {} " Summary of Reviews" }
                div class="close-tooltip" hx-post=(panel_url("close", id)) hx-swap="none" {
                    i class="fa-solid fa-xmark" {}
                }
            }
            div class="tooltip-content" {
                div class="tooltip-section" {
                    h5 { i class="fa-regular fa-circle-check pros-title" {} " Pros:" }
                    ul class="tooltip-list pros" {
                        @for p in &pros {
                            li { i class="fa-solid fa-check list-check" {} " " (p) }
                        }
                        @if pros.is_empty() {
                            li class="empty" { "No pros listed" }
                        }
                    }
                }
                div class="tooltip-section" {
                    h5 { i class="fa-regular fa-circle-xmark cons-title" {} " Cons:" }
                    ul class="tooltip-list cons" {
                        @for c in &cons {
                            li { i class="fa-solid fa-xmark list-cross" {} " " (c) }
                        }
                        @if cons.is_empty() {
                            li class="empty" { "No cons listed" }
                        }
                    }
                }
            }
            div class="tooltip-footer" {
                span { "Overall Rating:" }
                span class="rating-val" { (hotel.llm_rating()) "/10" }
            }
        }
    }
}

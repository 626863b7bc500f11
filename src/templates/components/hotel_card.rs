// src/templates/components/hotel_card.rs

use crate::demo::{DemoData, StayPrice};
use crate::domain::{rating_desc, HotelRecord};
use crate::panels::PanelController;
use crate::state::AppState;
use crate::templates::components::review_panel::{panel_url, review_panel};
use crate::templates::format::{format_number, group_thousands};
use maud::{html, Markup};

/// Count header plus the card list. Swapped as one unit after an upload.
pub fn listing_section(state: &mut AppState) -> Markup {
    let AppState {
        hotels,
        panels,
        demo,
    } = state;

    html! {
        section id="listing" {
            div class="listing-header" {
                h1 {
                    "Rome: " span id="property-count" { (group_thousands(hotels.len() as u64)) }
                    " properties found"
                }
            }
            (render_hotels(hotels, panels, demo.as_mut()))
        }
    }
}

/// One card, with its review panel, per hotel, in input order.
/// The list container is rebuilt from scratch on every call.
pub fn render_hotels(
    hotels: &[HotelRecord],
    panels: &PanelController,
    demo: &mut dyn DemoData,
) -> Markup {
    html! {
        div id="hotel-list" {
            @for (index, hotel) in hotels.iter().enumerate() {
                (hotel_card(hotel, panels.is_shown(hotel.key()), demo.stay_price(), demo.image(index)))
            }
        }
    }
}

pub fn hotel_card(
    hotel: &HotelRecord,
    panel_shown: bool,
    price: StayPrice,
    image: Option<String>,
) -> Markup {
    let id = hotel.key();

    html! {
        div class="hotel-card" id=(format!("hotel-{id}")) {
            @if let Some(src) = image {
                div class="hotel-image" data-demo="true" {
                    img src=(src) alt=(hotel.title()) loading="lazy";
                }
            }
            div class="hotel-info" {
                div class="hotel-header" {
                    a href=(hotel.link()) class="hotel-title" target="_blank" { (hotel.title()) }
                    div class="hotel-rating-box" {
                        div class="review-text" {
                            span class="review-score-desc" { (rating_desc(hotel.rating.as_deref())) }
                            span class="review-count" { (format_number(hotel.review_count())) " reviews" }
                        }
                        div class="rating-badge" { (hotel.rating_badge()) }
                    }
                }

                // Static demo copy, not read from the CSV.
                div class="hotel-location" data-demo="true" {
                    a href="#" { "Center, Rome" } " " span { "•" } " " a href="#" { "Show on map" }
                    span { " • Close to attractions" }
                }

                div class="hotel-card-body" {
                    div class="hotel-details" {
                        div class="room-desc" data-demo="true" { "Superior Double Room" }
                        div class="room-features" data-demo="true" {
                            "1 full bed • Free cancellation • No prepayment needed"
                        }
                        p class="hotel-summary" { (hotel.summary_preview()) }

                        div class="ai-badge" hx-post=(panel_url("toggle", id)) hx-swap="none" {
                            i class="fa-solid fa-robot ai-robot-icon" {} " Summary of Reviews"
                        }
                    }

                    div class="hotel-price-section" data-demo="true" {
                        span class="price-days" { "3 nights, 2 adults" }
                        span class="price-value" { "ILS " (group_thousands(price.total.into())) }
                        span class="price-taxes" { "+ILS " (price.taxes) " taxes and charges" }
                        button class="btn-availability" {
                            "See availability " i class="fa-solid fa-chevron-right" {}
                        }
                    }
                }
            }

            (review_panel(hotel, panel_shown, false))
        }
    }
}

// templates/pages/home.rs

use crate::state::AppState;
use crate::templates::{components::upload_form, desktop_layout, listing_section};
use maud::{html, Markup};

pub fn home_page(state: &mut AppState) -> Markup {
    desktop_layout(
        "Hotels in Rome",
        html! {
            main class="container" {
                (upload_form())
                (listing_section(state))
            }
        },
    )
}

use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                header class="site-header" {
                    h3 { "Hotels in Rome" }
                }
                // Any click outside a panel or its trigger hides every panel.
                div
                    hidden
                    hx-post="/panels/close-all"
                    hx-trigger="click[!event.target.closest('.review-tooltip, .ai-badge')] from:body"
                    hx-swap="none"
                {}
                (content)
            }
        }
    }
}

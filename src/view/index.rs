use maud::{Markup, html};

use crate::HTMX_PATH;

pub const PAGE_TITLE: &str = "Denver Golf Tee Times";

#[must_use]
pub fn render_index_template() -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (PAGE_TITLE) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { "⛳ " (PAGE_TITLE) }
            div id="browse" hx-get="/teetimes" hx-trigger="load" hx-swap="innerHTML" {
                p class="loading" { "Loading..." }
            }
        }
    }
}

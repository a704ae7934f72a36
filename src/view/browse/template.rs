use maud::{Markup, html};

use crate::mvu::browse::BrowseModel;
use crate::view::browse::{render_alert_form, render_controls, render_slot_list};

/// The whole browse panel: course/date controls, the alert form when open,
/// and the slot list. Swapped wholesale on every interaction.
#[must_use]
pub fn render_browse_template_pure(model: &BrowseModel) -> Markup {
    html! {
        div id="browse-panel" {
            (render_controls(model))
            (render_alert_form(model))
            (render_slot_list(model))
        }
    }
}

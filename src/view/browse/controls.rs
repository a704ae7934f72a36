use maud::{Markup, html};

use crate::mvu::browse::BrowseModel;
use crate::view::browse::course_selector;

// Every panel request carries the controls and, when open, the alert form's
// fields, so entered values survive course changes and close/reopen.
const PANEL_INCLUDE: &str = "#browse-controls, #alert-form";

#[must_use]
pub fn render_controls(model: &BrowseModel) -> Markup {
    let toggle_target = if model.alert_form_open {
        "/teetimes"
    } else {
        "/teetimes?alert_form=1"
    };
    // Closing must drop the open flag the included form would carry.
    let toggle_params = model.alert_form_open.then_some("not alert_form");
    let toggle_label = if model.alert_form_open {
        "🔔 Hide Alert Form"
    } else {
        "🔔 Set Up Alert"
    };
    html! {
        form id="browse-controls" class="controls" {
            select name="course"
                hx-get="/teetimes" hx-target="#browse-panel" hx-swap="outerHTML"
                hx-include=(PANEL_INCLUDE) {
                @for course in &model.courses {
                    option value=(course_selector(course))
                        selected[model.course.as_ref() == Some(course)] {
                        (course.name)
                    }
                }
            }
            input type="date" name="date" value=(model.date)
                hx-get="/teetimes" hx-target="#browse-panel" hx-swap="outerHTML"
                hx-include=(PANEL_INCLUDE);
            button type="button"
                hx-get="/teetimes" hx-target="#browse-panel" hx-swap="outerHTML"
                hx-include=(PANEL_INCLUDE) {
                "Refresh"
            }
            @if !model.alert_form_open {
                // Parked here while the form is closed; reopening restores them.
                input type="hidden" name="phone" value=(model.alert_phone);
                input type="hidden" name="time_start" value=(model.alert_time_start);
                input type="hidden" name="time_end" value=(model.alert_time_end);
                input type="hidden" name="min_spots" value=(model.alert_min_spots);
            }
        }
        button class="alert-toggle"
            hx-get=(toggle_target) hx-params=[toggle_params]
            hx-target="#browse-panel" hx-swap="outerHTML"
            hx-include=(PANEL_INCLUDE) {
            (toggle_label)
        }
    }
}

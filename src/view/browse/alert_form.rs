use maud::{Markup, html};

use crate::controller::alerts::ALERT_CONFIRMATION;
use crate::model::{ALERT_TIME_OPTIONS, MIN_SPOTS_MAX, MIN_SPOTS_MIN};
use crate::mvu::browse::{ALERT_DISMISS_SECS, BrowseModel};
use crate::view::browse::course_selector;

#[must_use]
pub fn render_alert_form(model: &BrowseModel) -> Markup {
    if !model.alert_form_open {
        return html! {};
    }
    let Some(course) = model.course.as_ref() else {
        return html! {};
    };
    let selector = course_selector(course);
    html! {
        div class="alert-form" id="alert-form" {
            // Keeps the form open across course/date swaps; the close toggle
            // filters this field out. Outside the inner form so it stays out
            // of the POST body.
            input type="hidden" name="alert_form" value="1";
            p {
                "Get a text when tee times at "
                strong { (course.name) }
                " on "
                strong { (model.date) }
                " become available:"
            }
            // Course and date come along from the controls; the form owns
            // only the fields the user types here.
            form class="alert-fields" hx-post="/alerts" hx-target="#browse-panel" hx-swap="outerHTML"
                hx-include="#browse-controls" {
                input type="tel" name="phone" placeholder="Phone number" value=(model.alert_phone);
                select name="time_start" {
                    @for t in ALERT_TIME_OPTIONS {
                        option value=(t.minutes) selected[t.minutes == model.alert_time_start] {
                            (t.label)
                        }
                    }
                }
                span class="to-label" { "to" }
                select name="time_end" {
                    @for t in ALERT_TIME_OPTIONS {
                        option value=(t.minutes) selected[t.minutes == model.alert_time_end] {
                            (t.label)
                        }
                    }
                }
                select name="min_spots" {
                    @for n in MIN_SPOTS_MIN..=MIN_SPOTS_MAX {
                        option value=(n) selected[n == model.alert_min_spots] {
                            (n) "+ spots"
                        }
                    }
                }
                button type="submit" { "Create Alert" }
            }
            @if let Some(status) = &model.alert_status {
                p class="alert-status" { (status) }
                @if status == ALERT_CONFIRMATION {
                    // Arms the auto-dismiss: reload the panel with the form
                    // closed once the acknowledgment has been shown. The
                    // entered fields ride along and stay parked in the
                    // controls.
                    div hx-get=(format!(
                            "/teetimes?course={}&date={}&phone={}&time_start={}&time_end={}&min_spots={}",
                            urlencoding::encode(&selector),
                            model.date,
                            urlencoding::encode(&model.alert_phone),
                            model.alert_time_start,
                            model.alert_time_end,
                            model.alert_min_spots,
                        ))
                        hx-trigger=(format!("load delay:{ALERT_DISMISS_SECS}s"))
                        hx-target="#browse-panel" hx-swap="outerHTML" {}
                }
            }
        }
    }
}

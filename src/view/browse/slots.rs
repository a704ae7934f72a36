use maud::{Markup, html};

use crate::booking::resolve_booking_url;
use crate::mvu::browse::BrowseModel;
use crate::view::browse::course_type_label;

/// Loading, error, empty, and populated states are rendered distinctly.
/// While loading, the previously committed list is withheld rather than
/// shown as if it were current.
#[must_use]
pub fn render_slot_list(model: &BrowseModel) -> Markup {
    let booking_url = model
        .course
        .as_ref()
        .map(|c| resolve_booking_url(c, &model.date));
    html! {
        @if model.loading {
            p class="loading" { "Loading..." }
        } @else if model.error.is_some() {
            p class="fetch-error" { "Could not load tee times" }
        } @else if model.slots.is_empty() {
            p class="no-times" { "No available tee times" }
        } @else {
            div class="tee-times" {
                @for slot in &model.slots {
                    a class="tee-time" href=[booking_url.as_deref()] target="_blank" rel="noopener" {
                        div class="time" { (slot.time_display) }
                        div class="details" {
                            span class="course-type" { (course_type_label(&slot.course_name)) }
                            span class="course-name" { (slot.course_name) }
                            span class="spots" { (slot.spots_available) " spots" }
                            @if let Some(price) = slot.price {
                                span class="price" { "$" (price) }
                            }
                        }
                    }
                }
            }
        }
    }
}

use maud::Markup;

use crate::controller::alerts::ALERT_CONFIRMATION;
use crate::error::AppError;
use crate::model::{Course, CourseCatalog, MIN_SPOTS_MAX, MIN_SPOTS_MIN, TeeTimeSlot};

mod browse_decode;
mod browse_effects;

pub use browse_decode::{AlertForm, decode_alert_request, decode_browse_request};
pub use browse_effects::{Deps, run_effect};

/// Seconds a success acknowledgment stays up before the form dismisses itself.
pub const ALERT_DISMISS_SECS: u64 = 3;

/// Everything the browse screen knows. `slots` always holds the last
/// committed query result; an in-flight query never mutates it. `generation`
/// ties an in-flight query to the selection it was issued for.
#[derive(Debug, Clone)]
pub struct BrowseModel {
    pub courses: Vec<Course>,
    pub course: Option<Course>,
    pub date: String,
    pub slots: Vec<TeeTimeSlot>,
    pub loading: bool,
    pub error: Option<AppError>,
    pub generation: u64,
    pub alert_form_open: bool,
    pub alert_phone: String,
    pub alert_time_start: u16,
    pub alert_time_end: u16,
    pub alert_min_spots: u8,
    pub alert_status: Option<String>,
    pub markup: Option<Markup>,
}

impl BrowseModel {
    #[must_use]
    pub fn new(catalog: &CourseCatalog, course: Option<Course>, date: String) -> Self {
        Self {
            courses: catalog.courses().to_vec(),
            course,
            date,
            slots: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
            alert_form_open: false,
            alert_phone: String::new(),
            alert_time_start: 420,
            alert_time_end: 600,
            alert_min_spots: MIN_SPOTS_MIN,
            alert_status: None,
            markup: None,
        }
    }

    #[must_use]
    pub fn today_local() -> String {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    CatalogLoaded(Vec<Course>),
    CourseSelected(Course),
    DateChanged(String),
    RefreshRequested,
    TeeTimesLoaded {
        generation: u64,
        slots: Vec<TeeTimeSlot>,
    },
    TeeTimesFailed {
        generation: u64,
        error: AppError,
    },
    AlertFormToggled,
    AlertPhoneEntered(String),
    AlertWindowChosen { time_start: u16, time_end: u16 },
    AlertMinSpotsChosen(u8),
    AlertSubmitted,
    AlertAccepted,
    AlertRejected(String),
    AlertStatusExpired,
    Rendered(Markup),
}

#[derive(Debug, Clone)]
pub enum Effect {
    /// Carries the selection it was issued for; the reply only lands if the
    /// generation still matches when it arrives.
    LoadTeeTimes {
        course: Course,
        date: String,
        generation: u64,
    },
    SubmitAlert,
    RenderView,
}

pub fn update(model: &mut BrowseModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => start_query(model),
        Msg::CatalogLoaded(courses) => {
            model.courses = courses;
            if model.course.is_none() {
                let catalog = CourseCatalog::new(model.courses.clone());
                model.course = catalog.default_course().cloned();
            }
            start_query(model)
        }
        Msg::CourseSelected(course) => {
            model.course = Some(course);
            start_query(model)
        }
        Msg::DateChanged(date) => {
            model.date = date;
            start_query(model)
        }
        // Always re-issues, even when course and date are unchanged.
        Msg::RefreshRequested => start_query(model),
        Msg::TeeTimesLoaded { generation, slots } => {
            if generation != model.generation {
                // A newer selection owns the screen; drop the reply.
                return vec![];
            }
            model.slots = slots;
            model.loading = false;
            model.error = None;
            vec![Effect::RenderView]
        }
        Msg::TeeTimesFailed { generation, error } => {
            if generation != model.generation {
                return vec![];
            }
            model.slots.clear();
            model.loading = false;
            model.error = Some(error);
            vec![Effect::RenderView]
        }
        Msg::AlertFormToggled => {
            model.alert_form_open = !model.alert_form_open;
            if model.alert_form_open {
                // Scope comes from the current course and date; previously
                // entered phone and window fields are kept.
                model.alert_status = None;
            }
            vec![Effect::RenderView]
        }
        Msg::AlertPhoneEntered(phone) => {
            model.alert_phone = phone;
            vec![]
        }
        Msg::AlertWindowChosen {
            time_start,
            time_end,
        } => {
            model.alert_time_start = time_start;
            model.alert_time_end = time_end;
            vec![]
        }
        Msg::AlertMinSpotsChosen(min_spots) => {
            model.alert_min_spots = min_spots.clamp(MIN_SPOTS_MIN, MIN_SPOTS_MAX);
            vec![]
        }
        Msg::AlertSubmitted => {
            if model.course.is_none() {
                return vec![Effect::RenderView];
            }
            vec![Effect::SubmitAlert]
        }
        Msg::AlertAccepted => {
            model.alert_status = Some(ALERT_CONFIRMATION.to_string());
            vec![Effect::RenderView]
        }
        Msg::AlertRejected(message) => {
            model.alert_status = Some(message);
            vec![Effect::RenderView]
        }
        Msg::AlertStatusExpired => {
            model.alert_form_open = false;
            model.alert_status = None;
            vec![Effect::RenderView]
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
    }
}

fn start_query(model: &mut BrowseModel) -> Vec<Effect> {
    let Some(course) = model.course.clone() else {
        // Nothing selectable yet; render the empty screen.
        model.loading = false;
        return vec![Effect::RenderView];
    };
    model.generation += 1;
    model.loading = true;
    model.error = None;
    vec![Effect::LoadTeeTimes {
        course,
        date: model.date.clone(),
        generation: model.generation,
    }]
}

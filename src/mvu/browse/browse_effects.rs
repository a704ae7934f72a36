use crate::api::TeeSheetApi;
use crate::controller::alerts::{ALERT_GENERIC_ERROR, build_and_submit};
use crate::error::AppError;
use crate::model::AlertCriteria;
use crate::mvu::browse::{BrowseModel, Effect, Msg};
use crate::view::browse::render_browse_template_pure;

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub api: &'a dyn TeeSheetApi,
}

pub async fn run_effect(effect: Effect, model: &BrowseModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadTeeTimes {
            course,
            date,
            generation,
        } => match deps.api.fetch_tee_times(&course, &date).await {
            Ok(slots) => Msg::TeeTimesLoaded { generation, slots },
            Err(e) => {
                tracing::warn!(course = %course.name, date = %date, error = ?e, "tee time fetch failed");
                Msg::TeeTimesFailed {
                    generation,
                    error: e.into(),
                }
            }
        },
        Effect::SubmitAlert => submit_alert(model, deps).await,
        Effect::RenderView => Msg::Rendered(render_browse_template_pure(model)),
    }
}

async fn submit_alert(model: &BrowseModel, deps: Deps<'_>) -> Msg {
    let Some(course) = model.course.as_ref() else {
        return Msg::AlertRejected(ALERT_GENERIC_ERROR.to_string());
    };
    let criteria = AlertCriteria {
        phone: &model.alert_phone,
        course,
        date: &model.date,
        time_start: model.alert_time_start,
        time_end: model.alert_time_end,
        min_spots: model.alert_min_spots,
    };
    match build_and_submit(deps.api, &criteria).await {
        Ok(_) => Msg::AlertAccepted,
        Err(AppError::Network(msg)) => {
            tracing::warn!(error = %msg, "alert submission failed");
            Msg::AlertRejected(ALERT_GENERIC_ERROR.to_string())
        }
        Err(e) => Msg::AlertRejected(e.to_string()),
    }
}

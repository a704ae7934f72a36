use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use crate::args::Args;
use crate::controller::provider::HttpTeeSheetApi;
use crate::model::CourseCatalog;
use crate::mvu::browse::{AlertForm, BrowseModel, Deps, Msg, decode_alert_request, decode_browse_request};
use crate::mvu::runtime::run_browse;

/// GET `/teetimes`: the browse panel for a course and date.
pub async fn tee_times(
    query: web::Query<HashMap<String, String>>,
    catalog: Data<CourseCatalog>,
    args: Data<Args>,
) -> impl Responder {
    let api = HttpTeeSheetApi::new(args.api_base_url());
    let mut model = decode_browse_request(&query, &catalog);
    run_browse(&mut model, Msg::PageLoad, Deps { api: &api }).await;
    respond_with_markup(model)
}

/// POST `/alerts`: submit the alert form and re-render the panel with the
/// outcome. The panel's slot list is refreshed first so the response shows
/// the current tee sheet alongside the status.
pub async fn create_alert(
    form: web::Form<AlertForm>,
    catalog: Data<CourseCatalog>,
    args: Data<Args>,
) -> impl Responder {
    let api = HttpTeeSheetApi::new(args.api_base_url());
    let mut model = decode_alert_request(&form, &catalog);
    run_browse(&mut model, Msg::PageLoad, Deps { api: &api }).await;
    run_browse(&mut model, Msg::AlertSubmitted, Deps { api: &api }).await;
    respond_with_markup(model)
}

fn respond_with_markup(model: BrowseModel) -> HttpResponse {
    match model.markup {
        Some(markup) => HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string()),
        None => HttpResponse::InternalServerError().json(json!({"error": "nothing rendered"})),
    }
}

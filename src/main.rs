use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};
use tracing::info;

use rusty_teetimes::args;
use rusty_teetimes::controller::http_handlers::{create_alert, tee_times};
use rusty_teetimes::model::CourseCatalog;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = args::args_checks();
    let args_for_web = args.clone();
    let catalog = CourseCatalog::builtin();
    info!(
        base_url = args.api_base_url(),
        courses = catalog.courses().len(),
        "starting tee time browser"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(catalog.clone()))
            .app_data(Data::new(args_for_web.clone()))
            .route("/", web::get().to(index))
            .route("/teetimes", web::get().to(tee_times))
            .route("/alerts", web::post().to(create_alert))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static").show_files_listing())
    })
    .bind("0.0.0.0:8081")?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    let markup = rusty_teetimes::view::index::render_index_template();
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

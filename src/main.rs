use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::info;

use hopion_contact::api::contact_controller::contact;
use hopion_contact::config::{ContactConfig, ServerConfig};
use hopion_contact::services::contact_service::ContactClient;
use hopion_contact::services::transport::ReqwestHttpSend;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file before anything reads the environment
    dotenv().ok();
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let contact_config = ContactConfig::from_env();

    info!(
        "Starting server at {}:{}, forwarding contacts to {}",
        server.host,
        server.port,
        contact_config.endpoint("/emails")
    );

    let client = web::Data::new(ContactClient::new(
        contact_config,
        ReqwestHttpSend::default(),
    ));

    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .wrap(middleware::Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .service(web::scope("/api").route("/contact", web::post().to(contact)))
            // Add a health check endpoint
            .route(
                "/health",
                web::get().to(|| async { HttpResponse::Ok().body("Service is running") }),
            )
    })
    .bind((server.host, server.port))?
    .run()
    .await
}

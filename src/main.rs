use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use book_review_backend::config::AppConfig;
use book_review_backend::database::{connect_to_mongo, ensure_indexes};
use book_review_backend::middleware::error_handler::handle_error;
use book_review_backend::middleware::not_found::not_found;
use book_review_backend::post::post_service::PostService;
use book_review_backend::router::routes;
use book_review_backend::user::service::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {e}");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let mongo_client = connect_to_mongo(&config)
        .await
        .map_err(std::io::Error::other)?;
    let db = mongo_client.database(&config.database_name);
    ensure_indexes(&db).await.map_err(std::io::Error::other)?;

    let post_service = web::Data::new(PostService::new(&db));
    let user_service = web::Data::new(UserService::new(&db, &config));
    let app_config = web::Data::new(config.clone());

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_config.clone())
            .app_data(post_service.clone())
            .app_data(user_service.clone())
            .configure(routes)
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::NOT_FOUND, not_found)
                    .default_handler(handle_error),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}

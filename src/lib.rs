use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::routes::{v1, v2};

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Registers both API versions. Literal segments (`/search`, `/sorted`,
/// `/status`, `/advanced-search`) register ahead of `/{id}` in each scope.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v2")
            .service(v2::search_customers)
            .service(v2::advanced_search)
            .service(v2::customers_by_status)
            .service(v2::list_customers)
            .service(v2::get_customer)
            .service(v2::create_customer)
            .service(v2::update_customer)
            .service(v2::partial_update_customer)
            .service(v2::delete_customer),
    )
    .service(
        web::scope("/api")
            .service(v1::list_customers_sorted)
            .service(v1::search_customers)
            .service(v1::advanced_search)
            .service(v1::customers_by_status)
            .service(v1::list_customers)
            .service(v1::get_customer)
            .service(v1::create_customer)
            .service(v1::update_customer)
            .service(v1::partial_update_customer)
            .service(v1::delete_customer),
    );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .configure(configure_api)
            .app_data(web::Data::new(pool.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

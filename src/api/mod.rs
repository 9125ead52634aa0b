// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::Config;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::standard_options,
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_advanced_password,
        crate::api::handlers::generator::analyze_password
    ),
    components(
        schemas(
            crate::models::WeightedOption,
            crate::models::StrengthLabel,
            crate::generators::StrengthReport,
            crate::api::types::StandardOptionsResponse,
            crate::api::types::WordGenerationRequest,
            crate::api::types::CharacterGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisResponse
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints")
    ),
    info(
        title = "GenPass API",
        version = "0.1.0",
        description = "Memorable word-based and random character password generation",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    log::info!(
        "Starting GenPass API server on {}:{}",
        config.web_address,
        config.web_port
    );

    let bind_address = (config.web_address.clone(), config.web_port);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .configure(routes::configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

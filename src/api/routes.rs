// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator routes
    cfg.service(
        web::scope("/api/password")
            // GET: Built-in word list
            .route("/standard-options", web::get().to(handlers::generator::standard_options))
            // POST: Word-based passwords
            .route("/generate", web::post().to(handlers::generator::generate_password))
            // POST: Character-based passwords
            .route("/generate-advanced", web::post().to(handlers::generator::generate_advanced_password))
            // GET: Strength analysis
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze_password))
    );
}

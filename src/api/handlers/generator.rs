// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use log::{debug, warn};

use crate::api::types::{
    CharacterGenerationRequest, PasswordAnalysisResponse, PasswordGenerationResponse,
    StandardOptionsResponse, WordGenerationRequest,
};
use crate::core::Config;
use crate::generators::{self, PasswordGenerator, StrengthReport};
use crate::models::{CharacterRequest, GeneratedBatch, WordRequest};
use crate::wordlist;

fn validate_amount(amount: usize, config: &Config) -> Result<(), String> {
    if amount == 0 || amount > config.max_batch_size {
        return Err(format!(
            "Amount must be between 1 and {}",
            config.max_batch_size
        ));
    }
    Ok(())
}

fn batch_response(batch: GeneratedBatch) -> HttpResponse {
    let password = batch.to_string();
    let strength = generators::score(&password);
    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        error: None,
    })
}

/// List the built-in word list
#[utoipa::path(
    get,
    path = "/api/password/standard-options",
    tag = "Generator",
    responses(
        (status = 200, description = "Built-in word list", body = StandardOptionsResponse)
    )
)]
pub async fn standard_options() -> impl Responder {
    HttpResponse::Ok().json(StandardOptionsResponse {
        options: wordlist::standard_options().to_vec(),
    })
}

/// Generate word-based passwords
///
/// Draws weighted words without replacement, capitalises word boundaries,
/// optionally applies leet substitution and appends a two digit suffix.
#[utoipa::path(
    post,
    path = "/api/password/generate",
    tag = "Generator",
    request_body = WordGenerationRequest,
    responses(
        (status = 200, description = "Generated passwords", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid request", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<WordGenerationRequest>,
) -> HttpResponse {
    let generation_req = generation_req.into_inner();
    let request = WordRequest {
        num_parts: generation_req.num_options.unwrap_or(config.default_num_parts),
        substitute_chars: generation_req.replace_chars.unwrap_or(true),
        count: generation_req.amount.unwrap_or(1),
        options: generation_req.options,
    };

    if let Err(e) = validate_amount(request.count, &config) {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e));
    }

    if request.num_parts == 0 {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(
            "Number of words must be at least 1",
        ));
    }

    if let Err(e) = wordlist::validate_options(&request.options) {
        warn!("Rejected word generation request: {}", e);
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e.to_string()));
    }

    debug!("Word generation request for {} password(s)", request.count);
    let mut generator = PasswordGenerator::new().with_settings(config.composer);
    batch_response(generator.compose_word_batch(&request))
}

/// Generate character-based passwords
#[utoipa::path(
    post,
    path = "/api/password/generate-advanced",
    tag = "Generator",
    request_body = CharacterGenerationRequest,
    responses(
        (status = 200, description = "Generated passwords", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid request", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_advanced_password(
    config: web::Data<Config>,
    generation_req: web::Json<CharacterGenerationRequest>,
) -> HttpResponse {
    let request = CharacterRequest {
        use_segments: generation_req.use_segments.unwrap_or(true),
        segment_count: generation_req.segment_count.unwrap_or(config.default_segment_count),
        length: generation_req.password_length.unwrap_or(config.default_password_length),
        include_numbers: generation_req.include_numbers.unwrap_or(false),
        include_symbols: generation_req.include_symbols.unwrap_or(false),
        include_uppercase: generation_req.include_uppercase.unwrap_or(false),
        count: generation_req.amount.unwrap_or(1),
    };

    if let Err(e) = validate_amount(request.count, &config) {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e));
    }

    if request.use_segments && request.segment_count == 0 {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(
            "Segment count must be at least 1",
        ));
    }

    debug!("Character generation request for {} password(s)", request.count);
    let mut generator = PasswordGenerator::new().with_settings(config.composer);
    batch_response(generator.compose_character_batch(&request))
}

/// Analyze password strength
///
/// Rates the first line of the given text against six criteria.
#[utoipa::path(
    get,
    path = "/api/password/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(path: web::Path<String>) -> impl Responder {
    // The extractor has already percent-decoded the segment
    let password = path.into_inner();
    let report = StrengthReport::evaluate(generators::strength::first_entry(&password));

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: report.label(),
        criteria: report,
        feedback: report.feedback(),
    })
}

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::{self, Next};
use actix_web::{get, post, web, App, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::{Duration, Instant};

use crate::predictor::Predictor;

/// Requests slower than this only produce a warning log entry; the response
/// itself is never cut short.
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Read-only per-process context handed to every request handler.
pub struct AppState {
    pub predictor: Predictor,
}

#[derive(Debug, Deserialize)]
struct PredictRequest {
    #[serde(default)]
    symptoms: Vec<String>,
}

#[derive(Debug, Serialize)]
struct PredictResponse {
    predicted_disease: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Pulls the symptom list out of a request body.
///
/// A missing, malformed, or key-less body degrades to an empty list, which
/// the encoder then rejects with the proper client error instead of actix's
/// generic deserialization failure.
fn parse_symptoms(body: &[u8]) -> Vec<String> {
    serde_json::from_slice::<PredictRequest>(body)
        .map(|req| req.symptoms)
        .unwrap_or_default()
}

#[post("/predict")]
pub async fn predict(body: web::Bytes, state: web::Data<AppState>) -> HttpResponse {
    let symptoms = parse_symptoms(&body);
    match state.predictor.predict(&symptoms) {
        Ok(label) => {
            log::info!("Prediction successful: {}", label);
            HttpResponse::Ok().json(PredictResponse {
                predicted_disease: label,
            })
        }
        Err(e) if e.is_client_error() => {
            log::error!("{}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            })
        }
        Err(e) => {
            log::error!("Error during prediction: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

#[get("/health")]
pub async fn health(_: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

#[get("/info")]
pub async fn model_info(state: web::Data<AppState>) -> HttpResponse {
    let info = state.predictor.info();
    HttpResponse::Ok().json(json!({
        "model_path": info.model_path,
        "labels_path": info.labels_path,
        "num_features": info.num_features,
        "num_labels": info.num_labels,
    }))
}

/// Logs the duration of every request; slow ones get an extra warning.
pub async fn log_request_timing(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let path = req.path().to_owned();
    let start = Instant::now();
    let res = next.call(req).await;
    let duration = start.elapsed();
    log::info!("Request to {} took {:.2?}", path, duration);
    if duration > SLOW_REQUEST_THRESHOLD {
        log::warn!("Request to {} took too long: {:.2?}", path, duration);
    }
    res
}

pub async fn startup(config: ServerConfig, state: AppState) -> std::io::Result<()> {
    let app_state = web::Data::new(state);

    log::info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::from_fn(log_request_timing))
            .app_data(app_state.clone())
            .service(predict)
            .service(health)
            .service(model_info)
    })
    .bind((config.host, config.port))?
    .run()
    .await
}

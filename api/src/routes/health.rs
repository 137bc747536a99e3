use actix_web::HttpResponse;
use chrono::Utc;
use serde_json::json;

/// Handler for GET /api/v1/health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
    }))
}

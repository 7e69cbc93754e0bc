use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};

use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyAccessRequest {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyAccessResponse {
    pub valid: bool,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// The admin screen posts the typed key once, before unlocking the editor.
/// Subsequent admin calls carry it in the `x-admin-key` header instead.
#[post("/api/admin/access")]
pub async fn verify_access_handler(
    req: web::Json<VerifyAccessRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    if data.admin_access_key.verify(&req.key) {
        ApiResponse::success(VerifyAccessResponse { valid: true })
    } else {
        ApiResponse::unauthorized("INVALID_ADMIN_KEY", "Invalid admin access key")
    }
}

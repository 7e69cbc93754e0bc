use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};

use crate::shared::api::ApiResponse;
use crate::AppState;

/// Proof that the request carried a valid `x-admin-key` header. Admin
/// handlers take this as an argument; extraction failure short-circuits
/// with a 401 before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminKey;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminKey {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.app_data::<actix_web::web::Data<AppState>>() {
            Some(state) => state,
            None => {
                return ready(Err(create_api_error(ApiResponse::internal_error())));
            }
        };

        let candidate = match extract_key_from_header(req) {
            Some(k) => k,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_ADMIN_KEY",
                    "Missing x-admin-key header",
                ))));
            }
        };

        if state.admin_access_key.verify(&candidate) {
            ready(Ok(AdminKey))
        } else {
            ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_ADMIN_KEY",
                "Invalid admin access key",
            ))))
        }
    }
}

fn extract_key_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("x-admin-key")?
        .to_str()
        .ok()
        .map(|s| s.to_string())
}

pub mod bag_cards;
pub mod bags;
pub mod health;

use actix_web::{HttpRequest, HttpResponse, web};

use crate::AppState;

/// Shared-secret owner check for mutating routes: the raw Authorization
/// header must equal the configured token exactly.
pub(crate) fn require_owner(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<(), HttpResponse> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    match header {
        Some(token) if token == state.config.auth_token => Ok(()),
        Some(_) => Err(HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid authorization token"
        }))),
        None => Err(HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "No authorization token provided"
        }))),
    }
}

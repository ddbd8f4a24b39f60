//! Bag-card endpoints: full CRUD plus a relationship route that grafts a card
//! onto an existing bag.

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};

use super::require_owner;
use crate::AppState;
use crate::db::tables::bag_cards::{BagCard, CreateBagCardRequest, UpdateBagCardRequest};
use crate::db::tables::bags::Bag;

/// Card show response with its bag embedded (null when the bag-id dangles).
#[derive(Serialize)]
struct BagCardWithBag {
    #[serde(flatten)]
    card: BagCard,
    bag: Option<Bag>,
}

/// Request to point a card at a bag
#[derive(Deserialize)]
struct SetBagRequest {
    id: String,
}

/// List all bag cards
async fn list_bag_cards(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.db.list_bag_cards())
}

/// Get a single bag card with its bag included
async fn get_bag_card(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let card_id = path.into_inner();

    match data.db.get_bag_card(&card_id) {
        Some(card) => {
            let bag = data.db.bag_of(&card);
            HttpResponse::Ok().json(BagCardWithBag { card, bag })
        }
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Bag card not found"
        })),
    }
}

/// Create a new bag card
async fn create_bag_card(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateBagCardRequest>,
) -> impl Responder {
    if let Err(resp) = require_owner(&data, &req) {
        return resp;
    }

    let card = BagCard::new(body.into_inner());
    match data.db.save_bag_card(card) {
        Ok(card) => HttpResponse::Created().json(card),
        Err(e) => {
            log::error!("Failed to persist bag card: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Storage error: {}", e)
            }))
        }
    }
}

/// Update a bag card's mutable fields
async fn update_bag_card(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateBagCardRequest>,
) -> impl Responder {
    if let Err(resp) = require_owner(&data, &req) {
        return resp;
    }

    let card_id = path.into_inner();
    let mut card = match data.db.get_bag_card(&card_id) {
        Some(card) => card,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Bag card not found"
            }));
        }
    };

    card.apply(body.into_inner());
    match data.db.save_bag_card(card) {
        Ok(card) => HttpResponse::Ok().json(card),
        Err(e) => {
            log::error!("Failed to persist bag card: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Storage error: {}", e)
            }))
        }
    }
}

/// Delete a bag card
async fn delete_bag_card(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = require_owner(&data, &req) {
        return resp;
    }

    let card_id = path.into_inner();
    let card = match data.db.get_bag_card(&card_id) {
        Some(card) => card,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Bag card not found"
            }));
        }
    };

    match data.db.delete_bag_card(&card) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": "Bag card deleted"
        })),
        Err(e) => {
            log::error!("Failed to delete bag card: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Storage error: {}", e)
            }))
        }
    }
}

/// Point a bag card at an existing bag
async fn set_bag(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<SetBagRequest>,
) -> impl Responder {
    if let Err(resp) = require_owner(&data, &req) {
        return resp;
    }

    let card_id = path.into_inner();
    let mut card = match data.db.get_bag_card(&card_id) {
        Some(card) => card,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Bag card not found"
            }));
        }
    };

    // Unlike create/update, the target bag must exist here.
    let bag = match data.db.get_bag(&body.id) {
        Some(bag) => bag,
        None => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Bag not found"
            }));
        }
    };

    card.bag_id = Some(bag.id);
    match data.db.save_bag_card(card) {
        Ok(card) => HttpResponse::Ok().json(card),
        Err(e) => {
            log::error!("Failed to persist bag card: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Storage error: {}", e)
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/bag-cards")
            .route(web::get().to(list_bag_cards))
            .route(web::post().to(create_bag_card)),
    );
    cfg.service(
        web::resource("/api/bag-cards/{id}")
            .route(web::get().to(get_bag_card))
            .route(web::put().to(update_bag_card))
            .route(web::delete().to(delete_bag_card)),
    );
    cfg.service(web::resource("/api/bag-cards/{id}/bag").route(web::put().to(set_bag)));
}

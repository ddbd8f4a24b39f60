//! Bag endpoints. Bags can be listed, shown, and created; there is no update
//! or delete route, matching the record's lifecycle.

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use serde::Serialize;

use super::require_owner;
use crate::AppState;
use crate::db::tables::bag_cards::BagCard;
use crate::db::tables::bags::{Bag, CreateBagRequest};

/// Bag show response with its cards embedded.
#[derive(Serialize)]
struct BagWithCards {
    #[serde(flatten)]
    bag: Bag,
    cards: Vec<BagCard>,
}

/// List all bags
async fn list_bags(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.db.list_bags())
}

/// Get a single bag with its cards included
async fn get_bag(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let bag_id = path.into_inner();

    match data.db.get_bag(&bag_id) {
        Some(bag) => {
            let cards = data.db.cards_in_bag(&bag.id);
            HttpResponse::Ok().json(BagWithCards { bag, cards })
        }
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Bag not found"
        })),
    }
}

/// Create a new bag
async fn create_bag(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateBagRequest>,
) -> impl Responder {
    if let Err(resp) = require_owner(&data, &req) {
        return resp;
    }

    let bag = Bag::new(body.into_inner());
    match data.db.save_bag(bag) {
        Ok(bag) => HttpResponse::Created().json(bag),
        Err(e) => {
            log::error!("Failed to persist bag: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Storage error: {}", e)
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/bags")
            .route(web::get().to(list_bags))
            .route(web::post().to(create_bag)),
    );
    cfg.service(web::resource("/api/bags/{id}").route(web::get().to(get_bag)));
}

//! Bag records (bags.jsonl)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::super::jsonl::{Database, Record, RecordType};
use super::bag_cards::BagCard;

/// A bag of cards. Bags are created and read, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bag {
    pub id: String,
    pub category: Option<String>,
    pub name: Option<String>,
}

/// Attributes for a new bag. Doubles as the parse target for stored lines,
/// so a record loaded from disk keeps its id.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBagRequest {
    pub id: Option<String>,
    pub category: Option<String>,
    pub name: Option<String>,
}

impl Bag {
    pub fn new(attrs: CreateBagRequest) -> Self {
        Self {
            id: attrs.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            category: attrs.category,
            name: attrs.name,
        }
    }
}

impl Record for Bag {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Database {
    /// All bags in insertion order.
    pub fn list_bags(&self) -> Vec<Bag> {
        self.bags.lock().clone()
    }

    /// Find a bag by exact id.
    pub fn get_bag(&self, id: &str) -> Option<Bag> {
        self.bags.lock().iter().find(|b| b.id == id).cloned()
    }

    /// Insert or replace a bag and rewrite bags.jsonl.
    pub fn save_bag(&self, bag: Bag) -> std::io::Result<Bag> {
        self.save_record(&self.bags, RecordType::Bag, bag)
    }

    /// Every card whose bag-id matches, in store order. Recomputed on each
    /// call so mutations are immediately visible.
    pub fn cards_in_bag(&self, bag_id: &str) -> Vec<BagCard> {
        self.bag_cards
            .lock()
            .iter()
            .filter(|c| c.bag_id.as_deref() == Some(bag_id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tables::bag_cards::CreateBagCardRequest;

    #[test]
    fn new_bag_generates_id_when_absent() {
        let bag = Bag::new(CreateBagRequest {
            category: Some("starter".to_string()),
            name: Some("Kanto".to_string()),
            ..Default::default()
        });
        assert!(!bag.id.is_empty());

        let explicit = Bag::new(CreateBagRequest {
            id: Some("b1".to_string()),
            ..Default::default()
        });
        assert_eq!(explicit.id, "b1");
    }

    #[test]
    fn bag_round_trips_through_a_line() {
        let bag = Bag {
            id: "b1".to_string(),
            category: None,
            name: Some("Kanto".to_string()),
        };

        let line = serde_json::to_string(&bag).unwrap();
        assert_eq!(line, r#"{"id":"b1","category":null,"name":"Kanto"}"#);

        let parsed: Bag = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, bag);
    }

    #[test]
    fn cards_in_bag_filters_by_bag_id_and_sees_new_cards() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(dir.path()).unwrap();

        let bag = db
            .save_bag(Bag::new(CreateBagRequest {
                id: Some("b1".to_string()),
                ..Default::default()
            }))
            .unwrap();

        let card = |id: &str, bag_id: Option<&str>| {
            crate::db::tables::bag_cards::BagCard::new(CreateBagCardRequest {
                id: Some(id.to_string()),
                bag_id: bag_id.map(str::to_string),
                ..Default::default()
            })
        };

        db.save_bag_card(card("c1", Some("b1"))).unwrap();
        db.save_bag_card(card("c2", Some("other"))).unwrap();
        db.save_bag_card(card("c3", None)).unwrap();

        let ids: Vec<String> = db.cards_in_bag(&bag.id).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["c1"]);

        // A card saved after the bag was fetched shows up on the next call.
        db.save_bag_card(card("c4", Some("b1"))).unwrap();
        let ids: Vec<String> = db.cards_in_bag(&bag.id).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["c1", "c4"]);
    }
}

//! Bag-card records (bag-cards.jsonl)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::super::jsonl::{Database, Record, RecordType};
use super::bags::Bag;

/// A card held in a bag. `dbid` and `modifiers` are opaque payloads carried
/// through unchanged; `bag_id` may reference a bag that no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BagCard {
    pub id: String,
    #[serde(rename = "bag-id")]
    pub bag_id: Option<String>,
    pub dbid: Value,
    pub modifiers: Value,
}

/// Attributes for a new bag card. Doubles as the parse target for stored
/// lines, so a record loaded from disk keeps its id.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBagCardRequest {
    pub id: Option<String>,
    #[serde(rename = "bag-id")]
    pub bag_id: Option<String>,
    pub dbid: Option<Value>,
    pub modifiers: Option<Value>,
}

/// Partial update of a bag card; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBagCardRequest {
    #[serde(rename = "bag-id")]
    pub bag_id: Option<String>,
    pub dbid: Option<Value>,
    pub modifiers: Option<Value>,
}

impl BagCard {
    pub fn new(attrs: CreateBagCardRequest) -> Self {
        Self {
            id: attrs.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            bag_id: attrs.bag_id,
            dbid: attrs.dbid.unwrap_or(Value::Null),
            modifiers: attrs.modifiers.unwrap_or(Value::Null),
        }
    }

    /// Apply the fields present in an update request.
    pub fn apply(&mut self, attrs: UpdateBagCardRequest) {
        if let Some(bag_id) = attrs.bag_id {
            self.bag_id = Some(bag_id);
        }
        if let Some(dbid) = attrs.dbid {
            self.dbid = dbid;
        }
        if let Some(modifiers) = attrs.modifiers {
            self.modifiers = modifiers;
        }
    }
}

impl Record for BagCard {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Database {
    /// All bag cards in insertion order.
    pub fn list_bag_cards(&self) -> Vec<BagCard> {
        self.bag_cards.lock().clone()
    }

    /// Find a bag card by exact id.
    pub fn get_bag_card(&self, id: &str) -> Option<BagCard> {
        self.bag_cards.lock().iter().find(|c| c.id == id).cloned()
    }

    /// Insert or replace a bag card and rewrite bag-cards.jsonl.
    pub fn save_bag_card(&self, card: BagCard) -> std::io::Result<BagCard> {
        self.save_record(&self.bag_cards, RecordType::BagCard, card)
    }

    /// Remove a bag card and rewrite bag-cards.jsonl.
    pub fn delete_bag_card(&self, card: &BagCard) -> std::io::Result<()> {
        self.delete_record(&self.bag_cards, RecordType::BagCard, card)
    }

    /// The bag this card points at, or None for a dangling or unset bag-id.
    pub fn bag_of(&self, card: &BagCard) -> Option<Bag> {
        let bag_id = card.bag_id.as_deref()?;
        self.bags.lock().iter().find(|b| b.id == bag_id).cloned()
    }
}

pub mod bag_cards;
pub mod bags;

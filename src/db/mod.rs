pub mod jsonl;
pub mod tables;

pub use jsonl::Database;

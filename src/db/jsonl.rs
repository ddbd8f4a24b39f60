//! Newline-delimited JSON record store.
//!
//! Both collections are loaded fully into memory at startup and stay
//! authoritative for the lifetime of the process. Every mutation rewrites the
//! backing file in full before it returns, so on-disk line order always equals
//! in-memory insertion order. The new sequence is swapped in only after the
//! file write succeeds; a failed write leaves memory and disk at the
//! pre-mutation state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::tables::bag_cards::BagCard;
use super::tables::bags::Bag;

/// Names the backing file for each record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Bag,
    BagCard,
}

impl RecordType {
    pub fn file_name(self) -> &'static str {
        match self {
            RecordType::Bag => "bags.jsonl",
            RecordType::BagCard => "bag-cards.jsonl",
        }
    }
}

/// A record that can live in a jsonl-backed collection.
pub trait Record: Clone + Serialize {
    fn id(&self) -> &str;
}

pub struct Database {
    dir: PathBuf,
    pub(super) bags: Mutex<Vec<Bag>>,
    pub(super) bag_cards: Mutex<Vec<BagCard>>,
}

impl Database {
    /// Load both collections from `dir`, creating it if needed. A missing
    /// file is an empty collection; an unreadable file or a line that fails
    /// to parse is fatal.
    pub fn open<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let bags = load_records(&dir.join(RecordType::Bag.file_name()), Bag::new)?;
        let bag_cards = load_records(&dir.join(RecordType::BagCard.file_name()), BagCard::new)?;

        Ok(Self {
            dir,
            bags: Mutex::new(bags),
            bag_cards: Mutex::new(bag_cards),
        })
    }

    pub(super) fn record_path(&self, record_type: RecordType) -> PathBuf {
        self.dir.join(record_type.file_name())
    }

    /// Replace the record with a matching id in place, or append it, then
    /// rewrite the backing file.
    pub(super) fn save_record<T: Record>(
        &self,
        records: &Mutex<Vec<T>>,
        record_type: RecordType,
        record: T,
    ) -> io::Result<T> {
        let mut items = records.lock();
        let mut next = items.clone();

        match next.iter().position(|e| e.id() == record.id()) {
            Some(position) => next[position] = record.clone(),
            None => next.push(record.clone()),
        }

        persist(&self.record_path(record_type), &next)?;
        *items = next;
        Ok(record)
    }

    /// Remove every record with a matching id, then rewrite the backing file.
    pub(super) fn delete_record<T: Record>(
        &self,
        records: &Mutex<Vec<T>>,
        record_type: RecordType,
        record: &T,
    ) -> io::Result<()> {
        let mut items = records.lock();
        let next: Vec<T> = items
            .iter()
            .filter(|e| e.id() != record.id())
            .cloned()
            .collect();

        persist(&self.record_path(record_type), &next)?;
        *items = next;
        Ok(())
    }
}

/// Parse one record per line, routing each line through the type's
/// constructor so an on-disk id is kept verbatim.
fn load_records<A, T>(path: &Path, build: fn(A) -> T) -> io::Result<Vec<T>>
where
    A: DeserializeOwned,
{
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Ok(build(serde_json::from_str::<A>(line)?)))
        .collect()
}

/// Serialize the whole collection, one JSON object per line, and overwrite
/// the file in a single write.
fn persist<T: Serialize>(path: &Path, items: &[T]) -> io::Result<()> {
    let mut out = String::new();
    for item in items {
        out.push_str(&serde_json::to_string(item)?);
        out.push('\n');
    }
    fs::write(path, out)
}

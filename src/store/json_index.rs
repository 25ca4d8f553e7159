// src/store/json_index.rs
//! A JSON object on disk mapping file IDs to small records
//!
//! Every mutation is a read-modify-write followed by an atomic replace.
//! There is no cross-process locking.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::util::write_atomic;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct JsonIndex<T> {
    path: PathBuf,
    _record: PhantomData<T>,
}

impl<T> JsonIndex<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the index, creating it as `{}` if it does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let index = Self {
            path: path.as_ref().to_path_buf(),
            _record: PhantomData,
        };
        if !index.path.exists() {
            index.save(&BTreeMap::new())?;
        }
        Ok(index)
    }

    pub fn load(&self) -> Result<BTreeMap<String, T>> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, records: &BTreeMap<String, T>) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(&self.path, json.as_bytes())
    }

    pub fn get(&self, file_id: &str) -> Result<Option<T>> {
        Ok(self.load()?.remove(file_id))
    }

    pub fn insert(&self, file_id: &str, record: T) -> Result<()> {
        let mut records = self.load()?;
        records.insert(file_id.to_owned(), record);
        self.save(&records)
    }

    /// Returns the removed record, if any
    pub fn remove(&self, file_id: &str) -> Result<Option<T>> {
        let mut records = self.load()?;
        let removed = records.remove(file_id);
        if removed.is_some() {
            self.save(&records)?;
        }
        Ok(removed)
    }
}

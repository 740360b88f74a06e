//! Fixed, in-memory breed table.
//!
//! Useful offline and as a stand-in for the remote API. The JSON file
//! format is the `message` object of dog.ceo's `/api/breeds/list/all`:
//!
//! ```json
//! { "hound": ["afghan", "basset"], "pug": [] }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use super::traits::BreedProvider;
use crate::{BreedFetchError, Result};

/// Provider backed by a fixed breed → sub-breeds table.
///
/// Breed names are matched case-insensitively. Counts every lookup it
/// serves, hit or miss.
#[derive(Debug, Default)]
pub struct StaticBreedProvider {
    breeds: HashMap<String, Vec<String>>,
    lookups: AtomicU64,
}

impl StaticBreedProvider {
    /// Build from `(breed, sub_breeds)` pairs. Later duplicates win.
    pub fn new<I, B, S>(breeds: I) -> Self
    where
        I: IntoIterator<Item = (B, Vec<S>)>,
        B: Into<String>,
        S: Into<String>,
    {
        let breeds = breeds
            .into_iter()
            .map(|(breed, subs)| {
                let breed: String = breed.into();
                let subs: Vec<String> = subs.into_iter().map(Into::into).collect();
                (breed.to_lowercase(), subs)
            })
            .collect();
        Self {
            breeds,
            lookups: AtomicU64::new(0),
        }
    }

    /// Parse a JSON object mapping breed → array of sub-breed names.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let breeds: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::new(breeds))
    }

    /// Load a JSON breed table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Number of lookups served so far.
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Number of breeds in the table.
    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

#[async_trait]
impl BreedProvider for StaticBreedProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.breeds
            .get(&breed.to_lowercase())
            .cloned()
            .ok_or_else(|| BreedFetchError::BreedNotFound(breed.to_string()))
    }
}

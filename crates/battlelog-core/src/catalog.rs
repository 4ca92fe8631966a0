//! Rune and charm catalogs.
//!
//! A [`Catalog`] is a read-only `ItemId → definition` map built from the list
//! the item service delivers. Lookups return `Option<&T>`: an id with no
//! definition is the ordinary "no equipment" case, not an error.
//!
//! # Example
//!
//! ```
//! use battlelog_core::catalog::{Rune, RuneCatalog};
//! use battlelog_core::model::ItemId;
//!
//! let runes = RuneCatalog::from_entries(vec![Rune::new("rune_01", "Spark")]);
//! assert_eq!(runes.get(&ItemId::new("rune_01")).map(|r| r.name.as_str()), Some("Spark"));
//! assert!(runes.get(&ItemId::new("rune_99")).is_none());
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::error::{BattlelogError, Result};
use crate::model::ItemId;

/// A definition that can be stored in a [`Catalog`].
pub trait CatalogEntry {
    /// Label used in logs and decode errors.
    const KIND: &'static str;

    /// The key this definition is looked up by.
    fn item_id(&self) -> &ItemId;
}

/// Definition of a rune.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rune {
    /// Item identifier.
    pub item_id: ItemId,
    /// Display name.
    pub name: String,
    /// Class affinity, if any.
    #[serde(default)]
    pub class: Option<String>,
    /// Rarity tier.
    #[serde(default)]
    pub rarity: Option<String>,
    /// Effect description.
    #[serde(default)]
    pub description: String,
}

impl Rune {
    /// Creates a rune with only an id and a name.
    #[must_use]
    pub fn new(item_id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            class: None,
            rarity: None,
            description: String::new(),
        }
    }
}

impl CatalogEntry for Rune {
    const KIND: &'static str = "rune";

    fn item_id(&self) -> &ItemId {
        &self.item_id
    }
}

/// Definition of a charm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charm {
    /// Item identifier.
    pub item_id: ItemId,
    /// Display name.
    pub name: String,
    /// Class affinity, if any.
    #[serde(default)]
    pub class: Option<String>,
    /// Potential points the charm costs.
    #[serde(default)]
    pub potential_points: u32,
    /// Effect description.
    #[serde(default)]
    pub description: String,
}

impl Charm {
    /// Creates a charm with only an id and a name.
    #[must_use]
    pub fn new(item_id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            class: None,
            potential_points: 0,
            description: String::new(),
        }
    }
}

impl CatalogEntry for Charm {
    const KIND: &'static str = "charm";

    fn item_id(&self) -> &ItemId {
        &self.item_id
    }
}

/// Read-only lookup table of item definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<T> {
    entries: BTreeMap<ItemId, T>,
}

/// Catalog of rune definitions.
pub type RuneCatalog = Catalog<Rune>;

/// Catalog of charm definitions.
pub type CharmCatalog = Catalog<Charm>;

impl<T: CatalogEntry> Catalog<T> {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a catalog from a list of definitions.
    ///
    /// Duplicate ids are logged; the later definition wins.
    #[must_use]
    pub fn from_entries(items: impl IntoIterator<Item = T>) -> Self {
        let mut entries = BTreeMap::new();
        for item in items {
            let id = item.item_id().clone();
            if entries.insert(id.clone(), item).is_some() {
                warn!(kind = T::KIND, item_id = %id, "duplicate catalog entry, keeping the last");
            }
        }
        Self { entries }
    }

    /// Looks up a definition by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&T> {
        self.entries.get(id)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }
}

impl<T: CatalogEntry + DeserializeOwned> Catalog<T> {
    /// Decodes a JSON array of definitions.
    ///
    /// # Errors
    ///
    /// Returns [`BattlelogError::Decode`] if the document is not an array of
    /// well-formed definitions.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<T> =
            serde_json::from_str(json).map_err(|e| BattlelogError::decode(T::KIND, e))?;
        Ok(Self::from_entries(items))
    }
}

impl<T: CatalogEntry> Default for Catalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntry> FromIterator<T> for Catalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

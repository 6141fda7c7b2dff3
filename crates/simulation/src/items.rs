//! Item identities and the catalog of known items.
//!
//! Items are data, not types: the catalog is loaded from a JSON document so
//! new resources can be added without touching code. The inventory refuses
//! any item id that is not present in its catalog.

use std::collections::HashMap;
use std::fmt;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Unique, stable identifier of an item (e.g. `"iron_ore"`).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Encode, Decode,
)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct ItemDef {
    pub id: ItemId,
    pub display_name: String,
    /// Asset path of the item icon, if the item has one.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Built-in item definitions used by the demo world.
pub const DEFAULT_CATALOG_JSON: &str = r#"[
    { "id": "iron_ore", "display_name": "Iron Ore", "icon": "icons/iron_ore.png" },
    { "id": "copper_ore", "display_name": "Copper Ore", "icon": "icons/copper_ore.png" },
    { "id": "coal", "display_name": "Coal", "icon": "icons/coal.png" },
    { "id": "stone", "display_name": "Stone" }
]"#;

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    DuplicateId(ItemId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "invalid item catalog: {e}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate item id '{id}' in catalog"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            CatalogError::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Registry of all known items, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct ItemCatalog {
    items: HashMap<ItemId, ItemDef>,
}

impl ItemCatalog {
    /// Parse a JSON array of item definitions. Ids must be unique.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<ItemDef> = serde_json::from_str(json)?;
        let mut catalog = Self::default();
        for def in defs {
            if catalog.contains(&def.id) {
                return Err(CatalogError::DuplicateId(def.id));
            }
            catalog.insert(def);
        }
        Ok(catalog)
    }

    /// The built-in catalog. Falls back to an empty catalog (with a warning)
    /// if the embedded document ever fails to parse.
    pub fn builtin() -> Self {
        match Self::from_json(DEFAULT_CATALOG_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                bevy::log::warn!("ItemCatalog: {}", e);
                Self::default()
            }
        }
    }

    /// Insert or replace a definition.
    pub fn insert(&mut self, def: ItemDef) {
        self.items.insert(def.id.clone(), def);
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemDef> {
        self.items.get(id)
    }

    /// Display name for an item, or the raw id when the item is unknown.
    pub fn display_name<'a>(&'a self, id: &'a ItemId) -> &'a str {
        self.items
            .get(id)
            .map(|d| d.display_name.as_str())
            .unwrap_or(id.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

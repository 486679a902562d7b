use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single catalog record (skin, sticker, collection or crate).
///
/// Records are produced by the external data generator and passed through
/// untouched: the wrapped JSON object is serialized back exactly as it was
/// read, key order included. Only the handful of fields the service filters
/// and searches on are ever inspected.
///
/// # Consumed fields
/// - `name` (every kind)
/// - `description` (skins)
/// - `weapon.type`, `rarity.id` (skins)
/// - `collections[].id`, `crates[].id` (skins)
///
/// A field that is absent or not a string never matches anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogItem(Value);

impl CatalogItem {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0.get("description").and_then(Value::as_str)
    }

    pub fn weapon_type(&self) -> Option<&str> {
        self.0.pointer("/weapon/type").and_then(Value::as_str)
    }

    pub fn rarity_id(&self) -> Option<&str> {
        self.0.pointer("/rarity/id").and_then(Value::as_str)
    }

    pub fn collection_ids(&self) -> impl Iterator<Item = &str> {
        self.reference_ids("collections")
    }

    pub fn crate_ids(&self) -> impl Iterator<Item = &str> {
        self.reference_ids("crates")
    }

    fn reference_ids(&self, field: &str) -> impl Iterator<Item = &str> {
        self.0
            .get(field)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|entry| entry.get("id").and_then(Value::as_str))
    }
}

/// Pre-generated document kinds, one file per kind and language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The whole catalog in one object, served verbatim.
    All,
    Skins,
    SkinsNotGrouped,
    Stickers,
    Collections,
    Crates,
}

impl EntityKind {
    /// Kinds whose documents are arrays of [`CatalogItem`].
    pub const LISTS: [EntityKind; 5] = [
        EntityKind::Skins,
        EntityKind::SkinsNotGrouped,
        EntityKind::Stickers,
        EntityKind::Collections,
        EntityKind::Crates,
    ];

    /// Grouping of skins happens upstream; this only picks which output to read.
    pub fn skins(grouped: bool) -> Self {
        if grouped {
            Self::Skins
        } else {
            Self::SkinsNotGrouped
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Self::All => "all.json",
            Self::Skins => "skins.json",
            Self::SkinsNotGrouped => "skins_not_grouped.json",
            Self::Stickers => "stickers.json",
            Self::Collections => "collections.json",
            Self::Crates => "crates.json",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

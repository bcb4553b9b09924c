//! Items and the ordered item registry.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Identifier of an indicator or scenario-building action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// An indicator or action, immutable once referenced by submitted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
}

impl Item {
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id: ItemId(id),
            label: label.into(),
        }
    }
}

/// Ordered item universe. Registry order defines vector coordinates and
/// breaks ties in scenario rankings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct ItemRegistry {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl ItemRegistry {
    /// Build a registry, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id, position).is_some() {
                return Err(ValidationError::DuplicateRegistryItem { item_id: item.id });
            }
        }
        Ok(Self { items, index })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Zero-based coordinate of `id`, if registered.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.position(id).map(|p| &self.items[p])
    }

    pub fn label(&self, id: ItemId) -> Option<&str> {
        self.get(id).map(|item| item.label.as_str())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl TryFrom<Vec<Item>> for ItemRegistry {
    type Error = ValidationError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<ItemRegistry> for Vec<Item> {
    fn from(registry: ItemRegistry) -> Self {
        registry.items
    }
}

use std::fmt;

use bevy::prelude::*;
use bitcode::{Decode, Encode};

use crate::items::{ItemCatalog, ItemId};
use crate::mining::InventorySink;

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ItemStack {
    pub item: ItemId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// Adds must carry at least one item.
    NonPositiveQuantity(ItemId),
    /// The item id is not in the inventory's catalog.
    UnknownItem(ItemId),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::NonPositiveQuantity(item) => {
                write!(f, "quantity for '{item}' must be positive")
            }
            InventoryError::UnknownItem(item) => write!(f, "unknown item '{item}'"),
        }
    }
}

impl std::error::Error for InventoryError {}

/// Notification sent after every successful add.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct InventoryChanged {
    pub item: ItemId,
    pub added: u32,
    pub total: u32,
    /// True when the add created the stack.
    pub new_stack: bool,
}

/// Item stacks in the order they were first acquired.
///
/// Owns the catalog it validates against so there is a single source of
/// truth for "known item" at the inventory boundary.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Inventory {
    catalog: ItemCatalog,
    stacks: Vec<ItemStack>,
    pending: Vec<InventoryChanged>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(ItemCatalog::builtin())
    }
}

impl Inventory {
    pub fn new(catalog: ItemCatalog) -> Self {
        Self {
            catalog,
            stacks: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Merge `quantity` into the stack for `item`, creating it if needed.
    /// Returns the stack's new total.
    pub fn add_item(&mut self, item: &ItemId, quantity: u32) -> Result<u32, InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::NonPositiveQuantity(item.clone()));
        }
        if !self.catalog.contains(item) {
            return Err(InventoryError::UnknownItem(item.clone()));
        }

        let (total, new_stack) = match self.stacks.iter_mut().find(|s| s.item == *item) {
            Some(stack) => {
                stack.quantity = stack.quantity.saturating_add(quantity);
                (stack.quantity, false)
            }
            None => {
                self.stacks.push(ItemStack {
                    item: item.clone(),
                    quantity,
                });
                (quantity, true)
            }
        };

        self.pending.push(InventoryChanged {
            item: item.clone(),
            added: quantity,
            total,
            new_stack,
        });
        Ok(total)
    }

    pub fn count(&self, item: &ItemId) -> u32 {
        self.stacks
            .iter()
            .find(|s| s.item == *item)
            .map(|s| s.quantity)
            .unwrap_or(0)
    }

    /// Read-only view of all stacks.
    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }

    pub fn total_items(&self) -> u64 {
        self.stacks.iter().map(|s| s.quantity as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take the change notifications recorded since the last drain.
    pub fn drain_changes(&mut self) -> Vec<InventoryChanged> {
        std::mem::take(&mut self.pending)
    }
}

impl InventorySink for Inventory {
    fn add(&mut self, item: &ItemId, quantity: u32) -> Result<u32, InventoryError> {
        self.add_item(item, quantity)
    }
}

// =============================================================================
// Saveable
// =============================================================================

#[derive(Encode, Decode, Default)]
struct InventorySave {
    catalog: ItemCatalog,
    stacks: Vec<ItemStack>,
}

impl crate::Saveable for Inventory {
    const SAVE_KEY: &'static str = "inventory";

    fn save_to_bytes(&self) -> Option<Vec<u8>> {
        if self.stacks.is_empty() {
            return None;
        }
        Some(bitcode::encode(&InventorySave {
            catalog: self.catalog.clone(),
            stacks: self.stacks.clone(),
        }))
    }

    fn load_from_bytes(bytes: &[u8]) -> Self {
        let save: InventorySave = crate::decode_or_warn(Self::SAVE_KEY, bytes);
        if save.catalog.is_empty() {
            // Corrupt or legacy data: keep the builtin catalog.
            return Self {
                stacks: save.stacks,
                ..Self::default()
            };
        }
        Self {
            catalog: save.catalog,
            stacks: save.stacks,
            pending: Vec::new(),
        }
    }
}

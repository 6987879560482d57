//! The placed-item registry - the host-owned item collection.
//!
//! Ordered collection of stickers and widgets with stable identity. The
//! engine mutates it through exactly one operation: `update_position`,
//! invoked once per completed drag gesture. Everything else (adds,
//! payload edits, removal) is host-issued.

use serde_json::{Map, Value};
use tracing::debug;

use crate::types::{ItemId, ItemKind, PlacedItem, Position};

/// Ordered collection of placed items.
///
/// Iteration order is insertion order, which the host also uses as base
/// stacking order. Ids are assigned at insertion and never reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasRegistry {
    items: Vec<PlacedItem>,
}

impl CanvasRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from imported records.
    pub fn from_items(items: Vec<PlacedItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add a sticker and return its freshly assigned id.
    pub fn add_sticker(
        &mut self,
        type_id: impl Into<String>,
        position: Position,
        size: f64,
    ) -> ItemId {
        let item = PlacedItem::sticker(type_id, position, size);
        let id = item.id;
        debug!(item = %id, type_id = %item.type_id, "sticker added");
        self.items.push(item);
        id
    }

    /// Add a widget and return its freshly assigned id.
    pub fn add_widget(
        &mut self,
        type_id: impl Into<String>,
        position: Position,
        data: Option<Map<String, Value>>,
    ) -> ItemId {
        let item = PlacedItem::widget(type_id, position, data);
        let id = item.id;
        debug!(item = %id, type_id = %item.type_id, "widget added");
        self.items.push(item);
        id
    }

    /// Replace one item's position - the drag commit target.
    ///
    /// Idempotent; called exactly once per completed gesture, never
    /// mid-drag. Returns `false` when the id is stale (item removed
    /// mid-drag), in which case the commit is silently dropped.
    pub fn update_position(&mut self, id: ItemId, position: Position) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.position = position;
                true
            }
            None => {
                debug!(item = %id, "position update for removed item dropped");
                false
            }
        }
    }

    /// Host-issued edit of a widget's payload; opaque to the engine.
    /// Returns `false` for stale ids or non-widget items.
    pub fn update_widget_data(&mut self, id: ItemId, data: Option<Map<String, Value>>) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(PlacedItem {
                kind: ItemKind::Widget { data: slot },
                ..
            }) => {
                *slot = data;
                true
            }
            _ => false,
        }
    }

    /// Remove one item, returning it if present. Any in-flight drag
    /// session for this item must be detached by the host.
    pub fn remove(&mut self, id: ItemId) -> Option<PlacedItem> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        debug!(item = %id, "item removed");
        Some(self.items.remove(idx))
    }

    /// Remove everything ("clear all").
    pub fn clear(&mut self) {
        debug!(count = self.items.len(), "registry cleared");
        self.items.clear();
    }
}

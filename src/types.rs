//! Core types for placed items on the canvas surface.
//!
//! Defines the item records the host persists, the stable id scheme, and
//! the normalized placement position used throughout the engine.

use std::fmt;

use kurbo::Size;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::constants::{
    DEFAULT_WIDGET_FOOTPRINT, NOTE_FOOTPRINT, POSITION_EPSILON, STICKER_BASE_EDGE,
    WEATHER_FOOTPRINT,
};

/// Stable identity of a placed item.
///
/// Assigned once at insertion into the registry and never reused after
/// deletion; v4 uuids make reuse structurally impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ItemId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position in placement space: percentages (0-100) of the surface
/// width/height at commit time.
///
/// Values are not clamped to [0, 100]; an item released outside the
/// surface keeps its out-of-range coordinates, and clamping is a host
/// policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Equality within [`POSITION_EPSILON`], used to suppress redundant
    /// live-position updates.
    pub fn approx_eq(self, other: Position) -> bool {
        (self.x - other.x).abs() < POSITION_EPSILON && (self.y - other.y).abs() < POSITION_EPSILON
    }
}

/// Kind-specific payload of a placed item.
///
/// Stickers carry a visual scale; widgets carry free-form state owned by
/// the widget's own content component (note text, selected city, ...),
/// which the placement engine never reads or writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemKind {
    Sticker {
        size: f64,
    },
    Widget {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Map<String, Value>>,
    },
}

/// One item placed on the canvas surface.
///
/// Serializes to the `{id, typeId, position, kind, size?, data?}` record
/// shape that round-trips through export/import of application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    pub id: ItemId,
    /// Which concrete sticker/widget variant to render ("star",
    /// "weather", ...); opaque to the engine.
    pub type_id: String,
    pub position: Position,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl PlacedItem {
    /// Create a sticker with a fresh id.
    pub fn sticker(type_id: impl Into<String>, position: Position, size: f64) -> Self {
        Self {
            id: ItemId::new(),
            type_id: type_id.into(),
            position,
            kind: ItemKind::Sticker { size },
        }
    }

    /// Create a widget with a fresh id.
    pub fn widget(
        type_id: impl Into<String>,
        position: Position,
        data: Option<Map<String, Value>>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            type_id: type_id.into(),
            position,
            kind: ItemKind::Widget { data },
        }
    }

    pub fn is_sticker(&self) -> bool {
        matches!(self.kind, ItemKind::Sticker { .. })
    }

    pub fn is_widget(&self) -> bool {
        matches!(self.kind, ItemKind::Widget { .. })
    }

    /// Fixed visual footprint of this item in device pixels.
    ///
    /// Stickers scale a square base edge; widgets use per-variant
    /// footprints with a fallback for unknown variants.
    pub fn footprint(&self) -> Size {
        match &self.kind {
            ItemKind::Sticker { size } => {
                Size::new(STICKER_BASE_EDGE * size, STICKER_BASE_EDGE * size)
            }
            ItemKind::Widget { .. } => {
                let (w, h) = match self.type_id.as_str() {
                    "note" => NOTE_FOOTPRINT,
                    "weather" => WEATHER_FOOTPRINT,
                    _ => DEFAULT_WIDGET_FOOTPRINT,
                };
                Size::new(w, h)
            }
        }
    }
}

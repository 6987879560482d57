//! Host-facing facade wiring the surface, listeners, and sessions.

use kurbo::Point;

use crate::input::coords::CoordinateConverter;
use crate::input::listeners::ListenerRegistry;
use crate::input::session::DragSession;
use crate::surface::SurfaceHandle;
use crate::types::{ItemId, PlacedItem, Position};

/// One placement engine per render surface.
///
/// Holds the shared surface handle and listener registry, and mounts one
/// [`DragSession`] per registry entry. The host's `on_update` callback is
/// the single mutation path back into its registry.
pub struct PlacementEngine {
    surface: SurfaceHandle,
    listeners: ListenerRegistry,
}

impl PlacementEngine {
    pub fn new(surface: SurfaceHandle) -> Self {
        Self {
            surface,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn surface(&self) -> &SurfaceHandle {
        &self.surface
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// Mount a drag session for one item.
    ///
    /// `on_update` receives the item id and final normalized position at
    /// most once per completed gesture. A non-draggable item's session
    /// ignores presses entirely. The returned session is the teardown
    /// handle: dropping it releases any listeners it still holds.
    pub fn mount_session<F>(&self, item: &PlacedItem, on_update: F, draggable: bool) -> DragSession<F>
    where
        F: FnMut(&ItemId, Position),
    {
        DragSession::new(
            item,
            self.surface.clone(),
            self.listeners.clone(),
            on_update,
            draggable,
        )
    }

    /// Initial position that centers the item's footprint on the surface,
    /// or `None` while the surface is not laid out.
    pub fn centered_position(&self, item: &PlacedItem) -> Option<Position> {
        let rect = self.surface.measure()?;
        let footprint = item.footprint();
        let top_left = Point::new(
            rect.x0 + (rect.width() - footprint.width) / 2.0,
            rect.y0 + (rect.height() - footprint.height) / 2.0,
        );
        Some(CoordinateConverter::to_normalized(top_left, rect))
    }
}

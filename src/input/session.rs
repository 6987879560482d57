//! Per-item drag session - the gesture lifecycle from press to commit.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during a drag (60+ times per
//! second). The move path exits early for idle sessions, re-measures the
//! surface rect without allocating, and suppresses updates when the
//! normalized position is unchanged.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use tracing::{debug, trace};

use crate::input::coords::CoordinateConverter;
use crate::input::listeners::ListenerRegistry;
use crate::input::pointer::{self, Disposition, PointerMotion, PointerPress};
use crate::input::state::DragState;
use crate::profile_scope;
use crate::surface::SurfaceHandle;
use crate::types::{ItemId, PlacedItem, Position};

/// Drag session for one placed item.
///
/// Mounted by the host per registry entry; the session owns the gesture
/// state machine and invokes the host's update callback exactly once per
/// completed gesture with the final normalized position. Dropping the
/// session mid-drag releases the global listeners without committing.
pub struct DragSession<F> {
    item: ItemId,
    /// Committed position the next grab offset is computed from;
    /// refreshed after every commit and by `sync_position`.
    origin: Position,
    draggable: bool,
    detached: bool,
    surface: SurfaceHandle,
    listeners: ListenerRegistry,
    on_update: F,
    state: DragState,
}

impl<F> DragSession<F>
where
    F: FnMut(&ItemId, Position),
{
    pub fn new(
        item: &PlacedItem,
        surface: SurfaceHandle,
        listeners: ListenerRegistry,
        on_update: F,
        draggable: bool,
    ) -> Self {
        Self {
            item: item.id,
            origin: item.position,
            draggable,
            detached: false,
            surface,
            listeners,
            on_update,
            state: DragState::Idle,
        }
    }

    /// Handle a pointer press on this session's item.
    ///
    /// Accepts only primary-button/first-touch presses on a draggable,
    /// still-mounted item over a laid-out surface; anything else is a
    /// no-op and the session stays Idle. On acceptance the grab offset is
    /// captured, the global listeners are registered, and the host must
    /// suppress the platform default action (`Disposition::Claimed`).
    pub fn pointer_down(&mut self, press: &PointerPress) -> Disposition {
        if !self.draggable || self.detached || self.state.is_dragging() {
            return Disposition::Ignored;
        }
        let Some(point) = pointer::press_point(press) else {
            return Disposition::Ignored;
        };
        let Some(rect) = self.surface.measure() else {
            return Disposition::Ignored;
        };

        let top_left = CoordinateConverter::to_device(self.origin, rect);
        let grab_offset = point - top_left;
        let guard = self.listeners.acquire(self.item);
        debug!(item = %self.item, dx = grab_offset.x, dy = grab_offset.y, "drag started");

        self.state = DragState::Dragging {
            grab_offset,
            live: self.origin,
            guard,
        };
        Disposition::Claimed
    }

    /// Handle a global pointer move.
    ///
    /// Recomputes the item's top-left as `pointer - grab_offset` and
    /// translates it against the surface rect measured *now* (the surface
    /// may resize mid-drag). Returns the new live position when it
    /// changed, so the host can repaint; `None` means nothing to render.
    pub fn pointer_move(&mut self, motion: &PointerMotion) -> Option<Position> {
        profile_scope!("drag_pointer_move");

        let grab_offset = self.state.grab_offset()?;
        let point = pointer::motion_point(motion)?;
        // Surface collapsed mid-drag: hold the last live position.
        let rect = self.surface.measure()?;

        let next = CoordinateConverter::to_normalized(point - grab_offset, rect);
        if self.state.live_position().is_some_and(|live| live.approx_eq(next)) {
            return None;
        }
        self.state.set_live(next);
        trace!(item = %self.item, x = next.x, y = next.y, "live position updated");
        Some(next)
    }

    /// Handle pointer release, or pointer leaving the document (treated
    /// identically so a release outside the window cannot leave a stuck
    /// drag).
    ///
    /// Commits the last computed live position to the host exactly once,
    /// releases the global listeners, and returns to Idle. A session
    /// detached mid-drag tears down without committing.
    pub fn release(&mut self) {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { live, guard, .. } => {
                if self.detached {
                    debug!(item = %self.item, "item removed mid-drag, commit dropped");
                } else {
                    (self.on_update)(&self.item, live);
                    self.origin = live;
                    debug!(item = %self.item, x = live.x, y = live.y, "drag committed");
                }
                drop(guard);
            }
            DragState::Idle => {}
        }
    }

    /// Mark the bound item as removed from the registry.
    ///
    /// An in-flight gesture keeps its listeners until the next release or
    /// session drop, but no commit will be issued.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    /// Refresh the committed position after a host-side edit.
    ///
    /// Ignored mid-drag; the gesture's grab offset is already fixed.
    pub fn sync_position(&mut self, position: Position) {
        if self.state.is_idle() {
            self.origin = position;
        }
    }

    /// Host-visible "being dragged" flag; drives the elevated stacking
    /// order and drag styling.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Live position for rendering, if a gesture is in progress.
    pub fn live_position(&self) -> Option<Position> {
        self.state.live_position()
    }

    pub fn item_id(&self) -> ItemId {
        self.item
    }
}

//! The render surface - the container rectangle defining placement space.
//!
//! The engine never owns or mutates the surface element; it only measures
//! it. The rect is re-read at every press and every move rather than
//! cached at drag start, so a surface that resizes mid-drag (orientation
//! change, on-screen keyboard) keeps the coordinate math correct.

use std::sync::Arc;

use kurbo::Rect;
use parking_lot::Mutex;
use tracing::debug;

/// Cheaply cloneable handle to the surface's bounding rectangle.
///
/// The host updates it on mount, layout, and resize; sessions read it
/// live. An unattached or zero-size surface measures as `None`, and every
/// gesture against it degrades to a no-op.
#[derive(Debug, Clone, Default)]
pub struct SurfaceHandle {
    rect: Arc<Mutex<Option<Rect>>>,
}

impl SurfaceHandle {
    /// A handle with no attached surface yet.
    pub fn detached() -> Self {
        Self::default()
    }

    /// A handle already attached at the given rect.
    pub fn attached(rect: Rect) -> Self {
        let handle = Self::default();
        handle.set_rect(rect);
        handle
    }

    /// Record the surface's current bounding rect (attach or resize).
    pub fn set_rect(&self, rect: Rect) {
        *self.rect.lock() = Some(rect);
    }

    /// Forget the surface (unmount).
    pub fn detach(&self) {
        *self.rect.lock() = None;
    }

    /// The current bounding rect, `None` when unattached or not yet laid
    /// out (zero-size). Callers must not translate coordinates against an
    /// unready surface.
    pub fn measure(&self) -> Option<Rect> {
        let rect = (*self.rect.lock())?;
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            debug!("surface has no extent, translation skipped");
            return None;
        }
        Some(rect)
    }
}

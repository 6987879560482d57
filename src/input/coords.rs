//! Coordinate conversion between device pixels and placement space.
//!
//! Centralizes the percentage formulas so they are not duplicated across
//! press, move, and initial-placement code paths.

use kurbo::{Point, Rect};

use crate::types::Position;

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a device-pixel point to placement-space percentages of the
    /// surface rect. No clamping is applied.
    ///
    /// The rect must have positive extent; callers obtain it through
    /// `SurfaceHandle::measure`, which filters unready surfaces.
    #[inline]
    pub fn to_normalized(point: Point, rect: Rect) -> Position {
        Position::new(
            (point.x - rect.x0) / rect.width() * 100.0,
            (point.y - rect.y0) / rect.height() * 100.0,
        )
    }

    /// Convert a placement-space position back to device pixels.
    ///
    /// Used for initial placement and grab-offset computation, not during
    /// the move stream (live rendering positions items by percentage).
    #[inline]
    pub fn to_device(position: Position, rect: Rect) -> Point {
        Point::new(
            rect.x0 + position.x / 100.0 * rect.width(),
            rect.y0 + position.y / 100.0 * rect.height(),
        )
    }
}

//! Coordinate translation tests: the percentage formulas and the
//! device/normalized round-trip property.

use kurbo::{Point, Rect};

use homecanvas::input::coords::CoordinateConverter;
use homecanvas::Position;

use crate::helpers::assert_position;

#[test]
fn test_to_normalized_formula() {
    let rect = Rect::new(100.0, 50.0, 500.0, 250.0);

    let pos = CoordinateConverter::to_normalized(Point::new(320.0, 140.0), rect);
    assert_position(pos, (55.0, 45.0));

    let origin = CoordinateConverter::to_normalized(Point::new(100.0, 50.0), rect);
    assert_position(origin, (0.0, 0.0));

    let corner = CoordinateConverter::to_normalized(Point::new(500.0, 250.0), rect);
    assert_position(corner, (100.0, 100.0));
}

#[test]
fn test_to_device_inverse() {
    let rect = Rect::new(100.0, 50.0, 500.0, 250.0);

    let point = CoordinateConverter::to_device(Position::new(55.0, 45.0), rect);
    assert_eq!(point, Point::new(320.0, 140.0));

    let origin = CoordinateConverter::to_device(Position::new(0.0, 0.0), rect);
    assert_eq!(origin, Point::new(100.0, 50.0));
}

#[test]
fn test_round_trip_within_tolerance() {
    let rects = [
        Rect::new(0.0, 0.0, 400.0, 200.0),
        Rect::new(100.0, 50.0, 500.0, 250.0),
        Rect::new(-30.0, -20.0, 330.0, 460.0),
        Rect::new(0.0, 0.0, 1.0, 1.0),
    ];

    for rect in rects {
        for ix in 0..=10 {
            for iy in 0..=10 {
                let point = Point::new(
                    rect.x0 + rect.width() * f64::from(ix) / 10.0,
                    rect.y0 + rect.height() * f64::from(iy) / 10.0,
                );
                let back = CoordinateConverter::to_device(
                    CoordinateConverter::to_normalized(point, rect),
                    rect,
                );
                assert!(
                    (back.x - point.x).abs() < 1e-9 && (back.y - point.y).abs() < 1e-9,
                    "round trip drifted for {point:?} in {rect:?}: got {back:?}"
                );
            }
        }
    }
}

#[test]
fn test_out_of_rect_points_are_not_clamped() {
    let rect = Rect::new(100.0, 50.0, 500.0, 250.0);

    let beyond = CoordinateConverter::to_normalized(Point::new(600.0, 300.0), rect);
    assert_position(beyond, (125.0, 125.0));

    let before = CoordinateConverter::to_normalized(Point::new(60.0, 10.0), rect);
    assert_position(before, (-10.0, -20.0));
}

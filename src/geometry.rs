use egui::Pos2;
use tiny_skia::Transform;

/// A recorded canvas-local position.
pub type Point = Pos2;

/// Map a point from drawing coordinates into surface coordinates
pub fn map_point(transform: &Transform, p: Point) -> Point {
    let mut mapped = tiny_skia::Point::from_xy(p.x, p.y);
    transform.map_point(&mut mapped);
    Pos2::new(mapped.x, mapped.y)
}

/// Uniform scale carried by a transform (line widths, font sizes)
pub fn scale_factor(transform: &Transform) -> f32 {
    transform.get_scale().0
}

/// Rotation carried by a transform, in radians
pub fn rotation(transform: &Transform) -> f32 {
    transform.ky.atan2(transform.sx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4, "{a:?} != {b:?}");
    }

    #[test]
    fn test_translate_then_scale_matches_canvas_order() {
        // scale applies to coordinates first, then translation
        let t = Transform::identity().pre_translate(10.0, 20.0).pre_scale(2.0, 2.0);
        assert_close(map_point(&t, Pos2::new(1.0, 1.0)), Pos2::new(12.0, 22.0));
    }

    #[test]
    fn test_rotation_and_scale_factor() {
        let t = Transform::identity().pre_scale(3.0, 3.0).pre_rotate(90.0);
        assert!((scale_factor(&t) - 3.0).abs() < 1e-4);
        assert!((rotation(&t) - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
        assert_close(map_point(&t, Pos2::new(1.0, 0.0)), Pos2::new(0.0, 3.0));
    }
}

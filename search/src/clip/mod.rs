//! Sutherland-Hodgman clipping with the roles swapped: the (possibly concave)
//! input polygon is the subject and the axis-aligned window is the clipper.
//! Cutting any simple polygon by a convex window edge by edge is sound, which
//! is all the inscribed search needs.

pub mod edge;

pub use edge::ClipEdge;

use inscribe_common::geom::point::Point;
use inscribe_common::geom::polygon;
use inscribe_common::geom::rect::Rect;

/// Restricts `polygon` to one open half-plane.
pub fn clip_against(polygon: &[Point<f64>], edge: ClipEdge, value: f64) -> Vec<Point<f64>> {
    let mut output = Vec::with_capacity(polygon.len() + 2);

    for (prev, current) in polygon::edges(polygon) {
        let prev_inside = edge.is_inside(prev, value);
        let current_inside = edge.is_inside(current, value);

        match (prev_inside, current_inside) {
            (true, true) => output.push(current),
            // entering
            (false, true) => {
                output.push(edge.intersect(prev, current, value));
                output.push(current);
            }
            // leaving
            (true, false) => output.push(edge.intersect(prev, current, value)),
            (false, false) => {}
        }
    }

    output
}

/// Clips by the four sides of `rect` in `ClipEdge::ORDER`. An empty result
/// means the polygon does not reach into the window.
pub fn clip_polygon(polygon: &[Point<f64>], rect: &Rect) -> Vec<Point<f64>> {
    let mut clipped = polygon.to_vec();
    for edge in ClipEdge::ORDER {
        if clipped.is_empty() {
            break;
        }
        clipped = clip_against(&clipped, edge, edge.value(rect));
    }
    clipped
}

pub fn clip_to_rect(vertices: &[Point<i64>], rect: &Rect) -> Vec<Point<f64>> {
    let subject: Vec<_> = vertices.iter().map(|p| p.to_f64()).collect();
    clip_polygon(&subject, rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point<i64>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn fpts(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn is_rotation_of(a: &[Point<f64>], b: &[Point<f64>]) -> bool {
        a.len() == b.len()
            && (a.is_empty()
                || (0..a.len()).any(|k| b.iter().cycle().skip(k).zip(a).all(|(p, q)| p == q)))
    }

    fn notched() -> Vec<Point<i64>> {
        pts(&[(0, 0), (0, 3), (4, 3), (4, 0), (2, 1)])
    }

    #[test]
    fn rectangle_clipped_by_itself_keeps_its_corners() {
        let square = pts(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        let rect = Rect::from_corners(square[0], square[2]);

        let clipped = clip_to_rect(&square, &rect);
        assert_eq!(clipped, fpts(&[(1.0, 0.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]));

        let original: Vec<_> = square.iter().map(|p| p.to_f64()).collect();
        assert!(is_rotation_of(&clipped, &original));
        assert_eq!(polygon::inclusive_area(&clipped), Some(rect.area() as f64));
    }

    #[test]
    fn larger_window_returns_polygon_unchanged() {
        let poly = notched();
        let rect = Rect::from_corners(Point::new(-1, -1), Point::new(5, 4));
        let clipped = clip_to_rect(&poly, &rect);
        let original: Vec<_> = poly.iter().map(|p| p.to_f64()).collect();
        assert_eq!(clipped, original);
    }

    #[test]
    fn window_on_bounding_box_keeps_concave_shape() {
        // The notch vertex survives, so the result is not a rectangle.
        let poly = notched();
        let rect = Rect::from_corners(Point::new(0, 0), Point::new(4, 3));
        let clipped = clip_to_rect(&poly, &rect);
        assert_eq!(clipped.len(), 7);
        assert!(clipped.contains(&Point::new(2.0, 1.0)));
    }

    #[test]
    fn disjoint_window_gives_empty_polygon() {
        let rect = Rect::from_corners(Point::new(10, 10), Point::new(12, 12));
        assert!(clip_to_rect(&notched(), &rect).is_empty());

        let below = Rect::from_corners(Point::new(0, -5), Point::new(4, -1));
        assert!(clip_to_rect(&notched(), &below).is_empty());
    }

    #[test]
    fn inscribed_window_yields_four_corners() {
        let rect = Rect::from_corners(Point::new(0, 3), Point::new(2, 1));
        let clipped = clip_to_rect(&notched(), &rect);
        assert_eq!(clipped, fpts(&[(2.0, 1.0), (0.0, 1.0), (0.0, 3.0), (2.0, 3.0)]));
    }

    #[test]
    fn clipping_is_idempotent() {
        let rect = Rect::from_corners(Point::new(0, 1), Point::new(2, 3));
        let once = clip_to_rect(&notched(), &rect);
        let twice = clip_polygon(&once, &rect);
        assert!(is_rotation_of(&twice, &once), "{:?} vs {:?}", twice, once);
    }

    #[test]
    fn partial_cover_produces_fractional_vertices() {
        let rect = Rect::from_corners(Point::new(1, 0), Point::new(3, 3));
        let clipped = clip_to_rect(&notched(), &rect);
        assert!(clipped.iter().any(|p| p.y.fract() != 0.0));
        assert_ne!(polygon::inclusive_area(&clipped), Some(rect.area() as f64));
    }

    #[test]
    fn single_half_plane_cut() {
        let square = fpts(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
        let cut = clip_against(&square, ClipEdge::Right, 2.0);
        assert_eq!(cut, fpts(&[(2.0, 0.0), (0.0, 0.0), (0.0, 4.0), (2.0, 4.0)]));
        assert!(clip_against(&[], ClipEdge::Left, 0.0).is_empty());
    }
}

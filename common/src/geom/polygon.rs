use super::point::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    Degenerate,
}

/// Walks the closed loop as `(previous, current)` pairs, starting with the
/// closing edge `(last, first)`.
pub fn edges<T: Copy>(vertices: &[T]) -> impl Iterator<Item = (T, T)> + '_ {
    let prev = vertices.last().copied();
    vertices.iter().scan(prev, |prev, &cur| {
        let p = prev.replace(cur)?;
        Some((p, cur))
    })
}

pub fn bounding_box(points: &[Point<f64>]) -> Option<(Point<f64>, Point<f64>)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (
            Point::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}

/// Bounding-box area of a point set using the inclusive-grid convention
/// `(xmax - xmin + 1) * (ymax - ymin + 1)`. `None` for an empty set.
pub fn inclusive_area(points: &[Point<f64>]) -> Option<f64> {
    let (lo, hi) = bounding_box(points)?;
    Some((hi.x - lo.x + 1.0) * (hi.y - lo.y + 1.0))
}

/// Twice the signed shoelace area; positive for counter-clockwise loops in a
/// y-up frame.
pub fn signed_area_x2(vertices: &[Point<i64>]) -> i128 {
    edges(vertices)
        .map(|(a, b)| a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128)
        .sum()
}

pub fn winding(vertices: &[Point<i64>]) -> Winding {
    match signed_area_x2(vertices).signum() {
        1 => Winding::CounterClockwise,
        -1 => Winding::Clockwise,
        _ => Winding::Degenerate,
    }
}

/// Even-odd ray cast. Points exactly on the boundary may land on either side.
pub fn contains_point(vertices: &[Point<i64>], p: Point<f64>) -> bool {
    let mut inside = false;
    for (a, b) in edges(vertices) {
        let (a, b) = (a.to_f64(), b.to_f64());
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

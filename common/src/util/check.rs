use crate::db::core::PointStore;
use crate::geom::point::Point;
use crate::geom::polygon;
use crate::geom::rect::Rect;
use crate::geom::rtree::PointIndex;
use rayon::prelude::*;

/// Independently certifies that `rect` lies inside the polygon: no vertex in
/// its open interior, no edge passing through that interior, and its centre
/// on the inside of the boundary.
pub fn run_inscribed_check(store: &PointStore, rect: Rect) -> Result<(), String> {
    log::info!(
        "Verifying inscribed rectangle {} .. {} (area {})",
        rect.min,
        rect.max,
        rect.area()
    );
    if !store.is_polygon() {
        return Err(format!("{} vertices do not enclose a polygon", store.len()));
    }

    let (vertices_result, edges_result) =
        rayon::join(|| check_vertices(store, rect), || check_edges(store, rect));

    let mut msgs = Vec::new();

    match vertices_result {
        Err(e) => {
            log::error!("\x1b[31mFAIL\x1b[0m: Vertex inside rectangle");
            log::error!("{}", e);
            msgs.push(e);
        }
        Ok(_) => log::info!("\x1b[32mPASS\x1b[0m: No vertex inside the rectangle."),
    }

    match edges_result {
        Err(e) => {
            log::error!("\x1b[31mFAIL\x1b[0m: Boundary crosses rectangle");
            log::error!("{}", e);
            msgs.push(e);
        }
        Ok(_) => log::info!("\x1b[32mPASS\x1b[0m: No edge crosses the rectangle."),
    }

    // Degenerate strips have no interior to probe; their centre may sit on the boundary.
    if !rect.is_degenerate() && !polygon::contains_point(store.points(), rect.center()) {
        let e = format!("centre {} lies outside the polygon", rect.center());
        log::error!("\x1b[31mFAIL\x1b[0m: Rectangle outside polygon");
        log::error!("{}", e);
        msgs.push(e);
    }

    if msgs.is_empty() {
        log::info!("\x1b[32mSUCCESS\x1b[0m: Rectangle is inscribed");
        Ok(())
    } else {
        Err(msgs.join("; "))
    }
}

fn check_vertices(store: &PointStore, rect: Rect) -> Result<(), String> {
    let index = PointIndex::build(store.points());
    let inside = index.query_interior(rect);
    if inside.is_empty() {
        return Ok(());
    }
    let listed: Vec<String> = inside
        .iter()
        .map(|&id| format!("{} ({})", id, store.get(id)))
        .collect();
    Err(format!("vertices inside: {}", listed.join(", ")))
}

fn check_edges(store: &PointStore, rect: Rect) -> Result<(), String> {
    let edges: Vec<_> = polygon::edges(store.points()).collect();
    let crossing: Vec<String> = edges
        .par_iter()
        .filter(|(a, b)| crosses_interior(a.to_f64(), b.to_f64(), &rect))
        .map(|(a, b)| format!("({}) -> ({})", a, b))
        .collect();
    if crossing.is_empty() {
        Ok(())
    } else {
        Err(format!("edges crossing: {}", crossing.join(", ")))
    }
}

/// Parametric clip of segment `a -> b` to the closed rectangle. The clipped
/// piece reaches the open interior iff its midpoint does.
fn crosses_interior(a: Point<f64>, b: Point<f64>, rect: &Rect) -> bool {
    let d = b - a;
    let (min_x, min_y) = (rect.min.x as f64, rect.min.y as f64);
    let (max_x, max_y) = (rect.max.x as f64, rect.max.y as f64);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, a.x - min_x),
        (d.x, max_x - a.x),
        (-d.y, a.y - min_y),
        (d.y, max_y - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return false;
        }
    }

    rect.contains_strictly(a + d * ((t0 + t1) / 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notched() -> PointStore {
        PointStore::new(vec![
            Point::new(0, 0),
            Point::new(0, 3),
            Point::new(4, 3),
            Point::new(4, 0),
            Point::new(2, 1),
        ])
    }

    #[test]
    fn accepts_rectangle_above_notch() {
        let rect = Rect::from_corners(Point::new(0, 1), Point::new(2, 3));
        assert!(run_inscribed_check(&notched(), rect).is_ok());
    }

    #[test]
    fn rejects_rectangle_over_notch() {
        let rect = Rect::from_corners(Point::new(0, 0), Point::new(4, 3));
        let err = run_inscribed_check(&notched(), rect).unwrap_err();
        assert!(err.contains("vertices inside"), "{}", err);
    }

    #[test]
    fn rejects_rectangle_outside_polygon() {
        let rect = Rect::from_corners(Point::new(5, 0), Point::new(7, 2));
        let err = run_inscribed_check(&notched(), rect).unwrap_err();
        assert!(err.contains("outside the polygon"), "{}", err);
    }

    #[test]
    fn segment_interior_crossing() {
        let rect = Rect::from_corners(Point::new(0, 0), Point::new(4, 4));
        let p = |x: f64, y: f64| Point::new(x, y);
        assert!(crosses_interior(p(-1.0, 2.0), p(5.0, 2.0), &rect));
        assert!(crosses_interior(p(-1.0, -1.0), p(5.0, 5.0), &rect));
        assert!(!crosses_interior(p(0.0, -1.0), p(0.0, 5.0), &rect));
        assert!(!crosses_interior(p(-2.0, 1.0), p(1.0, -2.0), &rect));
        assert!(!crosses_interior(p(6.0, 0.0), p(6.0, 4.0), &rect));
    }
}

use crate::db::core::PointStore;
use crate::geom::polygon;
use crate::geom::rect::Rect;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect as ImageRect;
use std::path::Path;

/// Renders the polygon outline, the largest pairwise rectangle (outline) and
/// the inscribed rectangle (filled). Returns an error only if saving fails.
pub fn draw_solution(
    store: &PointStore,
    largest: Option<Rect>,
    inscribed: Option<Rect>,
    filename: &str,
    width: u32,
    height: u32,
) -> image::ImageResult<()> {
    let mut img = RgbImage::from_pixel(width, height, Rgb([20, 20, 20]));

    let Some(bounds) = store.bounding_rect() else {
        return img.save(Path::new(filename));
    };

    // One cell of margin on every side.
    let span_x = (bounds.width() + 2) as f64;
    let span_y = (bounds.height() + 2) as f64;
    let scale = (width as f64 / span_x).min(height as f64 / span_y);

    let map = |x: f64, y: f64| {
        (
            ((x - bounds.min.x as f64 + 1.0) * scale) as f32,
            (height as f64 - (y - bounds.min.y as f64 + 1.0) * scale) as f32,
        )
    };
    let image_rect = |r: Rect| {
        let (x0, y0) = map(r.min.x as f64, r.max.y as f64);
        let w = ((r.max.x - r.min.x) as f64 * scale).max(1.0);
        let h = ((r.max.y - r.min.y) as f64 * scale).max(1.0);
        ImageRect::at(x0 as i32, y0 as i32).of_size(w as u32, h as u32)
    };

    if let Some(r) = inscribed {
        draw_filled_rect_mut(&mut img, image_rect(r), Rgb([40, 140, 80]));
    }

    let outline = Rgb([230, 230, 230]);
    for (a, b) in polygon::edges(store.points()) {
        draw_line_segment_mut(
            &mut img,
            map(a.x as f64, a.y as f64),
            map(b.x as f64, b.y as f64),
            outline,
        );
    }

    if let Some(r) = largest {
        draw_hollow_rect_mut(&mut img, image_rect(r), Rgb([200, 60, 60]));
    }

    img.save(Path::new(filename))
}

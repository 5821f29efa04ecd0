use crate::geom::point::Point;
use crate::util::config::GeneratorConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Random simple rectilinear polygon: `columns` bars of random width and
/// height standing on y = 0, walked clockwise (in a y-up frame) from the origin.
/// Neighbouring bars never share a height, so no vertex is collinear with its
/// neighbours.
pub fn random_skyline<R: Rng>(
    rng: &mut R,
    columns: usize,
    max_width: i64,
    max_height: i64,
) -> Vec<Point<i64>> {
    let columns = columns.max(1);
    let max_width = max_width.max(1);
    let max_height = max_height.max(2);

    let mut vertices = Vec::with_capacity(2 * columns + 2);
    vertices.push(Point::new(0, 0));

    let mut x = 0;
    let mut prev_height = 0;
    for _ in 0..columns {
        let mut height = rng.gen_range(1..=max_height);
        while height == prev_height {
            height = rng.gen_range(1..=max_height);
        }
        let width = rng.gen_range(1..=max_width);

        vertices.push(Point::new(x, height));
        x += width;
        vertices.push(Point::new(x, height));
        prev_height = height;
    }
    vertices.push(Point::new(x, 0));
    vertices
}

pub fn generate_random_polygon(filename: &str, config: &GeneratorConfig) -> std::io::Result<usize> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "Generating skyline polygon: {} columns, width <= {}, height <= {}",
        config.columns,
        config.max_width,
        config.max_height
    );
    let vertices = random_skyline(&mut rng, config.columns, config.max_width, config.max_height);

    let mut file = BufWriter::new(File::create(filename)?);
    for p in &vertices {
        writeln!(file, "{}", p)?;
    }
    file.flush()?;
    Ok(vertices.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::polygon::{self, Winding};

    #[test]
    fn skyline_is_a_closed_rectilinear_loop() {
        let mut rng = StdRng::seed_from_u64(7);
        let vertices = random_skyline(&mut rng, 12, 5, 9);

        assert_eq!(vertices.len(), 26);
        assert_eq!(vertices[0], Point::new(0, 0));
        assert_eq!(vertices.last().unwrap().y, 0);
        for (a, b) in polygon::edges(&vertices) {
            assert!(a.x == b.x || a.y == b.y, "edge {} -> {} is not axis-aligned", a, b);
            assert_ne!(a, b);
        }
        assert_eq!(polygon::winding(&vertices), Winding::Clockwise);
    }

    #[test]
    fn same_seed_same_polygon() {
        let a = random_skyline(&mut StdRng::seed_from_u64(42), 8, 10, 10);
        let b = random_skyline(&mut StdRng::seed_from_u64(42), 8, 10, 10);
        assert_eq!(a, b);
    }
}

//! Square-grid packing: one coin per unit cell.

use crate::packing::config::PackingConfig;
use crate::packing::model::{Circle, Packing};

/// Places a coin at the center of every cell of an `n × n` grid whose pitch is
/// the diameter, `n` being the number of whole diameters per side.
///
/// The default configuration yields 100 coins filling the 10×10 square exactly.
pub fn generate_grid(config: &PackingConfig) -> Packing {
    let d = config.circle_diameter;
    let r = config.radius();
    let n = config.circles_per_side();

    let mut centers = Vec::with_capacity(n * n);
    for row in 0..n {
        for col in 0..n {
            centers.push(Circle::new(col as f64 * d + r, row as f64 * d + r));
        }
    }

    let side = n as f64 * d;
    Packing::from_parts(centers, side, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::bounds::bounding_box;

    #[test]
    fn test_grid_has_100_circles() {
        let packing = generate_grid(&PackingConfig::default());
        assert_eq!(packing.len(), 100);
    }

    #[test]
    fn test_grid_fills_square() {
        let packing = generate_grid(&PackingConfig::default());
        assert_eq!(packing.packing_width, 10.0);
        assert_eq!(packing.packing_height, 10.0);
    }

    #[test]
    fn test_grid_centers_within_half_unit_margin() {
        let packing = generate_grid(&PackingConfig::default());
        for c in &packing.centers {
            assert!((0.5..=9.5).contains(&c.x), "x out of range: {}", c.x);
            assert!((0.5..=9.5).contains(&c.y), "y out of range: {}", c.y);
        }
    }

    #[test]
    fn test_grid_row_major_order() {
        let packing = generate_grid(&PackingConfig::default());
        assert_eq!(packing.centers[0], Circle::new(0.5, 0.5));
        assert_eq!(packing.centers[1], Circle::new(1.5, 0.5));
        assert_eq!(packing.centers[10], Circle::new(0.5, 1.5));
        assert_eq!(packing.centers[99], Circle::new(9.5, 9.5));
    }

    #[test]
    fn test_grid_dimensions_agree_with_bounding_box() {
        let config = PackingConfig::default();
        let packing = generate_grid(&config);
        let bbox = bounding_box(&packing.centers, config.radius());
        assert_eq!(bbox.width, packing.packing_width);
        assert_eq!(bbox.height, packing.packing_height);
        assert!(packing.fits_bounds(config.radius()));
    }

    #[test]
    fn test_grid_scales_with_diameter() {
        let packing = generate_grid(&PackingConfig::new(10.0, 2.0));
        assert_eq!(packing.len(), 25);
        assert_eq!(packing.packing_width, 10.0);
        assert_eq!(packing.centers[0], Circle::new(1.0, 1.0));
    }
}

//! Honeycomb packing: alternating long and short rows.
//!
//! Even rows are "long" and start flush with the left edge. Odd rows are "short"
//! (one coin fewer) and are shifted right by half a diameter so each coin nests
//! between the two coins above and below it. Rows are `√3/2 · D` apart.

use crate::packing::config::{floor_count, PackingConfig};
use crate::packing::model::{Circle, Packing};

/// Row layout of a honeycomb packing for a given configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLayout {
    pub rows: usize,
    pub long_row_len: usize,
    pub short_row_len: usize,
}

impl HexLayout {
    pub fn for_config(config: &PackingConfig) -> Self {
        let long_row_len = config.circles_per_side();
        if long_row_len == 0 {
            return Self {
                rows: 0,
                long_row_len: 0,
                short_row_len: 0,
            };
        }
        let spare_height = config.square_side - config.circle_diameter;
        let rows = floor_count(spare_height / config.hex_row_height()) + 1;
        Self {
            rows,
            long_row_len,
            short_row_len: long_row_len - 1,
        }
    }

    pub fn is_long_row(row: usize) -> bool {
        row % 2 == 0
    }

    pub fn row_len(&self, row: usize) -> usize {
        if Self::is_long_row(row) {
            self.long_row_len
        } else {
            self.short_row_len
        }
    }

    pub fn total(&self) -> usize {
        (0..self.rows).map(|row| self.row_len(row)).sum()
    }
}

/// Generates the honeycomb packing.
///
/// The default configuration yields 11 rows (6 × 10 + 5 × 9 = 105 coins), a
/// width of 10.0 set by the long rows, and a height of `10 · √3/2 + 1 ≈ 9.660`.
pub fn generate_hexagonal(config: &PackingConfig) -> Packing {
    let layout = HexLayout::for_config(config);
    if layout.rows == 0 {
        return Packing::empty();
    }

    let d = config.circle_diameter;
    let r = config.radius();
    let row_height = config.hex_row_height();

    let mut centers = Vec::with_capacity(layout.total());
    for row in 0..layout.rows {
        let y = row as f64 * row_height + r;
        let shift = if HexLayout::is_long_row(row) { 0.0 } else { r };
        for j in 0..layout.row_len(row) {
            centers.push(Circle::new(j as f64 * d + r + shift, y));
        }
    }

    let packing_width = layout.long_row_len as f64 * d;
    let packing_height = (layout.rows - 1) as f64 * row_height + d;
    Packing::from_parts(centers, packing_width, packing_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::bounds::bounding_box;

    fn expected_height() -> f64 {
        10.0 * (3.0_f64.sqrt() / 2.0) + 1.0
    }

    #[test]
    fn test_layout_default_rows() {
        let layout = HexLayout::for_config(&PackingConfig::default());
        assert_eq!(layout.rows, 11);
        assert_eq!(layout.long_row_len, 10);
        assert_eq!(layout.short_row_len, 9);
        assert_eq!(layout.total(), 105);
    }

    #[test]
    fn test_hexagonal_has_105_circles() {
        let packing = generate_hexagonal(&PackingConfig::default());
        assert_eq!(packing.len(), 105);
    }

    #[test]
    fn test_hexagonal_long_and_short_row_split() {
        let packing = generate_hexagonal(&PackingConfig::default());
        let long = packing
            .centers
            .iter()
            .filter(|c| (c.x - 0.5).rem_euclid(1.0) < 1e-9)
            .count();
        let short = packing.len() - long;
        assert_eq!(long, 60);
        assert_eq!(short, 45);
    }

    #[test]
    fn test_hexagonal_dimensions() {
        let packing = generate_hexagonal(&PackingConfig::default());
        assert_eq!(packing.packing_width, 10.0);
        assert!(
            (packing.packing_height - expected_height()).abs() < 1e-12,
            "height was {}",
            packing.packing_height
        );
        assert!((packing.packing_height - 9.660).abs() < 1e-3);
    }

    #[test]
    fn test_hexagonal_short_rows_offset_by_radius() {
        let packing = generate_hexagonal(&PackingConfig::default());
        // Row 1 starts right after the 10 coins of row 0.
        let first_short = packing.centers[10];
        assert!((first_short.x - 1.0).abs() < 1e-12);
        assert!((first_short.y - (0.5 + 3.0_f64.sqrt() / 2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_hexagonal_no_two_centers_coincide() {
        let packing = generate_hexagonal(&PackingConfig::default());
        for (i, a) in packing.centers.iter().enumerate() {
            for b in &packing.centers[i + 1..] {
                let dist = a.distance_to(b);
                assert!(dist > 0.0, "coincident centers at {a:?}");
                assert!(dist >= 1.0 - 1e-9, "overlapping discs at {a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn test_hexagonal_agrees_with_bounding_box() {
        let config = PackingConfig::default();
        let packing = generate_hexagonal(&config);
        let bbox = bounding_box(&packing.centers, config.radius());
        assert!((bbox.width - packing.packing_width).abs() < 1e-12);
        assert!((bbox.height - packing.packing_height).abs() < 1e-12);
        assert!(packing.fits_bounds(config.radius()));
    }

    #[test]
    fn test_layout_counts_row_landing_on_square_edge() {
        // Side chosen so exactly 3 row pitches fit above the first row.
        let d = 0.1;
        let side = d + 3.0 * (3.0_f64.sqrt() / 2.0 * d);
        let layout = HexLayout::for_config(&PackingConfig::new(side, d));
        assert_eq!(layout.rows, 4);
    }

    #[test]
    fn test_hexagonal_too_large_diameter_is_empty() {
        let packing = generate_hexagonal(&PackingConfig::new(1.0, 2.0));
        assert!(packing.is_empty());
    }
}

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::packing::config::PackingConfig;
use crate::packing::model::Packing;

/// Summary figures reported alongside a packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingStats {
    pub count: usize,
    /// Total disc area, `count · π r²`.
    pub covered_area: f64,
    /// Covered area as a fraction of the reference square.
    pub density: f64,
    /// Closest pair of centers; `None` below two circles.
    pub min_center_distance: Option<f64>,
}

impl PackingStats {
    pub fn of(packing: &Packing, config: &PackingConfig) -> Self {
        let r = config.radius();
        let count = packing.len();
        let covered_area = count as f64 * PI * r * r;
        let square_area = config.square_area();
        let density = if square_area > 0.0 {
            covered_area / square_area
        } else {
            0.0
        };
        Self {
            count,
            covered_area,
            density,
            min_center_distance: min_center_distance(packing),
        }
    }

    /// True when no two discs overlap beyond float noise.
    pub fn is_non_overlapping(&self, config: &PackingConfig) -> bool {
        self.min_center_distance
            .map_or(true, |d| d >= config.circle_diameter - 1e-9)
    }
}

/// Smallest pairwise center distance. Quadratic, fine for the ~100 coin packings served here.
fn min_center_distance(packing: &Packing) -> Option<f64> {
    let centers = &packing.centers;
    let mut best: Option<f64> = None;
    for (i, a) in centers.iter().enumerate() {
        for b in &centers[i + 1..] {
            let d = a.distance_to(b);
            best = Some(best.map_or(d, |cur| cur.min(d)));
        }
    }
    best
}

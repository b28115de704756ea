use serde::{Deserialize, Serialize};

use crate::packing::bounds::bounding_box;

/// Slack allowed when checking float geometry against exact bounds.
pub const GEOMETRY_EPSILON: f64 = 1e-9;

/// Center of a single coin. The radius comes from `PackingConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Circle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A set of coin centers plus the edge-to-edge box that encloses them.
///
/// Both dimensions are measured from the origin to the far edge of the
/// outermost discs, so a packing is always anchored at `(0, 0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Packing {
    pub centers: Vec<Circle>,
    pub packing_width: f64,
    pub packing_height: f64,
}

impl Packing {
    /// A packing whose dimensions were derived analytically by a generator.
    pub fn from_parts(centers: Vec<Circle>, packing_width: f64, packing_height: f64) -> Self {
        Self {
            centers,
            packing_width,
            packing_height,
        }
    }

    /// A packing whose dimensions are measured from its centers.
    pub fn measured(centers: Vec<Circle>, radius: f64) -> Self {
        let bbox = bounding_box(&centers, radius);
        Self {
            centers,
            packing_width: bbox.width,
            packing_height: bbox.height,
        }
    }

    /// The zero-circle packing returned alongside loader failures.
    pub fn empty() -> Self {
        Self {
            centers: Vec::new(),
            packing_width: 0.0,
            packing_height: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// True when every full disc lies inside `[0, width] × [0, height]`.
    pub fn fits_bounds(&self, radius: f64) -> bool {
        self.centers.iter().all(|c| {
            c.x - radius >= -GEOMETRY_EPSILON
                && c.y - radius >= -GEOMETRY_EPSILON
                && c.x + radius <= self.packing_width + GEOMETRY_EPSILON
                && c.y + radius <= self.packing_height + GEOMETRY_EPSILON
        })
    }
}

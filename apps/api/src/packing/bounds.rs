//! Bounding-box measurement shared by every packing source.
//!
//! A packing's box runs from the origin to the far edge of its outermost discs:
//! `width = max(x) + r`, `height = max(y) + r`. Callers normalize first so the
//! near edges sit on zero.

use serde::{Deserialize, Serialize};

use crate::packing::model::Circle;

/// Width and height of the box enclosing a set of discs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const ZERO: BoundingBox = BoundingBox {
        width: 0.0,
        height: 0.0,
    };
}

/// Measures the far edges of `centers` for discs of the given radius.
///
/// An empty slice measures `0 × 0`.
pub fn bounding_box(centers: &[Circle], radius: f64) -> BoundingBox {
    if centers.is_empty() {
        return BoundingBox::ZERO;
    }
    let (max_x, max_y) = centers
        .iter()
        .fold((f64::NEG_INFINITY, f64::NEG_INFINITY), |(mx, my), c| {
            (mx.max(c.x), my.max(c.y))
        });
    BoundingBox {
        width: max_x + radius,
        height: max_y + radius,
    }
}

/// Lowest center coordinate on each axis, `None` for an empty slice.
pub fn min_corner(centers: &[Circle]) -> Option<(f64, f64)> {
    if centers.is_empty() {
        return None;
    }
    Some(
        centers
            .iter()
            .fold((f64::INFINITY, f64::INFINITY), |(mx, my), c| {
                (mx.min(c.x), my.min(c.y))
            }),
    )
}

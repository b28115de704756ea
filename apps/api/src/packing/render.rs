//! Render plan — the numbers a renderer needs to draw a packing.
//!
//! The packing's box is centered inside the reference square
//! (`offset = (side - dimension) / 2` per axis) and every circle is shifted by
//! that offset. Drawing itself stays outside this crate.

use serde::{Deserialize, Serialize};

use crate::packing::config::PackingConfig;
use crate::packing::model::{Circle, Packing};

/// Relative and absolute tolerances for treating two box dimensions as equal.
const SAME_SIZE_RTOL: f64 = 1e-5;
const SAME_SIZE_ATOL: f64 = 1e-8;

/// Slack allowed when checking that drawn discs stay inside the square.
const FIT_TOLERANCE: f64 = 1e-9;

/// `|a - b| <= atol + rtol · |b|`, with `b` the reference value.
fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= SAME_SIZE_ATOL + SAME_SIZE_RTOL * b.abs()
}

/// An axis-aligned rectangle anchored at its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// The fixed reference square.
    pub outer: Rect,
    /// The packing's bounding box after centering. `None` when it coincides with `outer`.
    pub inner: Option<Rect>,
    /// Circle centers in square coordinates.
    pub circles: Vec<Circle>,
}

impl RenderPlan {
    pub fn for_packing(packing: &Packing, config: &PackingConfig) -> Self {
        let side = config.square_side;
        let outer = Rect {
            x: 0.0,
            y: 0.0,
            width: side,
            height: side,
        };

        if packing.is_empty() {
            return Self {
                radius: config.radius(),
                offset_x: 0.0,
                offset_y: 0.0,
                outer,
                inner: None,
                circles: Vec::new(),
            };
        }

        let offset_x = (side - packing.packing_width) / 2.0;
        let offset_y = (side - packing.packing_height) / 2.0;

        let same_as_outer =
            is_close(packing.packing_width, side) && is_close(packing.packing_height, side);
        let inner = (!same_as_outer).then_some(Rect {
            x: offset_x,
            y: offset_y,
            width: packing.packing_width,
            height: packing.packing_height,
        });

        let circles = packing
            .centers
            .iter()
            .map(|c| Circle::new(c.x + offset_x, c.y + offset_y))
            .collect();

        Self {
            radius: config.radius(),
            offset_x,
            offset_y,
            outer,
            inner,
            circles,
        }
    }

    /// True when every drawn disc stays inside the reference square.
    pub fn fits_square(&self) -> bool {
        let side = self.outer.width;
        self.circles.iter().all(|c| {
            c.x - self.radius >= -FIT_TOLERANCE
                && c.y - self.radius >= -FIT_TOLERANCE
                && c.x + self.radius <= side + FIT_TOLERANCE
                && c.y + self.radius <= side + FIT_TOLERANCE
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packing::grid::generate_grid;
    use crate::packing::hexagonal::generate_hexagonal;

    #[test]
    fn test_grid_plan_has_no_offset_or_inner_box() {
        let config = PackingConfig::default();
        let plan = RenderPlan::for_packing(&generate_grid(&config), &config);
        assert_eq!(plan.offset_x, 0.0);
        assert_eq!(plan.offset_y, 0.0);
        assert!(plan.inner.is_none());
        assert_eq!(plan.circles.len(), 100);
        assert!(plan.fits_square());
    }

    #[test]
    fn test_hexagonal_plan_is_centered_vertically() {
        let config = PackingConfig::default();
        let packing = generate_hexagonal(&config);
        let plan = RenderPlan::for_packing(&packing, &config);
        assert_eq!(plan.offset_x, 0.0);
        assert!((plan.offset_y - (10.0 - packing.packing_height) / 2.0).abs() < 1e-12);
        let inner = plan.inner.expect("hexagonal box is shorter than the square");
        assert_eq!(inner.width, 10.0);
        assert!((inner.y - plan.offset_y).abs() < 1e-12);
        assert!(plan.fits_square());
    }

    #[test]
    fn test_single_circle_lands_in_center() {
        let config = PackingConfig::default();
        let packing = Packing::measured(vec![Circle::new(0.5, 0.5)], 0.5);
        let plan = RenderPlan::for_packing(&packing, &config);
        assert_eq!(plan.circles, vec![Circle::new(5.0, 5.0)]);
        assert_eq!(
            plan.inner,
            Some(Rect {
                x: 4.5,
                y: 4.5,
                width: 1.0,
                height: 1.0
            })
        );
    }

    #[test]
    fn test_near_square_packing_has_no_inner_box() {
        let config = PackingConfig::default();
        let packing = Packing::from_parts(vec![Circle::new(0.5, 0.5)], 9.99995, 10.0);
        let plan = RenderPlan::for_packing(&packing, &config);
        assert!(plan.inner.is_none());
    }

    #[test]
    fn test_is_close_bounds() {
        assert!(is_close(9.99991, 10.0));
        assert!(!is_close(9.9998, 10.0));
    }

    #[test]
    fn test_empty_packing_plan() {
        let config = PackingConfig::default();
        let plan = RenderPlan::for_packing(&Packing::empty(), &config);
        assert!(plan.circles.is_empty());
        assert!(plan.inner.is_none());
        assert_eq!(plan.outer.width, 10.0);
    }
}

//! Geometry configuration shared by every packing source.
//!
//! The reference square and the coin diameter are the only two tunables; the
//! radius and every derived offset follow from them. The configuration is passed
//! explicitly into each engine function and never mutated.

use serde::{Deserialize, Serialize};

/// Side of the reference square the packings are compared against.
pub const DEFAULT_SQUARE_SIDE: f64 = 10.0;

/// Diameter of a single coin.
pub const DEFAULT_CIRCLE_DIAMETER: f64 = 1.0;

/// Row count the published 106-circle solution is expected to contain.
pub const DEFAULT_OPTIMAL_COUNT: usize = 106;

/// Published minimal square side for 106 unit-diameter circles.
///
/// Documentation only. The loader always measures the bounding box from the
/// coordinates it actually read.
pub const LITERATURE_MIN_SIDE_106: f64 = 9.697932828;

/// Where the 106-circle coordinate table can be downloaded from.
pub const OPTIMAL_SOURCE_URL: &str = "http://www.packomania.com/txt/csq106.txt";

/// Slack added before flooring a count so quotients like `0.3 / 0.1` are not
/// truncated one short.
pub const FLOOR_EPSILON: f64 = 1e-9;

/// Floors `value`, tolerating a quotient that lands just under a whole number.
pub fn floor_count(value: f64) -> usize {
    (value + FLOOR_EPSILON).floor() as usize
}

/// Immutable geometry parameters for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackingConfig {
    pub square_side: f64,
    pub circle_diameter: f64,
}

impl PackingConfig {
    pub fn new(square_side: f64, circle_diameter: f64) -> Self {
        Self {
            square_side,
            circle_diameter,
        }
    }

    pub fn radius(&self) -> f64 {
        self.circle_diameter / 2.0
    }

    /// Number of whole diameters that fit along one side of the square.
    pub fn circles_per_side(&self) -> usize {
        floor_count(self.square_side / self.circle_diameter)
    }

    /// Vertical pitch between rows of a hexagonal packing (`√3/2 · D`).
    pub fn hex_row_height(&self) -> f64 {
        3.0_f64.sqrt() / 2.0 * self.circle_diameter
    }

    /// Area of the reference square.
    pub fn square_area(&self) -> f64 {
        self.square_side * self.square_side
    }
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SQUARE_SIDE, DEFAULT_CIRCLE_DIAMETER)
    }
}

/// Settings for the external loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderOptions {
    /// Row count the file is expected to hold. A different count is a warning.
    pub expected_count: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            expected_count: DEFAULT_OPTIMAL_COUNT,
        }
    }
}

//! Detection shapes for strike and search volumes.

use serde::{Deserialize, Serialize};

use crate::constants::{
    STRIKE_HALF_EXTENT, SUPPLY_SEARCH_HALF_X, SUPPLY_SEARCH_HALF_Y, SUPPLY_SEARCH_HALF_Z,
};
use crate::types::Position;

/// A volume positioned at a center point at query time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box described by half-extents.
    Rect {
        half_x: f64,
        half_y: f64,
        half_z: f64,
    },
    /// Ball described by its radius.
    Sphere { radius: f64 },
}

impl Shape {
    /// The fixed cubic strike shape carried by shells and burst probes.
    pub fn strike() -> Shape {
        Shape::Rect {
            half_x: STRIKE_HALF_EXTENT,
            half_y: STRIKE_HALF_EXTENT,
            half_z: STRIKE_HALF_EXTENT,
        }
    }

    /// The container search volume around a gunner.
    pub fn supply_search() -> Shape {
        Shape::Rect {
            half_x: SUPPLY_SEARCH_HALF_X,
            half_y: SUPPLY_SEARCH_HALF_Y,
            half_z: SUPPLY_SEARCH_HALF_Z,
        }
    }

    /// Whether `point` lies inside this shape centered at `center`.
    /// Boundaries are inclusive.
    pub fn contains(&self, center: &Position, point: &Position) -> bool {
        match *self {
            Shape::Rect {
                half_x,
                half_y,
                half_z,
            } => {
                (point.x - center.x).abs() <= half_x
                    && (point.y - center.y).abs() <= half_y
                    && (point.z - center.z).abs() <= half_z
            }
            Shape::Sphere { radius } => center.range_to(point) <= radius,
        }
    }
}

use std::fmt;

use crate::vector::Dimension;

/// Direction of a non-zero vector, in radians.
///
/// A 2D vector carries its angles from the positive x and y axes, measured
/// with `atan2`. A 3D vector carries its three direction cosines, the angle
/// between the vector and each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Planar { from_x: f64, from_y: f64 },
    Cosines { x: f64, y: f64, z: f64 },
}

impl Direction {
    /// `norm` must be non-zero.
    pub(crate) fn compute(components: [f64; 3], dimension: Dimension, norm: f64) -> Self {
        let [x, y, _] = components;
        match dimension {
            Dimension::Two => Direction::Planar {
                from_x: y.atan2(x),
                from_y: x.atan2(y),
            },
            Dimension::Three => {
                let [x, y, z] = Self::cosines(components, norm);
                Direction::Cosines { x, y, z }
            }
        }
    }

    /// Direction cosines of `components` viewed in 3D. `norm` must be non-zero.
    pub(crate) fn cosines(components: [f64; 3], norm: f64) -> [f64; 3] {
        components.map(|c| axis_angle(c, norm))
    }

    pub fn from_x(&self) -> f64 {
        match *self {
            Direction::Planar { from_x, .. } => from_x,
            Direction::Cosines { x, .. } => x,
        }
    }

    pub fn from_y(&self) -> f64 {
        match *self {
            Direction::Planar { from_y, .. } => from_y,
            Direction::Cosines { y, .. } => y,
        }
    }

    /// Angle from the z-axis; only 3D directions have one.
    pub fn from_z(&self) -> Option<f64> {
        match *self {
            Direction::Planar { .. } => None,
            Direction::Cosines { z, .. } => Some(z),
        }
    }

    pub fn angles(&self) -> Vec<f64> {
        match *self {
            Direction::Planar { from_x, from_y } => vec![from_x, from_y],
            Direction::Cosines { x, y, z } => vec![x, y, z],
        }
    }

    pub fn to_degrees(&self) -> Direction {
        match *self {
            Direction::Planar { from_x, from_y } => Direction::Planar {
                from_x: from_x.to_degrees(),
                from_y: from_y.to_degrees(),
            },
            Direction::Cosines { x, y, z } => Direction::Cosines {
                x: x.to_degrees(),
                y: y.to_degrees(),
                z: z.to_degrees(),
            },
        }
    }
}

// Clamped so that rounding in `component / norm` cannot leave acos's domain.
fn axis_angle(component: f64, norm: f64) -> f64 {
    (component / norm).clamp(-1.0, 1.0).acos()
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Planar { from_x, from_y } => {
                write!(f, "(x: {from_x:.4}, y: {from_y:.4})")
            }
            Direction::Cosines { x, y, z } => write!(f, "({x:.4}, {y:.4}, {z:.4})"),
        }
    }
}

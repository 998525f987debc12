use std::fmt;

use tracing::debug;

use crate::direction::Direction;
use crate::precision::round_magnitude;
use crate::{Result, VectorError};

/// Dimensionality tag carried by every [`Vector`]. Ordered `Two < Three`, so
/// `max` gives the dimensionality a mixed operation promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Two,
    Three,
}

impl Dimension {
    pub fn count(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Two => write!(f, "2D"),
            Dimension::Three => write!(f, "3D"),
        }
    }
}

/// An immutable 2D or 3D Euclidean vector.
///
/// Magnitude and direction are computed once when the vector is built and
/// read back from the cache afterwards. A 2D vector stores `z` as `0.0`, but
/// keeps its [`Dimension::Two`] tag, so `(1, 2)` and `(1, 2, 0)` are different
/// values.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    components: [f64; 3],
    dimension: Dimension,
    magnitude_squared: f64,
    norm: f64,
    magnitude: f64,
    direction: Option<Direction>,
}

impl Vector {
    pub fn new_2d(x: f64, y: f64) -> Self {
        Self::build([x, y, 0.0], Dimension::Two)
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self::build([x, y, z], Dimension::Three)
    }

    pub fn zero(dimension: Dimension) -> Self {
        Self::build([0.0; 3], dimension)
    }

    /// Builds a vector from a slice of exactly two or three components.
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y] => Ok(Self::new_2d(x, y)),
            [x, y, z] => Ok(Self::new_3d(x, y, z)),
            _ => Err(VectorError::InvalidDimension(components.len())),
        }
    }

    /// Builds a vector of the given dimensionality. For 2D, `z` is ignored.
    pub(crate) fn with_dimension(x: f64, y: f64, z: f64, dimension: Dimension) -> Self {
        match dimension {
            Dimension::Two => Self::new_2d(x, y),
            Dimension::Three => Self::new_3d(x, y, z),
        }
    }

    fn build(components: [f64; 3], dimension: Dimension) -> Self {
        let [x, y, z] = components;
        let magnitude_squared = x * x + y * y + z * z;
        // hypot avoids the overflow/underflow of squaring huge or tiny components.
        let norm = x.hypot(y).hypot(z);
        let direction = if norm == 0.0 {
            None
        } else {
            Some(Direction::compute(components, dimension, norm))
        };

        Self {
            components,
            dimension,
            magnitude_squared,
            norm,
            magnitude: round_magnitude(norm),
            direction,
        }
    }

    pub fn x(&self) -> f64 {
        self.components[0]
    }

    pub fn y(&self) -> f64 {
        self.components[1]
    }

    /// The z component, `0.0` for a 2D vector.
    pub fn z(&self) -> f64 {
        self.components[2]
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is_planar(&self) -> bool {
        self.dimension == Dimension::Two
    }

    pub fn is_3d(&self) -> bool {
        self.dimension == Dimension::Three
    }

    pub fn components(&self) -> &[f64] {
        &self.components[..self.dimension.count()]
    }

    /// Magnitude rounded to [`MAGNITUDE_PRECISION`](crate::MAGNITUDE_PRECISION)
    /// decimal digits. Ordering comparisons use this value.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Sum of squared components. Unlike [`norm`](Self::norm), this can
    /// overflow to infinity for components beyond about `1e154`.
    pub fn magnitude_squared(&self) -> f64 {
        self.magnitude_squared
    }

    /// Unrounded Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.norm
    }

    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }

    pub fn direction(&self) -> Result<Direction> {
        self.direction.ok_or_else(|| {
            debug!(operation = "direction", vector = %self, "direction of zero vector requested");
            VectorError::UndefinedDirection {
                operation: "direction",
            }
        })
    }

    /// Angle from the positive x-axis. For a 3D vector this is the first
    /// direction cosine.
    pub fn dir_x(&self) -> Result<f64> {
        self.direction().map(|d| d.from_x())
    }

    /// Angle from the positive y-axis.
    pub fn dir_y(&self) -> Result<f64> {
        self.direction().map(|d| d.from_y())
    }

    /// Direction cosines of the vector promoted to 3D.
    pub fn direction_cosines(&self) -> Result<[f64; 3]> {
        self.direction()?;
        Ok(Direction::cosines(self.components, self.norm))
    }

    /// The same vector viewed in 3D, with `z = 0` for a 2D input.
    pub fn to_3d(&self) -> Vector {
        match self.dimension {
            Dimension::Three => *self,
            Dimension::Two => Self::new_3d(self.x(), self.y(), 0.0),
        }
    }
}

/// Exact relation: same dimensionality and identical components.
impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.components == other.components
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dimension {
            Dimension::Two => write!(f, "({}, {})", self.x(), self.y()),
            Dimension::Three => write!(f, "({}, {}, {})", self.x(), self.y(), self.z()),
        }
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new_2d(x, y)
    }
}

impl From<(f64, f64, f64)> for Vector {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new_3d(x, y, z)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new_2d(x, y)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new_3d(x, y, z)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(components: &[f64]) -> Result<Self> {
        Self::from_slice(components)
    }
}

//! Equality and magnitude ordering between vectors.
//!
//! Equality is exact and component-wise. Ordering looks only at the cached,
//! rounded magnitude, so `Vector` does not implement `PartialOrd`: two
//! different vectors may be neither smaller nor larger than each other.
//! `less_or_equal` is `less_than || equals`, not `<=` on magnitude, while
//! `greater_or_equal` is `>=` on magnitude.
//!
//! Operands must share a dimensionality; comparing a 2D vector with a 3D one
//! is a [`VectorError::TypeMismatch`].

use tracing::debug;

use crate::vector::Vector;
use crate::{Result, VectorError};

fn check_comparable(operation: &'static str, a: &Vector, b: &Vector) -> Result<()> {
    if a.dimension() != b.dimension() {
        debug!(
            operation,
            lhs = %a,
            rhs = %b,
            "cannot compare vectors of different dimensionality"
        );
        return Err(VectorError::TypeMismatch {
            operation,
            lhs: a.dimension(),
            rhs: b.dimension(),
        });
    }
    Ok(())
}

impl Vector {
    pub fn equals(&self, other: &Vector) -> Result<bool> {
        check_comparable("equals", self, other)?;
        Ok(self == other)
    }

    pub fn not_equals(&self, other: &Vector) -> Result<bool> {
        check_comparable("not_equals", self, other)?;
        Ok(self != other)
    }

    pub fn less_than(&self, other: &Vector) -> Result<bool> {
        check_comparable("less_than", self, other)?;
        Ok(self.magnitude() < other.magnitude())
    }

    pub fn greater_than(&self, other: &Vector) -> Result<bool> {
        check_comparable("greater_than", self, other)?;
        Ok(self.magnitude() > other.magnitude())
    }

    pub fn less_or_equal(&self, other: &Vector) -> Result<bool> {
        check_comparable("less_or_equal", self, other)?;
        Ok(self.magnitude() < other.magnitude() || self == other)
    }

    pub fn greater_or_equal(&self, other: &Vector) -> Result<bool> {
        check_comparable("greater_or_equal", self, other)?;
        Ok(self.magnitude() >= other.magnitude())
    }
}

//! Arithmetic on [`Vector`].
//!
//! Mixed 2D/3D operands are promoted: the 2D operand's missing `z` is taken
//! as zero and the result has the higher dimensionality. Multiplying two
//! vectors with `*` is not provided; use [`Vector::dot`] or [`Vector::cross`].

use std::ops::{Add, Mul, Neg, Sub};

use tracing::debug;

use crate::vector::Vector;
use crate::{Result, VectorError};

/// Component-wise sum, promoting to the higher dimensionality.
pub fn add(a: &Vector, b: &Vector) -> Vector {
    combine(a, b, |l, r| l + r)
}

/// Component-wise difference, promoting to the higher dimensionality.
pub fn subtract(a: &Vector, b: &Vector) -> Vector {
    combine(a, b, |l, r| l - r)
}

fn combine(a: &Vector, b: &Vector, op: impl Fn(f64, f64) -> f64) -> Vector {
    Vector::with_dimension(
        op(a.x(), b.x()),
        op(a.y(), b.y()),
        op(a.z(), b.z()),
        a.dimension().max(b.dimension()),
    )
}

impl Vector {
    pub fn scale(&self, k: f64) -> Vector {
        Vector::with_dimension(self.x() * k, self.y() * k, self.z() * k, self.dimension())
    }

    /// Sum of component products. A 2D operand contributes `z = 0`.
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Standard 3D cross product. Both operands must be 3D.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        if !self.is_3d() || !other.is_3d() {
            debug!(
                operation = "cross",
                lhs = %self.dimension(),
                rhs = %other.dimension(),
                "cross product needs two 3D vectors"
            );
            return Err(VectorError::TypeMismatch {
                operation: "cross",
                lhs: self.dimension(),
                rhs: other.dimension(),
            });
        }

        Ok(Vector::new_3d(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ))
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    pub fn angle(&self, other: &Vector) -> Result<f64> {
        if self.is_zero() || other.is_zero() {
            debug!(
                operation = "angle",
                lhs = %self,
                rhs = %other,
                "angle with a zero vector is undefined"
            );
            return Err(VectorError::UndefinedDirection { operation: "angle" });
        }

        let cos = self.normalized()?.dot(&other.normalized()?);
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Unit vector with the same direction and dimensionality.
    pub fn normalized(&self) -> Result<Vector> {
        if self.is_zero() {
            debug!(operation = "normalize", vector = %self, "cannot normalize a zero vector");
            return Err(VectorError::DivisionByZero {
                operation: "normalize",
            });
        }

        let norm = self.norm();
        Ok(Vector::with_dimension(
            self.x() / norm,
            self.y() / norm,
            self.z() / norm,
            self.dimension(),
        ))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        add(&self, &rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        subtract(&self, &rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs.scale(self)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Dimension;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_add_same_dimension() {
        assert_eq!(
            Vector::new_2d(1.0, 2.0) + Vector::new_2d(3.0, -1.0),
            Vector::new_2d(4.0, 1.0)
        );
        assert_eq!(
            Vector::new_3d(1.0, 2.0, 3.0) + Vector::new_3d(1.0, 1.0, 1.0),
            Vector::new_3d(2.0, 3.0, 4.0)
        );
    }

    #[test]
    fn test_mixed_dimension_promotes_to_3d() {
        let planar = Vector::new_2d(1.0, 1.0);
        let spatial = Vector::new_3d(1.0, 1.0, 1.0);

        assert_eq!(planar + spatial, Vector::new_3d(2.0, 2.0, 1.0));
        assert_eq!(spatial + planar, Vector::new_3d(2.0, 2.0, 1.0));
        assert_eq!(planar - spatial, Vector::new_3d(0.0, 0.0, -1.0));
        assert_eq!(spatial - planar, Vector::new_3d(0.0, 0.0, 1.0));
        assert_eq!(add(&planar, &spatial), planar + spatial);
        assert_eq!(subtract(&planar, &spatial), planar - spatial);
    }

    #[test]
    fn test_scale_keeps_dimension() {
        let v = Vector::new_2d(1.5, -2.0);
        assert_eq!(v * 2.0, Vector::new_2d(3.0, -4.0));
        assert_eq!(2.0 * v, Vector::new_2d(3.0, -4.0));
        assert_eq!(-v, Vector::new_2d(-1.5, 2.0));
        assert!((v * 0.0).is_zero());
    }

    #[test]
    fn test_dot() {
        let i = Vector::new_3d(1.0, 0.0, 0.0);
        let j = Vector::new_3d(0.0, 1.0, 0.0);
        assert_eq!(i.dot(&j), 0.0);
        assert_eq!(
            Vector::new_3d(1.0, 2.0, 3.0).dot(&Vector::new_3d(4.0, -5.0, 6.0)),
            12.0
        );
        assert_eq!(Vector::new_2d(1.0, 2.0).dot(&Vector::new_3d(3.0, 4.0, 5.0)), 11.0);
    }

    #[test]
    fn test_cross_of_basis_vectors() {
        let i = Vector::new_3d(1.0, 0.0, 0.0);
        let j = Vector::new_3d(0.0, 1.0, 0.0);
        let k = Vector::new_3d(0.0, 0.0, 1.0);

        assert_eq!(i.cross(&j).unwrap(), k);
        assert_eq!(j.cross(&k).unwrap(), i);
        assert_eq!(k.cross(&i).unwrap(), j);
        assert_eq!(j.cross(&i).unwrap(), -k);
    }

    #[test]
    fn test_cross_rejects_planar_operand() {
        let planar = Vector::new_2d(1.0, 0.0);
        let spatial = Vector::new_3d(0.0, 1.0, 0.0);

        let err = planar.cross(&spatial).unwrap_err();
        assert_eq!(
            err,
            VectorError::TypeMismatch {
                operation: "cross",
                lhs: Dimension::Two,
                rhs: Dimension::Three,
            }
        );
        assert!(spatial.cross(&planar).is_err());
        assert!(planar.cross(&planar).is_err());
    }

    #[test]
    fn test_angle() {
        let i = Vector::new_3d(1.0, 0.0, 0.0);
        let j = Vector::new_3d(0.0, 1.0, 0.0);
        assert_relative_eq!(i.angle(&j).unwrap(), FRAC_PI_2);
        assert_relative_eq!(i.angle(&-i).unwrap(), PI);
        assert_relative_eq!(i.angle(&i).unwrap(), 0.0);
        assert_relative_eq!(
            Vector::new_2d(1.0, 1.0).angle(&Vector::new_2d(1.0, 0.0)).unwrap(),
            FRAC_PI_4,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_angle_with_zero_vector_is_undefined() {
        let zero = Vector::zero(Dimension::Three);
        let v = Vector::new_3d(1.0, 2.0, 3.0);
        assert_eq!(
            v.angle(&zero).unwrap_err(),
            VectorError::UndefinedDirection { operation: "angle" }
        );
        assert!(zero.angle(&v).is_err());
    }

    #[test]
    fn test_normalized() {
        let v = Vector::new_2d(3.0, 4.0).normalized().unwrap();
        assert!(v.is_planar());
        assert_relative_eq!(v.x(), 0.6);
        assert_relative_eq!(v.y(), 0.8);
        assert_eq!(v.magnitude(), 1.0);

        let diagonal = Vector::new_3d(1.0, 1.0, 1.0).normalized().unwrap();
        assert_relative_eq!(diagonal.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        for _ in 0..3 {
            let err = Vector::new_3d(0.0, 0.0, 0.0).normalized().unwrap_err();
            assert_eq!(
                err,
                VectorError::DivisionByZero {
                    operation: "normalize"
                }
            );
        }
        assert!(Vector::zero(Dimension::Two).normalized().is_err());
    }

    #[test]
    fn test_angle_of_huge_vectors() {
        let a = Vector::new_3d(1e200, 0.0, 0.0);
        let b = Vector::new_3d(1e200, 1e200, 0.0);
        assert_relative_eq!(a.angle(&b).unwrap(), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(a.angle(&-a).unwrap(), PI);
    }

    #[test]
    fn test_mixed_dimension_promotion_uses_ord_max() {
        assert_eq!(Dimension::Two.max(Dimension::Three), Dimension::Three);
        assert_eq!(Dimension::Two.max(Dimension::Two), Dimension::Two);
        assert!((Vector::new_2d(1.0, 2.0) + Vector::new_2d(1.0, 1.0)).is_planar());
    }
}

use std::fmt::Debug;

use crate::FieldElement;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::{G1, G2, Gt};

/// Elliptic curve point abstraction for G1 and G2 groups.
///
/// This trait provides operations on elliptic curve points in projective
/// coordinates.
///
/// # Type Parameters
///
/// - `F`: The scalar field type used for scalar multiplication
///
/// # Example
///
/// ```rust
/// use bibe::{CurvePoint, FieldElement, Fr, G1};
///
/// let scalar = Fr::from_u64(5);
///
/// // Point operations
/// let g = G1::generator();
/// let point = g.mul_scalar(&scalar);
/// let doubled = point.add(&point);
/// assert_eq!(doubled, g.mul_scalar(&Fr::from_u64(10)));
/// assert!(CurvePoint::is_identity(&point.add(&point.negate())));
/// ```
pub trait CurvePoint<F: FieldElement>:
    Clone + Copy + Send + Sync + Debug + PartialEq + Eq + 'static
{
    /// Returns the point at infinity (identity element).
    fn identity() -> Self;

    /// Returns the standard generator for this group.
    fn generator() -> Self;

    /// Checks if this point is the identity element.
    fn is_identity(&self) -> bool;

    /// Performs elliptic curve point addition.
    fn add(&self, other: &Self) -> Self;

    /// Performs elliptic curve point subtraction.
    fn sub(&self, other: &Self) -> Self;

    /// Returns the additive inverse of this point.
    fn negate(&self) -> Self;

    /// Performs scalar multiplication: returns `scalar * self`.
    fn mul_scalar(&self, scalar: &F) -> Self;

    /// Computes `∑ scalars[i] * points[i]`.
    ///
    /// Callers must pass slices of equal length.
    fn multi_scalar_multiplication(points: &[Self], scalars: &[F]) -> Self;
}

/// Pairing target group (GT) abstraction.
///
/// This trait represents the target group of the pairing operation, which is
/// a multiplicative subgroup of the extension field. `combine` is the group
/// operation and `mul_scalar` is exponentiation.
pub trait TargetGroup: Clone + Send + Sync + Debug + PartialEq + 'static {
    /// Scalar field type for scalar multiplication.
    type Scalar: FieldElement + Copy;

    /// Returns the neutral element.
    fn identity() -> Self;

    /// Performs scalar multiplication (exponentiation in multiplicative notation).
    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self;

    /// Combines (multiplies) two target group elements.
    fn combine(&self, other: &Self) -> Self;

    /// Returns the inverse under `combine`.
    fn inverse(&self) -> Self;
}

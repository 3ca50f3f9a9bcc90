//! blst-backed curve groups for BLS12-381.
//!
//! Implements [`CurvePoint`] for the projective G1/G2 points of `blstrs` and
//! [`TargetGroup`] for its `Gt`. Note that `blstrs` writes the target group
//! additively, so `combine` is `+` and exponentiation is `*`.
//!
//! Compiled when the Cargo feature `blst` is enabled.

use blstrs::{G1Projective, G2Projective, Gt as BlstGt, Scalar};
use group::Group;

use crate::{CurvePoint, TargetGroup};

pub type G1 = G1Projective;
pub type G2 = G2Projective;
pub type Gt = BlstGt;

impl CurvePoint<Scalar> for G1 {
    fn identity() -> Self {
        <G1Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G1Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        *self + other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        *self * scalar
    }

    fn multi_scalar_multiplication(points: &[Self], scalars: &[Scalar]) -> Self {
        debug_assert_eq!(
            points.len(),
            scalars.len(),
            "points and scalars must have the same length"
        );
        if points.is_empty() {
            return <G1Projective as Group>::identity();
        }
        G1Projective::multi_exp(points, scalars)
    }
}

impl CurvePoint<Scalar> for G2 {
    fn identity() -> Self {
        <G2Projective as Group>::identity()
    }

    fn generator() -> Self {
        <G2Projective as Group>::generator()
    }

    fn is_identity(&self) -> bool {
        <Self as Group>::is_identity(self).into()
    }

    fn add(&self, other: &Self) -> Self {
        *self + other
    }

    fn sub(&self, other: &Self) -> Self {
        *self - other
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn mul_scalar(&self, scalar: &Scalar) -> Self {
        *self * scalar
    }

    fn multi_scalar_multiplication(points: &[Self], scalars: &[Scalar]) -> Self {
        debug_assert_eq!(
            points.len(),
            scalars.len(),
            "points and scalars must have the same length"
        );
        if points.is_empty() {
            return <G2Projective as Group>::identity();
        }
        G2Projective::multi_exp(points, scalars)
    }
}

impl TargetGroup for Gt {
    type Scalar = Scalar;

    fn identity() -> Self {
        <Gt as Group>::identity()
    }

    fn mul_scalar(&self, scalar: &Self::Scalar) -> Self {
        *self * scalar
    }

    fn combine(&self, other: &Self) -> Self {
        *self + other
    }

    fn inverse(&self) -> Self {
        -*self
    }
}

use std::fmt::Debug;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::PairingEngine;

use crate::{BackendError, CurvePoint, FieldElement, TargetGroup};

/// Main backend trait that ties together all group operations.
///
/// This is the primary trait a concrete backend (currently [`PairingEngine`]
/// over blstrs) implements. It aggregates the scalar, curve and target
/// group types and provides the pairing itself.
///
/// # Example
///
/// ```rust
/// use bibe::{CurvePoint, FieldElement, Fr, PairingBackend, PairingEngine, TargetGroup};
///
/// type G1 = <PairingEngine as PairingBackend>::G1;
/// type G2 = <PairingEngine as PairingBackend>::G2;
///
/// let a = Fr::from_u64(3);
/// let b = Fr::from_u64(11);
///
/// // Bilinearity: e(a*P, b*Q) = e(P, Q)^(ab)
/// let lhs = PairingEngine::pairing(&G1::generator().mul_scalar(&a), &G2::generator().mul_scalar(&b));
/// let rhs = PairingEngine::pairing(&G1::generator(), &G2::generator()).mul_scalar(&(a * b));
/// assert_eq!(lhs, rhs);
/// ```
pub trait PairingBackend: Send + Sync + Debug + Sized + 'static {
    /// Scalar field type (Fr).
    type Scalar: FieldElement;
    /// First curve group (G1).
    type G1: CurvePoint<Self::Scalar>;
    /// Second curve group (G2).
    type G2: CurvePoint<Self::Scalar>;
    /// Pairing target group (GT).
    type Target: TargetGroup<Scalar = Self::Scalar>;

    /// Computes the bilinear pairing: `e(g1, g2) -> GT`.
    ///
    /// The pairing satisfies bilinearity: `e(a*P, b*Q) = e(P, Q)^(ab)`.
    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target;

    /// Computes a product of pairings: `∏ e(g1[i], g2[i])`.
    ///
    /// This is more efficient than computing individual pairings and multiplying.
    /// Returns an error if the input arrays have different lengths.
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, BackendError>;
}

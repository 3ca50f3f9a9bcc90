use std::fmt::Debug;

use rand_core::RngCore;
use zeroize::{DefaultIsZeroes, Zeroizing};

use crate::BackendError;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::Fr;

/// Upper bound on rejection-sampling rounds before a byte source is declared broken.
///
/// A well-behaved source is rejected with probability below 0.55 per round, so
/// reaching this bound means the source is stuck rather than unlucky.
pub const MAX_SAMPLING_ATTEMPTS: usize = 256;

/// Field element abstraction for scalar field operations.
///
/// This trait abstracts over the scalar field Fr of the pairing group, providing
/// the operations the polynomial engine, the Lagrange helpers and the batch
/// scheme need.
///
/// # Example
///
/// ```rust
/// use rand::thread_rng;
/// use bibe::{FieldElement, Fr};
///
/// let mut rng = thread_rng();
/// let a = Fr::try_random(&mut rng).expect("working rng");
///
/// let inv = a.invert().expect("non-zero element");
/// assert_eq!(a * inv, Fr::one());
///
/// // Canonical 32-byte big-endian encoding
/// let bytes = a.to_repr();
/// let recovered = Fr::from_repr(&bytes).expect("valid repr");
/// assert_eq!(a, recovered);
/// ```
pub trait FieldElement:
    Clone + Copy + Default + Send + Sync + Debug + PartialEq + Eq + 'static
{
    /// Byte representation type (a 32-byte array for bls12-381 scalars).
    type Repr: AsRef<[u8]> + AsMut<[u8]> + Default + Debug + Send + Sync + Clone + 'static;

    /// Returns the additive identity (zero) element.
    fn zero() -> Self;

    /// Returns the multiplicative identity (one) element.
    fn one() -> Self;

    /// Interprets 32 uniformly random bytes as a candidate field element.
    ///
    /// Returns `None` when the candidate is not below the modulus, in which
    /// case the caller draws fresh bytes. Accepted candidates are uniform in
    /// the field.
    fn from_random_bytes(bytes: &[u8; 32]) -> Option<Self>;

    /// Samples a uniform field element, propagating RNG failures.
    fn try_random<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, BackendError> {
        let mut bytes = Zeroizing::new([0u8; 32]);
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            rng.try_fill_bytes(bytes.as_mut_slice())
                .map_err(|err| BackendError::Randomness(err.to_string()))?;
            if let Some(value) = Self::from_random_bytes(&bytes) {
                return Ok(value);
            }
        }
        Err(BackendError::Randomness(
            "rejection sampling did not converge; rng output is not uniform".into(),
        ))
    }

    /// Computes the multiplicative inverse, returning `None` for zero.
    fn invert(&self) -> Option<Self>;

    /// Serializes this field element to its canonical byte representation.
    fn to_repr(&self) -> Self::Repr;

    /// Deserializes a field element from its byte representation.
    ///
    /// Returns an error if the representation is not reduced modulo the field order.
    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError>;

    /// Performs batch inversion of a slice of field elements.
    ///
    /// Fails without touching the slice if any element is zero.
    fn batch_inversion(elements: &mut [Self]) -> Result<(), BackendError>;

    /// Convert u64 to self.
    fn from_u64(n: u64) -> Self;
}

/// A field element holding secret material.
///
/// Zeroizes through [`DefaultIsZeroes`], so it can sit in a
/// [`Zeroizing`] buffer or be wiped in place with `zeroize()`. It carries no
/// `Debug` impl so it cannot end up in log output.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct SecretScalar<F: FieldElement>(pub F);

impl<F: FieldElement> DefaultIsZeroes for SecretScalar<F> {}

/// Hashes an arbitrary message to a uniform field element.
///
/// The message is absorbed by BLAKE3 in key-derivation mode under `domain`, and
/// the extendable output is fed through the same rejection sampler as
/// [`FieldElement::try_random`]. Distinct domains give independent mappings.
pub fn hash_to_field<F: FieldElement>(domain: &str, msg: &[u8]) -> Result<F, BackendError> {
    let mut hasher = blake3::Hasher::new_derive_key(domain);
    hasher.update(msg);
    let mut reader = hasher.finalize_xof();

    let mut bytes = [0u8; 32];
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        reader.fill(&mut bytes);
        if let Some(value) = F::from_random_bytes(&bytes) {
            return Ok(value);
        }
    }
    Err(BackendError::Math("hash output never landed in the scalar field"))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::test_utils::{FailingRng, StuckRng};

    #[test]
    fn try_random_produces_distinct_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Fr::try_random(&mut rng).unwrap();
        let b = Fr::try_random(&mut rng).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn try_random_propagates_rng_failure() {
        let err = Fr::try_random(&mut FailingRng).unwrap_err();
        assert!(matches!(err, BackendError::Randomness(_)));
    }

    #[test]
    fn try_random_gives_up_on_stuck_source() {
        // 0xff..ff with the top bit cleared is still above the modulus.
        let err = Fr::try_random(&mut StuckRng(0xff)).unwrap_err();
        assert!(matches!(err, BackendError::Randomness(_)));
    }

    #[test]
    fn try_random_returns_first_accepted_candidate() {
        let mut source = StdRng::seed_from_u64(8);
        let mut replay = source.clone();
        let sampled = Fr::try_random(&mut source).unwrap();

        let mut expected = None;
        while expected.is_none() {
            let mut bytes = [0u8; 32];
            replay.fill_bytes(&mut bytes);
            expected = Fr::from_random_bytes(&bytes);
        }
        assert_eq!(Some(sampled), expected);
    }

    #[test]
    fn secret_scalar_zeroizes_to_field_zero() {
        use zeroize::Zeroize;

        let mut secret = SecretScalar(Fr::from_u64(0xdead_beef));
        secret.zeroize();
        assert!(secret == SecretScalar(Fr::zero()));

        let mut buffer = Zeroizing::new(vec![SecretScalar(Fr::one()); 3]);
        buffer.zeroize();
        assert!(buffer.is_empty());
    }

    #[test]
    fn repr_roundtrip_and_rejects_unreduced() {
        let x = Fr::from_u64(0x1234_5678);
        let bytes = x.to_repr();
        assert_eq!(bytes.as_ref()[31], 0x78);
        assert_eq!(Fr::from_repr(&bytes).unwrap(), x);

        // The all-ones string is far above the 255-bit modulus.
        let too_big = [0xffu8; 32];
        assert!(Fr::from_repr(&too_big).is_err());
    }

    #[test]
    fn batch_inversion_inverts_every_element() {
        let originals: Vec<Fr> = (1..=5).map(Fr::from_u64).collect();
        let mut inverted = originals.clone();
        Fr::batch_inversion(&mut inverted).unwrap();
        for (a, a_inv) in originals.iter().zip(inverted.iter()) {
            assert_eq!(*a * a_inv, Fr::one());
        }
    }

    #[test]
    fn batch_inversion_rejects_zero() {
        let mut elements = vec![Fr::from_u64(3), Fr::zero()];
        assert!(Fr::batch_inversion(&mut elements).is_err());
        assert_eq!(elements[0], Fr::from_u64(3));
    }

    #[test]
    fn hash_to_field_is_deterministic_and_domain_separated() {
        let a: Fr = hash_to_field("bibe test domain A", b"alice").unwrap();
        let again: Fr = hash_to_field("bibe test domain A", b"alice").unwrap();
        let other_domain: Fr = hash_to_field("bibe test domain B", b"alice").unwrap();
        let other_msg: Fr = hash_to_field("bibe test domain A", b"bob").unwrap();
        assert_eq!(a, again);
        assert_ne!(a, other_domain);
        assert_ne!(a, other_msg);
    }
}

//! blst-backed scalar field for BLS12-381.
//!
//! Implements [`FieldElement`] for `blstrs::Scalar`. Compiled when the Cargo
//! feature `blst` is enabled.

use blstrs::Scalar;
use ff::Field;
use zeroize::Zeroizing;

use crate::{BackendError, FieldElement};

pub type Fr = Scalar;

impl FieldElement for Scalar {
    type Repr = [u8; 32];

    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn from_random_bytes(bytes: &[u8; 32]) -> Option<Self> {
        // The modulus is just under 2^255: clearing the top bit keeps
        // the acceptance rate above 45%.
        let mut le = Zeroizing::new(*bytes);
        le[31] &= 0x7f;
        Option::<Scalar>::from(Scalar::from_bytes_le(&le))
    }

    fn invert(&self) -> Option<Self> {
        Field::invert(self).into()
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_bytes_be()
    }

    fn from_repr(repr: &Self::Repr) -> Result<Self, BackendError> {
        Option::<Scalar>::from(Scalar::from_bytes_be(repr))
            .ok_or(BackendError::Serialization("invalid scalar bytes"))
    }

    fn batch_inversion(elements: &mut [Self]) -> Result<(), BackendError> {
        use ff::BatchInvert;

        if elements.is_empty() {
            return Ok(());
        }

        // Check for zero elements before batch inversion
        for elem in elements.iter() {
            if bool::from(elem.is_zero()) {
                return Err(BackendError::Math("cannot invert zero element"));
            }
        }

        // Montgomery's trick
        elements.iter_mut().batch_invert();

        Ok(())
    }

    fn from_u64(n: u64) -> Self {
        Scalar::from(n)
    }
}

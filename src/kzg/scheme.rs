use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::instrument;
use zeroize::Zeroizing;

use crate::errors::{BackendError, Error};
use crate::{
    CurvePoint, DensePolynomial, Fr, PairingBackend, Polynomial, SecretScalar, TargetGroup,
};

/// Powers of a trapdoor `tau` encoded in G2: `[τ^1]_2, ..., [τ^B]_2`.
///
/// The sequence length `B` is the batch capacity fixed at setup. The zeroth
/// power is the public generator and is not stored.
#[derive(Debug)]
pub struct PowersOfTau<B: PairingBackend<Scalar = Fr>> {
    pub powers_of_h: Vec<B::G2>,
}

impl<B: PairingBackend<Scalar = Fr>> Clone for PowersOfTau<B> {
    fn clone(&self) -> Self {
        Self {
            powers_of_h: self.powers_of_h.clone(),
        }
    }
}

/// `τ^1, ..., τ^n` in a buffer that is wiped when dropped.
///
/// The full capacity is reserved before the first push, so the buffer never
/// reallocates and leaves a stale copy behind.
fn tau_powers(tau: &Fr, n: usize) -> Zeroizing<Vec<SecretScalar<Fr>>> {
    let mut powers = Zeroizing::new(Vec::with_capacity(n));
    let mut cur = Zeroizing::new(SecretScalar(*tau));
    for _ in 0..n {
        powers.push(*cur);
        cur.0 *= tau;
    }
    powers
}

impl<B: PairingBackend<Scalar = Fr>> PowersOfTau<B> {
    /// Derives `[τ^i]_2` for `i = 1..=max_degree` from the trapdoor itself.
    ///
    /// Powers are accumulated in the field (`τ^{i+1} = τ^i · τ`) and each one
    /// is lifted with a single fixed-base multiplication; the group elements
    /// are never derived from one another. The caller is responsible for
    /// destroying `tau` afterwards.
    #[instrument(level = "debug", skip_all, fields(max_degree = max_degree))]
    pub fn new_unsafe(tau: &Fr, max_degree: usize) -> Result<Self, Error> {
        if max_degree < 1 {
            return Err(Error::InvalidParameter(
                "powers of tau need a capacity of at least one".into(),
            ));
        }

        let h = B::G2::generator();
        let powers_of_tau = tau_powers(tau, max_degree);

        let powers_of_h: Vec<B::G2> = powers_of_tau
            .par_iter()
            .map(|power| h.mul_scalar(&power.0))
            .collect();

        Ok(PowersOfTau { powers_of_h })
    }

    /// Number of stored powers, i.e. the largest supported degree.
    pub fn max_degree(&self) -> usize {
        self.powers_of_h.len()
    }

    /// Commits to `polynomial` in G2: `c_0·h + Σ_{i≥1} c_i·[τ^i]_2 = [p(τ)]_2`.
    ///
    /// Trailing zero coefficients do not count towards the degree bound.
    pub fn commit_g2(&self, polynomial: &DensePolynomial) -> Result<B::G2, BackendError> {
        let mut trimmed = polynomial.clone();
        trimmed.normalize();
        let Some((constant, higher)) = trimmed.coeffs().split_first() else {
            return Ok(B::G2::identity());
        };
        if higher.len() > self.powers_of_h.len() {
            return Err(BackendError::Math("polynomial degree too large"));
        }
        let head = B::G2::generator().mul_scalar(constant);
        if higher.is_empty() {
            return Ok(head);
        }

        let tail = B::G2::multi_scalar_multiplication(&self.powers_of_h[..higher.len()], higher);
        Ok(head.add(&tail))
    }

    /// Checks that consecutive entries are powers of the same `τ` whose G1
    /// encoding is `tau_g1`.
    ///
    /// It checks `e([τ]_1, h) = e(g, [τ]_2)` to anchor the sequence, then
    /// `e([τ]_1, [τ^i]_2) = e(g, [τ^{i+1}]_2)` for every `i`. Each equation
    /// is its own two-term pairing product, so the cost is one final
    /// exponentiation per stored power.
    pub fn verify(&self, tau_g1: &B::G1) -> Result<bool, BackendError> {
        let Some(first) = self.powers_of_h.first() else {
            return Ok(false);
        };
        let g = B::G1::generator();
        let h = B::G2::generator();
        let neg_g = g.negate();

        let anchor = B::multi_pairing(&[*tau_g1, neg_g], &[h, *first])?;
        if anchor != <B::Target as TargetGroup>::identity() {
            return Ok(false);
        }

        for window in self.powers_of_h.windows(2) {
            let check = B::multi_pairing(&[*tau_g1, neg_g], &[window[0], window[1]])?;
            if check != <B::Target as TargetGroup>::identity() {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use zeroize::Zeroize;

    use super::*;
    use crate::FieldElement;

    #[test]
    fn tau_powers_fill_reserved_buffer_exactly() {
        let tau = Fr::from_u64(7);
        let powers = tau_powers(&tau, 4);

        assert_eq!(powers.len(), 4);
        assert_eq!(powers.capacity(), 4);
        let mut expected = tau;
        for power in powers.iter() {
            assert!(power.0 == expected);
            expected *= tau;
        }
    }

    #[test]
    fn tau_powers_buffer_wipes_its_contents() {
        let tau = Fr::from_u64(11);
        let mut powers = tau_powers(&tau, 3);
        powers.iter_mut().for_each(Zeroize::zeroize);
        assert!(powers.iter().all(|power| power.0 == Fr::zero()));
    }
}

//! Lagrange basis coefficients for threshold reconstruction.
//!
//! For an index set `S` of small integers (participant or batch positions)
//! and an evaluation point `x`, the basis coefficient of `i ∈ S` is
//!
//! ```text
//! Δ_{i,S}(x) = ∏_{j ∈ S, j ≠ i} (x - j) / (i - j)
//! ```
//!
//! with every index cast into the scalar field. Indices are `u64`, which is
//! far below the scalar field modulus, so two distinct indices can never
//! collide after reduction. Repeated indices, or an `i` outside `S`, are
//! rejected as degenerate input.
//!
//! Beyond the single coefficient, this module offers:
//!
//! - [`lagrange_coefficients`]: all coefficients of `S` with one batch inversion
//! - [`share_secret`]: Shamir sharing on top of [`DensePolynomial::random_with_constant`]
//! - [`interpolate_at`]: scalar reconstruction from `(index, value)` shares
//! - [`interpolate_in_exponent`]: the same reconstruction for group-element shares
//!
//! # Example
//!
//! ```rust
//! use bibe::{FieldElement, Fr, lagrange_basis};
//!
//! // Δ_{1,{1,2,3}}(0) = (0-2)(0-3) / ((1-2)(1-3)) = 3
//! let coeff = lagrange_basis(1, &[1, 2, 3], &Fr::zero())?;
//! assert_eq!(coeff, Fr::from_u64(3));
//! # Ok::<(), bibe::Error>(())
//! ```

use std::collections::HashSet;

use rand_core::RngCore;
use tracing::instrument;

use crate::errors::Error;
use crate::{CurvePoint, DensePolynomial, FieldElement, Fr, Polynomial};

fn ensure_distinct(indices: &[u64]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(indices.len());
    for &idx in indices {
        if !seen.insert(idx) {
            return Err(Error::DegenerateInput(format!(
                "index {idx} appears more than once"
            )));
        }
    }
    Ok(())
}

/// Computes `Δ_{i,S}(x)`.
///
/// At `x = i` the result is exactly one, at any other member of `S` it is
/// exactly zero.
///
/// # Errors
///
/// - [`Error::DegenerateInput`] if `set` contains a repeated index or does not contain `i`
pub fn lagrange_basis(i: u64, set: &[u64], x: &Fr) -> Result<Fr, Error> {
    ensure_distinct(set)?;
    if !set.contains(&i) {
        return Err(Error::DegenerateInput(format!(
            "index {i} is not a member of the interpolation set"
        )));
    }

    let i_scalar = Fr::from_u64(i);
    let mut numerator = Fr::one();
    let mut denominator = Fr::one();
    for &j in set.iter().filter(|&&j| j != i) {
        let j_scalar = Fr::from_u64(j);
        numerator *= *x - j_scalar;
        denominator *= i_scalar - j_scalar;
    }

    let denominator_inv = denominator
        .invert()
        .ok_or_else(|| Error::DegenerateInput("interpolation indices collide".into()))?;
    Ok(numerator * denominator_inv)
}

/// Computes `Δ_{i,S}(x)` for every `i ∈ S`, in the order of `set`.
///
/// Shares the numerator work and inverts all denominators at once.
#[instrument(level = "trace", skip_all, fields(size = set.len()))]
pub fn lagrange_coefficients(set: &[u64], x: &Fr) -> Result<Vec<Fr>, Error> {
    ensure_distinct(set)?;
    let points: Vec<Fr> = set.iter().map(|&j| Fr::from_u64(j)).collect();

    let mut denominators: Vec<Fr> = points
        .iter()
        .enumerate()
        .map(|(k, p_i)| {
            points
                .iter()
                .enumerate()
                .filter(|(m, _)| *m != k)
                .fold(Fr::one(), |acc, (_, p_j)| acc * (p_i - p_j))
        })
        .collect();
    Fr::batch_inversion(&mut denominators)?;

    let numerators = points.iter().enumerate().map(|(k, _)| {
        points
            .iter()
            .enumerate()
            .filter(|(m, _)| *m != k)
            .fold(Fr::one(), |acc, (_, p_j)| acc * (*x - p_j))
    });

    Ok(numerators
        .zip(denominators)
        .map(|(num, den_inv)| num * den_inv)
        .collect())
}

/// Splits `secret` into `parties` Shamir shares, any `threshold` of which recover it.
///
/// Share `k` is the evaluation of a random polynomial with constant term
/// `secret` at index `k`, for `k = 1..=parties`.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] unless `1 <= threshold <= parties`
/// - [`Error::Randomness`] if the RNG fails
#[instrument(level = "debug", skip_all, fields(threshold = threshold, parties = parties))]
pub fn share_secret<R: RngCore + ?Sized>(
    rng: &mut R,
    secret: &Fr,
    threshold: usize,
    parties: usize,
) -> Result<Vec<(u64, Fr)>, Error> {
    if threshold == 0 || threshold > parties {
        return Err(Error::InvalidParameter(
            "threshold must be within [1, parties]".into(),
        ));
    }
    let poly = DensePolynomial::random_with_constant(rng, threshold, *secret)?;
    Ok((1..=parties as u64)
        .map(|idx| (idx, poly.evaluate(&Fr::from_u64(idx))))
        .collect())
}

/// Evaluates at `x` the unique polynomial through the given `(index, value)` shares.
///
/// With `x = 0` this reconstructs a Shamir secret.
pub fn interpolate_at(shares: &[(u64, Fr)], x: &Fr) -> Result<Fr, Error> {
    let indices: Vec<u64> = shares.iter().map(|(idx, _)| *idx).collect();
    let coefficients = lagrange_coefficients(&indices, x)?;
    Ok(shares
        .iter()
        .zip(coefficients)
        .fold(Fr::zero(), |acc, ((_, value), lambda)| acc + *value * lambda))
}

/// Recombines group-element shares `(index, value·P)` into `f(x)·P`.
///
/// This is [`interpolate_at`] carried out in the exponent with a single
/// multi-scalar multiplication.
pub fn interpolate_in_exponent<P: CurvePoint<Fr>>(shares: &[(u64, P)], x: &Fr) -> Result<P, Error> {
    let indices: Vec<u64> = shares.iter().map(|(idx, _)| *idx).collect();
    let coefficients = lagrange_coefficients(&indices, x)?;
    let points: Vec<P> = shares.iter().map(|(_, point)| *point).collect();
    Ok(P::multi_scalar_multiplication(&points, &coefficients))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::G1;

    #[test]
    fn basis_at_zero_for_small_set() {
        let coeff = lagrange_basis(1, &[1, 2, 3], &Fr::zero()).unwrap();
        assert_eq!(coeff, Fr::from_u64(3));
    }

    #[test]
    fn basis_is_kronecker_delta_on_the_set() {
        let set = [1u64, 4, 5, 9, 12];
        for &i in &set {
            for &j in &set {
                let value = lagrange_basis(i, &set, &Fr::from_u64(j)).unwrap();
                if i == j {
                    assert_eq!(value, Fr::one());
                } else {
                    assert_eq!(value, Fr::zero());
                }
            }
        }
    }

    #[test]
    fn singleton_set_gives_one_everywhere() {
        let value = lagrange_basis(7, &[7], &Fr::from_u64(1000)).unwrap();
        assert_eq!(value, Fr::one());
    }

    #[test]
    fn basis_rejects_degenerate_sets() {
        assert!(matches!(
            lagrange_basis(1, &[1, 2, 2], &Fr::zero()),
            Err(Error::DegenerateInput(_))
        ));
        assert!(matches!(
            lagrange_basis(4, &[1, 2, 3], &Fr::zero()),
            Err(Error::DegenerateInput(_))
        ));
    }

    #[test]
    fn batch_coefficients_match_single_basis() {
        let set = [2u64, 3, 5, 8];
        let x = Fr::from_u64(11);
        let batch = lagrange_coefficients(&set, &x).unwrap();
        for (&i, lambda) in set.iter().zip(batch.iter()) {
            assert_eq!(*lambda, lagrange_basis(i, &set, &x).unwrap());
        }
    }

    #[test]
    fn coefficients_sum_to_one() {
        // Interpolating the constant polynomial 1 must give 1 anywhere.
        let set = [1u64, 2, 3, 4, 5, 6];
        let x = Fr::from_u64(77);
        let sum = lagrange_coefficients(&set, &x)
            .unwrap()
            .into_iter()
            .fold(Fr::zero(), |acc, c| acc + c);
        assert_eq!(sum, Fr::one());
    }

    #[test]
    fn shamir_roundtrip_with_any_threshold_subset() {
        let mut rng = StdRng::seed_from_u64(2024);
        let secret = Fr::try_random(&mut rng).unwrap();
        let shares = share_secret(&mut rng, &secret, 3, 5).unwrap();
        assert_eq!(shares.len(), 5);

        for subset in [[0usize, 1, 2], [0, 2, 4], [1, 3, 4], [2, 3, 4]] {
            let picked: Vec<(u64, Fr)> = subset.iter().map(|&k| shares[k]).collect();
            assert_eq!(interpolate_at(&picked, &Fr::zero()).unwrap(), secret);
        }

        // Two shares of a degree-two polynomial do not pin down the secret.
        let too_few = &shares[..2];
        assert_ne!(interpolate_at(too_few, &Fr::zero()).unwrap(), secret);
    }

    #[test]
    fn share_secret_validates_threshold() {
        let mut rng = StdRng::seed_from_u64(0);
        let secret = Fr::one();
        assert!(matches!(
            share_secret(&mut rng, &secret, 0, 3),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            share_secret(&mut rng, &secret, 4, 3),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn interpolation_in_exponent_matches_scalar_interpolation() {
        let mut rng = StdRng::seed_from_u64(5);
        let secret = Fr::try_random(&mut rng).unwrap();
        let shares = share_secret(&mut rng, &secret, 2, 4).unwrap();

        let g = G1::generator();
        let lifted: Vec<(u64, G1)> = shares
            .iter()
            .skip(1)
            .take(2)
            .map(|(idx, value)| (*idx, g.mul_scalar(value)))
            .collect();
        let recovered = interpolate_in_exponent(&lifted, &Fr::zero()).unwrap();
        assert_eq!(recovered, g.mul_scalar(&secret));
    }

    #[test]
    fn interpolation_rejects_duplicate_indices() {
        let shares = [(1u64, Fr::one()), (1, Fr::from_u64(2))];
        assert!(matches!(
            interpolate_at(&shares, &Fr::zero()),
            Err(Error::DegenerateInput(_))
        ));
    }
}

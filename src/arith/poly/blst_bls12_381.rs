use ff::Field;
use rand_core::RngCore;

use crate::{BackendError, FieldElement, Fr, Polynomial};

/// Dense coefficient-form polynomial over the BLS12-381 scalar field.
///
/// Coefficients are stored constant term first. The zero polynomial is the
/// empty vector; trailing zeros are kept until [`DensePolynomial::normalize`]
/// is called.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DensePolynomial {
    pub coeffs: Vec<Fr>,
}

impl Polynomial<Fr> for DensePolynomial {
    fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    fn evaluate(&self, point: &Fr) -> Fr {
        // Horner: fold from the leading coefficient down. Starting from zero
        // makes the empty polynomial evaluate to zero.
        self.coeffs
            .iter()
            .rev()
            .fold(Fr::ZERO, |acc, coeff| acc * point + coeff)
    }

    fn from_coefficients_vec(coeffs: Vec<Fr>) -> Self {
        DensePolynomial { coeffs }
    }
}

impl DensePolynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        DensePolynomial { coeffs: Vec::new() }
    }

    /// Number of stored coefficients, including trailing zeros.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true when every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| bool::from(c.is_zero()))
    }

    /// Strips trailing zero coefficients. The zero polynomial becomes empty.
    pub fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(|c| bool::from(c.is_zero())) {
            self.coeffs.pop();
        }
    }

    /// Builds the monic polynomial `∏ (X - r)` over `roots`.
    ///
    /// Each root is one convolution pass producing a fresh coefficient vector
    /// one longer than the previous: `next[i] = prev[i-1] - r * prev[i]`.
    /// An empty root set yields the constant `1`.
    ///
    /// Repeated roots are not rejected here and produce repeated factors.
    pub fn from_roots(roots: &[Fr]) -> Self {
        let coeffs = roots.iter().fold(vec![Fr::ONE], |prev, root| {
            (0..=prev.len())
                .map(|i| {
                    let shifted = if i == 0 { Fr::ZERO } else { prev[i - 1] };
                    let scaled = prev.get(i).map_or(Fr::ZERO, |c| c * root);
                    shifted - scaled
                })
                .collect()
        });
        DensePolynomial { coeffs }
    }

    /// Samples a polynomial with `size` coefficients whose constant term is
    /// `constant`; the remaining `size - 1` coefficients are uniform.
    ///
    /// `size == 0` yields the zero polynomial. Randomness failures abort
    /// without returning a partial polynomial.
    pub fn random_with_constant<R: RngCore + ?Sized>(
        rng: &mut R,
        size: usize,
        constant: Fr,
    ) -> Result<Self, BackendError> {
        if size == 0 {
            return Ok(Self::zero());
        }
        let mut coeffs = Vec::with_capacity(size);
        coeffs.push(constant);
        for _ in 1..size {
            coeffs.push(Fr::try_random(rng)?);
        }
        Ok(DensePolynomial { coeffs })
    }
}

//! Polynomial operations and abstractions.
//!
//! This module provides the univariate polynomial engine used by the Lagrange
//! helpers (secret sharing) and by the batch digest (vanishing polynomials).
//!
//! # Polynomial Representation
//!
//! Polynomials are represented in **coefficient form** with coefficients in ascending order:
//! - `p(x) = c_0 + c_1*x + c_2*x^2 + ... + c_n*x^n`
//! - Stored as `[c_0, c_1, c_2, ..., c_n]`
//!
//! The zero polynomial is the empty coefficient vector. No operation strips
//! trailing zeros except [`DensePolynomial::normalize`], and evaluation is
//! insensitive to such padding.
//!
//! # Example
//!
//! ```rust
//! use bibe::{DensePolynomial, FieldElement, Fr, Polynomial};
//!
//! // (X - 2)(X - 3) = 6 - 5X + X^2
//! let roots = [Fr::from_u64(2), Fr::from_u64(3)];
//! let poly = DensePolynomial::from_roots(&roots);
//!
//! assert_eq!(poly.degree(), 2);
//! assert_eq!(poly.evaluate(&Fr::from_u64(2)), Fr::zero());
//! assert_eq!(poly.evaluate(&Fr::zero()), Fr::from_u64(6));
//! ```

use std::fmt::Debug;

use crate::FieldElement;

#[cfg(feature = "blst")]
mod blst_bls12_381;
#[cfg(feature = "blst")]
pub use blst_bls12_381::DensePolynomial;

/// Polynomial interface for univariate polynomials.
pub trait Polynomial<F: FieldElement>: Clone + Send + Sync + Debug + 'static {
    /// Returns `len - 1` for the stored coefficients (0 for the empty polynomial).
    fn degree(&self) -> usize;

    /// Returns the coefficients in ascending order (constant term first).
    fn coeffs(&self) -> &[F];

    /// Evaluates the polynomial at the given point using Horner's method.
    fn evaluate(&self, point: &F) -> F;

    /// Constructs a polynomial from its coefficients (ascending order).
    fn from_coefficients_vec(coeffs: Vec<F>) -> Self;
}

//! Arithmetic layer: scalar field, curve groups, pairing, polynomials, Lagrange.
//!
//! This module provides trait abstractions for the algebra the batch scheme is
//! built on, together with their blstrs BLS12-381 implementation and the
//! backend-independent polynomial and interpolation routines.
//!
//! # Architecture
//!
//! - **[`field`]**: Scalar field operations (Fr) - fallible sampling, inversion, encoding
//! - **[`group`]**: Elliptic curve point operations (G1, G2, GT) - addition, scalar multiplication
//! - **[`pairing`]**: Bilinear pairing operations - `e(G1, G2) -> GT`
//! - **[`poly`]**: Polynomial operations - vanishing polynomials, Horner evaluation, random sharing polynomials
//! - **[`lagrange`]**: Lagrange basis coefficients and threshold reconstruction
//!
//! # Backend Support
//!
//! | Feature | Backend | Curve |
//! |---------|---------|-------|
//! | `blst` (default) | blstrs | BLS12-381 |
//!
//! # Example
//!
//! ```rust
//! use rand::thread_rng;
//! use bibe::{CurvePoint, FieldElement, PairingBackend, PairingEngine};
//!
//! // Field operations
//! let mut rng = thread_rng();
//! let scalar = <PairingEngine as PairingBackend>::Scalar::try_random(&mut rng).expect("rng");
//! let inv = scalar.invert().expect("non-zero scalar");
//!
//! // Curve operations
//! let g1 = <PairingEngine as PairingBackend>::G1::generator();
//! let point = g1.mul_scalar(&scalar);
//!
//! // Pairing operation
//! let g2 = <PairingEngine as PairingBackend>::G2::generator();
//! let gt = PairingEngine::pairing(&point, &g2);
//! println!("{:?}", gt);
//! ```

mod field;
pub use self::field::*;

mod group;
pub use self::group::*;

mod pairing;
pub use self::pairing::*;

mod poly;
pub use self::poly::*;

mod lagrange;
pub use self::lagrange::*;

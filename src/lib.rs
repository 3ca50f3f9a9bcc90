//! # bibe: batch identity-based encryption over BLS12-381
//!
//! `bibe` implements the public-key half of a batch identity-based encryption
//! scheme together with the field polynomial engine it is built on.
//!
//! ## Overview
//!
//! A setup authority fixes a batch capacity `B` and samples a master secret.
//! The public parameters contain the G2 powers of the trapdoor `τ`, a handful
//! of G1 encodings, and the masking key `e(g1, g2)^α`. Anyone can then encrypt
//! a target-group message to an identity within a batch (epoch), and anyone can
//! compress a batch of up to `B` distinct identities into a single digest: a
//! commitment to the polynomial vanishing exactly on that batch.
//!
//! ## Architecture
//!
//! - **arith**: Trait abstractions for the scalar field, the curve groups and
//!   the pairing, their blstrs implementation, dense polynomials (vanishing
//!   polynomials, Horner evaluation, random sharing polynomials) and the
//!   Lagrange basis.
//!
//! - **kzg**: [`PowersOfTau`], the structured reference string, with
//!   commitment and pairing-based well-formedness checks.
//!
//! - **bibe**: The [`BatchEncryption`] trait and its [`BatchIbeScheme`]
//!   implementation, master keys, ciphertexts and the [`BatchDigest`].
//!
//! - **config**: [`BatchParameters`], the serde-friendly setup description.
//!
//! - **[`errors`]**: Error types for backend and scheme operations.
//!
//! ## Quick Example
//!
//! ```rust
//! use bibe::{
//!     BatchEncryption, BatchIbeScheme, BatchLabel, CurvePoint, FieldElement, Fr, G1, G2,
//!     Identity, PairingBackend, PairingEngine,
//! };
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = StdRng::seed_from_u64(7);
//! let scheme = BatchIbeScheme::<PairingEngine>::new();
//!
//! // Setup and master key generation for batches of up to 4 identities
//! let params = scheme.setup(4)?;
//! let keys = scheme.keygen(&mut rng, &params)?;
//!
//! // Encrypt a target-group message to one identity in batch 12
//! let message = PairingEngine::pairing(&G1::generator().mul_scalar(&Fr::from_u64(5)), &G2::generator());
//! let identity = Identity::from_bytes(b"alice@example.org")?;
//! let label = BatchLabel::from(12);
//! let ciphertext = scheme.encrypt(&mut rng, &keys.public_key, &message, &identity, &label)?;
//! assert!(!CurvePoint::is_identity(&ciphertext.ct1));
//!
//! // Digest of the whole batch
//! let batch = [identity, Identity::from(2), Identity::from(3)];
//! let digest = scheme.digest(&keys.public_key, &batch)?;
//! assert_eq!(digest.batch_size, 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - **`blst`** (default): blstrs backend for BLS12-381
//!
//! ## Security Considerations
//!
//! - **Trusted Setup**: Whoever runs `keygen` learns `τ` and `α`. The
//!   [`MasterSecretKey`] is wiped on drop, but any copy of the RNG seed (see
//!   [`BatchIbeScheme::keygen_from_seed`]) recovers it.
//! - **Distinct Identities**: A batch digest rejects repeated identities;
//!   a repeated root would merge two batch slots.

#[cfg(not(feature = "blst"))]
compile_error!("bibe requires the `blst` feature");

mod arith;
mod bibe;
mod config;
pub mod errors;
mod kzg;

#[cfg(test)]
mod test_utils;

pub use arith::*;
pub use bibe::*;
pub use config::*;
pub use errors::*;
pub use kzg::*;

//! Batch identity-based encryption.
//!
//! This module implements the public-key side of a batch IBE scheme over a
//! powers-of-tau structured reference string. A message is encrypted to one
//! identity slot of one batch (epoch); the batch itself is summarized by a
//! commitment to the vanishing polynomial of its identities.
//!
//! # Protocol Overview
//!
//! 1. **Setup** ([`BatchEncryption::setup`]): validate the batch capacity `B`.
//!
//! 2. **Key Generation** ([`BatchEncryption::keygen`]): sample the master
//!    secret `(τ, w, v, h, α)` and publish `[τ^1]_2 ... [τ^B]_2`,
//!    `[τ]_1, [w]_1, [wτ]_1, [v]_1, [h]_1` and `e(g1, g2)^α`.
//!
//! 3. **Encryption** ([`BatchEncryption::encrypt`]): mask a target-group
//!    message under a fresh scalar `s`, binding it to an identity and a batch label.
//!
//! 4. **Digest** ([`BatchEncryption::digest`]): commit to `∏ (X - id_k)` over
//!    a batch of distinct identities.
//!
//! Decryption and batch key derivation are left to the layer above.

use core::fmt::Debug;

use rand_core::RngCore;

use crate::{BatchParameters, Fr, PairingBackend, errors::Error};

mod scheme;
pub use scheme::BatchIbeScheme;

mod keys;
pub use keys::{MasterKeyPair, MasterPublicKey, MasterSecretKey};

mod ciphertext;
pub use ciphertext::Ciphertext;

mod digest;
pub use digest::{BatchDigest, BatchLabel, Identity, vanishing_coefficients};

/// High-level batch encryption interface.
///
/// Every method is a pure function of its inputs plus the supplied RNG; no
/// state is kept between calls, so a scheme value can be shared across
/// threads.
pub trait BatchEncryption<B: PairingBackend<Scalar = Fr>>: Debug + Send + Sync + 'static {
    /// Validates the batch capacity and returns the setup parameters.
    fn setup(&self, capacity: usize) -> Result<BatchParameters, Error>;

    /// Samples a fresh master secret and derives the public parameters.
    ///
    /// Each call uses independent trapdoors. Fails atomically if any of the
    /// secret scalars cannot be sampled.
    fn keygen<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &BatchParameters,
    ) -> Result<MasterKeyPair<B>, Error>;

    /// Encrypts a target-group `message` to `identity` within the batch `label`.
    fn encrypt<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        public_key: &MasterPublicKey<B>,
        message: &B::Target,
        identity: &Identity,
        label: &BatchLabel,
    ) -> Result<Ciphertext<B>, Error>;

    /// Commits to the vanishing polynomial of a batch of distinct identities.
    fn digest(
        &self,
        public_key: &MasterPublicKey<B>,
        identities: &[Identity],
    ) -> Result<BatchDigest<B>, Error>;
}

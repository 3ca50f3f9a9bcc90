use core::marker::PhantomData;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::RngCore;
use tracing::instrument;

use crate::{
    BatchDigest, BatchEncryption, BatchLabel, BatchParameters, Ciphertext, Fr, Identity,
    MasterKeyPair, MasterPublicKey, PairingBackend, TargetGroup,
    arith::{CurvePoint, FieldElement},
    bibe::keys::generate_master_keys,
    errors::Error,
};

/// The batch identity-based encryption scheme.
#[derive(Debug)]
pub struct BatchIbeScheme<B: PairingBackend> {
    _phantom: PhantomData<B>,
}

impl<B: PairingBackend> BatchIbeScheme<B> {
    /// Creates a new scheme instance.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<B: PairingBackend> Default for BatchIbeScheme<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PairingBackend<Scalar = Fr>> BatchIbeScheme<B> {
    /// Deterministic `KeyGen` driven by a ChaCha20 stream seeded with `seed`.
    ///
    /// Anyone holding the seed can recompute the master secret. Use this for
    /// test vectors and reproducible fixtures only.
    pub fn keygen_from_seed(
        &self,
        params: &BatchParameters,
        seed: [u8; 32],
    ) -> Result<MasterKeyPair<B>, Error> {
        let mut rng = ChaCha20Rng::from_seed(seed);
        self.keygen(&mut rng, params)
    }
}

impl<B: PairingBackend<Scalar = Fr>> BatchEncryption<B> for BatchIbeScheme<B> {
    #[instrument(level = "info", skip_all, fields(capacity = capacity))]
    fn setup(&self, capacity: usize) -> Result<BatchParameters, Error> {
        BatchParameters::new(capacity)
    }

    #[instrument(level = "info", skip_all, fields(capacity = params.capacity))]
    fn keygen<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        params: &BatchParameters,
    ) -> Result<MasterKeyPair<B>, Error> {
        generate_master_keys(rng, params)
    }

    #[instrument(level = "debug", skip_all)]
    fn encrypt<R: RngCore + ?Sized>(
        &self,
        rng: &mut R,
        public_key: &MasterPublicKey<B>,
        message: &B::Target,
        identity: &Identity,
        label: &BatchLabel,
    ) -> Result<Ciphertext<B>, Error> {
        let s = Fr::try_random(rng)?;
        let g = B::G1::generator();

        // ct1 = [s]_1
        let ct1 = g.mul_scalar(&s);

        // ct2 = s*[w*tau]_1 - (s*id)*[w]_1
        let ct2 = public_key
            .w_tau_g1
            .mul_scalar(&s)
            .sub(&public_key.w_g1.mul_scalar(&(s * identity.0)));

        // ct3 = s*([v]_1 + label*[h]_1)
        let ct3 = public_key
            .v_g1
            .add(&public_key.h_g1.mul_scalar(&label.0))
            .mul_scalar(&s);

        // ct4 = e(g1, g2)^(alpha*s) * m
        let ct4 = public_key.e_gg_alpha.mul_scalar(&s).combine(message);

        Ok(Ciphertext { ct1, ct2, ct3, ct4 })
    }

    fn digest(
        &self,
        public_key: &MasterPublicKey<B>,
        identities: &[Identity],
    ) -> Result<BatchDigest<B>, Error> {
        BatchDigest::commit(public_key, identities)
    }
}

use core::fmt;

use rand_core::RngCore;
use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::{
    BatchParameters, CurvePoint, FieldElement, Fr, PairingBackend, PowersOfTau, SecretScalar, TargetGroup,
    errors::Error,
};

/// Master secret of the batch scheme: the trapdoor `τ` and the scalars
/// `w`, `v`, `h`, `α`.
///
/// Held by the setup authority only. The value cannot be cloned, its `Debug`
/// output is redacted, and every scalar is overwritten with zero when it is
/// dropped.
pub struct MasterSecretKey<B: PairingBackend> {
    pub(crate) tau: SecretScalar<B::Scalar>,
    pub(crate) w: SecretScalar<B::Scalar>,
    pub(crate) v: SecretScalar<B::Scalar>,
    pub(crate) h: SecretScalar<B::Scalar>,
    pub(crate) alpha: SecretScalar<B::Scalar>,
}

impl<B: PairingBackend> MasterSecretKey<B> {
    fn empty() -> Self {
        Self {
            tau: SecretScalar::default(),
            w: SecretScalar::default(),
            v: SecretScalar::default(),
            h: SecretScalar::default(),
            alpha: SecretScalar::default(),
        }
    }

    /// Samples all five scalars.
    ///
    /// Partially filled keys are wiped on the error path.
    pub(crate) fn sample<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, Error> {
        let mut key = Self::empty();
        key.tau = SecretScalar(B::Scalar::try_random(rng)?);
        key.w = SecretScalar(B::Scalar::try_random(rng)?);
        key.v = SecretScalar(B::Scalar::try_random(rng)?);
        key.h = SecretScalar(B::Scalar::try_random(rng)?);
        key.alpha = SecretScalar(B::Scalar::try_random(rng)?);
        Ok(key)
    }

    /// The SRS trapdoor `τ`.
    pub fn tau(&self) -> &B::Scalar {
        &self.tau.0
    }

    pub fn w(&self) -> &B::Scalar {
        &self.w.0
    }

    pub fn v(&self) -> &B::Scalar {
        &self.v.0
    }

    pub fn h(&self) -> &B::Scalar {
        &self.h.0
    }

    /// The message-masking exponent `α`.
    pub fn alpha(&self) -> &B::Scalar {
        &self.alpha.0
    }
}

impl<B: PairingBackend> Zeroize for MasterSecretKey<B> {
    fn zeroize(&mut self) {
        self.tau.zeroize();
        self.w.zeroize();
        self.v.zeroize();
        self.h.zeroize();
        self.alpha.zeroize();
    }
}

impl<B: PairingBackend> Drop for MasterSecretKey<B> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<B: PairingBackend> ZeroizeOnDrop for MasterSecretKey<B> {}

impl<B: PairingBackend> fmt::Debug for MasterSecretKey<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterSecretKey { .. }")
    }
}

/// Public parameters of the batch scheme.
///
/// # Fields
///
/// - `powers`: `[τ^1]_2 ... [τ^B]_2`, where `B` is the setup capacity
/// - `tau_g1`, `w_g1`, `w_tau_g1`, `v_g1`, `h_g1`: G1 encodings of `τ`, `w`, `w·τ`, `v`, `h`
/// - `e_gg_alpha`: `e(g1, g2)^α`, the message-masking key
#[derive(Debug)]
pub struct MasterPublicKey<B: PairingBackend<Scalar = Fr>> {
    pub powers: PowersOfTau<B>,
    pub tau_g1: B::G1,
    pub w_g1: B::G1,
    pub w_tau_g1: B::G1,
    pub v_g1: B::G1,
    pub h_g1: B::G1,
    pub e_gg_alpha: B::Target,
}

impl<B: PairingBackend<Scalar = Fr>> Clone for MasterPublicKey<B> {
    fn clone(&self) -> Self {
        Self {
            powers: self.powers.clone(),
            tau_g1: self.tau_g1,
            w_g1: self.w_g1,
            w_tau_g1: self.w_tau_g1,
            v_g1: self.v_g1,
            h_g1: self.h_g1,
            e_gg_alpha: self.e_gg_alpha.clone(),
        }
    }
}

impl<B: PairingBackend<Scalar = Fr>> MasterPublicKey<B> {
    /// Derives the public parameters from the master secret with one
    /// fixed-base multiplication per element.
    #[instrument(level = "debug", skip_all, fields(capacity = capacity))]
    pub(crate) fn derive(secret: &MasterSecretKey<B>, capacity: usize) -> Result<Self, Error> {
        let g = B::G1::generator();
        let powers = PowersOfTau::new_unsafe(secret.tau(), capacity)?;
        let e_gh = B::pairing(&g, &B::G2::generator());
        let w_tau = Zeroizing::new(SecretScalar(*secret.w() * secret.tau()));

        Ok(MasterPublicKey {
            powers,
            tau_g1: g.mul_scalar(secret.tau()),
            w_g1: g.mul_scalar(secret.w()),
            w_tau_g1: g.mul_scalar(&w_tau.0),
            v_g1: g.mul_scalar(secret.v()),
            h_g1: g.mul_scalar(secret.h()),
            e_gg_alpha: e_gh.mul_scalar(secret.alpha()),
        })
    }

    /// Maximum number of identities a batch digest can cover.
    pub fn capacity(&self) -> usize {
        self.powers.max_degree()
    }

    /// Pairing-based consistency check of the published parameters.
    ///
    /// Checks the powers-of-tau chain against `tau_g1` and that `w_tau_g1`
    /// really is `w·τ` in G1: `e([w]_1, [τ]_2) = e([wτ]_1, h)`.
    pub fn verify(&self) -> Result<bool, Error> {
        if !self.powers.verify(&self.tau_g1)? {
            return Ok(false);
        }
        let Some(tau_g2) = self.powers.powers_of_h.first() else {
            return Ok(false);
        };
        let check = B::multi_pairing(
            &[self.w_g1, self.w_tau_g1.negate()],
            &[*tau_g2, B::G2::generator()],
        )?;
        Ok(check == <B::Target as TargetGroup>::identity())
    }
}

/// Output of `KeyGen`: the master secret and the matching public parameters.
#[derive(Debug)]
pub struct MasterKeyPair<B: PairingBackend<Scalar = Fr>> {
    pub secret_key: MasterSecretKey<B>,
    pub public_key: MasterPublicKey<B>,
}

/// Samples a master secret and derives its public parameters.
///
/// Every scalar is drawn before any group element is computed, so a failing
/// RNG leaves nothing behind.
pub(crate) fn generate_master_keys<B: PairingBackend<Scalar = Fr>, R: RngCore + ?Sized>(
    rng: &mut R,
    params: &BatchParameters,
) -> Result<MasterKeyPair<B>, Error> {
    params.validate()?;
    let secret_key = MasterSecretKey::<B>::sample(rng)?;
    let public_key = MasterPublicKey::derive(&secret_key, params.capacity)?;
    Ok(MasterKeyPair {
        secret_key,
        public_key,
    })
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{FieldElement, PairingEngine};
    use crate::test_utils::FailAfterRng;

    #[test]
    fn zeroize_clears_every_scalar() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut key = MasterSecretKey::<PairingEngine>::sample(&mut rng).unwrap();
        assert_ne!(*key.tau(), Fr::zero());

        key.zeroize();
        for scalar in [key.tau(), key.w(), key.v(), key.h(), key.alpha()] {
            assert_eq!(*scalar, Fr::zero());
        }
    }

    #[test]
    fn debug_output_is_redacted() {
        let mut rng = StdRng::seed_from_u64(22);
        let key = MasterSecretKey::<PairingEngine>::sample(&mut rng).unwrap();
        assert_eq!(format!("{key:?}"), "MasterSecretKey { .. }");
    }

    #[test]
    fn sampling_fails_whole_when_any_draw_fails() {
        for successful_draws in 0..5 {
            let mut rng = FailAfterRng::new(successful_draws);
            let err = MasterSecretKey::<PairingEngine>::sample(&mut rng).unwrap_err();
            assert!(matches!(err, Error::Randomness(_)));
        }
    }

    #[test]
    fn derived_public_key_verifies() {
        let mut rng = StdRng::seed_from_u64(23);
        let params = BatchParameters::new(3).unwrap();
        let pair = generate_master_keys::<PairingEngine, _>(&mut rng, &params).unwrap();
        assert!(pair.public_key.verify().unwrap());
        assert_eq!(pair.public_key.capacity(), 3);

        let sk = &pair.secret_key;
        let g = <PairingEngine as PairingBackend>::G1::generator();
        assert_eq!(pair.public_key.w_tau_g1, g.mul_scalar(&(*sk.w() * sk.tau())));
    }

    #[test]
    fn verify_rejects_inconsistent_w_tau() {
        let mut rng = StdRng::seed_from_u64(24);
        let params = BatchParameters::new(2).unwrap();
        let mut pair = generate_master_keys::<PairingEngine, _>(&mut rng, &params).unwrap();
        pair.public_key.w_tau_g1 = pair.public_key.w_g1;
        assert!(!pair.public_key.verify().unwrap());
    }
}

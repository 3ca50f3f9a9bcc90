//! Batch identities, batch labels and the batch digest.
//!
//! A batch of identities is compressed into the vanishing polynomial
//! `∏ (X - id_k)`, whose root set is exactly the batch. The digest commits to
//! that polynomial against the G2 powers of tau.
//!
//! Consuming the digest during decryption is not part of this crate; the
//! commitment is exposed so a decryptor can be layered on top.

use std::collections::HashSet;

use tracing::instrument;

use crate::{
    DensePolynomial, FieldElement, Fr, MasterPublicKey, PairingBackend, errors::Error,
    hash_to_field,
};

const IDENTITY_DOMAIN: &str = "bibe 2026-10 identity to scalar";
const LABEL_DOMAIN: &str = "bibe 2026-10 batch label to scalar";

/// A single identity admitted into a batch, as a scalar field element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identity(pub Fr);

impl Identity {
    /// Maps an arbitrary byte string (e-mail address, account id, ...) to an identity.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(Identity(hash_to_field(IDENTITY_DOMAIN, bytes)?))
    }
}

impl From<Fr> for Identity {
    fn from(value: Fr) -> Self {
        Identity(value)
    }
}

impl From<u64> for Identity {
    fn from(value: u64) -> Self {
        Identity(Fr::from_u64(value))
    }
}

/// Identifies the batch (epoch) a ciphertext belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchLabel(pub Fr);

impl BatchLabel {
    /// Maps an arbitrary byte string (block height, epoch name, ...) to a label.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Ok(BatchLabel(hash_to_field(LABEL_DOMAIN, bytes)?))
    }
}

impl From<Fr> for BatchLabel {
    fn from(value: Fr) -> Self {
        BatchLabel(value)
    }
}

impl From<u64> for BatchLabel {
    fn from(value: u64) -> Self {
        BatchLabel(Fr::from_u64(value))
    }
}

/// Coefficients of `∏ (X - id_k)` over the batch.
///
/// # Errors
///
/// - [`Error::DegenerateInput`] if two identities coincide, since a repeated
///   root would silently merge two batch slots
pub fn vanishing_coefficients(identities: &[Identity]) -> Result<DensePolynomial, Error> {
    let mut seen = HashSet::with_capacity(identities.len());
    for (position, identity) in identities.iter().enumerate() {
        if !seen.insert(identity.0.to_repr()) {
            return Err(Error::DegenerateInput(format!(
                "identity at position {position} repeats an earlier identity"
            )));
        }
    }
    let roots: Vec<Fr> = identities.iter().map(|id| id.0).collect();
    Ok(DensePolynomial::from_roots(&roots))
}

/// Succinct commitment to a batch: `[P(τ)]_2` for the batch's vanishing polynomial `P`.
#[derive(Debug)]
pub struct BatchDigest<B: PairingBackend<Scalar = Fr>> {
    pub commitment: B::G2,
    pub batch_size: usize,
}

impl<B: PairingBackend<Scalar = Fr>> Clone for BatchDigest<B> {
    fn clone(&self) -> Self {
        Self {
            commitment: self.commitment,
            batch_size: self.batch_size,
        }
    }
}

impl<B: PairingBackend<Scalar = Fr>> BatchDigest<B> {
    /// Commits to the vanishing polynomial of `identities`.
    ///
    /// # Errors
    ///
    /// - [`Error::DegenerateInput`] on repeated identities
    /// - [`Error::InvalidParameter`] if the batch is larger than the setup capacity
    #[instrument(level = "debug", skip_all, fields(batch_size = identities.len()))]
    pub fn commit(public_key: &MasterPublicKey<B>, identities: &[Identity]) -> Result<Self, Error> {
        if identities.len() > public_key.capacity() {
            return Err(Error::InvalidParameter(format!(
                "batch of {} identities exceeds capacity {}",
                identities.len(),
                public_key.capacity()
            )));
        }
        let polynomial = vanishing_coefficients(identities)?;
        let commitment = public_key.powers.commit_g2(&polynomial)?;
        Ok(BatchDigest {
            commitment,
            batch_size: identities.len(),
        })
    }
}

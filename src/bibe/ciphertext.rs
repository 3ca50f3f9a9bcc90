use crate::{Fr, PairingBackend};

/// Batch IBE ciphertext bound to one identity slot and one batch label.
///
/// # Fields
///
/// - `ct1`: `[s]_1`, the randomization anchor
/// - `ct2`: `s·[wτ]_1 - (s·id)·[w]_1`, the identity binding
/// - `ct3`: `s·([v]_1 + label·[h]_1)`, the batch binding
/// - `ct4`: `e(g1, g2)^{α·s} · m`, the masked message
///
/// Every encryption uses a fresh `s`; ciphertexts are never modified after
/// construction.
#[derive(Debug)]
pub struct Ciphertext<B: PairingBackend<Scalar = Fr>> {
    pub ct1: B::G1,
    pub ct2: B::G1,
    pub ct3: B::G1,
    pub ct4: B::Target,
}

impl<B: PairingBackend<Scalar = Fr>> Clone for Ciphertext<B> {
    fn clone(&self) -> Self {
        Self {
            ct1: self.ct1,
            ct2: self.ct2,
            ct3: self.ct3,
            ct4: self.ct4.clone(),
        }
    }
}

impl<B: PairingBackend<Scalar = Fr>> PartialEq for Ciphertext<B> {
    fn eq(&self, other: &Self) -> bool {
        self.ct1 == other.ct1
            && self.ct2 == other.ct2
            && self.ct3 == other.ct3
            && self.ct4 == other.ct4
    }
}

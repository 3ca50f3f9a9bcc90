//! Powers-of-tau structured reference string.
//!
//! The batch scheme publishes the trapdoor `τ` only through its G2 powers
//! `[τ^1]_2 ... [τ^B]_2`. These powers let anyone commit to a polynomial of
//! degree at most `B` (KZG-style, see [`PowersOfTau::commit_g2`]) without
//! learning `τ`, and let anyone check that the published sequence is
//! well-formed with pairings ([`PowersOfTau::verify`]).
//!
//! Raising `B` after the fact is impossible without `τ`: a larger capacity
//! needs a fresh setup.

mod scheme;
pub use scheme::PowersOfTau;

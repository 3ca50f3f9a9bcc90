//! Deterministic byte sources for exercising failure paths.

use rand::{SeedableRng, rngs::StdRng};
use rand_core::{Error as RandError, RngCore};

fn unavailable() -> RandError {
    RandError::new("entropy source unavailable")
}

/// Every draw fails.
pub(crate) struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), RandError> {
        Err(unavailable())
    }
}

/// Succeeds but always yields the same byte.
pub(crate) struct StuckRng(pub u8);

impl RngCore for StuckRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_le_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_le_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Serves `remaining` successful `try_fill_bytes` calls, then fails forever.
pub(crate) struct FailAfterRng {
    inner: StdRng,
    remaining: usize,
}

impl FailAfterRng {
    pub(crate) fn new(remaining: usize) -> Self {
        Self {
            inner: StdRng::seed_from_u64(0x5eed),
            remaining,
        }
    }
}

impl RngCore for FailAfterRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        if self.remaining == 0 {
            return Err(unavailable());
        }
        self.remaining -= 1;
        self.inner.try_fill_bytes(dest)
    }
}

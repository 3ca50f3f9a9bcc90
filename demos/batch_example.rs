use rand::{SeedableRng, rngs::StdRng};
use tracing::info;
use tracing_subscriber::fmt;

use bibe::{
    BatchEncryption, BatchIbeScheme, BatchLabel, CurvePoint, FieldElement, Fr, G1, G2, Identity,
    PairingBackend, PairingEngine,
};

const CAPACITY: usize = 128;
const BATCH_SIZE: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(fmt::format::FmtSpan::ENTER | fmt::format::FmtSpan::CLOSE)
        .with_target(false)
        .with_ansi(false)
        .init();

    let mut rng = StdRng::seed_from_u64(42);

    let scheme = BatchIbeScheme::<PairingEngine>::new();

    info!(
        capacity = CAPACITY,
        batch_size = BATCH_SIZE,
        "starting batch example"
    );

    // Setup + master keys
    let params = scheme.setup(CAPACITY)?;
    let keys = scheme.keygen(&mut rng, &params)?;
    info!(verified = keys.public_key.verify()?, "public parameters checked");

    // Identities of this epoch
    let identities = (0..BATCH_SIZE)
        .map(|i| Identity::from_bytes(format!("user-{i}@example.org").as_bytes()))
        .collect::<Result<Vec<_>, _>>()?;
    let label = BatchLabel::from_bytes(b"epoch-0001")?;

    // Encrypt one message per identity
    let message = PairingEngine::pairing(&G1::generator().mul_scalar(&Fr::from_u64(2026)), &G2::generator());
    let mut ciphertexts = Vec::with_capacity(identities.len());
    for identity in &identities {
        ciphertexts.push(scheme.encrypt(&mut rng, &keys.public_key, &message, identity, &label)?);
    }
    info!(count = ciphertexts.len(), "encryption finished");

    // Digest of the batch
    let digest = scheme.digest(&keys.public_key, &identities)?;
    info!(batch_size = digest.batch_size, "batch digest computed");

    Ok(())
}

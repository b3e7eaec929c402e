//! Provider Swap: run the same handshake against both backends.
//!
//! Run with:
//!   cargo run --example provider_swap -p crypto-provider

use crypto_provider::{Backend, Library};

/// Protocol code: only ever sees `&dyn Library`.
fn handshake(lib: &dyn Library, alice_seed: &[u8], bob_seed: &[u8]) -> crypto_provider::Result<()> {
    // ── 1. Each party derives a long-term key ───────────────────────────────
    let alice_key = lib.generate_private_key(alice_seed)?;
    let bob_key = lib.generate_private_key(bob_seed)?;
    println!("  alice public: {}", hex::encode(alice_key.public_key().to_bytes()));
    println!("  bob public:   {}", hex::encode(bob_key.public_key().to_bytes()));

    // ── 2. Agree on a shared secret ─────────────────────────────────────────
    let alice_dh = lib.create_diffie_hellman()?;
    let bob_dh = lib.create_diffie_hellman()?;
    let secret = alice_dh.shared_secret(&bob_dh.public_component())?;
    assert_eq!(secret, bob_dh.shared_secret(&alice_dh.public_component())?);
    println!("  shared:       {}", hex::encode(&secret));

    // ── 3. Sign the transcript and check it ─────────────────────────────────
    let mut transcript = lib.hash_algorithm();
    transcript.update(&alice_dh.public_component());
    transcript.update(&bob_dh.public_component());
    let digest = transcript.finalize();

    let signature = alice_key.sign(&digest)?;
    let verified = alice_key.public_key().verify(&digest, &signature);
    println!("  transcript signature verified: {verified}");
    Ok(())
}

fn main() -> crypto_provider::Result<()> {
    for backend in [Backend::Null, Backend::Dalek] {
        println!("{backend} backend (secure: {})", backend.is_secure());
        handshake(backend.library().as_ref(), b"alice", b"bob")?;
        println!();
    }
    Ok(())
}

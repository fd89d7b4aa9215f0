#![no_main]
// Decodes arbitrary bytes as signatures and verifies them against a fixed key per curve.
use ecdsa_engine::{
    CurveName, Signature, SigningKey,
    signature::{Signer, Verifier},
};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, data)) = data.split_first() else {
        return;
    };

    let curve = CurveName::ALL[usize::from(selector) % CurveName::ALL.len()].curve();
    let signing_key = SigningKey::random(curve, &mut ChaCha8Rng::from_seed([selector; 32]));
    let verifying_key = signing_key.verifying_key();

    for sig in [Signature::from_der(curve, data), Signature::from_bytes(curve, data)]
        .into_iter()
        .flatten()
    {
        assert_eq!(Signature::from_der(curve, &sig.to_der().unwrap()).unwrap(), sig);
        assert_eq!(Signature::from_bytes(curve, &sig.to_bytes()).unwrap(), sig);

        // forging is out of reach; the verifier just has to reject cleanly
        assert!(verifying_key.verify(data, &sig).is_err());
        assert!(verifying_key.verify(data, &sig.normalize_s()).is_err());
    }

    let sig = signing_key.sign(data);
    assert!(verifying_key.verify(data, &sig).is_ok());
});

#![no_main]
// Feeds arbitrary bytes to every key decoder. Anything accepted must re-encode to an
// equivalent key.
use ecdsa_engine::{LineEnding, SigningKey, VerifyingKey};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = SigningKey::from_sec1_der(data) {
        let der = key.to_sec1_der().unwrap();
        assert_eq!(SigningKey::from_sec1_der(&der).unwrap(), key);
    }

    if let Ok(key) = SigningKey::from_pkcs8_der(data) {
        let der = key.to_pkcs8_der().unwrap();
        assert_eq!(SigningKey::from_pkcs8_der(&der).unwrap(), key);
    }

    if let Ok(key) = VerifyingKey::from_public_key_der(data) {
        let der = key.to_public_key_der().unwrap();
        assert_eq!(VerifyingKey::from_public_key_der(&der).unwrap(), key);
    }

    if let Ok(text) = core::str::from_utf8(data) {
        if let Ok(key) = SigningKey::from_pkcs8_pem(text) {
            let pem = key.to_pkcs8_pem(LineEnding::LF).unwrap();
            assert_eq!(SigningKey::from_pkcs8_pem(&pem).unwrap(), key);
        }

        let _ = SigningKey::from_sec1_pem(text);
        let _ = VerifyingKey::from_public_key_pem(text);
    }
});

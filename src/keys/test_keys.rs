//! Key material shared by unit tests

use super::Key;
use ring::rand::SystemRandom;
use ring::signature::{
    ECDSA_P256_SHA256_FIXED_SIGNING, ECDSA_P384_SHA384_FIXED_SIGNING, EcdsaKeyPair,
    EcdsaSigningAlgorithm, KeyPair, RsaKeyPair,
};
use std::sync::OnceLock;

/// RSA-2048 pair, generated once per test binary: (private, public)
pub(crate) fn rsa() -> (Key, Key) {
    static PAIR: OnceLock<(Key, Key)> = OnceLock::new();
    PAIR.get_or_init(generate_rsa).clone()
}

/// A second, unrelated RSA-2048 pair
pub(crate) fn other_rsa() -> (Key, Key) {
    static PAIR: OnceLock<(Key, Key)> = OnceLock::new();
    PAIR.get_or_init(generate_rsa).clone()
}

/// Fresh P-256 pair: (private, public)
pub(crate) fn ec_p256() -> (Key, Key) {
    generate_ec(&ECDSA_P256_SHA256_FIXED_SIGNING)
}

/// Fresh P-384 pair: (private, public)
pub(crate) fn ec_p384() -> (Key, Key) {
    generate_ec(&ECDSA_P384_SHA384_FIXED_SIGNING)
}

fn generate_rsa() -> (Key, Key) {
    use rsa::pkcs8::EncodePrivateKey;

    let mut rng = rand::thread_rng();
    let private_key = rsa::RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
    let pkcs8_doc = private_key
        .to_pkcs8_der()
        .expect("Failed to serialize to PKCS#8");
    let key_pair = RsaKeyPair::from_pkcs8(pkcs8_doc.as_bytes()).expect("ring rejected PKCS#8");

    (
        Key::rsa_private_pkcs8(pkcs8_doc.as_bytes().to_vec()),
        Key::rsa_public_der(key_pair.public().as_ref().to_vec()),
    )
}

fn generate_ec(alg: &'static EcdsaSigningAlgorithm) -> (Key, Key) {
    let rng = SystemRandom::new();
    let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &rng).expect("Failed to generate key");
    let key_pair = EcdsaKeyPair::from_pkcs8(alg, pkcs8.as_ref(), &rng).expect("Failed to parse key");

    (
        Key::ec_private_pkcs8(pkcs8.as_ref().to_vec()),
        Key::ec_public_sec1(key_pair.public_key().as_ref().to_vec()),
    )
}

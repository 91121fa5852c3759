//! Key material and token helpers shared by the integration tests

#![allow(dead_code)]

use jwtcodec::utils::base64url;
use jwtcodec::{algorithm, AlgorithmFamily, AlgorithmId, Key};
use ring::rand::SystemRandom;
use ring::signature::{
    EcdsaKeyPair, KeyPair, RsaKeyPair, ECDSA_P256_SHA256_FIXED_SIGNING,
    ECDSA_P384_SHA384_FIXED_SIGNING,
};
use std::sync::OnceLock;

pub const SECRET: &[u8] = b"integration-test-secret";

/// Signing and verification key for one algorithm
pub struct TestKeys {
    pub signing: Key,
    pub verifying: Key,
}

/// RSA-2048 pair, generated once per test binary
pub fn rsa() -> &'static TestKeys {
    static KEYS: OnceLock<TestKeys> = OnceLock::new();
    KEYS.get_or_init(|| {
        use rsa::pkcs8::EncodePrivateKey;

        let mut rng = rand::thread_rng();
        let private_key = rsa::RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate key");
        let pkcs8 = private_key
            .to_pkcs8_der()
            .expect("Failed to serialize to PKCS#8");
        let key_pair = RsaKeyPair::from_pkcs8(pkcs8.as_bytes()).expect("ring rejected PKCS#8");

        TestKeys {
            signing: Key::rsa_private_pkcs8(pkcs8.as_bytes().to_vec()),
            verifying: Key::rsa_public_der(key_pair.public().as_ref().to_vec()),
        }
    })
}

/// PKCS#1 DER of the shared RSA public key, as an attacker would obtain it
pub fn rsa_public_der() -> Vec<u8> {
    match &rsa().verifying {
        Key::RsaPublic(der) => der.clone(),
        other => panic!("expected RSA public key, got {}", other.key_type()),
    }
}

pub fn ec_p256() -> TestKeys {
    generate_ec(&ECDSA_P256_SHA256_FIXED_SIGNING)
}

pub fn ec_p384() -> TestKeys {
    generate_ec(&ECDSA_P384_SHA384_FIXED_SIGNING)
}

fn generate_ec(alg: &'static ring::signature::EcdsaSigningAlgorithm) -> TestKeys {
    let rng = SystemRandom::new();
    let pkcs8 = EcdsaKeyPair::generate_pkcs8(alg, &rng).expect("Failed to generate key");
    let key_pair = EcdsaKeyPair::from_pkcs8(alg, pkcs8.as_ref(), &rng).expect("Failed to parse key");

    TestKeys {
        signing: Key::ec_private_pkcs8(pkcs8.as_ref().to_vec()),
        verifying: Key::ec_public_sec1(key_pair.public_key().as_ref().to_vec()),
    }
}

/// Keys suitable for `alg`
pub fn keys_for(alg: AlgorithmId) -> TestKeys {
    match alg.family() {
        AlgorithmFamily::Hmac => TestKeys {
            signing: Key::secret(SECRET),
            verifying: Key::secret(SECRET),
        },
        AlgorithmFamily::Rsa => TestKeys {
            signing: rsa().signing.clone(),
            verifying: rsa().verifying.clone(),
        },
        AlgorithmFamily::Ecdsa if alg == AlgorithmId::ES256 => ec_p256(),
        AlgorithmFamily::Ecdsa => ec_p384(),
    }
}

/// Build a token from raw JSON, signing the exact bytes given
pub fn sign_raw(header_json: &str, payload_json: &str, alg: AlgorithmId, key: &Key) -> String {
    let signing_input = format!(
        "{}.{}",
        base64url::encode(header_json),
        base64url::encode(payload_json)
    );
    let signature = algorithm::sign(alg, signing_input.as_bytes(), key).expect("signing failed");
    format!("{signing_input}.{}", base64url::encode_bytes(&signature))
}

/// Build a token with an arbitrary (possibly unregistered) header and a junk signature
pub fn unsigned(header_json: &str, payload_json: &str) -> String {
    format!(
        "{}.{}.{}",
        base64url::encode(header_json),
        base64url::encode(payload_json),
        base64url::encode("signature")
    )
}

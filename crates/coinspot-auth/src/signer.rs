//! HMAC-SHA512 payload signing
//!
//! CoinSpot authenticates a request by the hex HMAC-SHA512 of the exact JSON
//! body, keyed with the account secret. The caller must sign the same string
//! it sends.

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Sign a serialized payload with the given secret
///
/// Returns the lowercase hex digest. An empty secret is accepted; the server
/// will reject the resulting signature.
pub fn sign(secret: &str, payload: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::Rng;

    #[test]
    fn test_rfc4231_vector() {
        // RFC 4231 test case 2
        let signature = sign("Jefe", "what do ya want for nothing?");
        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn test_payload_vector() {
        let signature = sign("test-secret", r#"{"cointype":"BTC","nonce":1700000000000}"#);
        assert_eq!(
            signature,
            "24bea4b9968372d69664704ee72676931503655212f6e5341c8b9d61fbdef57d\
             154034ff10fc237f70fa1795361cc523b0b1eb3e98bca4dc91aba51eb130cc28"
        );
    }

    #[test]
    fn test_empty_secret_is_accepted() {
        let signature = sign("", r#"{"nonce":1}"#);
        assert_eq!(
            signature,
            "990229045e5f0f4189cee1d8abe25b80749fcdf658586f77c4a206437722eebc\
             4117daee4a041da3661e3cfdec54c6f9a8da49c6969e0b0d9f9ffb38ec9c9584"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = sign("secret", "{}");
        assert_eq!(signature.len(), 128);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let secret: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(32)
                .map(char::from)
                .collect();
            let payload = format!(
                r#"{{"cointype":"BTC","amount":{},"nonce":{}}}"#,
                rng.gen_range(1..1_000_000u32),
                rng.gen::<u64>()
            );
            assert_eq!(sign(&secret, &payload), sign(&secret, &payload));
        }
    }

    #[test]
    fn test_field_perturbation_changes_signature() {
        let mut rng = rand::thread_rng();
        let secret = "perturbation-secret";

        for _ in 0..64 {
            let amount = rng.gen_range(1..1_000_000u64);
            let rate = rng.gen_range(1..1_000_000u64);
            let nonce = rng.gen_range(1_600_000_000_000..1_900_000_000_000u64);
            let base = format!(r#"{{"amount":{},"rate":{},"nonce":{}}}"#, amount, rate, nonce);
            let original = sign(secret, &base);

            let perturbed = match rng.gen_range(0..3) {
                0 => format!(r#"{{"amount":{},"rate":{},"nonce":{}}}"#, amount + 1, rate, nonce),
                1 => format!(r#"{{"amount":{},"rate":{},"nonce":{}}}"#, amount, rate + 1, nonce),
                _ => format!(r#"{{"amount":{},"rate":{},"nonce":{}}}"#, amount, rate, nonce + 1),
            };

            assert_ne!(original, sign(secret, &perturbed));
        }
    }

    #[test]
    fn test_different_secrets_differ() {
        let payload = r#"{"nonce":1}"#;
        assert_ne!(sign("a", payload), sign("b", payload));
    }
}

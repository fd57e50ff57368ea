//! Issue/verify behavior against the real clock

use serde_json::json;
use sigil_jwt::time::now_unix;
use sigil_jwt::{ClaimSet, ExpirationStatus, JwtError, SecretKey, TokenCodec};

fn codec() -> TokenCodec {
    TokenCodec::new(SecretKey::from_text("mi_clave_secreta_123").expect("non-empty secret"))
}

#[test]
fn test_fresh_claims_verify_and_get_default_lifetime() {
    let codec = codec();
    let before = now_unix();
    let token = codec
        .generate(&ClaimSet::new().with_subject("Usuario123"))
        .expect("generate should succeed");
    let after = now_unix();

    assert!(codec.verify(&token));

    let claims = codec.decode(&token).expect("token should decode");
    let iat = claims.issued_at().expect("numeric iat").expect("iat present");
    let exp = claims.expiration().expect("numeric exp").expect("exp present");
    assert!((before..=after).contains(&iat));
    assert_eq!(exp, iat + 3600);
    assert_eq!(claims.subject(), Some("Usuario123"));
}

#[test]
fn test_mixed_claim_values_survive() {
    let codec = codec();
    let input = ClaimSet::new()
        .with_subject("u-1")
        .with_claim("admin", false)
        .with_claim("score", 9.5)
        .with_claim("roles", json!(["read", "write"]))
        .with_claim("profile", json!({ "lang": "es", "tz": null }));

    let token = codec.generate(&input).expect("generate should succeed");
    let claims = codec.decode(&token).expect("token should decode");

    for (name, value) in &input {
        assert_eq!(claims.get(name), Some(value), "claim {name} changed");
    }
    assert_eq!(claims.len(), input.len() + 2);
}

#[test]
fn test_caller_claims_are_not_mutated() {
    let input = ClaimSet::new().with_subject("u-1");
    let _ = codec().generate(&input).expect("generate should succeed");

    assert!(!input.contains("iat"));
    assert!(!input.contains("exp"));
    assert_eq!(input.len(), 1);
}

#[test]
fn test_expired_token_is_rejected_despite_valid_signature() {
    let codec = codec();
    let token = codec
        .generate(&ClaimSet::new().with_expiration(now_unix() - 10))
        .expect("generate should succeed");

    assert!(!codec.verify(&token));
    assert_eq!(codec.decode(&token), Err(JwtError::TokenExpired));
    assert!(codec.time_until_expiration(&token) <= -10);
    assert!(codec.expiration_status(&token).is_expired());
}

#[test]
fn test_time_until_expiration_right_after_issue() {
    let codec = codec();
    let token = codec
        .generate(&ClaimSet::new().with_expiration(now_unix() + 120))
        .expect("generate should succeed");

    let remaining = codec.time_until_expiration(&token);
    assert!((119..=120).contains(&remaining), "remaining = {remaining}");
}

#[test]
fn test_segment_count_is_enforced() {
    let codec = codec();
    let token = codec
        .generate(&ClaimSet::new())
        .expect("generate should succeed");

    let two: String = token.rsplitn(2, '.').nth(1).expect("has a dot").to_string();
    let four = format!("{token}.extra");

    for candidate in ["", "onlyone", two.as_str(), four.as_str()] {
        assert!(!codec.verify(candidate), "{candidate:?} should be rejected");
        assert_eq!(codec.time_until_expiration(candidate), 0);
        assert_eq!(codec.expiration_status(candidate), ExpirationStatus::Invalid);
    }
}

#[test]
fn test_tokens_from_other_secret_are_rejected() {
    let issuer = TokenCodec::new(SecretKey::from_text("issuer-secret").expect("secret"));
    let token = issuer
        .generate(&ClaimSet::new())
        .expect("generate should succeed");

    assert!(issuer.verify(&token));
    assert!(!codec().verify(&token));
    assert_eq!(codec().time_until_expiration(&token), 0);
}

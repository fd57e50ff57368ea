//! Any single-character edit to an issued token must be rejected

use proptest::prelude::*;
use sigil_jwt::{ClaimSet, ExpirationStatus, SecretKey, TokenCodec};

const TOKEN_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.+/=";

#[derive(Debug, Clone)]
enum Edit {
    Flip(prop::sample::Index, char),
    Remove(prop::sample::Index),
    Insert(prop::sample::Index, char),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    let chars: Vec<char> = TOKEN_CHARS.chars().collect();
    let ch = prop::sample::select(chars);
    prop_oneof![
        (any::<prop::sample::Index>(), ch.clone()).prop_map(|(i, c)| Edit::Flip(i, c)),
        any::<prop::sample::Index>().prop_map(Edit::Remove),
        (any::<prop::sample::Index>(), ch).prop_map(|(i, c)| Edit::Insert(i, c)),
    ]
}

/// Apply `edit`; tokens are ASCII so byte offsets are char offsets.
/// Returns `None` when a flip would leave the token unchanged.
fn apply(token: &str, edit: &Edit) -> Option<String> {
    let mut edited = token.to_string();
    match edit {
        Edit::Flip(index, c) => {
            let at = index.index(token.len());
            if token[at..].starts_with(*c) {
                return None;
            }
            edited.replace_range(at..=at, c.encode_utf8(&mut [0; 4]));
        }
        Edit::Remove(index) => {
            edited.remove(index.index(token.len()));
        }
        Edit::Insert(index, c) => {
            edited.insert(index.index(token.len() + 1), *c);
        }
    }
    Some(edited)
}

fn codec() -> TokenCodec {
    TokenCodec::new(SecretKey::from_text("mi_clave_secreta_123").expect("non-empty secret"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn single_edit_is_rejected(subject in "[a-zA-Z0-9 ]{0,24}", edit in edit_strategy()) {
        let codec = codec();
        let token = codec
            .generate(&ClaimSet::new().with_subject(subject))
            .expect("generate should succeed");
        prop_assert!(codec.verify(&token));

        if let Some(tampered) = apply(&token, &edit) {
            prop_assert!(!codec.verify(&tampered), "accepted {:?}", tampered);
            prop_assert_eq!(codec.time_until_expiration(&tampered), 0);
            prop_assert_eq!(codec.expiration_status(&tampered), ExpirationStatus::Invalid);
        }
    }

    #[test]
    fn signing_is_deterministic(message in ".{0,64}") {
        let codec = codec();
        let first = codec.signer().sign(&message).expect("sign");
        let second = codec.signer().sign(&message).expect("sign");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn signing_depends_on_key(message in ".{0,64}", a in "[a-z]{1,16}", b in "[a-z]{1,16}") {
        prop_assume!(a != b);
        let sig_a = sigil_jwt::hmac_sha256_sign(&message, a.as_bytes()).expect("sign");
        let sig_b = sigil_jwt::hmac_sha256_sign(&message, b.as_bytes()).expect("sign");
        prop_assert_ne!(sig_a, sig_b);
    }
}

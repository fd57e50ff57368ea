//! Base64 URL-safe encoding without padding (RFC 7515)

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes as an unpadded base64url segment
#[inline]
pub(crate) fn base64_url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode an unpadded base64url segment.
///
/// Padding characters, the standard `+`/`/` alphabet and non-canonical
/// trailing bits are all rejected.
#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_url_safe_alphabet_without_padding() {
        let encoded = base64_url_encode(&[0xfb, 0xff, 0xfe]);
        assert_eq!(encoded, "-__-");

        let encoded = base64_url_encode(b"a");
        assert_eq!(encoded, "YQ");
    }

    #[test]
    fn test_rejects_foreign_alphabets() {
        assert!(base64_url_decode("+//+").is_err());
        assert!(base64_url_decode("YQ==").is_err());
        assert!(base64_url_decode("Y!").is_err());
    }

    #[test]
    fn test_decode_inverts_encode() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        for len in [0, 1, 2, 3, 31, 32, 33, 256] {
            let encoded = base64_url_encode(&bytes[..len]);
            let decoded = base64_url_decode(&encoded).expect("encoded segment should decode");
            assert_eq!(decoded, &bytes[..len]);
        }
    }
}

use base64ct::{Base64UrlUnpadded, Encoding};

/// Base64url encode bytes without padding.
pub fn base64url_encode(data: &[u8]) -> String {
    Base64UrlUnpadded::encode_string(data)
}

/// Base64url decode into a caller-provided buffer.
///
/// Rejects padding, characters outside the URL-safe alphabet and
/// non-canonical trailing bits.
pub fn base64url_decode_into<'a>(
    s: &str,
    out: &'a mut [u8],
) -> Result<&'a [u8], base64ct::Error> {
    Base64UrlUnpadded::decode(s, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let data = b"Hello, World!";
        let encoded = base64url_encode(data);
        let mut buf = [0u8; 32];
        let decoded = base64url_decode_into(&encoded, &mut buf).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn no_padding() {
        let encoded = base64url_encode(b"ab");
        assert!(!encoded.contains('='));
    }

    #[test]
    fn url_safe_chars() {
        // Bytes that would produce + and / in standard base64
        let data = vec![0xfb, 0xff, 0xfe];
        let encoded = base64url_encode(&data);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn thirty_two_bytes_encode_to_43_chars() {
        assert_eq!(base64url_encode(&[0xa5u8; 32]).len(), 43);
    }

    #[test]
    fn standard_alphabet_rejected() {
        let mut buf = [0u8; 8];
        assert!(base64url_decode_into("+/+/", &mut buf).is_err());
    }

    #[test]
    fn non_canonical_trailing_bits_rejected() {
        // "AB" carries 12 bits for one byte; the low 4 bits must be zero
        let mut buf = [0u8; 4];
        assert!(base64url_decode_into("AB", &mut buf).is_err());
        assert_eq!(base64url_decode_into("AA", &mut buf).unwrap(), &[0u8]);
    }
}

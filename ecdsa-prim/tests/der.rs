//! ASN.1 DER encoding tests.

use ecdsa_prim::{BigUint, Error, Signature};
use hex_literal::hex;
use proptest::prelude::*;

/// First P-224 signature of the FIPS 186-4 `SigGen.txt` test vectors: `s`
/// has its high bit set and needs a leading zero byte.
const SIG_DER: [u8; 63] = hex!(
    "303d021c2fc2cff8cdd4866b1d74e45b07d333af46b7af0888049d0fdbc7b0d6"
    "021d008d9cc4c8ea93e0fd9d6431b9a1fd99b88f281793396321b11dac41eb"
);

prop_compose! {
    /// Integers of up to 512 bits.
    fn uint()(bytes in proptest::collection::vec(any::<u8>(), 0..=64)) -> BigUint {
        BigUint::from_bytes_be(&bytes)
    }
}

prop_compose! {
    fn signature()(r in uint(), s in uint()) -> Signature {
        Signature::from_rs(r, s)
    }
}

#[test]
fn decode_p224_signature() {
    let signature = Signature::from_der(&SIG_DER).unwrap();
    assert_eq!(signature.r().to_bytes_be(), SIG_DER[4..32]);
    assert_eq!(signature.s().to_bytes_be(), SIG_DER[35..63]);
    assert_eq!(signature.to_der().unwrap(), SIG_DER);
}

#[test]
fn hex_matches_der() {
    let signature = Signature::try_from(&SIG_DER[..]).unwrap();
    let hex = signature.to_der_hex().unwrap();
    assert_eq!(hex, base16ct::lower::encode_string(&SIG_DER));
    assert_eq!(hex, signature.to_string());
    assert_eq!(Signature::from_der_hex(&hex.to_uppercase()).unwrap(), signature);
}

#[test]
fn reject_empty() {
    assert_eq!(Signature::from_der(&[]), Err(Error::MalformedEncoding));
    assert_eq!(Signature::from_der_hex(""), Err(Error::MalformedEncoding));
}

#[cfg(feature = "serde")]
#[test]
fn serde_json() {
    let signature = Signature::from_der(&SIG_DER).unwrap();
    let json = serde_json::to_string(&signature).unwrap();
    assert_eq!(json, format!("\"{}\"", signature.to_der_hex().unwrap()));
    assert_eq!(serde_json::from_str::<Signature>(&json).unwrap(), signature);

    // decoding rejects malformed signatures
    assert!(serde_json::from_str::<Signature>("\"3006020107020105ff\"").is_err());
}

proptest! {
    #[test]
    fn der_round_trip(signature in signature()) {
        let der = signature.to_der().unwrap();
        prop_assert_eq!(Signature::from_der(&der).unwrap(), signature.clone());

        let hex = signature.to_der_hex().unwrap();
        prop_assert_eq!(hex.len(), der.len() * 2);
        prop_assert_eq!(Signature::from_der_hex(&hex).unwrap(), signature);
    }

    #[test]
    fn encoding_is_minimal(signature in signature()) {
        let der = signature.to_der().unwrap();

        // r: tag, length and the minimal two's complement content
        let r_bytes = signature.r().to_bytes_be();
        let r_len = r_bytes.len() + usize::from(r_bytes[0] & 0x80 != 0);
        let header_len = if der[1] & 0x80 != 0 { 3 } else { 2 };
        prop_assert_eq!(der[header_len], 0x02);
        prop_assert_eq!(usize::from(der[header_len + 1]), r_len);
    }

    #[test]
    fn reject_truncated(signature in signature(), cut in any::<prop::sample::Index>()) {
        let der = signature.to_der().unwrap();
        let len = cut.index(der.len());
        prop_assert_eq!(Signature::from_der(&der[..len]), Err(Error::MalformedEncoding));
    }

    #[test]
    fn reject_trailing_data(
        signature in signature(),
        extra in proptest::collection::vec(any::<u8>(), 1..8),
    ) {
        let mut der = signature.to_der().unwrap();
        der.extend_from_slice(&extra);
        prop_assert_eq!(Signature::from_der(&der), Err(Error::MalformedEncoding));
    }
}

#![no_main]
// Decoding must never panic, and whatever decodes must re-encode to the same bytes
use ecdsa_prim::Signature;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(signature) = Signature::from_der(data) {
        assert_eq!(signature.to_der().unwrap(), data);
    }

    if let Ok(hex) = core::str::from_utf8(data) {
        if let Ok(signature) = Signature::from_der_hex(hex) {
            assert_eq!(signature.to_der_hex().unwrap(), hex.to_ascii_lowercase());
        }
    }
});

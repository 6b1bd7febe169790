#![no_main]
// Targets: generic arithmetic and the p256 adapter
use ecdsa_prim::{
    BigUint, Signature, VerifyingKey, verify,
    weierstrass::{AffinePoint, Arithmetic, Curve, CurveParams},
};
use libfuzzer_sys::fuzz_target;

fn test_verify<C: Curve>(curve: C, data: &[u8]) {
    // first byte picks the public key scalar, the rest is digest and signature
    let Some((&d, rest)) = data.split_first() else {
        return;
    };

    let public_point = curve.scalar_base_mul(&[d]);
    let key = VerifyingKey::new(curve, public_point);
    let (digest, signature) = rest.split_at(rest.len().min(32));

    if let Ok(signature) = Signature::from_der(signature) {
        let _ = verify(&key, digest, &signature);
    }

    // raw components, including out of range ones
    let (r, s) = signature.split_at(signature.len() / 2);
    let signature = Signature::from_rs(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s));
    let _ = verify(&key, digest, &signature);

    // points which aren't on the curve
    let bogus = VerifyingKey::new(key.curve(), AffinePoint::new(BigUint::from_bytes_be(r), 1u8.into()));
    let _ = verify(&bogus, digest, &signature);
}

fuzz_target!(|data: &[u8]| {
    test_verify(Arithmetic::<p256::NistP256>::new(), data);
    test_verify(CurveParams::p192(), data);
});

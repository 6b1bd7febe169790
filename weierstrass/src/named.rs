//! Standard curve parameters.
//!
//! Sourced from [SEC 2: Recommended Elliptic Curve Domain Parameters] and
//! [NIST SP 800-186].
//!
//! [SEC 2: Recommended Elliptic Curve Domain Parameters]: https://www.secg.org/sec2-v2.pdf
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

use crate::CurveParams;
use hex_literal::hex;
use num_bigint::BigUint;

/// Raw big endian domain parameters of a named curve.
struct Domain<'a> {
    p: &'a [u8],
    a: &'a [u8],
    b: &'a [u8],
    n: &'a [u8],
    gx: &'a [u8],
    gy: &'a [u8],
    bit_size: usize,
}

impl Domain<'_> {
    fn to_params(&self) -> CurveParams {
        let int = BigUint::from_bytes_be;

        CurveParams::new(
            int(self.p),
            int(self.a),
            int(self.b),
            int(self.n),
            (int(self.gx), int(self.gy)),
            self.bit_size,
        )
    }
}

impl CurveParams {
    /// NIST P-192 (a.k.a. secp192r1, prime192v1).
    pub fn p192() -> Self {
        Domain {
            p: &hex!("fffffffffffffffffffffffffffffffeffffffffffffffff"),
            a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffc"),
            b: &hex!("64210519e59c80e70fa7e9ab72243049feb8deecc146b9b1"),
            n: &hex!("ffffffffffffffffffffffff99def836146bc9b1b4d22831"),
            gx: &hex!("188da80eb03090f67cbf20eb43a18800f4ff0afd82ff1012"),
            gy: &hex!("07192b95ffc8da78631011ed6b24cdd573f977a11e794811"),
            bit_size: 192,
        }
        .to_params()
    }

    /// NIST P-224 (a.k.a. secp224r1).
    pub fn p224() -> Self {
        Domain {
            p: &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001"),
            a: &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe"),
            b: &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4"),
            n: &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d"),
            gx: &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
            gy: &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
            bit_size: 224,
        }
        .to_params()
    }

    /// NIST P-256 (a.k.a. secp256r1, prime256v1).
    pub fn p256() -> Self {
        Domain {
            p: &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
            a: &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
            b: &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
            n: &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
            gx: &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            gy: &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
            bit_size: 256,
        }
        .to_params()
    }

    /// NIST P-384 (a.k.a. secp384r1).
    pub fn p384() -> Self {
        Domain {
            p: &hex!(
                "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
                "ffffffff0000000000000000ffffffff"
            ),
            a: &hex!(
                "fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffe"
                "ffffffff0000000000000000fffffffc"
            ),
            b: &hex!(
                "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875a"
                "c656398d8a2ed19d2a85c8edd3ec2aef"
            ),
            n: &hex!(
                "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
                "581a0db248b0a77aecec196accc52973"
            ),
            gx: &hex!(
                "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a38"
                "5502f25dbf55296c3a545e3872760ab7"
            ),
            gy: &hex!(
                "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c0"
                "0a60b1ce1d7e819d7a431d7c90ea0e5f"
            ),
            bit_size: 384,
        }
        .to_params()
    }

    /// secp256k1 (a.k.a. K-256), the curve used by Bitcoin and Ethereum.
    pub fn secp256k1() -> Self {
        Domain {
            p: &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"),
            a: &[],
            b: &[7],
            n: &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141"),
            gx: &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
            gy: &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
            bit_size: 256,
        }
        .to_params()
    }
}

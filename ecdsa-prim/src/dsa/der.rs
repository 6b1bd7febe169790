//! ASN.1 DER encoding for ECDSA signatures.
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```

use super::Signature;
use crate::Result;
use alloc::{string::String, vec::Vec};
use der::{
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, SliceReader,
    Writer, asn1::UintRef,
};
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

impl Signature {
    /// Parse a signature from ASN.1 DER-encoded bytes.
    ///
    /// Fails with [`Error::MalformedEncoding`][crate::Error::MalformedEncoding]
    /// unless the input is exactly one `SEQUENCE` of two non-negative,
    /// minimally encoded `INTEGER`s.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let SignatureRef { r, s } = SignatureRef::from_der(bytes)?;

        Ok(Self::from_rs(
            BigUint::from_bytes_be(r.as_bytes()),
            BigUint::from_bytes_be(s.as_bytes()),
        ))
    }

    /// Parse a signature from the hex form of its ASN.1 DER encoding.
    ///
    /// Upper and lower case digits are both accepted.
    pub fn from_der_hex(hex: &str) -> Result<Self> {
        Self::from_der(&base16ct::mixed::decode_vec(hex)?)
    }

    /// Serialize this signature as ASN.1 DER.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEncoding`][crate::Error::MalformedEncoding]
    /// only when the encoding would exceed the largest length `der` can
    /// express (about 256 MiB). Any `(r, s)` below that size encodes.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        let r = self.r().to_bytes_be();
        let s = self.s().to_bytes_be();

        let sig = SignatureRef {
            r: UintRef::new(&r)?,
            s: UintRef::new(&s)?,
        };

        Ok(sig.to_der()?)
    }

    /// Serialize this signature as lowercase hex of its ASN.1 DER encoding.
    ///
    /// Fails under the same condition as [`Signature::to_der`].
    pub fn to_der_hex(&self) -> Result<String> {
        Ok(base16ct::lower::encode_string(&self.to_der()?))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let der = self.to_der().map_err(ser::Error::custom)?;
        serdect::slice::serialize_hex_lower_or_bin(&der, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let der = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::from_der(&der).map_err(de::Error::custom)
    }
}

struct SignatureRef<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl EncodeValue for SignatureRef<'_> {
    fn value_len(&self) -> der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, encoder: &mut impl Writer) -> der::Result<()> {
        self.r.encode(encoder)?;
        self.s.encode(encoder)?;
        Ok(())
    }
}

impl<'a> DecodeValue<'a> for SignatureRef<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> der::Result<Self> {
        let mut body = SliceReader::new(reader.read_slice(header.length)?)?;

        let sig = Self {
            r: UintRef::decode(&mut body)?,
            s: UintRef::decode(&mut body)?,
        };

        // no trailing elements inside the sequence
        body.finish(sig)
    }
}

impl<'a> Sequence<'a> for SignatureRef<'a> {}

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, `Serialize` and
//! `Deserialize` are impl'd for [`Signature`]: the hex form of its ASN.1
//! DER encoding with human-readable formats, and the raw DER bytes with
//! binary ones.
//!
//! ## `signature` support
//!
//! When the `signature` feature of this crate is enabled, [`SigningKey`]
//! impls `signature::hazmat::RandomizedPrehashSigner` (and
//! `PrehashSigner` with the `getrandom` feature) and [`VerifyingKey`] impls
//! `signature::hazmat::PrehashVerifier`.

extern crate alloc;

pub mod dsa;
pub mod hazmat;

mod error;

pub use crate::{
    dsa::{MAX_SIGN_ATTEMPTS, Signature, SigningKey, VerifyingKey, sign_with_rng, verify},
    error::{Error, Result},
};
pub use num_bigint::BigUint;
pub use weierstrass;

#[cfg(feature = "getrandom")]
pub use crate::dsa::sign;

#[cfg(feature = "signature")]
pub use signature;

//! SIV-HMAC: a nonce misuse resistant AEAD.
//!
//! The synthetic IV is an S2V PRF chain over HMAC-SHA-256/384/512, keyed with the first half
//! of the key, and the message is masked with AES-CTR keyed with the second half. Sealing
//! produces `tag || ciphertext`, opening verifies the tag in constant time and never releases
//! unauthenticated plaintext.
//!
//! ```
//! use siv_hmac::{encrypt, decrypt, HMAC_SHA256_AES_CTR, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let key = [0u8; 32];
//! let mut blob = [0u8; 31];
//! encrypt(&HMAC_SHA256_AES_CTR, &key, 20, b"nonce1", b"header", b"hello world", &mut blob)?;
//!
//! let mut plain = [0u8; 11];
//! decrypt(&HMAC_SHA256_AES_CTR, &key, 20, b"nonce1", b"header", &blob, &mut plain)?;
//! assert_eq!(&plain, b"hello world");
//!
//! let forged = decrypt(&HMAC_SHA256_AES_CTR, &key, 20, b"nonce1", b"Header", &blob, &mut plain);
//! assert_eq!(forged, Err(Error::AuthenticationFailure));
//! assert_eq!(plain, [0u8; 11]);
//! # Ok(()) }
//! ```
//!
//! # Features
//!
//! * `std` (default): `std::error::Error` implementations, implies `alloc`.
//! * `alloc`: [`SivHmac::crypt_to_vec`].
//! * `tracing`: structured `tracing` events for context lifecycle and authentication
//!   failures. Events never carry keys, tags or message bytes.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::all
)]
// stupid lint IMO
#![allow(clippy::module_name_repetitions)]
// this devalues things which actually require the must-use attribute
#![allow(clippy::must_use_candidate)]
// I don't need a linter lecturing me on performance
#![allow(clippy::inline_always)]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

#[macro_use]
mod macros;

pub mod buf;
pub mod opaque_res;
mod sealed;

pub mod aes;
pub mod ct;
mod error;
pub mod mode;
mod mac;

pub mod aead;

pub use error::{Error, Unspecified, MakeOpaque};
pub use ct::ct_eq;
pub use mode::{Mode, HMAC_SHA256_AES_CTR, HMAC_SHA384_AES_CTR, HMAC_SHA512_AES_CTR};
pub use aead::{
    SivHmac, Builder,
    Direction, Encrypt, Decrypt, Phase,
    one_shot, encrypt, decrypt,
};

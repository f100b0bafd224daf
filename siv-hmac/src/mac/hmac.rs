//! Hashed-Based Message Authentication Codes `HMAC`, the PRF of every mode.
use ::hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use zeroize::Zeroize;

use crate::buf::InvalidSize;
use crate::error::Error;
use crate::mode::Digest;

/// An incremental `HMAC` over one of the supported digests.
///
/// # Zeroization
///
/// The keyed inner and outer hash states are derived from the key and are **not** wiped when
/// a `Prf` is dropped, `hmac` does not support it. Keep each `Prf` short lived, the key itself
/// stays in a zeroizing buffer owned by the caller. Only the finalized digest copy is wiped.
pub(crate) enum Prf {
    Sha256(Hmac<Sha256>),
    Sha384(Hmac<Sha384>),
    Sha512(Hmac<Sha512>),
}

opaque_dbg! { Prf }

macro_rules! with_mac {
    ($prf:expr, $mac:ident => $body:expr) => {
        match $prf {
            Prf::Sha256($mac) => $body,
            Prf::Sha384($mac) => $body,
            Prf::Sha512($mac) => $body,
        }
    };
}

impl Prf {
    /// Create a new `Prf` keyed with `key`.
    ///
    /// # Errors
    ///
    /// `InvalidKeySize` if the key was rejected, `HMAC` accepts any key length so this is not
    /// expected to happen.
    pub fn new(digest: Digest, key: &[u8]) -> Result<Self, Error> {
        let prf = match digest {
            Digest::Sha256 => <Hmac<Sha256> as Mac>::new_from_slice(key).map(Self::Sha256),
            Digest::Sha384 => <Hmac<Sha384> as Mac>::new_from_slice(key).map(Self::Sha384),
            Digest::Sha512 => <Hmac<Sha512> as Mac>::new_from_slice(key).map(Self::Sha512),
        };

        prf.map_err(|_| Error::InvalidKeySize)
    }

    /// Updates the message to authenticate.
    #[inline]
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        with_mac!(self, mac => mac.update(data));
        self
    }

    /// Compute the final `HMAC` into the leading bytes of `output`.
    ///
    /// # Errors
    ///
    /// If `output` is shorter than the digest.
    pub fn finalize_into(self, output: &mut [u8]) -> Result<(), InvalidSize> {
        with_mac!(self, mac => {
            let mut digest = mac.finalize().into_bytes();
            let res = output.get_mut(..digest.len())
                .map(|out| out.copy_from_slice(digest.as_slice()))
                .ok_or(InvalidSize);
            digest.as_mut_slice().zeroize();
            res
        })
    }
}

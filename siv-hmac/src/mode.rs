//! SIV-HMAC Mode Descriptors
//!
//! A [`Mode`] pairs the HMAC digest used as the PRF with the AES counter mode keystream. The
//! descriptors are immutable `static`s, any number of contexts on any number of threads may
//! share one by reference.
use crate::error::Error;

/// The shortest tag any mode accepts, in bytes.
pub const MIN_TAG_LEN: usize = 20;

/// The key lengths accepted by every mode, in bytes.
///
/// The first half of the key keys the HMAC, the second half is the AES key (so AES-128,
/// AES-192 and AES-256 respectively).
pub const KEY_LENGTHS: [usize; 3] = [32, 48, 64];

pub(crate) const MAX_DIGEST_LEN: usize = 64;
pub(crate) const MAX_KEY_LEN: usize = 64;
pub(crate) const MAX_MAC_KEY_LEN: usize = MAX_KEY_LEN / 2;

/// The hash function underlying the HMAC PRF.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Digest {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

#[allow(clippy::len_without_is_empty)]
impl Digest {
    /// The digest's output length in bytes.
    #[inline]
    pub const fn len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// The digest's internal block length in bytes.
    #[inline]
    pub const fn block_len(self) -> usize {
        match self {
            Self::Sha256 => 64,
            Self::Sha384 | Self::Sha512 => 128,
        }
    }

    /// Low order terms of the field polynomial for `GF(2^(8 * len))`.
    ///
    /// * 256: `x^10 + x^5 + x^2 + 1`
    /// * 384: `x^12 + x^3 + x^2 + 1`
    /// * 512: `x^8 + x^5 + x^2 + 1`
    #[inline]
    pub(crate) const fn poly(self) -> u16 {
        match self {
            Self::Sha256 => 0x0425,
            Self::Sha384 => 0x100D,
            Self::Sha512 => 0x0125,
        }
    }
}

/// Describes one SIV-HMAC instantiation.
///
/// Use one of the provided descriptors: [`HMAC_SHA256_AES_CTR`], [`HMAC_SHA384_AES_CTR`] or
/// [`HMAC_SHA512_AES_CTR`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Mode {
    name: &'static str,
    digest: Digest,
}

/// SIV with HMAC-SHA-256 as the PRF and AES-CTR as the keystream.
pub static HMAC_SHA256_AES_CTR: Mode = Mode { name: "HMAC-SHA256-AES-CTR", digest: Digest::Sha256 };
/// SIV with HMAC-SHA-384 as the PRF and AES-CTR as the keystream.
pub static HMAC_SHA384_AES_CTR: Mode = Mode { name: "HMAC-SHA384-AES-CTR", digest: Digest::Sha384 };
/// SIV with HMAC-SHA-512 as the PRF and AES-CTR as the keystream.
pub static HMAC_SHA512_AES_CTR: Mode = Mode { name: "HMAC-SHA512-AES-CTR", digest: Digest::Sha512 };

impl Mode {
    /// Human readable name of the mode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The digest underlying the HMAC PRF.
    #[inline]
    pub const fn digest(&self) -> Digest {
        self.digest
    }

    /// The PRF output length, also the size of the chained value.
    #[inline]
    pub const fn digest_len(&self) -> usize {
        self.digest.len()
    }

    /// The digest's internal block length.
    #[inline]
    pub const fn digest_block_len(&self) -> usize {
        self.digest.block_len()
    }

    /// The keystream cipher's block length (AES, 16 bytes).
    #[inline]
    pub const fn block_len(&self) -> usize {
        crate::buf::Iv::SIZE
    }

    /// The shortest permitted tag.
    #[inline]
    pub const fn min_tag_len(&self) -> usize {
        MIN_TAG_LEN
    }

    /// The longest permitted tag, the full PRF output.
    #[inline]
    pub const fn max_tag_len(&self) -> usize {
        self.digest_len()
    }

    /// The permitted key lengths.
    #[inline]
    pub const fn key_lengths(&self) -> &'static [usize] {
        &KEY_LENGTHS
    }

    /// If `len` is a permitted key length.
    #[inline]
    pub const fn is_valid_key_len(&self, len: usize) -> bool {
        matches!(len, 32 | 48 | 64)
    }

    /// If `len` is a permitted tag length for this mode.
    #[inline]
    pub const fn is_valid_tag_len(&self, len: usize) -> bool {
        len >= self.min_tag_len() && len <= self.max_tag_len()
    }

    /// Check the key and tag length, in that order.
    pub(crate) const fn check_params(&self, key_len: usize, tag_size: usize) -> Result<(), Error> {
        if !self.is_valid_key_len(key_len) {
            Err(Error::InvalidKeySize)
        } else if !self.is_valid_tag_len(tag_size) {
            Err(Error::InvalidTagSize)
        } else {
            Ok(())
        }
    }

    /// Split the key into the HMAC key and the AES key.
    pub(crate) fn split_key<'k>(&self, key: &'k [u8]) -> Result<(&'k [u8], &'k [u8]), Error> {
        if self.is_valid_key_len(key.len()) {
            Ok(key.split_at(key.len() / 2))
        } else {
            Err(Error::InvalidKeySize)
        }
    }
}

//! Advanced Encryption Standard (AES), the keystream of every mode.
pub mod ctr;

#[cfg(test)]
pub mod test_utils;

use zeroize::Zeroize;
use core::convert::TryFrom;
use crate::buf::InvalidSize;

/// An AES key, the variant selects the number of rounds.
///
/// The key is zeroed when dropped.
#[cfg_attr(test, derive(Clone, PartialEq))]
pub enum Key {
    /// AES-256
    Aes256([u8; 32]),
    /// AES-192
    Aes192([u8; 24]),
    /// AES-128
    Aes128([u8; 16])
}

opaque_dbg! { Key }

impl Key {
    /// The length of the key in bytes.
    #[inline]
    pub const fn capacity(&self) -> usize {
        match self {
            Self::Aes256(_) => 32,
            Self::Aes192(_) => 24,
            Self::Aes128(_) => 16
        }
    }

    /// Returns a reference to the key as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[u8] {
        match self {
            Self::Aes256(buf) => buf.as_slice(),
            Self::Aes192(buf) => buf.as_slice(),
            Self::Aes128(buf) => buf.as_slice()
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Aes256(buf) => buf.as_mut_slice(),
            Self::Aes192(buf) => buf.as_mut_slice(),
            Self::Aes128(buf) => buf.as_mut_slice()
        }
    }

    /// Zeros out the key.
    #[inline]
    pub fn zero(&mut self) {
        self.as_mut_slice().zeroize();
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.zero();
    }
}

impl From<[u8; 32]> for Key {
    #[inline]
    fn from(value: [u8; 32]) -> Self {
        Self::Aes256(value)
    }
}

impl From<[u8; 24]> for Key {
    #[inline]
    fn from(value: [u8; 24]) -> Self {
        Self::Aes192(value)
    }
}

impl From<[u8; 16]> for Key {
    #[inline]
    fn from(value: [u8; 16]) -> Self {
        Self::Aes128(value)
    }
}

impl<'s> TryFrom<&'s [u8]> for Key {
    type Error = InvalidSize;

    /// Select the key size from the length of `value`.
    fn try_from(value: &'s [u8]) -> Result<Self, Self::Error> {
        let mut key = match value.len() {
            32 => Self::Aes256([0u8; 32]),
            24 => Self::Aes192([0u8; 24]),
            16 => Self::Aes128([0u8; 16]),
            _ => return Err(InvalidSize)
        };

        key.as_mut_slice().copy_from_slice(value);
        Ok(key)
    }
}

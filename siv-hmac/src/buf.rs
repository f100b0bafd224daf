//! Types for Keys, IVs, and Generally Sensitive Bytes
use zeroize::Zeroize;
use core::convert::TryFrom;
use core::fmt;

/// Error returned when the provided slice is not the expected length.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidSize;

impl fmt::Display for InvalidSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InvalidSize")
    }
}

std! {
    impl std::error::Error for InvalidSize {}
}

/// The 16 byte initial counter block for the keystream.
///
/// In SIV the counter block is derived from the synthetic tag, so it is public (it travels in
/// the clear as the prefix of every ciphertext).
#[repr(transparent)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Iv {
    inner: [u8; Self::SIZE]
}

impl Iv {
    /// The size of the counter block in bytes.
    pub const SIZE: usize = 16;

    /// Creates a new counter block.
    pub const fn new(inner: [u8; Self::SIZE]) -> Self {
        Self { inner }
    }

    /// Derives the counter block from a synthetic tag.
    ///
    /// Takes the leading 16 bytes of `tag` and clears the most significant bit of the third and
    /// fourth 32-bit words, so the 128-bit counter addition never carries between the 64-bit
    /// halves of the block (the RFC 5297 convention).
    ///
    /// # Errors
    ///
    /// If `tag` is shorter than [`Iv::SIZE`].
    pub fn from_synthetic(tag: &[u8]) -> Result<Self, InvalidSize> {
        let mut iv = tag.get(..Self::SIZE).ok_or(InvalidSize).and_then(Self::try_from)?;
        iv.inner[8] &= 0x7f;
        iv.inner[12] &= 0x7f;
        Ok(iv)
    }

    /// Returns a reference to the counter block as a slice.
    #[inline]
    pub const fn slice(&self) -> &[u8] {
        self.inner.as_slice()
    }
}

impl From<[u8; Iv::SIZE]> for Iv {
    fn from(value: [u8; Iv::SIZE]) -> Self {
        Self::new(value)
    }
}

impl<'s> TryFrom<&'s [u8]> for Iv {
    type Error = InvalidSize;

    fn try_from(value: &'s [u8]) -> Result<Self, Self::Error> {
        <[u8; Self::SIZE]>::try_from(value).map(Self::new).map_err(|_| InvalidSize)
    }
}

/// Fixed-capacity, length-tracked secret bytes which are wiped on drop.
///
/// The capacity `C` is the largest size any mode may need, `len` is the part in use.
pub(crate) struct Secret<const C: usize> {
    inner: [u8; C],
    len: usize
}

opaque_dbg! { Secret<const C: usize> }

impl<const C: usize> Secret<C> {
    /// `len` bytes of zeroes, `len` saturates at `C`.
    #[inline]
    pub const fn zeroes(len: usize) -> Self {
        Self { inner: [0u8; C], len: if len < C { len } else { C } }
    }

    pub fn try_from_slice(slice: &[u8]) -> Result<Self, InvalidSize> {
        if slice.len() > C { return Err(InvalidSize) }

        let mut this = Self::zeroes(slice.len());
        this.as_mut_slice().copy_from_slice(slice);
        Ok(this)
    }

    /// Explicit copy of the secret, both copies wipe themselves independently.
    #[inline]
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self { inner: self.inner, len: self.len }
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.inner[..self.len]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner[..self.len]
    }

    /// Wipe the full capacity, the length is kept.
    #[inline]
    pub fn zero(&mut self) {
        self.inner.zeroize();
    }
}

impl<const C: usize> Drop for Secret<C> {
    #[inline]
    fn drop(&mut self) {
        self.zero();
    }
}

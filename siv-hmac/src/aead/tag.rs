use crate::buf::{InvalidSize, Iv, Secret};
use crate::ct;
use crate::mode::MAX_DIGEST_LEN;

/// A synthetic tag, the truncated `V` of the PRF chain.
///
/// The tag doubles as the initial counter block of the keystream. It is wiped when dropped.
#[must_use = "You must use the tag, or SIV is doing nothing for you"]
pub(crate) struct Tag {
    inner: Secret<MAX_DIGEST_LEN>,
}

opaque_dbg! { Tag }

impl Tag {
    /// The leading `tag_size` bytes of `synthetic`.
    pub fn truncate(synthetic: &[u8], tag_size: usize) -> Result<Self, InvalidSize> {
        synthetic.get(..tag_size)
            .ok_or(InvalidSize)
            .and_then(Secret::try_from_slice)
            .map(|inner| Self { inner })
    }

    /// Returns a reference to the tag as a byte slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.inner.as_slice()
    }

    /// The keystream's initial counter block.
    #[inline]
    pub fn counter_block(&self) -> Result<Iv, InvalidSize> {
        Iv::from_synthetic(self.as_slice())
    }
}

impl PartialEq for Tag {
    /// Constant Time Equivalence
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ct::ct_eq(self.as_slice(), other.as_slice())
    }
}

impl PartialEq<[u8]> for Tag {
    /// Constant Time Equivalence
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        ct::ct_eq(self.as_slice(), other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_takes_prefix() {
        let synthetic: [u8; 32] = core::array::from_fn(|i| i as u8);
        let tag = Tag::truncate(&synthetic, 20).unwrap();

        assert_eq!(tag.as_slice(), &synthetic[..20]);
        assert!(tag == synthetic[..20]);
        assert!(Tag::truncate(&synthetic, 33).is_err());
    }

    #[test]
    fn single_bit_difference() {
        let a = Tag::truncate(&[9u8; 48], 48).unwrap();
        let mut flipped = [9u8; 48];
        flipped[47] ^= 1;
        let b = Tag::truncate(&flipped, 48).unwrap();

        assert!(a != b);
        assert!(a == Tag::truncate(&[9u8; 48], 48).unwrap());
    }

    #[test]
    fn counter_block_from_prefix() {
        let tag = Tag::truncate(&[0xffu8; 20], 20).unwrap();
        let iv = tag.counter_block().unwrap();

        assert_eq!(iv.slice()[..8], [0xff; 8]);
        assert_eq!(iv.slice()[8], 0x7f);
        assert_eq!(iv.slice()[12], 0x7f);
    }

    #[test]
    fn counter_block_keys_the_stream() {
        use ::aes::Aes128;
        use ::ctr::cipher::{KeyIvInit, StreamCipher};
        use crate::aes::{ctr::AesCtr, Key};

        let key = [3u8; 16];
        let tag = Tag::truncate(&[0xa5u8; 32], 24).unwrap();

        let mut ours = [0u8; 40];
        assert!(AesCtr::new(&Key::Aes128(key), &tag.counter_block().unwrap()).unwrap()
            .apply_keystream_in_place(&mut ours)
            .is_ok());

        let mut block = [0xa5u8; 16];
        block[8] = 0x25;
        block[12] = 0x25;
        let mut theirs = [0u8; 40];
        ::ctr::Ctr128BE::<Aes128>::new_from_slices(&key, &block).unwrap()
            .apply_keystream(&mut theirs);

        assert_eq!(ours, theirs);
    }
}

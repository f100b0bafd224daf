//! AES in 128-bit big-endian counter mode.
use ::aes::{Aes128, Aes192, Aes256};
use ::ctr::Ctr128BE;
use ::ctr::cipher::{KeyIvInit, StreamCipher};

use crate::aes::Key;
use crate::buf::Iv;
use crate::error::Unspecified;
use crate::opaque_res::Res;

/// AES-CTR keystream, the key schedule and any buffered keystream are zeroed on drop.
pub enum AesCtr {
    /// Keyed with [`Key::Aes128`]
    Aes128(Ctr128BE<Aes128>),
    /// Keyed with [`Key::Aes192`]
    Aes192(Ctr128BE<Aes192>),
    /// Keyed with [`Key::Aes256`]
    Aes256(Ctr128BE<Aes256>),
}

opaque_dbg! { AesCtr }

impl AesCtr {
    /// Create a new AES CTR instance.
    ///
    /// # Arguments
    ///
    /// * `key` - The key material to use (which determines the number of rounds).
    /// * `iv`  - The initial counter block.
    ///
    /// # Errors
    ///
    /// If the underlying cipher rejected the key or counter block, both sizes are fixed by
    /// their types so this is not expected.
    pub fn new(key: &Key, iv: &Iv) -> Result<Self, Unspecified> {
        let ctr = match key {
            Key::Aes128(buf) => Ctr128BE::<Aes128>::new_from_slices(buf, iv.slice())
                .map(Self::Aes128),
            Key::Aes192(buf) => Ctr128BE::<Aes192>::new_from_slices(buf, iv.slice())
                .map(Self::Aes192),
            Key::Aes256(buf) => Ctr128BE::<Aes256>::new_from_slices(buf, iv.slice())
                .map(Self::Aes256),
        };

        ctr.map_err(|_| Unspecified)
    }

    /// Apply the underlying keystream to `in_out` in place.
    ///
    /// # Errors
    ///
    /// If the 128-bit counter would wrap, which requires more than `2^68` bytes.
    pub fn apply_keystream_in_place(&mut self, in_out: &mut [u8]) -> Res {
        let res = match self {
            Self::Aes128(ctr) => ctr.try_apply_keystream(in_out),
            Self::Aes192(ctr) => ctr.try_apply_keystream(in_out),
            Self::Aes256(ctr) => ctr.try_apply_keystream(in_out),
        };

        let mut out = Res::new();
        out.check(res.is_ok());
        out
    }

    /// Try to apply the underlying keystream to the output buffer.
    ///
    /// Only the leading `input.len()` bytes of `output` are written.
    ///
    /// # Arguments
    ///
    /// * `input` - The input to apply the keystream to.
    /// * `output` - The output buffer to store the result of applying the keystream.
    ///
    /// # Errors
    ///
    /// - If the `input` buffer is larger than the `output` buffer.
    /// - If the application of the keystream failed.
    pub fn try_apply_keystream(&mut self, input: &[u8], output: &mut [u8]) -> Res {
        match output.get_mut(..input.len()) {
            Some(out) => {
                out.copy_from_slice(input);
                self.apply_keystream_in_place(out)
            },
            None => Res::ERR
        }
    }
}


#[cfg(all(test, not(miri)))]
mod property_tests {
    use proptest::prelude::*;
    use crate::aes::test_utils::*;
    use super::*;

    macro_rules! with_rust_crypto_ctr {
        ($key:expr, $nonce:expr, |$ctr:ident| $do:expr) => {
            match $key {
                Key::Aes256(buf) => {
                    let mut $ctr = Ctr128BE::<Aes256>::new_from_slices(
                        buf.as_slice(), $nonce.slice()
                    ).unwrap();

                    $do
                },
                Key::Aes128(buf) => {
                    let mut $ctr = Ctr128BE::<Aes128>::new_from_slices(
                        buf.as_slice(), $nonce.slice()
                    ).unwrap();

                    $do
                },
                Key::Aes192(buf) => {
                    let mut $ctr = Ctr128BE::<Aes192>::new_from_slices(
                        buf.as_slice(), $nonce.slice()
                    ).unwrap();

                    $do
                }
            }
        };
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(5_000))]

        #[test]
        fn matches_direct_ctr(
            key in any::<Key>(),
            nonce in any::<[u8; 16]>(),
            input in any::<BoundList<256>>()
        ) {
            let nonce = Iv::new(nonce);
            let mut ours = input.create_self();
            prop_assert!(AesCtr::new(&key, &nonce).unwrap()
                .try_apply_keystream(input.as_slice(), ours.as_mut_slice())
                .is_ok());

            let mut theirs = input;
            with_rust_crypto_ctr!(&key, nonce, |ctr| ctr.apply_keystream(theirs.as_mut_slice()));

            prop_assert_eq!(ours.as_slice(), theirs.as_slice());
        }

        #[test]
        fn chunked_matches_single_pass(
            key in any::<Key>(),
            nonce in any::<[u8; 16]>(),
            input in any::<BoundList<256>>(),
            split in any::<usize>()
        ) {
            let nonce = Iv::new(nonce);
            let split = if input.is_empty() { 0 } else { split % input.len() };

            let mut whole = input;
            prop_assert!(AesCtr::new(&key, &nonce).unwrap()
                .apply_keystream_in_place(whole.as_mut_slice())
                .is_ok());

            let mut parts = input;
            let mut ctr = AesCtr::new(&key, &nonce).unwrap();
            let (left, right) = parts.as_mut_slice().split_at_mut(split);
            prop_assert!(ctr.apply_keystream_in_place(left).is_ok());
            prop_assert!(ctr.apply_keystream_in_place(right).is_ok());

            prop_assert_eq!(whole.as_slice(), parts.as_slice());
        }

        #[test]
        fn self_bijective(
            key in any::<Key>(),
            nonce in any::<[u8; 16]>(),
            input in any::<BoundList<256>>()
        ) {
            let nonce = Iv::new(nonce);
            let mut buf = input;

            prop_assert!(AesCtr::new(&key, &nonce).unwrap()
                .apply_keystream_in_place(buf.as_mut_slice())
                .is_ok());
            prop_assert!(AesCtr::new(&key, &nonce).unwrap()
                .apply_keystream_in_place(buf.as_mut_slice())
                .is_ok());

            prop_assert_eq!(buf, input);
        }
    }
}

//! SIV-HMAC, a nonce misuse resistant AEAD built from an HMAC PRF chain and AES-CTR.
//!
//! The tag is computed first, over every associated data field, the nonce and the plaintext,
//! and then used as the counter block of the keystream. Repeating a nonce only reveals that
//! the exact same message was sealed twice under the exact same associated data.
//!
//! ```text
//! ciphertext_blob = tag (tag_size bytes) || ciphertext (plaintext length bytes)
//! ```
mod s2v;
pub mod states;

#[doc(inline)]
pub use states::{Decrypt, Direction, Encrypt, Phase};

use states::Call;
use s2v::{Block, S2v};

use core::fmt;
use core::marker::PhantomData;
use zeroize::Zeroize;

use crate::aead::tag::Tag;
use crate::aes::{ctr::AesCtr, Key};
use crate::buf::Secret;
use crate::error::Error;
use crate::mode::{Mode, MAX_KEY_LEN, MAX_MAC_KEY_LEN};
use crate::opaque_res::Res;

/// The halves of the input key, the HMAC key and the AES key.
struct SubKeys {
    mac: Secret<MAX_MAC_KEY_LEN>,
    stream: Key,
}

impl SubKeys {
    fn derive(mode: &Mode, key: &[u8]) -> Result<Self, Error> {
        let (mac, stream) = mode.split_key(key)?;

        Ok(Self {
            mac: Secret::try_from_slice(mac)?,
            stream: Key::try_from(stream)?,
        })
    }
}

/// A single-message SIV-HMAC context.
///
/// Every message goes through the same cycle: zero or more associated data fields, an optional
/// nonce, then exactly one call to [`crypt`]. Afterwards (whether or not `crypt` succeeded) the
/// context must be [`reset`] before the next message.
///
/// The direction is part of the type, see [`Encrypt`] and [`Decrypt`].
///
/// # Zeroization
///
/// The key, the derived sub-keys and the chain are wiped when the context is dropped, and the
/// sub-keys and chain are also wiped on an authentication failure. The keyed `HMAC` states
/// built for each PRF call are transient and are not wiped.
///
/// # Example
///
/// ```
/// use siv_hmac::{SivHmac, Encrypt, Decrypt, HMAC_SHA256_AES_CTR, Error};
///
/// # fn main() -> Result<(), Error> {
/// let key = [7u8; 32];
///
/// let mut sealer = SivHmac::<Encrypt>::new(&HMAC_SHA256_AES_CTR, &key, 20)?;
/// sealer.add_associated_data(b"header")?.set_nonce(b"nonce1")?;
///
/// let mut blob = [0u8; 31];
/// assert_eq!(sealer.crypt(b"hello world", &mut blob)?, 31);
///
/// let mut opener = SivHmac::<Decrypt>::new(&HMAC_SHA256_AES_CTR, &key, 20)?;
/// opener.add_associated_data(b"header")?.set_nonce(b"nonce1")?;
///
/// let mut plain = [0u8; 11];
/// opener.crypt(&blob, &mut plain)?;
/// assert_eq!(&plain, b"hello world");
/// # Ok(()) }
/// ```
///
/// [`crypt`]: SivHmac::crypt
/// [`reset`]: SivHmac::reset
#[must_use]
pub struct SivHmac<'m, D: Direction> {
    mode: &'m Mode,
    key: Secret<MAX_KEY_LEN>,
    sub_keys: Option<SubKeys>,
    chain: Block,
    phase: Phase,
    tag_size: usize,
    _direction: PhantomData<D>,
}

impl<'m, D: Direction> fmt::Debug for SivHmac<'m, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SivHmac")
            .field("mode", &self.mode.name())
            .field("direction", &D::NAME)
            .field("phase", &self.phase)
            .field("tag_size", &self.tag_size)
            .finish_non_exhaustive()
    }
}

impl<'m, D: Direction> SivHmac<'m, D> {
    /// Create a new `SivHmac` context.
    ///
    /// # Arguments
    ///
    /// * `mode` - The mode descriptor, for instance [`HMAC_SHA256_AES_CTR`].
    /// * `key` - 32, 48 or 64 bytes. The first half keys the HMAC, the second half keys AES.
    /// * `tag_size` - Between 20 bytes and the mode's digest length inclusive.
    ///
    /// # Errors
    ///
    /// - `InvalidKeySize` if the key is not one of the permitted lengths.
    /// - `InvalidTagSize` if `tag_size` is out of bounds. The key is checked first.
    ///
    /// [`HMAC_SHA256_AES_CTR`]: crate::HMAC_SHA256_AES_CTR
    pub fn new(mode: &'m Mode, key: &[u8], tag_size: usize) -> Result<Self, Error> {
        mode.check_params(key.len(), tag_size)?;

        let sub_keys = SubKeys::derive(mode, key)?;
        let chain = S2v::new(mode.digest(), sub_keys.mac.as_slice()).start()?;

        event_debug!(
            mode = mode.name(), direction = D::NAME, tag_size,
            "initialized siv-hmac context"
        );

        Ok(Self {
            mode,
            key: Secret::try_from_slice(key)?,
            sub_keys: Some(sub_keys),
            chain,
            phase: Phase::Init,
            tag_size,
            _direction: PhantomData,
        })
    }

    /// The mode this context was created with.
    #[inline]
    pub const fn mode(&self) -> &'m Mode {
        self.mode
    }

    /// The length of the tag prefixed to every ciphertext.
    #[inline]
    pub const fn tag_size(&self) -> usize {
        self.tag_size
    }

    /// The context's current phase.
    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    fn absorb(&mut self, field: &[u8]) -> Result<(), Error> {
        let keys = self.sub_keys.as_ref().ok_or(Error::SequenceError)?;

        S2v::new(self.mode.digest(), keys.mac.as_slice()).absorb(&mut self.chain, field)
    }

    /// Authenticate one associated data field.
    ///
    /// Fields are authenticated individually and in order, `["ab", "c"]` and `["abc"]` produce
    /// different tags.
    ///
    /// # Errors
    ///
    /// `SequenceError` if the nonce was already set or the context is spent, the context is
    /// left unchanged.
    pub fn add_associated_data<A: AsRef<[u8]>>(&mut self, aad: A) -> Result<&mut Self, Error> {
        let next = self.phase.next(Call::AssociatedData)?;
        self.absorb(aad.as_ref())?;

        event_trace!(len = aad.as_ref().len(), "absorbed associated data");

        self.phase = next;
        Ok(self)
    }

    /// Authenticate the nonce, the last field before the message itself.
    ///
    /// The nonce may be of any length. Once set, no further associated data may be added.
    ///
    /// # Errors
    ///
    /// `SequenceError` if the nonce was already set or the context is spent, the context is
    /// left unchanged.
    pub fn set_nonce<N: AsRef<[u8]>>(&mut self, nonce: N) -> Result<&mut Self, Error> {
        let next = self.phase.next(Call::Nonce)?;
        self.absorb(nonce.as_ref())?;

        event_trace!(len = nonce.as_ref().len(), "absorbed nonce");

        self.phase = next;
        Ok(self)
    }

    /// The length of `tag || ciphertext` for a plaintext of `plaintext_len` bytes.
    ///
    /// # Errors
    ///
    /// `InvalidLength` if the size overflows `usize`.
    #[inline]
    pub const fn ciphertext_size(&self, plaintext_len: usize) -> Result<usize, Error> {
        match plaintext_len.checked_add(self.tag_size) {
            Some(len) => Ok(len),
            None => Err(Error::InvalidLength)
        }
    }

    /// The length of the plaintext within a `tag || ciphertext` of `ciphertext_len` bytes.
    ///
    /// # Errors
    ///
    /// `InvalidLength` if `ciphertext_len` is shorter than the tag.
    #[inline]
    pub const fn plaintext_size(&self, ciphertext_len: usize) -> Result<usize, Error> {
        match ciphertext_len.checked_sub(self.tag_size) {
            Some(len) => Ok(len),
            None => Err(Error::InvalidLength)
        }
    }

    /// The number of bytes [`crypt`] writes for an input of `input_len` bytes.
    ///
    /// # Errors
    ///
    /// See [`ciphertext_size`] when encrypting and [`plaintext_size`] when decrypting.
    ///
    /// [`crypt`]: Self::crypt
    /// [`ciphertext_size`]: Self::ciphertext_size
    /// [`plaintext_size`]: Self::plaintext_size
    #[inline]
    pub const fn output_size(&self, input_len: usize) -> Result<usize, Error> {
        if D::ENCRYPT {
            self.ciphertext_size(input_len)
        } else {
            self.plaintext_size(input_len)
        }
    }

    /// Encrypt or decrypt the message, depending on the context's direction.
    ///
    /// # Arguments
    ///
    /// * `input` - The plaintext when encrypting, `tag || ciphertext` when decrypting.
    /// * `output` - At least [`output_size`] bytes, only the leading `output_size` bytes are
    ///   written.
    ///
    /// # Returns
    ///
    /// The number of bytes written to `output`.
    ///
    /// # Errors
    ///
    /// - `SequenceError` if the context was already used, see [`reset`].
    /// - `InvalidLength` if `output` is too small, or when decrypting, if `input` is shorter
    ///   than the tag. Nothing is processed and the phase does not change.
    /// - `AuthenticationFailure` if the tag does not authenticate the message. The first
    ///   `output_size` bytes of `output` are zeroed and the context must be reset.
    ///
    /// [`output_size`]: Self::output_size
    /// [`reset`]: Self::reset
    pub fn crypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
        if D::ENCRYPT {
            self.seal(input, output)
        } else {
            self.open(input, output)
        }
    }

    fn seal(&mut self, plaintext: &[u8], output: &mut [u8]) -> Result<usize, Error> {
        let next = self.phase.next(Call::Crypt)?;
        let total = self.ciphertext_size(plaintext.len())?;
        let output = output.get_mut(..total).ok_or(Error::InvalidLength)?;
        let keys = self.sub_keys.as_ref().ok_or(Error::SequenceError)?;

        event_debug!(direction = D::NAME, len = plaintext.len(), "sealing message");

        let synthetic = S2v::new(self.mode.digest(), keys.mac.as_slice())
            .finish(&self.chain, plaintext);
        self.phase = next;

        let tag = Tag::truncate(synthetic?.as_slice(), self.tag_size)?;
        let (tag_out, body) = output.split_at_mut(self.tag_size);
        tag_out.copy_from_slice(tag.as_slice());

        let mut res = Res::new();
        match tag.counter_block().ok().and_then(|iv| AesCtr::new(&keys.stream, &iv).ok()) {
            Some(mut ctr) => res.ensure(ctr.try_apply_keystream(plaintext, body)),
            None => res.check(false),
        }

        if res.is_err() {
            output.zeroize();
        }

        res.or_err(total, Error::InvalidLength)
    }

    fn open(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize, Error> {
        let next = self.phase.next(Call::Crypt)?;
        let len = self.plaintext_size(input.len())?;
        let output = output.get_mut(..len).ok_or(Error::InvalidLength)?;
        let keys = self.sub_keys.as_ref().ok_or(Error::SequenceError)?;

        event_debug!(direction = D::NAME, len = input.len(), "opening message");

        self.phase = next;

        let (candidate, ciphertext) = input.split_at(self.tag_size);
        let candidate = Tag::truncate(candidate, self.tag_size)?;
        let mut res = Res::new();

        match candidate.counter_block().ok().and_then(|iv| AesCtr::new(&keys.stream, &iv).ok()) {
            Some(mut ctr) => res.ensure(ctr.try_apply_keystream(ciphertext, output)),
            None => res.check(false),
        }

        let computed = S2v::new(self.mode.digest(), keys.mac.as_slice())
            .finish(&self.chain, output)
            .and_then(|synthetic| {
                Tag::truncate(synthetic.as_slice(), self.tag_size).map_err(Error::from)
            });

        match computed {
            Ok(computed) => res.check(computed == candidate),
            Err(_) => res.check(false),
        }

        if res.is_err() {
            output.zeroize();
            self.purge();

            event_debug!(mode = self.mode.name(), "authentication failed, sub-keys purged");
            return Err(Error::AuthenticationFailure);
        }

        Ok(len)
    }

    /// Wipe the sub-keys and the chain, only a reset brings the context back.
    fn purge(&mut self) {
        self.sub_keys = None;
        self.chain.zero();
        self.phase = Phase::Spent;
    }

    /// Return to [`Phase::Init`], ready for the next message.
    ///
    /// All associated data and the nonce are discarded. If an authentication failure purged
    /// the sub-keys they are derived again from the key held by the context.
    ///
    /// # Errors
    ///
    /// Only if the sub-keys could not be derived, which cannot happen for a context that was
    /// successfully created.
    pub fn reset(&mut self) -> Result<&mut Self, Error> {
        if self.sub_keys.is_none() {
            self.sub_keys = Some(SubKeys::derive(self.mode, self.key.as_slice())?);
        }

        let keys = self.sub_keys.as_ref().ok_or(Error::SequenceError)?;
        self.chain = S2v::new(self.mode.digest(), keys.mac.as_slice()).start()?;
        self.phase = Phase::Init;

        event_trace!(mode = self.mode.name(), direction = D::NAME, "context reset");

        Ok(self)
    }
}

alloc! {
    impl<'m, D: Direction> SivHmac<'m, D> {
        /// [`crypt`] into a newly allocated buffer of exactly [`output_size`] bytes.
        ///
        /// # Errors
        ///
        /// See [`crypt`], on failure no buffer is returned.
        ///
        /// [`crypt`]: Self::crypt
        /// [`output_size`]: Self::output_size
        pub fn crypt_to_vec(&mut self, input: &[u8]) -> Result<alloc::vec::Vec<u8>, Error> {
            let mut output = alloc::vec![0u8; self.output_size(input.len())?];
            let written = self.crypt(input, &mut output)?;
            output.truncate(written);
            Ok(output)
        }
    }
}

/// Configures and creates [`SivHmac`] contexts.
///
/// The tag size defaults to the mode's digest length.
///
/// # Example
///
/// ```
/// use siv_hmac::{Builder, Encrypt, HMAC_SHA384_AES_CTR};
///
/// let siv = Builder::new(&HMAC_SHA384_AES_CTR)
///     .tag_size(32)
///     .build::<Encrypt>(&[1u8; 48])
///     .unwrap();
///
/// assert_eq!(siv.tag_size(), 32);
/// ```
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct Builder<'m> {
    mode: &'m Mode,
    tag_size: usize,
}

impl<'m> Builder<'m> {
    /// Start configuring contexts for `mode`.
    pub const fn new(mode: &'m Mode) -> Self {
        Self { mode, tag_size: mode.max_tag_len() }
    }

    /// Truncate tags to `tag_size` bytes, checked when the context is built.
    pub const fn tag_size(mut self, tag_size: usize) -> Self {
        self.tag_size = tag_size;
        self
    }

    /// Create a context for direction `D`.
    ///
    /// # Errors
    ///
    /// See [`SivHmac::new`].
    pub fn build<D: Direction>(self, key: &[u8]) -> Result<SivHmac<'m, D>, Error> {
        SivHmac::new(self.mode, key, self.tag_size)
    }
}

/// Process one message in a single call.
///
/// Empty `associated_data` adds no field and an empty `nonce` sets no nonce, so a call with
/// both empty authenticates the message alone.
///
/// # Returns
///
/// The number of bytes written to `output`.
///
/// # Errors
///
/// See [`SivHmac::new`] and [`SivHmac::crypt`].
pub fn one_shot<D: Direction>(
    mode: &Mode, key: &[u8], tag_size: usize,
    nonce: &[u8], associated_data: &[u8],
    input: &[u8], output: &mut [u8]
) -> Result<usize, Error> {
    let mut siv = SivHmac::<D>::new(mode, key, tag_size)?;

    if !associated_data.is_empty() {
        siv.add_associated_data(associated_data)?;
    }
    if !nonce.is_empty() {
        siv.set_nonce(nonce)?;
    }

    siv.crypt(input, output)
}

/// Seal `plaintext` into `output` as `tag || ciphertext`, see [`one_shot`].
///
/// # Errors
///
/// See [`SivHmac::new`] and [`SivHmac::crypt`].
pub fn encrypt(
    mode: &Mode, key: &[u8], tag_size: usize,
    nonce: &[u8], associated_data: &[u8],
    plaintext: &[u8], output: &mut [u8]
) -> Result<usize, Error> {
    one_shot::<Encrypt>(mode, key, tag_size, nonce, associated_data, plaintext, output)
}

/// Open `tag || ciphertext` into `output`, see [`one_shot`].
///
/// # Errors
///
/// See [`SivHmac::new`] and [`SivHmac::crypt`].
pub fn decrypt(
    mode: &Mode, key: &[u8], tag_size: usize,
    nonce: &[u8], associated_data: &[u8],
    ciphertext: &[u8], output: &mut [u8]
) -> Result<usize, Error> {
    one_shot::<Decrypt>(mode, key, tag_size, nonce, associated_data, ciphertext, output)
}

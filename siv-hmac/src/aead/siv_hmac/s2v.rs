//! The S2V PRF chain, generalized from the AES-CMAC original (RFC 5297) to an `n` byte HMAC.
//!
//! ```text
//! D = PRF(K, 0^n)
//! D = dbl(D) ^ PRF(K, S_i)          for every associated data field, then the nonce
//! T = P xorend D                    if |P| >= n
//! T = dbl(D) ^ pad(P)               otherwise
//! V = PRF(K, T)
//! ```
use crate::buf::Secret;
use crate::ct::bit_mask;
use crate::error::Error;
use crate::mac::hmac::Prf;
use crate::mode::{Digest, MAX_DIGEST_LEN};

/// One PRF output, the chained value `D` or the synthetic value `V`.
pub(crate) type Block = Secret<MAX_DIGEST_LEN>;

/// Multiply `block` by `x` in `GF(2^(8 * block.len()))`, big-endian.
///
/// `poly` holds the low order terms of the reduction polynomial. No branch depends on the
/// contents of `block`.
pub(crate) fn dbl(block: &mut [u8], poly: u16) {
    let Some(&msb) = block.first() else { return };
    let carry = bit_mask(msb >> 7);

    for i in 1..block.len() {
        block[i - 1] = (block[i - 1] << 1) | (block[i] >> 7);
    }

    let [hi, lo] = poly.to_be_bytes();
    match block {
        [.., high, low] => {
            *low = (*low << 1) ^ (lo & carry);
            *high ^= hi & carry;
        },
        [only] => *only = (*only << 1) ^ (lo & carry),
        [] => {}
    }
}

/// The PRF chain under one HMAC key.
pub(crate) struct S2v<'k> {
    digest: Digest,
    mac_key: &'k [u8],
}

impl<'k> S2v<'k> {
    #[inline]
    pub const fn new(digest: Digest, mac_key: &'k [u8]) -> Self {
        Self { digest, mac_key }
    }

    fn prf(&self) -> Result<Prf, Error> {
        Prf::new(self.digest, self.mac_key)
    }

    fn prf_into(&self, data: &[u8], out: &mut Block) -> Result<(), Error> {
        let mut prf = self.prf()?;
        prf.update(data);
        prf.finalize_into(out.as_mut_slice()).map_err(Error::from)
    }

    /// `D = PRF(K, 0^n)`
    pub fn start(&self) -> Result<Block, Error> {
        let zeroes = [0u8; MAX_DIGEST_LEN];
        let mut chain = Block::zeroes(self.digest.len());
        self.prf_into(&zeroes[..self.digest.len()], &mut chain)?;
        Ok(chain)
    }

    /// `D = dbl(D) ^ PRF(K, field)`
    ///
    /// `chain` is only modified once the PRF has succeeded.
    pub fn absorb(&self, chain: &mut Block, field: &[u8]) -> Result<(), Error> {
        let mut mac = Block::zeroes(self.digest.len());
        self.prf_into(field, &mut mac)?;

        dbl(chain.as_mut_slice(), self.digest.poly());
        xor_into(chain.as_mut_slice(), mac.as_slice());
        Ok(())
    }

    /// Compute `V` over the final input `plaintext`, `chain` is left as it was.
    pub fn finish(&self, chain: &Block, plaintext: &[u8]) -> Result<Block, Error> {
        let n = self.digest.len();
        let mut prf = self.prf()?;

        if plaintext.len() >= n {
            let (head, tail) = plaintext.split_at(plaintext.len() - n);
            let mut last = Block::try_from_slice(tail)?;
            xor_into(last.as_mut_slice(), chain.as_slice());

            prf.update(head).update(last.as_slice());
        } else {
            let mut padded = chain.duplicate();
            dbl(padded.as_mut_slice(), self.digest.poly());
            xor_into(&mut padded.as_mut_slice()[..plaintext.len()], plaintext);
            padded.as_mut_slice()[plaintext.len()] ^= 0x80;

            prf.update(padded.as_slice());
        }

        let mut synthetic = Block::zeroes(n);
        prf.finalize_into(synthetic.as_mut_slice())?;
        Ok(synthetic)
    }
}

#[inline]
fn xor_into(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

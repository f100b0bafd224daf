//! A straight-line SIV-HMAC built directly on the RustCrypto primitives.
//!
//! Written for readability over the crate's constant-time, zeroizing code paths, so the two
//! can be checked against each other.
#![allow(dead_code)]

use aes::{Aes128, Aes192, Aes256};
use ctr::cipher::{KeyIvInit, StreamCipher};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type Ctr<C> = ctr::Ctr128BE<C>;

pub struct Reference {
    digest_len: usize,
    mac_key: Vec<u8>,
    aes_key: Vec<u8>,
    tag_size: usize,
}

impl Reference {
    pub fn new(digest_len: usize, key: &[u8], tag_size: usize) -> Self {
        assert_eq!(key.len() % 2, 0);
        let (mac_key, aes_key) = key.split_at(key.len() / 2);
        Self { digest_len, mac_key: mac_key.to_vec(), aes_key: aes_key.to_vec(), tag_size }
    }

    fn prf(&self, data: &[u8]) -> Vec<u8> {
        macro_rules! run {
            ($hash:ty) => {{
                let mut mac = Hmac::<$hash>::new_from_slice(&self.mac_key).unwrap();
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }};
        }

        match self.digest_len {
            32 => run!(Sha256),
            48 => run!(Sha384),
            64 => run!(Sha512),
            other => panic!("no digest of {other} bytes"),
        }
    }

    fn dbl(&self, input: &[u8]) -> Vec<u8> {
        let poly: [u8; 2] = match self.digest_len {
            32 => [0x04, 0x25],
            48 => [0x10, 0x0d],
            64 => [0x01, 0x25],
            other => panic!("no polynomial for {other} bytes"),
        };

        let mut out = vec![0u8; input.len()];
        for i in 0..input.len() {
            let next = input.get(i + 1).map_or(0, |b| b >> 7);
            out[i] = (input[i] << 1) | next;
        }
        if input[0] & 0x80 != 0 {
            let n = out.len();
            out[n - 2] ^= poly[0];
            out[n - 1] ^= poly[1];
        }
        out
    }

    fn s2v(&self, fields: &[&[u8]], plaintext: &[u8]) -> Vec<u8> {
        let n = self.digest_len;
        let mut d = self.prf(&vec![0u8; n]);

        for field in fields {
            let mac = self.prf(field);
            d = self.dbl(&d).iter().zip(&mac).map(|(a, b)| a ^ b).collect();
        }

        let t = if plaintext.len() >= n {
            let mut t = plaintext.to_vec();
            let offset = t.len() - n;
            for (byte, x) in t[offset..].iter_mut().zip(&d) {
                *byte ^= x;
            }
            t
        } else {
            let mut padded = plaintext.to_vec();
            padded.push(0x80);
            padded.resize(n, 0);
            self.dbl(&d).iter().zip(&padded).map(|(a, b)| a ^ b).collect()
        };

        self.prf(&t)
    }

    fn keystream(&self, tag: &[u8], data: &mut [u8]) {
        let mut iv = [0u8; 16];
        iv.copy_from_slice(&tag[..16]);
        iv[8] &= 0x7f;
        iv[12] &= 0x7f;

        match self.aes_key.len() {
            16 => Ctr::<Aes128>::new_from_slices(&self.aes_key, &iv).unwrap().apply_keystream(data),
            24 => Ctr::<Aes192>::new_from_slices(&self.aes_key, &iv).unwrap().apply_keystream(data),
            32 => Ctr::<Aes256>::new_from_slices(&self.aes_key, &iv).unwrap().apply_keystream(data),
            other => panic!("no AES key of {other} bytes"),
        }
    }

    /// `fields` is every associated data field followed by the nonce, if any.
    pub fn seal(&self, fields: &[&[u8]], plaintext: &[u8]) -> Vec<u8> {
        let v = self.s2v(fields, plaintext);
        let tag = &v[..self.tag_size];

        let mut out = tag.to_vec();
        out.extend_from_slice(plaintext);
        self.keystream(tag, &mut out[self.tag_size..]);
        out
    }

    pub fn open(&self, fields: &[&[u8]], input: &[u8]) -> Option<Vec<u8>> {
        let (tag, ciphertext) = input.split_at(self.tag_size);
        let mut plaintext = ciphertext.to_vec();
        self.keystream(tag, &mut plaintext);

        let v = self.s2v(fields, &plaintext);
        (v[..self.tag_size] == *tag).then_some(plaintext)
    }
}

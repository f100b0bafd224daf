//! Authenticated Encryption with Associated Data (AEAD)

mod tag;
pub mod siv_hmac;

pub use siv_hmac::{
    SivHmac, Builder,
    Direction, Encrypt, Decrypt, Phase,
    one_shot, encrypt, decrypt,
};

#![no_main]

use libfuzzer_sys::fuzz_target;
use siv_hmac::{decrypt, encrypt, Mode, HMAC_SHA256_AES_CTR, HMAC_SHA384_AES_CTR, HMAC_SHA512_AES_CTR};

static MODES: [&Mode; 3] = [&HMAC_SHA256_AES_CTR, &HMAC_SHA384_AES_CTR, &HMAC_SHA512_AES_CTR];

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else { return };
    let mode = MODES[usize::from(selector % 3)];

    let key_len = mode.key_lengths()[usize::from(selector >> 2) % 3];
    if rest.len() < key_len { return }
    let (key, rest) = rest.split_at(key_len);

    let split = rest.len() / 3;
    let (nonce, rest) = rest.split_at(split.min(16));
    let (aad, msg) = rest.split_at(split.min(rest.len()));

    let tag_size = mode.min_tag_len();
    let mut sealed = vec![0u8; msg.len() + tag_size];
    encrypt(mode, key, tag_size, nonce, aad, msg, &mut sealed).unwrap();

    let mut opened = vec![0u8; msg.len()];
    decrypt(mode, key, tag_size, nonce, aad, &sealed, &mut opened).unwrap();
    assert_eq!(opened, msg);
});

#![no_main]

use libfuzzer_sys::fuzz_target;
use siv_hmac::{Decrypt, Error, SivHmac, HMAC_SHA256_AES_CTR};

const KEY: [u8; 32] = [0x5c; 32];

fuzz_target!(|data: &[u8]| {
    let Some((&tag_size, rest)) = data.split_first() else { return };
    let tag_size = 20 + usize::from(tag_size % 13);

    let mut siv = SivHmac::<Decrypt>::new(&HMAC_SHA256_AES_CTR, &KEY, tag_size).unwrap();
    siv.add_associated_data(b"fuzz").unwrap();

    let mut out = vec![0xffu8; rest.len()];

    match siv.crypt(rest, &mut out) {
        Ok(_) => panic!("opened a message that was never sealed"),
        Err(Error::InvalidLength) => assert!(rest.len() < tag_size),
        Err(Error::AuthenticationFailure) => {
            assert!(out[..rest.len() - tag_size].iter().all(|b| *b == 0));
            assert!(out[rest.len() - tag_size..].iter().all(|b| *b == 0xff));
        },
        Err(other) => panic!("unexpected error: {other:?}"),
    }
});

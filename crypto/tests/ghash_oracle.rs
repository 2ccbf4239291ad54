// Licensed under the Apache-2.0 license

use ghash::universal_hash::{KeyInit, UniversalHash};
use zvk_crypto::{Block, DeferredGhash, Ghash, SoftGhash};

fn absorb_padded<G: Ghash>(ghash: &G, data: &[u8]) -> Block {
    let mut y = [0u8; 16];
    for chunk in data.chunks(16) {
        let mut x = [0u8; 16];
        x[..chunk.len()].copy_from_slice(chunk);
        ghash.absorb(&mut y, &x);
    }
    ghash.flush(&mut y);
    y
}

fn reference(h: &Block, data: &[u8]) -> Block {
    let mut ghash = ghash::GHash::new(h.into());
    ghash.update_padded(data);
    ghash.finalize().into()
}

#[test]
fn test_matches_rustcrypto_ghash() {
    let h: Block = core::array::from_fn(|i| (i as u8).wrapping_mul(29).wrapping_add(3));
    let data: Vec<u8> = (0..100u32).map(|i| (i * 7 + 1) as u8).collect();

    let soft = SoftGhash::new(&h);
    let deferred = DeferredGhash::new(&h);
    for len in 0..data.len() {
        let expected = reference(&h, &data[..len]);
        assert_eq!(absorb_padded(&soft, &data[..len]), expected, "len {len}");
        assert_eq!(absorb_padded(&deferred, &data[..len]), expected, "len {len}");
    }
}

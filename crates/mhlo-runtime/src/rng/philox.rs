//! Philox-4x32 with 10 rounds.

const M0: u32 = 0xD251_1F53;
const M1: u32 = 0xCD9E_8D57;
const W0: u32 = 0x9E37_79B9;
const W1: u32 = 0xBB67_AE85;
const ROUNDS: usize = 10;

/// Words produced per counter value.
pub const BLOCK_WORDS: usize = 4;

#[inline]
fn mulhilo(a: u32, b: u32) -> (u32, u32) {
    let p = u64::from(a) * u64::from(b);
    ((p >> 32) as u32, p as u32)
}

/// Encrypt one counter block under `key`.
pub fn philox4x32(key: [u32; 2], counter: [u32; 4]) -> [u32; 4] {
    let [mut k0, mut k1] = key;
    let mut c = counter;
    for round in 0..ROUNDS {
        if round > 0 {
            k0 = k0.wrapping_add(W0);
            k1 = k1.wrapping_add(W1);
        }
        let (hi0, lo0) = mulhilo(M0, c[0]);
        let (hi1, lo1) = mulhilo(M1, c[2]);
        c = [hi1 ^ c[1] ^ k0, lo1, hi0 ^ c[3] ^ k1, lo0];
    }
    c
}

/// Produce at least `words` words from `key`, starting at the 128-bit
/// `*counter` and advancing it by the number of blocks consumed.
pub(crate) fn generate(key: u64, counter: &mut u128, words: usize) -> Vec<u32> {
    let key = [key as u32, (key >> 32) as u32];
    let blocks = words.div_ceil(BLOCK_WORDS);
    let mut out = Vec::with_capacity(blocks * BLOCK_WORDS);
    for _ in 0..blocks {
        let c = *counter;
        let ctr = [c as u32, (c >> 32) as u32, (c >> 64) as u32, (c >> 96) as u32];
        out.extend_from_slice(&philox4x32(key, ctr));
        *counter = c.wrapping_add(1);
    }
    out
}

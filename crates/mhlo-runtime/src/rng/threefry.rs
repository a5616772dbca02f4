//! Threefry-2x32 with 20 rounds (Salmon et al., "Parallel Random Numbers:
//! As Easy as 1, 2, 3").

const ROTATIONS: [u32; 8] = [13, 15, 26, 6, 17, 29, 16, 24];
const KEY_PARITY: u32 = 0x1BD1_1BDA;

/// Words produced per counter value.
pub const BLOCK_WORDS: usize = 2;

/// Encrypt one counter block under `key`.
pub fn threefry2x32(key: [u32; 2], counter: [u32; 2]) -> [u32; 2] {
    let ks = [key[0], key[1], KEY_PARITY ^ key[0] ^ key[1]];
    let mut x0 = counter[0].wrapping_add(ks[0]);
    let mut x1 = counter[1].wrapping_add(ks[1]);

    for s in 1..=5usize {
        let rotations = if s % 2 == 1 {
            &ROTATIONS[..4]
        } else {
            &ROTATIONS[4..]
        };
        for &r in rotations {
            x0 = x0.wrapping_add(x1);
            x1 = x1.rotate_left(r) ^ x0;
        }
        // Key injection after every fourth round.
        x0 = x0.wrapping_add(ks[s % 3]);
        x1 = x1.wrapping_add(ks[(s + 1) % 3]).wrapping_add(s as u32);
    }
    [x0, x1]
}

/// Produce at least `words` words from `key`, starting at `*counter` and
/// advancing it by the number of blocks consumed.
pub(crate) fn generate(key: u64, counter: &mut u64, words: usize) -> Vec<u32> {
    let key = [key as u32, (key >> 32) as u32];
    let blocks = words.div_ceil(BLOCK_WORDS);
    let mut out = Vec::with_capacity(blocks * BLOCK_WORDS);
    for _ in 0..blocks {
        let c = *counter;
        out.extend_from_slice(&threefry2x32(key, [c as u32, (c >> 32) as u32]));
        *counter = c.wrapping_add(1);
    }
    out
}

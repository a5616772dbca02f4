//! Deterministic, state-threaded bit generation (`rng_bit_generator`).
//!
//! State layout, one `u64` per word:
//!
//! | algorithm  | words | meaning                                     |
//! |------------|-------|---------------------------------------------|
//! | THREE_FRY  | 2     | `[key, counter]`                            |
//! | PHILOX     | 2, 3  | `[key, counter_lo]` or `[key, counter_lo, counter_hi]` |
//!
//! The generated 32-bit words are laid out little-endian and reinterpreted
//! as the requested element type.

use bytemuck::Pod;
use mhlo_core::{Element, MhloError, Result, RngAlgorithm};

use super::{philox, threefry};

/// Algorithm that `RngAlgorithm::Default` stands for when no configuration
/// overrides it.
pub const DEFAULT_ALGORITHM: RngAlgorithm = RngAlgorithm::Philox;

struct Selector<const A: i32>;

impl<const A: i32> Selector<A> {
    const ALGORITHM: RngAlgorithm = match RngAlgorithm::from_i32(A) {
        Some(algorithm) => algorithm,
        None => panic!("unknown RngAlgorithm selector"),
    };
}

/// Map `Default` to a concrete algorithm.
pub fn resolve(algorithm: RngAlgorithm, default: RngAlgorithm) -> RngAlgorithm {
    match algorithm {
        RngAlgorithm::Default => match default {
            RngAlgorithm::Default => DEFAULT_ALGORITHM,
            concrete => concrete,
        },
        concrete => concrete,
    }
}

/// Number of state words `algorithm` reads, as `(min, max)`.
fn state_words(algorithm: RngAlgorithm) -> (usize, usize) {
    match algorithm {
        RngAlgorithm::ThreeFry => (2, 2),
        RngAlgorithm::Philox | RngAlgorithm::Default => (2, 3),
    }
}

fn expected_words(algorithm: RngAlgorithm) -> &'static str {
    match algorithm {
        RngAlgorithm::ThreeFry => "2",
        RngAlgorithm::Philox | RngAlgorithm::Default => "2 or 3",
    }
}

/// Generate `n` elements of `T` from `state`, returning the advanced state.
///
/// `ALGORITHM` uses the `RngAlgorithm` encoding; an unknown selector fails
/// to compile. Missing state words read as zero, and words past the ones
/// the algorithm uses are returned unchanged.
pub fn rng_bit_generator<T, const ALGORITHM: i32, const N: usize>(
    state: Vec<u64>,
) -> (Vec<u64>, Vec<T>)
where
    T: Element + Pod,
{
    let algorithm = resolve(Selector::<ALGORITHM>::ALGORITHM, DEFAULT_ALGORITHM);
    generate(algorithm, state, N)
}

/// Runtime-dispatched form of [`rng_bit_generator`] that rejects malformed
/// state instead of zero-filling it.
pub fn try_rng_bit_generator<T>(
    algorithm: RngAlgorithm,
    state: Vec<u64>,
    n: usize,
) -> Result<(Vec<u64>, Vec<T>)>
where
    T: Element + Pod,
{
    let algorithm = resolve(algorithm, DEFAULT_ALGORITHM);
    check_state(algorithm, &state)?;
    Ok(generate(algorithm, state, n))
}

pub(crate) fn check_state(algorithm: RngAlgorithm, state: &[u64]) -> Result<()> {
    let (min, max) = state_words(algorithm);
    if state.len() < min || state.len() > max {
        return Err(MhloError::InvalidRngState {
            algorithm,
            expected: expected_words(algorithm),
            got: state.len(),
        });
    }
    Ok(())
}

/// Core generator; `algorithm` must already be resolved.
pub(crate) fn generate<T>(
    algorithm: RngAlgorithm,
    mut state: Vec<u64>,
    n: usize,
) -> (Vec<u64>, Vec<T>)
where
    T: Element + Pod,
{
    tracing::trace!("rng_bit_generator: algorithm={}, n={}", algorithm, n);

    let (min, _) = state_words(algorithm);
    if state.len() < min {
        tracing::warn!(
            "{} state has {} words, expected {}; padding with zeros",
            algorithm,
            state.len(),
            expected_words(algorithm)
        );
        state.resize(min, 0);
    }

    let words = (n * std::mem::size_of::<T>()).div_ceil(4);
    let mut stream = match algorithm {
        RngAlgorithm::ThreeFry => threefry::generate(state[0], &mut state[1], words),
        RngAlgorithm::Philox | RngAlgorithm::Default => {
            let hi = state.get(2).copied().unwrap_or(0);
            let mut counter = (u128::from(hi) << 64) | u128::from(state[1]);
            let stream = philox::generate(state[0], &mut counter, words);
            state[1] = counter as u64;
            if let Some(hi) = state.get_mut(2) {
                *hi = (counter >> 64) as u64;
            }
            stream
        }
    };
    stream.truncate(words);
    for w in &mut stream {
        *w = w.to_le();
    }

    let mut values: Vec<T> = bytemuck::allocation::pod_collect_to_vec(&stream);
    values.truncate(n);
    (state, values)
}

//! Random tensor generation.
//!
//! - [`uniform`]: entropy-seeded or seeded uniform fills
//! - [`bit_generator`]: counter-based, state-threaded raw bit streams
//! - [`threefry`], [`philox`]: the block functions behind `rng_bit_generator`

pub mod bit_generator;
pub mod philox;
pub mod threefry;
pub mod uniform;

//! # mhlo-runtime
//!
//! Runtime support for code emitted when lowering MHLO tensor operations to
//! a host-callable target. Generated call sites invoke these functions
//! directly; there is no graph, no scheduler and no shape tracking.
//!
//! Provides:
//! - Unary and binary element-wise operators over scalars and flat tensors
//! - Comparison with a runtime [`ComparisonDirection`]
//! - Structural operators: broadcast, concatenate, reshape, select, clamp
//! - Uniform random fills and a deterministic Threefry / Philox bit generator
//!
//! ```rust
//! use mhlo_runtime::{add, compare, ComparisonDirection};
//!
//! let z = add(vec![1, 2, 3], vec![10, 20, 30]);
//! assert_eq!(z, vec![11, 22, 33]);
//! let mask = compare(z, vec![22, 22, 22], ComparisonDirection::Ge);
//! assert_eq!(mask, vec![false, true, true]);
//! ```

pub mod config;
pub mod ops;
pub mod rng;
pub mod shape;

pub use config::{rng_uniform_with, RngConfig};
pub use ops::binary::{add, atan2, div, max, min, mul, pow, rem, sub};
pub use ops::bitwise::{
    and, not, or, shift_left, shift_right_arithmetic, shift_right_logical, xor,
};
pub use ops::comparison::{compare, compare_total};
pub use ops::structural::{
    broadcast_in_dim, clamp, concatenate, concatenate_all, reshape, select,
};
pub use ops::unary::{
    abs, bitcast_convert, bitcast_convert_resize, ceil, convert, cos, exponential,
    exponential_minus_one, floor, is_finite, log, log_plus_one, negate, round_nearest_afz,
    round_nearest_even, rsqrt, sign, sin, sqrt, tanh, try_bitcast_convert,
};
pub use rng::bit_generator::{rng_bit_generator, try_rng_bit_generator};
pub use rng::uniform::{rng_uniform, rng_uniform_from, rng_uniform_seeded, UniformElement};
pub use shape::Shape;

pub use mhlo_core::{
    bf16, f16, ComparisonDirection, Complex, DType, Element, MhloError, Operand, Result,
    RngAlgorithm, C128, C64,
};

//! # mhlo-core
//!
//! Element model for the MHLO runtime support library.
//!
//! Provides:
//! - `DType` tags for every element type lowered code can carry
//! - `Element` and the capability traits operators are generic over
//! - `Operand`, which lets a rank-0 scalar and a flat `Vec<T>` share one
//!   element-wise implementation
//! - value conversion (`ConvertTo`) and operator attributes

pub mod attr;
pub mod convert;
pub mod dtype;
pub mod element;
pub mod error;
pub mod operand;
pub mod prelude;

pub use attr::{ComparisonDirection, RngAlgorithm};
pub use convert::ConvertTo;
pub use dtype::DType;
pub use element::{
    bf16, f16, Abs, Arithmetic, Bitwise, Comparable, Complex, Element, Negate, Ordered, Power,
    RealFloat, Shift, Sign, TotalOrder, Transcendental, C128, C64,
};
pub use error::MhloError;
pub use operand::Operand;

pub type Result<T> = std::result::Result<T, MhloError>;

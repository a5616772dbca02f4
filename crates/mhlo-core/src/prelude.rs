//! Convenience re-exports for common mhlo-core types.
//!
//! ```rust
//! use mhlo_core::prelude::*;
//! ```

pub use crate::ComparisonDirection;
pub use crate::DType;
pub use crate::Element;
pub use crate::MhloError;
pub use crate::Operand;
pub use crate::Result;
pub use crate::RngAlgorithm;
pub use crate::{bf16, f16, Complex, C128, C64};

//! Element-wise and structural tensor operators.
//!
//! Every operator is a free function over [`mhlo_core::Operand`], so lowered
//! code can pass a rank-0 scalar or a flat `Vec<T>` interchangeably.

pub mod binary;
pub mod bitwise;
pub mod comparison;
pub mod structural;
pub mod unary;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Element types a lowered MHLO tensor can carry.
///
/// Every [`Element`](crate::Element) implementation reports its tag through
/// `Element::DTYPE`, so generic code can inspect widths and categories
/// without knowing the concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    /// 1-bit predicate (`i1`)
    Pred,
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// 16-bit IEEE 754 half-precision float
    F16,
    /// 16-bit Brain Float (same exponent range as F32, reduced mantissa)
    BF16,
    /// 32-bit IEEE 754 single-precision float
    F32,
    /// 64-bit IEEE 754 double-precision float
    F64,
    /// Complex number with f32 real and imaginary parts
    C64,
    /// Complex number with f64 real and imaginary parts
    C128,
}

impl DType {
    /// Size in bytes of a single element as stored in memory.
    ///
    /// `Pred` occupies a full byte even though it carries one bit.
    pub fn size_bytes(&self) -> usize {
        match self {
            DType::Pred | DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 | DType::F16 | DType::BF16 => 2,
            DType::I32 | DType::U32 | DType::F32 => 4,
            DType::I64 | DType::U64 | DType::F64 | DType::C64 => 8,
            DType::C128 => 16,
        }
    }

    /// Width of the element's bit pattern, as seen by `bitcast_convert`.
    pub fn bit_width(&self) -> usize {
        match self {
            DType::Pred => 1,
            other => other.size_bytes() * 8,
        }
    }

    /// Whether this dtype is a real floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F16 | DType::BF16 | DType::F32 | DType::F64)
    }

    /// Whether this dtype is an integer type (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    pub fn is_signed_integer(&self) -> bool {
        matches!(self, DType::I8 | DType::I16 | DType::I32 | DType::I64)
    }

    pub fn is_unsigned_integer(&self) -> bool {
        matches!(self, DType::U8 | DType::U16 | DType::U32 | DType::U64)
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, DType::C64 | DType::C128)
    }

    pub fn is_pred(&self) -> bool {
        matches!(self, DType::Pred)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Pred => write!(f, "i1"),
            DType::I8 => write!(f, "si8"),
            DType::I16 => write!(f, "si16"),
            DType::I32 => write!(f, "si32"),
            DType::I64 => write!(f, "si64"),
            DType::U8 => write!(f, "ui8"),
            DType::U16 => write!(f, "ui16"),
            DType::U32 => write!(f, "ui32"),
            DType::U64 => write!(f, "ui64"),
            DType::F16 => write!(f, "f16"),
            DType::BF16 => write!(f, "bf16"),
            DType::F32 => write!(f, "f32"),
            DType::F64 => write!(f, "f64"),
            DType::C64 => write!(f, "complex<f32>"),
            DType::C128 => write!(f, "complex<f64>"),
        }
    }
}

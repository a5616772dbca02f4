//! Binary element-wise arithmetic.
//!
//! Both operands must hold the same number of elements; the result reuses
//! the left operand's buffer.

use mhlo_core::operand::zip_in_place;
use mhlo_core::{Arithmetic, Operand, Ordered, Power, RealFloat};

pub fn add<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Arithmetic,
{
    zip_in_place(x, y, Arithmetic::add)
}

pub fn sub<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Arithmetic,
{
    zip_in_place(x, y, Arithmetic::sub)
}

pub fn mul<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Arithmetic,
{
    zip_in_place(x, y, Arithmetic::mul)
}

/// Element-wise division.
///
/// Floats follow IEEE. Integer division by zero yields all bits set and
/// `MIN / -1` yields `MIN`; neither traps.
pub fn div<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Arithmetic,
{
    zip_in_place(x, y, Arithmetic::div)
}

/// Element-wise remainder, carrying the sign of the dividend.
///
/// Integer `x % 0 == x`.
pub fn rem<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Arithmetic,
{
    zip_in_place(x, y, Arithmetic::rem)
}

/// Element-wise maximum. A NaN in either operand propagates.
pub fn max<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Ordered,
{
    zip_in_place(x, y, Ordered::maximum)
}

/// Element-wise minimum. A NaN in either operand propagates.
pub fn min<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Ordered,
{
    zip_in_place(x, y, Ordered::minimum)
}

pub fn pow<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Power,
{
    zip_in_place(x, y, Power::pow)
}

/// Four-quadrant arctangent of `x / y`.
pub fn atan2<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: RealFloat,
{
    zip_in_place(x, y, RealFloat::atan2)
}

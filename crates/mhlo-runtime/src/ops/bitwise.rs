//! Bitwise operators on integers and logical operators on `bool`.

use mhlo_core::operand::{map_in_place, zip_in_place};
use mhlo_core::{Bitwise, Operand, Shift};

pub fn and<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Bitwise,
{
    zip_in_place(x, y, Bitwise::and)
}

pub fn or<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Bitwise,
{
    zip_in_place(x, y, Bitwise::or)
}

pub fn xor<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Bitwise,
{
    zip_in_place(x, y, Bitwise::xor)
}

pub fn not<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Bitwise,
{
    map_in_place(x, Bitwise::not)
}

/// Shift left by `y[i]` bits, read as unsigned. Amounts of at least the
/// bit width give 0.
pub fn shift_left<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Shift,
{
    zip_in_place(x, y, Shift::shift_left)
}

/// Shift right filling with zeros.
pub fn shift_right_logical<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Shift,
{
    zip_in_place(x, y, Shift::shift_right_logical)
}

/// Shift right filling with the sign bit; out-of-range amounts give 0 or -1.
pub fn shift_right_arithmetic<X>(x: X, y: X) -> X
where
    X: Operand,
    X::Elem: Shift,
{
    zip_in_place(x, y, Shift::shift_right_arithmetic)
}

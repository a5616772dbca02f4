//! Unary element-wise operators.
//!
//! Every operator accepts a rank-0 scalar or a flat `Vec` and returns the
//! same form. Operators that keep the element type reuse the input buffer.

use bytemuck::Pod;
use mhlo_core::operand::map_in_place;
use mhlo_core::{
    Abs, ConvertTo, Element, MhloError, Negate, Operand, RealFloat, Result, Sign, Transcendental,
};

/// Element-wise absolute value.
///
/// Complex operands narrow to a real tensor of moduli.
pub fn abs<X>(x: X) -> X::Of<<X::Elem as Abs>::Output>
where
    X: Operand,
    X::Elem: Abs,
{
    x.map(Abs::abs)
}

struct SameWidth<A, B>(std::marker::PhantomData<(A, B)>);

impl<A, B> SameWidth<A, B> {
    const CHECK: () = assert!(
        std::mem::size_of::<A>() == std::mem::size_of::<B>(),
        "bitcast_convert requires equal element bit widths"
    );
}

/// Reinterpret each element's bits as `T1`.
///
/// Source and target widths must match; a mismatch fails to compile.
pub fn bitcast_convert<T1, X>(x: X) -> X::Of<T1>
where
    T1: Element + Pod,
    X: Operand,
    X::Elem: Pod,
{
    #[allow(clippy::let_unit_value)]
    let () = SameWidth::<X::Elem, T1>::CHECK;
    x.map(|v| bytemuck::cast::<X::Elem, T1>(v))
}

/// Checked form of [`bitcast_convert`] for callers that pick types at runtime.
pub fn try_bitcast_convert<T1, X>(x: X) -> Result<X::Of<T1>>
where
    T1: Element + Pod,
    X: Operand,
    X::Elem: Pod,
{
    if std::mem::size_of::<X::Elem>() != std::mem::size_of::<T1>() {
        return Err(MhloError::BitWidthMismatch {
            from: <X::Elem as Element>::DTYPE,
            to: T1::DTYPE,
        });
    }
    Ok(x.map(|v| bytemuck::cast::<X::Elem, T1>(v)))
}

/// Reinterpret the flat byte stream of `x` as elements of `T1`.
///
/// Used when source and target widths differ: `n` elements of `T2` become
/// `ceil(n * size_of::<T2>() / size_of::<T1>())` elements of `T1`, with a
/// trailing partial element zero-padded.
pub fn bitcast_convert_resize<T1, T2>(x: Vec<T2>) -> Vec<T1>
where
    T1: Element + Pod,
    T2: Element + Pod,
{
    bytemuck::allocation::pod_collect_to_vec::<T2, T1>(&x)
}

/// Element-wise value conversion to `T1`; see [`mhlo_core::convert`] for
/// the rounding and saturation rules.
pub fn convert<T1, X>(x: X) -> X::Of<T1>
where
    T1: Element,
    X: Operand,
    X::Elem: ConvertTo<T1>,
{
    x.map::<T1, _>(ConvertTo::convert)
}

pub fn cos<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::cos)
}

pub fn sin<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::sin)
}

pub fn tanh<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::tanh)
}

/// Element-wise square root; negative real inputs give NaN.
pub fn sqrt<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::sqrt)
}

/// Element-wise reciprocal square root.
pub fn rsqrt<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::rsqrt)
}

/// Element-wise `e^x`.
pub fn exponential<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::exp)
}

/// Element-wise `e^x - 1`, accurate near zero.
pub fn exponential_minus_one<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::exp_m1)
}

/// Element-wise natural logarithm; `log(0) == -inf`, negative reals give NaN.
pub fn log<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::ln)
}

/// Element-wise `ln(1 + x)`, accurate near zero.
pub fn log_plus_one<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Transcendental,
{
    map_in_place(x, Transcendental::ln_1p)
}

/// Element-wise negation; integers wrap.
pub fn negate<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Negate,
{
    map_in_place(x, Negate::neg)
}

pub fn sign<X>(x: X) -> X
where
    X: Operand,
    X::Elem: Sign,
{
    map_in_place(x, Sign::sign)
}

/// `true` where the element is neither infinite nor NaN.
pub fn is_finite<X>(x: X) -> X::Of<bool>
where
    X: Operand,
    X::Elem: RealFloat,
{
    x.map(RealFloat::is_finite)
}

pub fn floor<X>(x: X) -> X
where
    X: Operand,
    X::Elem: RealFloat,
{
    map_in_place(x, RealFloat::floor)
}

pub fn ceil<X>(x: X) -> X
where
    X: Operand,
    X::Elem: RealFloat,
{
    map_in_place(x, RealFloat::ceil)
}

/// Round to nearest, ties away from zero.
pub fn round_nearest_afz<X>(x: X) -> X
where
    X: Operand,
    X::Elem: RealFloat,
{
    map_in_place(x, RealFloat::round_nearest_afz)
}

/// Round to nearest, ties to even.
pub fn round_nearest_even<X>(x: X) -> X
where
    X: Operand,
    X::Elem: RealFloat,
{
    map_in_place(x, RealFloat::round_nearest_even)
}

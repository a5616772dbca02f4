//! Element types and the capabilities operators require of them.
//!
//! Each operator bounds its element type by the narrowest capability it
//! needs (`Arithmetic` for `add`, `Shift` for `shift_left`, ...). The impls
//! below fix the numeric conventions for every supported type:
//!
//! - integer `add`/`sub`/`mul`/`neg`/`abs`/`pow` wrap (two's complement)
//! - integer `x / 0` is all bits set and `MIN / -1 == MIN`; `x % 0 == x`
//! - float `maximum`/`minimum` propagate NaN and order `-0.0 < +0.0`
//! - complex values order lexicographically on `(re, im)`; a NaN in either
//!   part propagates through `maximum`/`minimum` and leaves the pair unordered
//! - shifts read the amount as unsigned; out-of-range amounts flush

use std::cmp::Ordering;
use std::fmt::Debug;

use num_traits::Float;

pub use half::{bf16, f16};
pub use num_complex::Complex;

use crate::dtype::DType;
use crate::operand::Operand;

/// Complex number with f32 components.
pub type C64 = Complex<f32>;
/// Complex number with f64 components.
pub type C128 = Complex<f64>;

/// A scalar that can be stored in a tensor.
///
/// Every element is itself a rank-0 [`Operand`].
pub trait Element: Copy + Debug + PartialEq + Send + Sync + 'static + Operand<Elem = Self> {
    const DTYPE: DType;
}

macro_rules! impl_element {
    ($($t:ty => $dtype:ident),* $(,)?) => {
        $(impl Element for $t { const DTYPE: DType = DType::$dtype; })*
    };
}

impl_element!(
    bool => Pred,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
    f16 => F16, bf16 => BF16, f32 => F32, f64 => F64,
    Complex<f32> => C64, Complex<f64> => C128,
);

// =========================================================================
// Capability traits
// =========================================================================

/// `add`, `sub`, `mul`, `div`, `rem`.
pub trait Arithmetic: Element {
    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn div(self, rhs: Self) -> Self;
    fn rem(self, rhs: Self) -> Self;
}

/// Element-wise `maximum` / `minimum` under the element's natural order.
pub trait Ordered: Element {
    fn maximum(self, rhs: Self) -> Self;
    fn minimum(self, rhs: Self) -> Self;
}

/// Ordering used by `compare`. `None` marks an unordered pair, which
/// satisfies only `NE`.
pub trait Comparable: Element {
    fn partial_order(&self, other: &Self) -> Option<Ordering>;
}

/// IEEE total order (`TOTALORDER` comparisons); integers use their usual order.
pub trait TotalOrder: Element {
    fn total_cmp(&self, other: &Self) -> Ordering;
}

/// Absolute value; complex elements narrow to their real modulus.
pub trait Abs: Element {
    type Output: Element;
    fn abs(self) -> Self::Output;
}

pub trait Negate: Element {
    fn neg(self) -> Self;
}

/// `-1`, `0` or `1` by sign; floats keep `±0` and NaN, complex gives `x / |x|`.
pub trait Sign: Element {
    fn sign(self) -> Self;
}

pub trait Power: Element {
    fn pow(self, rhs: Self) -> Self;
}

/// Functions defined on real floats and complex numbers.
pub trait Transcendental: Element {
    fn exp(self) -> Self;
    fn exp_m1(self) -> Self;
    fn ln(self) -> Self;
    fn ln_1p(self) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn tanh(self) -> Self;
    fn sqrt(self) -> Self;
    fn rsqrt(self) -> Self;
}

/// Operations only meaningful on real floating-point elements.
pub trait RealFloat: Element {
    fn is_finite(self) -> bool;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Round half away from zero.
    fn round_nearest_afz(self) -> Self;
    /// Round half to even.
    fn round_nearest_even(self) -> Self;
    fn atan2(self, rhs: Self) -> Self;
}

/// Bitwise ops on integers, logical ops on `bool`.
pub trait Bitwise: Element {
    fn and(self, rhs: Self) -> Self;
    fn or(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;
    fn not(self) -> Self;
}

pub trait Shift: Element {
    fn shift_left(self, rhs: Self) -> Self;
    fn shift_right_logical(self, rhs: Self) -> Self;
    fn shift_right_arithmetic(self, rhs: Self) -> Self;
}

// =========================================================================
// Integers
// =========================================================================

fn int_pow_unsigned<T, F>(base: T, exp: u64, one: T, mul: F) -> T
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    let mut acc = one;
    let mut base = base;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul(acc, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }
    acc
}

macro_rules! impl_int_common {
    ($t:ty, $u:ty, $s:ty) => {
        impl Arithmetic for $t {
            #[inline]
            fn add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline]
            fn div(self, rhs: Self) -> Self {
                if rhs == 0 {
                    !0
                } else {
                    self.wrapping_div(rhs)
                }
            }

            #[inline]
            fn rem(self, rhs: Self) -> Self {
                if rhs == 0 {
                    self
                } else {
                    self.wrapping_rem(rhs)
                }
            }
        }

        impl Ordered for $t {
            #[inline]
            fn maximum(self, rhs: Self) -> Self {
                Ord::max(self, rhs)
            }

            #[inline]
            fn minimum(self, rhs: Self) -> Self {
                Ord::min(self, rhs)
            }
        }

        impl TotalOrder for $t {
            #[inline]
            fn total_cmp(&self, other: &Self) -> Ordering {
                Ord::cmp(self, other)
            }
        }

        impl Negate for $t {
            #[inline]
            fn neg(self) -> Self {
                self.wrapping_neg()
            }
        }

        impl Bitwise for $t {
            #[inline]
            fn and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline]
            fn or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline]
            fn xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline]
            fn not(self) -> Self {
                !self
            }
        }

        impl Shift for $t {
            #[inline]
            fn shift_left(self, rhs: Self) -> Self {
                let amount = rhs as $u;
                if amount >= <$t>::BITS as $u {
                    0
                } else {
                    ((self as $u) << amount) as $t
                }
            }

            #[inline]
            fn shift_right_logical(self, rhs: Self) -> Self {
                let amount = rhs as $u;
                if amount >= <$t>::BITS as $u {
                    0
                } else {
                    ((self as $u) >> amount) as $t
                }
            }

            #[inline]
            fn shift_right_arithmetic(self, rhs: Self) -> Self {
                let amount = rhs as $u;
                let value = self as $s;
                if amount >= <$t>::BITS as $u {
                    let fill: $s = if value < 0 { -1 } else { 0 };
                    fill as $t
                } else {
                    (value >> amount) as $t
                }
            }
        }
    };
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl_int_common!($t, $u, $t);

            impl Abs for $t {
                type Output = $t;

                #[inline]
                fn abs(self) -> $t {
                    self.wrapping_abs()
                }
            }

            impl Sign for $t {
                #[inline]
                fn sign(self) -> Self {
                    self.signum()
                }
            }

            impl Power for $t {
                fn pow(self, rhs: Self) -> Self {
                    if rhs < 0 {
                        match self {
                            1 => 1,
                            -1 if rhs & 1 == 0 => 1,
                            -1 => -1,
                            _ => 0,
                        }
                    } else {
                        int_pow_unsigned(self, rhs as u64, 1, <$t>::wrapping_mul)
                    }
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty => $s:ty),* $(,)?) => {
        $(
            impl_int_common!($t, $t, $s);

            impl Abs for $t {
                type Output = $t;

                #[inline]
                fn abs(self) -> $t {
                    self
                }
            }

            impl Sign for $t {
                #[inline]
                fn sign(self) -> Self {
                    (self != 0) as $t
                }
            }

            impl Power for $t {
                fn pow(self, rhs: Self) -> Self {
                    int_pow_unsigned(self, rhs as u64, 1, <$t>::wrapping_mul)
                }
            }
        )*
    };
}

impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
impl_unsigned!(u8 => i8, u16 => i16, u32 => i32, u64 => i64);

// =========================================================================
// Booleans
// =========================================================================

impl Ordered for bool {
    #[inline]
    fn maximum(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline]
    fn minimum(self, rhs: Self) -> Self {
        self & rhs
    }
}

impl TotalOrder for bool {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(self, other)
    }
}

impl Bitwise for bool {
    #[inline]
    fn and(self, rhs: Self) -> Self {
        self & rhs
    }

    #[inline]
    fn or(self, rhs: Self) -> Self {
        self | rhs
    }

    #[inline]
    fn xor(self, rhs: Self) -> Self {
        self ^ rhs
    }

    #[inline]
    fn not(self) -> Self {
        !self
    }
}

// =========================================================================
// Real floats (f16, bf16, f32, f64)
// =========================================================================

fn float_maximum<F: Float>(a: F, b: F) -> F {
    if a.is_nan() {
        a
    } else if b.is_nan() {
        b
    } else if a > b {
        a
    } else if b > a {
        b
    } else if a.is_sign_negative() {
        b
    } else {
        a
    }
}

fn float_minimum<F: Float>(a: F, b: F) -> F {
    if a.is_nan() {
        a
    } else if b.is_nan() {
        b
    } else if a < b {
        a
    } else if b < a {
        b
    } else if a.is_sign_negative() {
        a
    } else {
        b
    }
}

fn float_sign<F: Float>(x: F) -> F {
    if x.is_nan() || x == F::zero() {
        x
    } else {
        x.signum()
    }
}

fn round_half_even<F: Float>(x: F) -> F {
    let one = F::one();
    let two = one + one;
    if (x - x.trunc()).abs() == one / two {
        two * (x / two).round()
    } else {
        x.round()
    }
}

fn float_pow<F: Float>(x: F, y: F) -> F {
    x.powf(y)
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Arithmetic for $t {
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn rem(self, rhs: Self) -> Self {
                    self % rhs
                }
            }

            impl Ordered for $t {
                #[inline]
                fn maximum(self, rhs: Self) -> Self {
                    float_maximum(self, rhs)
                }

                #[inline]
                fn minimum(self, rhs: Self) -> Self {
                    float_minimum(self, rhs)
                }
            }

            impl Abs for $t {
                type Output = $t;

                #[inline]
                fn abs(self) -> $t {
                    Float::abs(self)
                }
            }

            impl Negate for $t {
                #[inline]
                fn neg(self) -> Self {
                    -self
                }
            }

            impl Sign for $t {
                #[inline]
                fn sign(self) -> Self {
                    float_sign(self)
                }
            }

            impl Power for $t {
                #[inline]
                fn pow(self, rhs: Self) -> Self {
                    float_pow(self, rhs)
                }
            }

            impl Transcendental for $t {
                fn exp(self) -> Self {
                    Float::exp(self)
                }

                fn exp_m1(self) -> Self {
                    Float::exp_m1(self)
                }

                fn ln(self) -> Self {
                    Float::ln(self)
                }

                fn ln_1p(self) -> Self {
                    Float::ln_1p(self)
                }

                fn cos(self) -> Self {
                    Float::cos(self)
                }

                fn sin(self) -> Self {
                    Float::sin(self)
                }

                fn tanh(self) -> Self {
                    Float::tanh(self)
                }

                fn sqrt(self) -> Self {
                    Float::sqrt(self)
                }

                fn rsqrt(self) -> Self {
                    Float::recip(Float::sqrt(self))
                }
            }

            impl RealFloat for $t {
                fn is_finite(self) -> bool {
                    Float::is_finite(self)
                }

                fn floor(self) -> Self {
                    Float::floor(self)
                }

                fn ceil(self) -> Self {
                    Float::ceil(self)
                }

                fn round_nearest_afz(self) -> Self {
                    Float::round(self)
                }

                fn round_nearest_even(self) -> Self {
                    round_half_even(self)
                }

                fn atan2(self, rhs: Self) -> Self {
                    Float::atan2(self, rhs)
                }
            }
        )*
    };
}

impl_float!(f16, bf16, f32, f64);

impl TotalOrder for f32 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl TotalOrder for f64 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

// Widening to f32 is exact and order-preserving for both half formats.
impl TotalOrder for f16 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.to_f32().total_cmp(&other.to_f32())
    }
}

impl TotalOrder for bf16 {
    #[inline]
    fn total_cmp(&self, other: &Self) -> Ordering {
        self.to_f32().total_cmp(&other.to_f32())
    }
}

macro_rules! impl_comparable_real {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                #[inline]
                fn partial_order(&self, other: &Self) -> Option<Ordering> {
                    PartialOrd::partial_cmp(self, other)
                }
            }
        )*
    };
}

impl_comparable_real!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f16, bf16, f32, f64);

// =========================================================================
// Complex
// =========================================================================

#[inline]
fn complex_is_nan<F: Float>(z: &Complex<F>) -> bool {
    z.re.is_nan() || z.im.is_nan()
}

fn complex_order<F: Float>(a: &Complex<F>, b: &Complex<F>) -> Option<Ordering> {
    if complex_is_nan(a) || complex_is_nan(b) {
        return None;
    }
    match a.re.partial_cmp(&b.re)? {
        Ordering::Equal => a.im.partial_cmp(&b.im),
        ord => Some(ord),
    }
}

macro_rules! impl_complex {
    ($($f:ty),* $(,)?) => {
        $(
            impl Arithmetic for Complex<$f> {
                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn rem(self, rhs: Self) -> Self {
                    self % rhs
                }
            }

            impl Ordered for Complex<$f> {
                fn maximum(self, rhs: Self) -> Self {
                    if complex_is_nan(&self) {
                        return self;
                    }
                    match complex_order(&self, &rhs) {
                        Some(Ordering::Less) | None => rhs,
                        _ => self,
                    }
                }

                fn minimum(self, rhs: Self) -> Self {
                    if complex_is_nan(&self) {
                        return self;
                    }
                    match complex_order(&self, &rhs) {
                        Some(Ordering::Greater) | None => rhs,
                        _ => self,
                    }
                }
            }

            impl Comparable for Complex<$f> {
                #[inline]
                fn partial_order(&self, other: &Self) -> Option<Ordering> {
                    complex_order(self, other)
                }
            }

            impl Abs for Complex<$f> {
                type Output = $f;

                #[inline]
                fn abs(self) -> $f {
                    self.norm()
                }
            }

            impl Negate for Complex<$f> {
                #[inline]
                fn neg(self) -> Self {
                    -self
                }
            }

            impl Sign for Complex<$f> {
                fn sign(self) -> Self {
                    let modulus = self.norm();
                    if modulus == 0.0 || modulus.is_nan() {
                        self
                    } else {
                        self.unscale(modulus)
                    }
                }
            }

            impl Power for Complex<$f> {
                #[inline]
                fn pow(self, rhs: Self) -> Self {
                    self.powc(rhs)
                }
            }

            impl Transcendental for Complex<$f> {
                fn exp(self) -> Self {
                    Complex::exp(self)
                }

                fn exp_m1(self) -> Self {
                    Complex::exp(self) - 1.0
                }

                fn ln(self) -> Self {
                    Complex::ln(self)
                }

                fn ln_1p(self) -> Self {
                    Complex::ln(self + 1.0)
                }

                fn cos(self) -> Self {
                    Complex::cos(self)
                }

                fn sin(self) -> Self {
                    Complex::sin(self)
                }

                fn tanh(self) -> Self {
                    Complex::tanh(self)
                }

                fn sqrt(self) -> Self {
                    Complex::sqrt(self)
                }

                fn rsqrt(self) -> Self {
                    Complex::sqrt(self).inv()
                }
            }
        )*
    };
}

impl_complex!(f32, f64);

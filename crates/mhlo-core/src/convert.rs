//! Value-preserving element conversion (`convert<T1, T2>`).
//!
//! Conversion rules:
//! - integer narrowing truncates to the low bits
//! - float to integer rounds toward zero, saturates, and maps NaN to 0
//! - integer or float to float rounds to nearest
//! - any value to `bool` tests `!= 0`; `bool` converts to 0 or 1
//! - real to complex sets the imaginary part to 0; complex to real keeps `re`

use num_complex::Complex;

use crate::element::{bf16, f16};

/// Numeric conversion from `Self` to `U`.
pub trait ConvertTo<U> {
    fn convert(self) -> U;
}

macro_rules! prim_to_prim {
    (@one $src:ty => [$($dst:ty),*]) => {
        $(
            impl ConvertTo<$dst> for $src {
                #[inline]
                fn convert(self) -> $dst {
                    self as $dst
                }
            }
        )*
    };
    ($($src:ty),* => $dsts:tt) => {
        $( prim_to_prim!(@one $src => $dsts); )*
    };
}

prim_to_prim!(
    i8, i16, i32, i64, u8, u16, u32, u64, f32, f64
        => [i8, i16, i32, i64, u8, u16, u32, u64, f32, f64]
);

// Primitives <-> half floats, bool and complex.
macro_rules! prim_to_others {
    ($($p:ty),* $(,)?) => {
        $(
            impl ConvertTo<f16> for $p {
                #[inline]
                fn convert(self) -> f16 {
                    f16::from_f64(self as f64)
                }
            }

            impl ConvertTo<bf16> for $p {
                #[inline]
                fn convert(self) -> bf16 {
                    bf16::from_f64(self as f64)
                }
            }

            impl ConvertTo<$p> for f16 {
                #[inline]
                fn convert(self) -> $p {
                    self.to_f32() as $p
                }
            }

            impl ConvertTo<$p> for bf16 {
                #[inline]
                fn convert(self) -> $p {
                    self.to_f32() as $p
                }
            }

            impl ConvertTo<bool> for $p {
                #[inline]
                fn convert(self) -> bool {
                    self != (0 as $p)
                }
            }

            impl ConvertTo<$p> for bool {
                #[inline]
                fn convert(self) -> $p {
                    u8::from(self) as $p
                }
            }

            impl ConvertTo<Complex<f32>> for $p {
                #[inline]
                fn convert(self) -> Complex<f32> {
                    Complex::new(self as f32, 0.0)
                }
            }

            impl ConvertTo<Complex<f64>> for $p {
                #[inline]
                fn convert(self) -> Complex<f64> {
                    Complex::new(self as f64, 0.0)
                }
            }

            impl ConvertTo<$p> for Complex<f32> {
                #[inline]
                fn convert(self) -> $p {
                    self.re as $p
                }
            }

            impl ConvertTo<$p> for Complex<f64> {
                #[inline]
                fn convert(self) -> $p {
                    self.re as $p
                }
            }
        )*
    };
}

prim_to_others!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// Half floats among themselves and against bool / complex.
macro_rules! half_to_others {
    ($($h:ty),* $(,)?) => {
        $(
            impl ConvertTo<f16> for $h {
                #[inline]
                fn convert(self) -> f16 {
                    f16::from_f32(self.to_f32())
                }
            }

            impl ConvertTo<bf16> for $h {
                #[inline]
                fn convert(self) -> bf16 {
                    bf16::from_f32(self.to_f32())
                }
            }

            impl ConvertTo<bool> for $h {
                #[inline]
                fn convert(self) -> bool {
                    self.to_f32() != 0.0
                }
            }

            impl ConvertTo<$h> for bool {
                #[inline]
                fn convert(self) -> $h {
                    <$h>::from_f32(f32::from(u8::from(self)))
                }
            }

            impl ConvertTo<Complex<f32>> for $h {
                #[inline]
                fn convert(self) -> Complex<f32> {
                    Complex::new(self.to_f32(), 0.0)
                }
            }

            impl ConvertTo<Complex<f64>> for $h {
                #[inline]
                fn convert(self) -> Complex<f64> {
                    Complex::new(self.to_f64(), 0.0)
                }
            }

            impl ConvertTo<$h> for Complex<f32> {
                #[inline]
                fn convert(self) -> $h {
                    <$h>::from_f32(self.re)
                }
            }

            impl ConvertTo<$h> for Complex<f64> {
                #[inline]
                fn convert(self) -> $h {
                    <$h>::from_f64(self.re)
                }
            }
        )*
    };
}

half_to_others!(f16, bf16);

impl ConvertTo<bool> for bool {
    #[inline]
    fn convert(self) -> bool {
        self
    }
}

macro_rules! complex_to_complex {
    ($($src:ty => $dst:ty),* $(,)?) => {
        $(
            impl ConvertTo<Complex<$dst>> for Complex<$src> {
                #[inline]
                fn convert(self) -> Complex<$dst> {
                    Complex::new(self.re as $dst, self.im as $dst)
                }
            }
        )*
    };
}

complex_to_complex!(f32 => f32, f32 => f64, f64 => f32, f64 => f64);

// One impl per component type in each direction.
macro_rules! complex_bool {
    ($($f:ty),* $(,)?) => {
        $(
            impl ConvertTo<bool> for Complex<$f> {
                #[inline]
                fn convert(self) -> bool {
                    self.re != 0.0 || self.im != 0.0
                }
            }

            impl ConvertTo<Complex<$f>> for bool {
                #[inline]
                fn convert(self) -> Complex<$f> {
                    Complex::new(<$f>::from(u8::from(self)), 0.0)
                }
            }
        )*
    };
}

complex_bool!(f32, f64);

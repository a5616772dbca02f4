//! Uniform view over rank-0 scalars and flat tensors.
//!
//! Generated code passes a rank-0 tensor as a bare scalar and everything else
//! as a `Vec<T>`. Both implement [`Operand`], so each element-wise operator
//! is written once and returns the same form it was given.

use num_complex::Complex;

use crate::element::{bf16, f16, Element};

/// A tensor operand: either a single element or a flat `Vec` of elements.
pub trait Operand: Sized {
    /// Element type carried by this operand.
    type Elem: Element;

    /// The same operand form carrying elements of type `U`.
    type Of<U: Element>: Operand<Elem = U>;

    /// All elements in order.
    fn elems(&self) -> &[Self::Elem];

    fn elems_mut(&mut self) -> &mut [Self::Elem];

    /// Apply `f` to every element, possibly changing the element type.
    fn map<U: Element, F: FnMut(Self::Elem) -> U>(self, f: F) -> Self::Of<U>;

    /// Combine corresponding elements of `self` and `rhs`.
    fn zip_map<U: Element, F: FnMut(Self::Elem, Self::Elem) -> U>(
        self,
        rhs: Self,
        f: F,
    ) -> Self::Of<U>;

    /// Flatten into a `Vec`; a scalar becomes a one-element tensor.
    fn into_vec(self) -> Vec<Self::Elem>;

    /// Number of elements.
    fn len(&self) -> usize {
        self.elems().len()
    }

    fn is_empty(&self) -> bool {
        self.elems().is_empty()
    }
}

impl<T: Element> Operand for Vec<T> {
    type Elem = T;
    type Of<U: Element> = Vec<U>;

    #[inline]
    fn elems(&self) -> &[T] {
        self.as_slice()
    }

    #[inline]
    fn elems_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }

    fn map<U: Element, F: FnMut(T) -> U>(self, f: F) -> Vec<U> {
        self.into_iter().map(f).collect()
    }

    fn zip_map<U: Element, F: FnMut(T, T) -> U>(self, rhs: Self, mut f: F) -> Vec<U> {
        debug_assert_eq!(
            self.len(),
            rhs.len(),
            "element-wise operands differ in length: {} vs {}",
            self.len(),
            rhs.len()
        );
        self.into_iter().zip(rhs).map(|(a, b)| f(a, b)).collect()
    }

    #[inline]
    fn into_vec(self) -> Vec<T> {
        self
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl Operand for $t {
                type Elem = $t;
                type Of<U: Element> = U;

                #[inline]
                fn elems(&self) -> &[$t] {
                    std::slice::from_ref(self)
                }

                #[inline]
                fn elems_mut(&mut self) -> &mut [$t] {
                    std::slice::from_mut(self)
                }

                #[inline]
                fn map<U: Element, F: FnMut($t) -> U>(self, mut f: F) -> U {
                    f(self)
                }

                #[inline]
                fn zip_map<U: Element, F: FnMut($t, $t) -> U>(self, rhs: Self, mut f: F) -> U {
                    f(self, rhs)
                }

                #[inline]
                fn into_vec(self) -> Vec<$t> {
                    vec![self]
                }
            }
        )*
    };
}

impl_scalar_operand!(
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f16, bf16, f32, f64, Complex<f32>, Complex<f64>,
);

/// Overwrite every element of `x` with `f(element)`.
#[inline]
pub fn map_in_place<X: Operand, F: FnMut(X::Elem) -> X::Elem>(mut x: X, mut f: F) -> X {
    for v in x.elems_mut() {
        *v = f(*v);
    }
    x
}

/// Overwrite every element of `x` with `f(x[i], y[i])`.
///
/// Reuses `x`'s allocation; lengths are a caller obligation.
#[inline]
pub fn zip_in_place<X: Operand, F: FnMut(X::Elem, X::Elem) -> X::Elem>(
    mut x: X,
    y: X,
    mut f: F,
) -> X {
    debug_assert_eq!(
        x.len(),
        y.len(),
        "element-wise operands differ in length: {} vs {}",
        x.len(),
        y.len()
    );
    for (a, &b) in x.elems_mut().iter_mut().zip(y.elems()) {
        *a = f(*a, b);
    }
    x
}

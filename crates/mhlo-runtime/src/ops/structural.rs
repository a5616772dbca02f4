//! Structural operators: broadcast, concatenate, reshape, select, clamp.
//!
//! Shapes are not tracked, so these work on the flat element order only.

use mhlo_core::{Element, Operand, Ordered};

/// `n` copies of `x`, back to back. `n == 0` gives an empty tensor.
pub fn broadcast_in_dim<X: Operand>(x: X, n: usize) -> Vec<X::Elem> {
    x.elems().repeat(n)
}

/// Elements of `x` followed by elements of `y`.
pub fn concatenate<X, Y>(x: X, y: Y) -> Vec<X::Elem>
where
    X: Operand,
    Y: Operand<Elem = X::Elem>,
{
    let mut z = x.into_vec();
    z.extend_from_slice(y.elems());
    z
}

/// Concatenate any number of tensors in order.
pub fn concatenate_all<T, I>(parts: I) -> Vec<T>
where
    T: Element,
    I: IntoIterator<Item = Vec<T>>,
{
    parts.into_iter().flatten().collect()
}

/// Identity on the flat element sequence; a scalar becomes a one-element tensor.
pub fn reshape<X: Operand>(x: X) -> Vec<X::Elem> {
    x.into_vec()
}

/// `on_true[i]` where `pred[i]` holds, else `on_false[i]`.
pub fn select<X: Operand>(pred: X::Of<bool>, on_true: X, on_false: X) -> X {
    let mut z = on_false;
    for ((out, &p), &t) in z
        .elems_mut()
        .iter_mut()
        .zip(pred.elems())
        .zip(on_true.elems())
    {
        if p {
            *out = t;
        }
    }
    z
}

/// Clamp each element of `operand` into `[min, max]`.
///
/// `min` and `max` are either scalars applied to every element or tensors of
/// the operand's length.
pub fn clamp<X, B>(min: B, operand: X, max: B) -> X
where
    X: Operand,
    X::Elem: Ordered,
    B: Operand<Elem = X::Elem>,
{
    let mut z = operand;
    let bounds = min.elems().iter().cycle().zip(max.elems().iter().cycle());
    for (v, (&lo, &hi)) in z.elems_mut().iter_mut().zip(bounds) {
        *v = v.maximum(lo).minimum(hi);
    }
    z
}

//! Uniform random fill (`rng_uniform`).

use mhlo_core::{bf16, f16, Element};
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::shape::Shape;

/// Element types `rng_uniform` can fill.
pub trait UniformElement: Element {
    /// Draw `n` values from `[low, high)` using `rng`.
    fn sample_n<R: Rng + ?Sized>(low: Self, high: Self, n: usize, rng: &mut R) -> Vec<Self>;
}

// Integer bounds are exclusive above, while `new_inclusive` takes both ends.
macro_rules! impl_uniform_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl UniformElement for $t {
                fn sample_n<R: Rng + ?Sized>(low: $t, high: $t, n: usize, rng: &mut R) -> Vec<$t> {
                    if high <= low {
                        return vec![low; n];
                    }
                    let dist = Uniform::new_inclusive(low, high - 1);
                    (0..n).map(|_| dist.sample(rng)).collect()
                }
            }
        )*
    };
}

impl_uniform_int!(i8, i16, i32, i64, u8, u16, u32, u64);

// A span wider than the type's maximum is drawn over the halved bounds and
// doubled; doubling a value that large is exact, so draws stay below `high`.
macro_rules! impl_uniform_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl UniformElement for $t {
                fn sample_n<R: Rng + ?Sized>(low: $t, high: $t, n: usize, rng: &mut R) -> Vec<$t> {
                    if high <= low || !low.is_finite() || !high.is_finite() {
                        return vec![low; n];
                    }
                    if (high - low).is_finite() {
                        let dist = Uniform::new(low, high);
                        (0..n).map(|_| dist.sample(rng)).collect()
                    } else {
                        let dist = Uniform::new(low / 2.0, high / 2.0);
                        (0..n).map(|_| dist.sample(rng) * 2.0).collect()
                    }
                }
            }
        )*
    };
}

impl_uniform_float!(f32, f64);

// Half formats sample in f32; rounding back may land on `high`.
macro_rules! impl_uniform_half {
    ($($t:ty),* $(,)?) => {
        $(
            impl UniformElement for $t {
                fn sample_n<R: Rng + ?Sized>(low: $t, high: $t, n: usize, rng: &mut R) -> Vec<$t> {
                    f32::sample_n(low.to_f32(), high.to_f32(), n, rng)
                        .into_iter()
                        .map(<$t>::from_f32)
                        .collect()
                }
            }
        )*
    };
}

impl_uniform_half!(f16, bf16);

/// Fill a tensor of `shape` with uniform draws from `[low, high)`, using a
/// generator seeded from system entropy.
///
/// Integer draws never reach `high`. A range with `high <= low`, or a float
/// range with an infinite or NaN bound, fills every element with `low`.
pub fn rng_uniform<T, S>(low: T, high: T, shape: S) -> Vec<T>
where
    T: UniformElement,
    S: Into<Shape>,
{
    tracing::debug!("rng_uniform: seeding from entropy");
    let mut rng = StdRng::from_entropy();
    rng_uniform_from(low, high, shape, &mut rng)
}

/// [`rng_uniform`] with a fixed seed; equal seeds give equal tensors.
pub fn rng_uniform_seeded<T, S>(low: T, high: T, shape: S, seed: u64) -> Vec<T>
where
    T: UniformElement,
    S: Into<Shape>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    rng_uniform_from(low, high, shape, &mut rng)
}

/// [`rng_uniform`] drawing from a caller-owned generator.
pub fn rng_uniform_from<T, S, R>(low: T, high: T, shape: S, rng: &mut R) -> Vec<T>
where
    T: UniformElement,
    S: Into<Shape>,
    R: Rng + ?Sized,
{
    let shape = shape.into();
    let n = shape.numel();
    tracing::trace!("rng_uniform: {} elements of {} for shape {}", n, T::DTYPE, shape);
    T::sample_n(low, high, n, rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_upper_bound_exclusive() {
        let v = rng_uniform(0i32, 5, [1000i64]);
        assert_eq!(v.len(), 1000);
        assert!(v.iter().all(|&x| (0..5).contains(&x)));
        assert!(!v.contains(&5));
    }

    #[test]
    fn test_float_range() {
        let v = rng_uniform(-1.0f64, 1.0, [10i64, 10]);
        assert_eq!(v.len(), 100);
        assert!(v.iter().all(|&x| (-1.0..1.0).contains(&x)));
    }

    #[test]
    fn test_empty_shape_is_one_element() {
        let v = rng_uniform(3u8, 9, Shape::scalar());
        assert_eq!(v.len(), 1);
        assert!((3..9).contains(&v[0]));
    }

    #[test]
    fn test_zero_dim() {
        assert!(rng_uniform(0.0f32, 1.0, [4i64, 0]).is_empty());
    }

    #[test]
    fn test_degenerate_range() {
        assert_eq!(rng_uniform(7i16, 7, [3i64]), vec![7, 7, 7]);
        assert_eq!(rng_uniform(7i16, 2, [2i64]), vec![7, 7]);
        assert_eq!(rng_uniform(1.0f32, f32::INFINITY, [2i64]), vec![1.0, 1.0]);
        assert_eq!(rng_uniform(f64::NAN, 1.0, [1i64]).len(), 1);
    }

    #[test]
    fn test_full_width_range() {
        let v = rng_uniform(i64::MIN, i64::MAX, [64i64]);
        assert!(v.iter().all(|&x| x < i64::MAX));
        let w = rng_uniform(0u8, u8::MAX, [256i64]);
        assert!(w.iter().all(|&x| x < u8::MAX));
    }

    #[test]
    fn test_full_float_range() {
        let v = rng_uniform_seeded(f32::MIN, f32::MAX, [64i64], 11);
        assert!(v.iter().all(|&x| x.is_finite() && x < f32::MAX));
        assert!(v.iter().any(|&x| x != f32::MIN));
        assert!(v.iter().any(|&x| x > 0.0) && v.iter().any(|&x| x < 0.0));

        let w = rng_uniform_seeded(-f64::MAX, f64::MAX, [64i64], 12);
        assert!(w.iter().all(|&x| x.is_finite() && x < f64::MAX));
        assert!(w.windows(2).any(|p| p[0] != p[1]));
    }

    #[test]
    fn test_near_limit_float_range() {
        let low = f32::MAX / 4.0;
        let v = rng_uniform_seeded(low, f32::MAX, [64i64], 5);
        assert!(v.iter().all(|&x| x >= low && x < f32::MAX));
        assert!(v.iter().any(|&x| x != low));

        let h = rng_uniform_seeded(f16::MIN, f16::MAX, [64i64], 6);
        assert!(h.iter().all(|&x| x >= f16::MIN && x <= f16::MAX));
        assert!(h.iter().any(|&x| x != f16::MIN));
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = rng_uniform_seeded(0u32, 1_000_000, [32i64], 42);
        let b = rng_uniform_seeded(0u32, 1_000_000, [32i64], 42);
        let c = rng_uniform_seeded(0u32, 1_000_000, [32i64], 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_half_range() {
        let lo = f16::from_f32(-2.0);
        let hi = f16::from_f32(2.0);
        let v = rng_uniform_seeded(lo, hi, [50i64], 7);
        assert!(v.iter().all(|&x| x >= lo && x <= hi));
        let b = rng_uniform_seeded(bf16::ZERO, bf16::ONE, [50i64], 7);
        assert!(b.iter().all(|&x| x >= bf16::ZERO && x <= bf16::ONE));
    }
}

//! Element-wise comparison producing a boolean mask.

use mhlo_core::{Comparable, ComparisonDirection, Operand, TotalOrder};

/// Compare corresponding elements under `direction`.
///
/// Floats use IEEE partial order: a NaN on either side satisfies only `NE`.
/// Complex elements order lexicographically on `(re, im)`.
pub fn compare<X>(x: X, y: X, direction: ComparisonDirection) -> X::Of<bool>
where
    X: Operand,
    X::Elem: Comparable,
{
    x.zip_map(y, |a, b| direction.holds_partial(a.partial_order(&b)))
}

/// Compare under IEEE total order (`-NaN < -inf < ... < -0 < +0 < ... < +NaN`).
pub fn compare_total<X>(x: X, y: X, direction: ComparisonDirection) -> X::Of<bool>
where
    X: Operand,
    X::Elem: TotalOrder,
{
    x.zip_map(y, |a, b| direction.holds_for(a.total_cmp(&b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mhlo_core::{bf16, Complex};

    const ALL: [ComparisonDirection; 6] = [
        ComparisonDirection::Eq,
        ComparisonDirection::Ne,
        ComparisonDirection::Lt,
        ComparisonDirection::Le,
        ComparisonDirection::Gt,
        ComparisonDirection::Ge,
    ];

    #[test]
    fn test_compare_directions() {
        let x = vec![1, 2, 3];
        let y = vec![2, 2, 2];
        let expect = [
            vec![false, true, false],
            vec![true, false, true],
            vec![true, false, false],
            vec![true, true, false],
            vec![false, false, true],
            vec![false, true, true],
        ];
        for (dir, want) in ALL.iter().zip(expect) {
            assert_eq!(compare(x.clone(), y.clone(), *dir), want, "{dir}");
        }
    }

    #[test]
    fn test_compare_self() {
        let x = vec![-1.5f32, 0.0, 7.25];
        assert_eq!(compare(x.clone(), x.clone(), ComparisonDirection::Eq), vec![true; 3]);
        assert_eq!(compare(x.clone(), x.clone(), ComparisonDirection::Lt), vec![false; 3]);
        assert_eq!(compare(x.clone(), x, ComparisonDirection::Gt), vec![false; 3]);
    }

    #[test]
    fn test_compare_nan() {
        let x = vec![f64::NAN];
        assert_eq!(compare(x.clone(), x.clone(), ComparisonDirection::Eq), vec![false]);
        assert_eq!(compare(x.clone(), x, ComparisonDirection::Ne), vec![true]);
    }

    #[test]
    fn test_compare_scalar() {
        assert!(compare(3u8, 4u8, ComparisonDirection::Lt));
        assert!(!compare(bf16::ONE, bf16::ZERO, ComparisonDirection::Le));
    }

    #[test]
    fn test_compare_complex() {
        let x = vec![Complex::new(1.0f32, 2.0), Complex::new(-3.0, 0.5)];
        assert_eq!(compare(x.clone(), x.clone(), ComparisonDirection::Eq), vec![true; 2]);
        assert_eq!(compare(x.clone(), x.clone(), ComparisonDirection::Ne), vec![false; 2]);

        let y = vec![Complex::new(1.0f32, 3.0), Complex::new(-4.0, 9.0)];
        assert_eq!(compare(x.clone(), y.clone(), ComparisonDirection::Lt), vec![true, false]);
        assert_eq!(compare(x, y, ComparisonDirection::Ge), vec![false, true]);

        let nan = Complex::new(0.0f64, f64::NAN);
        assert!(!compare(nan, nan, ComparisonDirection::Eq));
        assert!(compare(nan, nan, ComparisonDirection::Ne));
    }

    #[test]
    fn test_compare_total_order() {
        let x = vec![f32::NAN, -0.0, 1.0];
        assert_eq!(compare_total(x.clone(), x, ComparisonDirection::Eq), vec![true; 3]);
        let m = compare_total(vec![-0.0f32], vec![0.0], ComparisonDirection::Lt);
        assert_eq!(m, vec![true]);
        let m = compare_total(vec![f64::INFINITY], vec![f64::NAN], ComparisonDirection::Lt);
        assert_eq!(m, vec![true]);
    }
}

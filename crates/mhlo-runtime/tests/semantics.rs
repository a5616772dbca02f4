//! End-to-end checks of operator semantics as generated code uses them.

use mhlo_runtime::*;

fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len(), "length mismatch: {} vs {}", a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            (x - y).abs() < tol,
            "element {} differs: {} vs {} (tol={})",
            i, x, y, tol
        );
    }
}

const THREE_FRY: i32 = RngAlgorithm::ThreeFry as i32;
const PHILOX: i32 = RngAlgorithm::Philox as i32;

// ============================================================================
// Element-wise binary laws
// ============================================================================

#[test]
fn test_binary_ops_are_pointwise() {
    let x = vec![3.0f64, -1.5, 8.0, 0.25];
    let y = vec![2.0f64, 4.0, -0.5, 0.25];

    let cases: [(fn(Vec<f64>, Vec<f64>) -> Vec<f64>, fn(f64, f64) -> f64); 7] = [
        (add, |a, b| a + b),
        (sub, |a, b| a - b),
        (mul, |a, b| a * b),
        (div, |a, b| a / b),
        (max, f64::max),
        (min, f64::min),
        (pow, f64::powf),
    ];
    for (op, reference) in cases {
        let got = op(x.clone(), y.clone());
        let want: Vec<f64> = x.iter().zip(&y).map(|(&a, &b)| reference(a, b)).collect();
        assert_close(&got, &want, 1e-12);
    }
}

#[test]
fn test_add_scenario() {
    assert_eq!(add(vec![1, 2, 3], vec![10, 20, 30]), vec![11, 22, 33]);
}

#[test]
fn test_integer_edge_semantics() {
    assert_eq!(div(vec![5i32, i32::MIN], vec![0, -1]), vec![-1, i32::MIN]);
    assert_eq!(add(vec![u8::MAX], vec![1]), vec![0]);
    assert_eq!(shift_left(vec![1u32], vec![32]), vec![0]);
    assert_eq!(shift_right_logical(vec![u16::MAX], vec![16]), vec![0]);
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_compare_reflexive() {
    let x = vec![4i64, -9, 0, 17];
    for dir in [ComparisonDirection::Eq, ComparisonDirection::Le, ComparisonDirection::Ge] {
        assert!(compare(x.clone(), x.clone(), dir).iter().all(|&m| m), "{dir}");
    }
    for dir in [ComparisonDirection::Ne, ComparisonDirection::Lt, ComparisonDirection::Gt] {
        assert!(compare(x.clone(), x.clone(), dir).iter().all(|&m| !m), "{dir}");
    }
}

#[test]
fn test_compare_complex_reflexive() {
    let x = vec![Complex::new(1.0f32, 2.0), Complex::new(0.0, -4.5)];
    assert_eq!(compare(x.clone(), x.clone(), ComparisonDirection::Eq), vec![true; 2]);
    assert_eq!(compare(x.clone(), x, ComparisonDirection::Ne), vec![false; 2]);
}

#[test]
fn test_compare_direction_from_attribute() {
    let dir: ComparisonDirection = "LT".parse().unwrap();
    assert_eq!(compare(vec![1.0f32, 3.0], vec![2.0, 2.0], dir), vec![true, false]);
    assert!("XX".parse::<ComparisonDirection>().is_err());
}

// ============================================================================
// Unary and conversion
// ============================================================================

#[test]
fn test_convert_identity() {
    let x = vec![i16::MIN, -1, 0, 1, i16::MAX];
    assert_eq!(convert::<i16, _>(x.clone()), x);
    let f = vec![f32::MIN_POSITIVE, -0.0, 1.5e30];
    assert_eq!(convert::<f32, _>(f.clone()), f);
}

#[test]
fn test_convert_complex_and_bool() {
    let z = vec![Complex::new(0.0f64, 0.0), Complex::new(0.0, 2.0), Complex::new(-1.0, 0.0)];
    assert_eq!(convert::<bool, _>(z), vec![false, true, true]);
    let back: Vec<Complex<f32>> = convert(vec![true, false]);
    assert_eq!(back, vec![Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)]);
}

#[test]
fn test_abs_complex_modulus() {
    let x = vec![Complex::new(3.0f64, -4.0), Complex::new(-5.0, 12.0), Complex::new(0.0, 0.0)];
    let moduli: Vec<f64> = abs(x.clone());
    let want: Vec<f64> = x.iter().map(|z| z.norm()).collect();
    assert_close(&moduli, &want, 1e-12);
    assert_close(&moduli, &[5.0, 13.0, 0.0], 1e-12);
}

#[test]
fn test_bitcast_roundtrip() {
    let bits: u32 = bitcast_convert(1.0f32);
    assert_eq!(bits, 0x3f80_0000);
    let x = vec![1.0f32, -0.0, f32::INFINITY, 3.25];
    let back: Vec<f32> = bitcast_convert(bitcast_convert::<u32, _>(x.clone()));
    assert_eq!(back, x);
}

#[test]
fn test_unary_chain() {
    let x = vec![0.5f64, 1.0, 2.0];
    let y = log(exponential(x.clone()));
    assert_close(&y, &x, 1e-12);
    let z = negate(sqrt(vec![4.0f64, 9.0]));
    assert_eq!(z, vec![-2.0, -3.0]);
    assert_eq!(is_finite(vec![1.0f64, f64::NAN]), vec![true, false]);
}

// ============================================================================
// Structural
// ============================================================================

#[test]
fn test_broadcast_in_dim_blocks() {
    let x = vec![3u8, 1, 4];
    let n = 4;
    let z = broadcast_in_dim(x.clone(), n);
    assert_eq!(z.len(), n * x.len());
    for chunk in z.chunks(x.len()) {
        assert_eq!(chunk, x.as_slice());
    }
    assert_eq!(broadcast_in_dim(vec![7, 8], 3), vec![7, 8, 7, 8, 7, 8]);
}

#[test]
fn test_concatenate_prefix_suffix() {
    let x = vec![1, 2];
    let y = vec![3, 4, 5];
    let z = concatenate(x.clone(), y.clone());
    assert_eq!(z.len(), x.len() + y.len());
    assert_eq!(&z[..x.len()], x.as_slice());
    assert_eq!(&z[x.len()..], y.as_slice());
    assert_eq!(z, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_select_pointwise() {
    let mask = vec![true, false, true];
    let x = vec![1, 2, 3];
    let y = vec![9, 9, 9];
    let z = select(mask.clone(), x.clone(), y.clone());
    for i in 0..z.len() {
        assert_eq!(z[i], if mask[i] { x[i] } else { y[i] });
    }
    assert_eq!(z, vec![1, 9, 3]);
}

#[test]
fn test_reshape_then_select_with_compare() {
    let x = reshape(vec![-2.0f32, 5.0, -7.0]);
    let mask = compare(x.clone(), vec![0.0; 3], ComparisonDirection::Lt);
    let z = select(mask, negate(x.clone()), x);
    assert_eq!(z, vec![2.0, 5.0, 7.0]);
}

// ============================================================================
// Random generation
// ============================================================================

#[test]
fn test_rng_uniform_integer_scenario() {
    let v = rng_uniform(0i32, 5, [1000i64]);
    assert_eq!(v.len(), 1000);
    assert!(v.iter().all(|&x| (0..5).contains(&x)));
}

#[test]
fn test_rng_uniform_float_bounds_and_length() {
    let v = rng_uniform(2.0f32, 3.0, [7i64, 3, 2]);
    assert_eq!(v.len(), 42);
    assert!(v.iter().all(|&x| (2.0..=3.0).contains(&x)));
    assert_eq!(rng_uniform(0.0f64, 1.0, Shape::scalar()).len(), 1);
}

#[test]
fn test_rng_uniform_full_float_range() {
    let v = rng_uniform(f32::MIN, f32::MAX, [64i64]);
    assert_eq!(v.len(), 64);
    assert!(v.iter().all(|&x| x >= f32::MIN && x < f32::MAX));
    assert!(v.iter().any(|&x| x != f32::MIN));
}

#[test]
fn test_rng_uniform_seeded_reproducible() {
    let config = RngConfig::seeded(2024);
    let a = rng_uniform_with(&config, -100i64, 100, [64i64]);
    let b = rng_uniform_with(&config, -100i64, 100, [64i64]);
    assert_eq!(a, b);
}

#[test]
fn test_bit_generator_deterministic() {
    let a = rng_bit_generator::<u64, PHILOX, 10>(vec![123, 456]);
    let b = rng_bit_generator::<u64, PHILOX, 10>(vec![123, 456]);
    assert_eq!(a, b);
}

#[test]
fn test_bit_generator_chaining_threefry() {
    let (mid, first) = rng_bit_generator::<u32, THREE_FRY, 8>(vec![77, 0]);
    let (end, second) = rng_bit_generator::<u32, THREE_FRY, 8>(mid);
    let (whole_end, whole) = rng_bit_generator::<u32, THREE_FRY, 16>(vec![77, 0]);
    assert_eq!([first, second].concat(), whole);
    assert_eq!(end, whole_end);
}

#[test]
fn test_bit_generator_chaining_philox() {
    let (mid, first) = rng_bit_generator::<u16, PHILOX, 16>(vec![1, u64::MAX, 0]);
    assert_eq!(mid, vec![1, 1, 1]);
    let (_, second) = rng_bit_generator::<u16, PHILOX, 16>(mid);
    let (_, whole) = rng_bit_generator::<u16, PHILOX, 32>(vec![1, u64::MAX, 0]);
    assert_eq!([first, second].concat(), whole);
}

#[test]
fn test_bit_generator_algorithms_differ() {
    let (_, a) = rng_bit_generator::<u32, THREE_FRY, 4>(vec![1, 1]);
    let (_, b) = rng_bit_generator::<u32, PHILOX, 4>(vec![1, 1]);
    assert_ne!(a, b);
}

#[test]
fn test_bit_generator_float_bits() {
    let (_, values) = rng_bit_generator::<f32, PHILOX, 4>(vec![0, 0]);
    let (_, words) = rng_bit_generator::<u32, PHILOX, 4>(vec![0, 0]);
    let bits: Vec<u32> = values.iter().map(|v| v.to_bits()).collect();
    assert_eq!(bits, words);
    assert_eq!(words, vec![0x6627_e8d5, 0xe169_c58d, 0xbc57_ac4c, 0x9b00_dbd8]);
}

#[test]
fn test_try_rng_bit_generator_algorithm_from_selector() {
    let algorithm = RngAlgorithm::try_from(1).unwrap();
    let (state, values) = try_rng_bit_generator::<u32>(algorithm, vec![0, 0], 2).unwrap();
    assert_eq!(state, vec![0, 1]);
    assert_eq!(values, vec![0x6b20_0159, 0x99ba_4efe]);
    assert!(matches!(
        RngAlgorithm::try_from(9),
        Err(MhloError::UnknownRngAlgorithm(9))
    ));
}

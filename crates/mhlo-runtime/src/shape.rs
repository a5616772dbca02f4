use smallvec::SmallVec;
use std::fmt;

/// Dimension list that sizes a freshly generated tensor.
///
/// Dimensions are never used for indexing; only their product matters.
/// Up to four dimensions are stored inline.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    dims: SmallVec<[i64; 4]>,
}

impl Shape {
    pub fn new(dims: &[i64]) -> Self {
        Self {
            dims: SmallVec::from_slice(dims),
        }
    }

    /// Rank-0 shape; holds one element.
    pub fn scalar() -> Self {
        Self::default()
    }

    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements.
    ///
    /// An empty dimension list counts 1 and any negative dimension counts 0.
    /// The product saturates instead of overflowing.
    pub fn numel(&self) -> usize {
        self.dims.iter().fold(1usize, |acc, &d| {
            let d = usize::try_from(d).unwrap_or(0);
            acc.saturating_mul(d)
        })
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({:?})", self.dims.as_slice())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

impl From<&[i64]> for Shape {
    fn from(dims: &[i64]) -> Self {
        Shape::new(dims)
    }
}

impl From<Vec<i64>> for Shape {
    fn from(dims: Vec<i64>) -> Self {
        Shape {
            dims: SmallVec::from_vec(dims),
        }
    }
}

macro_rules! impl_shape_from_array {
    ($($n:expr),*) => {
        $(
            impl From<[i64; $n]> for Shape {
                fn from(dims: [i64; $n]) -> Self {
                    Shape::new(&dims)
                }
            }
        )*
    };
}

impl_shape_from_array!(0, 1, 2, 3, 4, 5, 6);

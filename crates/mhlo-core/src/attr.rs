//! Operator attributes that generated code passes alongside tensor operands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MhloError;

/// Relation applied by `compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonDirection {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl ComparisonDirection {
    /// Evaluate the relation given a partial comparison.
    ///
    /// Unordered pairs (a NaN on either side) satisfy only `Ne`.
    #[inline]
    pub fn holds_partial(self, ord: Option<std::cmp::Ordering>) -> bool {
        match ord {
            Some(ord) => self.holds_for(ord),
            None => self == ComparisonDirection::Ne,
        }
    }

    /// Evaluate the relation given the outcome of a total comparison.
    #[inline]
    pub fn holds_for(self, ord: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            ComparisonDirection::Eq => ord == Equal,
            ComparisonDirection::Ne => ord != Equal,
            ComparisonDirection::Lt => ord == Less,
            ComparisonDirection::Le => ord != Greater,
            ComparisonDirection::Gt => ord == Greater,
            ComparisonDirection::Ge => ord != Less,
        }
    }
}

impl FromStr for ComparisonDirection {
    type Err = MhloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EQ" => Ok(ComparisonDirection::Eq),
            "NE" => Ok(ComparisonDirection::Ne),
            "LT" => Ok(ComparisonDirection::Lt),
            "LE" => Ok(ComparisonDirection::Le),
            "GT" => Ok(ComparisonDirection::Gt),
            "GE" => Ok(ComparisonDirection::Ge),
            _ => Err(MhloError::UnknownComparisonDirection(s.to_string())),
        }
    }
}

impl fmt::Display for ComparisonDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComparisonDirection::Eq => "EQ",
            ComparisonDirection::Ne => "NE",
            ComparisonDirection::Lt => "LT",
            ComparisonDirection::Le => "LE",
            ComparisonDirection::Gt => "GT",
            ComparisonDirection::Ge => "GE",
        };
        f.write_str(name)
    }
}

/// Bit-generation algorithm selected by `rng_bit_generator`.
///
/// Discriminants match the `RngAlgorithm` encoding emitted into generated
/// code, so a selector travels as a plain `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum RngAlgorithm {
    /// Backend's choice; resolved through the runtime's RNG configuration.
    #[default]
    Default = 0,
    /// Threefry-2x32 with 20 rounds.
    ThreeFry = 1,
    /// Philox-4x32 with 10 rounds.
    Philox = 2,
}

impl RngAlgorithm {
    /// Decode a selector, usable in const context.
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(RngAlgorithm::Default),
            1 => Some(RngAlgorithm::ThreeFry),
            2 => Some(RngAlgorithm::Philox),
            _ => None,
        }
    }
}

impl TryFrom<i32> for RngAlgorithm {
    type Error = MhloError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_i32(value).ok_or(MhloError::UnknownRngAlgorithm(value))
    }
}

impl fmt::Display for RngAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RngAlgorithm::Default => write!(f, "DEFAULT"),
            RngAlgorithm::ThreeFry => write!(f, "THREE_FRY"),
            RngAlgorithm::Philox => write!(f, "PHILOX"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("EQ".parse::<ComparisonDirection>().unwrap(), ComparisonDirection::Eq);
        assert_eq!("ge".parse::<ComparisonDirection>().unwrap(), ComparisonDirection::Ge);
        assert!(matches!(
            "LTE".parse::<ComparisonDirection>(),
            Err(MhloError::UnknownComparisonDirection(s)) if s == "LTE"
        ));
    }

    #[test]
    fn test_direction_nan_unordered() {
        let unordered = f32::NAN.partial_cmp(&1.0);
        assert!(!ComparisonDirection::Eq.holds_partial(unordered));
        assert!(ComparisonDirection::Ne.holds_partial(unordered));
        assert!(!ComparisonDirection::Le.holds_partial(unordered));
        assert!(ComparisonDirection::Le.holds_partial(Some(std::cmp::Ordering::Less)));
    }

    #[test]
    fn test_holds_for_ordering() {
        use std::cmp::Ordering;
        assert!(ComparisonDirection::Le.holds_for(Ordering::Equal));
        assert!(!ComparisonDirection::Lt.holds_for(Ordering::Equal));
        assert!(ComparisonDirection::Ge.holds_for(Ordering::Greater));
    }

    #[test]
    fn test_rng_algorithm_selector() {
        assert_eq!(RngAlgorithm::try_from(1).unwrap(), RngAlgorithm::ThreeFry);
        assert_eq!(RngAlgorithm::try_from(2).unwrap(), RngAlgorithm::Philox);
        assert!(matches!(RngAlgorithm::try_from(7), Err(MhloError::UnknownRngAlgorithm(7))));
        assert_eq!(RngAlgorithm::Philox as i32, 2);
        assert_eq!(format!("{}", RngAlgorithm::ThreeFry), "THREE_FRY");
    }
}

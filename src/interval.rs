// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Closed intervals of non-negative integers.

use std::fmt;

use crate::error::Error;

/// A closed interval `[inf, sup]` of non-negative integers.
///
/// A `ClosedInterval` is an immutable value: it is validated once at
/// construction (`inf <= sup` always holds) and never mutated afterwards.
/// Non-negativity is carried by the unsigned bound type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u32, u32)", into = "(u32, u32)")
)]
pub struct ClosedInterval {
    inf: u32,
    sup: u32,
}

impl ClosedInterval {
    /// Builds the interval `[inf, sup]`.
    ///
    /// Fails with [`Error::InvalidRange`] when `inf > sup`.
    pub fn new(inf: u32, sup: u32) -> Result<Self, Error> {
        if inf > sup {
            return Err(Error::InvalidRange { inf, sup });
        }
        Ok(Self { inf, sup })
    }

    /// Builds the degenerate interval `[x, x]`.
    pub fn singleton(x: u32) -> Self {
        Self { inf: x, sup: x }
    }

    /// Callers must uphold `inf <= sup`.
    pub(crate) fn new_unchecked(inf: u32, sup: u32) -> Self {
        debug_assert!(inf <= sup, "reversed interval bounds: {inf} > {sup}");
        Self { inf, sup }
    }

    /// Lower bound (included).
    pub fn inf(&self) -> u32 {
        self.inf
    }

    /// Upper bound (included).
    pub fn sup(&self) -> u32 {
        self.sup
    }

    /// Number of integers in the interval, `sup - inf + 1`.
    ///
    /// Never zero; counted in `u64` since `[0, u32::MAX]` holds 2^32
    /// integers.
    pub fn len(&self) -> u64 {
        u64::from(self.sup) - u64::from(self.inf) + 1
    }

    /// Whether `x` lies within the interval bounds.
    pub fn contains(&self, x: u32) -> bool {
        self.inf <= x && x <= self.sup
    }

    /// Renders the interval with a caller-selected bound separator.
    ///
    /// A degenerate interval renders as the bare integer, never as `n-n`.
    pub fn to_string_with(&self, insep: &str) -> String {
        if self.inf == self.sup {
            self.inf.to_string()
        } else {
            format!("{}{}{}", self.inf, insep, self.sup)
        }
    }
}

impl TryFrom<(u32, u32)> for ClosedInterval {
    type Error = Error;

    fn try_from((inf, sup): (u32, u32)) -> Result<Self, Error> {
        Self::new(inf, sup)
    }
}

impl From<ClosedInterval> for (u32, u32) {
    fn from(interval: ClosedInterval) -> Self {
        (interval.inf, interval.sup)
    }
}

impl From<u32> for ClosedInterval {
    fn from(x: u32) -> Self {
        Self::singleton(x)
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inf == self.sup {
            write!(f, "{}", self.inf)
        } else {
            write!(f, "{}-{}", self.inf, self.sup)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_bounds_are_rejected() {
        assert_eq!(
            ClosedInterval::new(5, 2),
            Err(Error::InvalidRange { inf: 5, sup: 2 })
        );
        assert_eq!(
            ClosedInterval::try_from((1, 0)),
            Err(Error::InvalidRange { inf: 1, sup: 0 })
        );
    }

    #[test]
    fn len_counts_both_ends() {
        assert_eq!(ClosedInterval::singleton(7).len(), 1);
        assert_eq!(ClosedInterval::new(1, 2).unwrap().len(), 2);
        assert_eq!(ClosedInterval::new(0, 10).unwrap().len(), 11);
        assert_eq!(ClosedInterval::new(0, u32::MAX).unwrap().len(), 1 << 32);
    }

    #[test]
    fn contains_is_inclusive() {
        let interval = ClosedInterval::new(3, 6).unwrap();
        assert!(interval.contains(3));
        assert!(interval.contains(5));
        assert!(interval.contains(6));
        assert!(!interval.contains(2));
        assert!(!interval.contains(7));
    }

    #[test]
    fn display_collapses_degenerate_intervals() {
        assert_eq!(ClosedInterval::singleton(5).to_string(), "5");
        assert_eq!(ClosedInterval::new(2, 4).unwrap().to_string(), "2-4");
        assert_eq!(ClosedInterval::new(2, 4).unwrap().to_string_with(".."), "2..4");
        assert_eq!(ClosedInterval::singleton(9).to_string_with(".."), "9");
    }
}

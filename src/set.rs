// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Sets of non-negative integers stored as sorted, coalesced runs.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};
use std::str::FromStr;

#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;
use smallvec::SmallVec;

use crate::error::Error;
use crate::interval::ClosedInterval;
use crate::merge::Sweep;

type Runs = SmallVec<[ClosedInterval; 2]>;

/// A set of non-negative integers, stored as sorted, disjoint,
/// fully-coalesced closed intervals (runs).
///
/// The run list is the unique minimal sorted partition of the underlying
/// integer set into maximal contiguous runs: runs are in strictly
/// increasing order and consecutive runs are separated by a gap of at
/// least one integer. Every operation preserves this canonical form, so
/// structural equality is set equality.
///
/// All binary set operations funnel through one generic boundary sweep
/// (see the `merge` module), specialized per operation by a keep
/// predicate:
///
/// | operation              | keep(in_left, in_right) |
/// |------------------------|-------------------------|
/// | union                  | `in_left \|\| in_right` |
/// | intersection           | `in_left && in_right`   |
/// | difference             | `in_left && !in_right`  |
/// | symmetric difference   | `in_left ^ in_right`    |
///
/// `IntervalSet` is a plain value type: non-mutating operations allocate a
/// fresh run list, mutating operations replace the receiver's list wholly,
/// and [`Clone`] yields a fully independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct IntervalSet {
    runs: Runs,
}

impl IntervalSet {
    /// The empty set.
    pub fn new() -> Self {
        Self { runs: Runs::new() }
    }

    fn from_runs(runs: Runs) -> Self {
        Self { runs }.check_invariants()
    }

    fn check_invariants(self) -> Self {
        if cfg!(debug_assertions) {
            for pair in self.runs.windows(2) {
                assert!(
                    u64::from(pair[0].sup()) + 1 < u64::from(pair[1].inf()),
                    "runs out of order or not coalesced: {} before {}",
                    pair[0],
                    pair[1],
                );
            }
        }
        self
    }

    /// Runs the boundary sweep against `other` and rebuilds a canonical set
    /// from the emitted (open, close) pairs.
    fn merge<F>(&self, other: &Self, keep: F) -> Self
    where
        F: Fn(bool, bool) -> bool,
    {
        Self::from_runs(Sweep::new(&self.runs, &other.runs, keep).pair_runs().collect())
    }

    // Set algebra #############################################################

    /// Returns the set of elements in `self`, `other`, or both.
    pub fn union(&self, other: &Self) -> Self {
        self.merge(other, |l, r| l || r)
    }

    /// Returns the set of elements common to `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        self.merge(other, |l, r| l && r)
    }

    /// Returns the set of elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.merge(other, |l, r| l && !r)
    }

    /// Returns the set of elements in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.merge(other, |l, r| l ^ r)
    }

    /// Adds the elements of `other` to `self`.
    pub fn update(&mut self, other: &Self) {
        *self = self.union(other);
    }

    /// Keeps only the elements also found in `other`.
    pub fn intersection_update(&mut self, other: &Self) {
        *self = self.intersection(other);
    }

    /// Removes the elements found in `other`.
    pub fn difference_update(&mut self, other: &Self) {
        *self = self.difference(other);
    }

    /// Alias for [`IntervalSet::difference_update`].
    pub fn discard(&mut self, other: &Self) {
        self.difference_update(other);
    }

    /// Keeps only the elements found in exactly one of `self` and `other`.
    pub fn symmetric_difference_update(&mut self, other: &Self) {
        *self = self.symmetric_difference(other);
    }

    /// Adds anything convertible to a set: a single integer, a
    /// [`ClosedInterval`], or another set.
    pub fn insert(&mut self, item: impl Into<IntervalSet>) {
        self.update(&item.into());
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.runs.clear();
    }

    // Relational predicates ###################################################

    /// True iff `self` and `other` share no element.
    ///
    /// Runs the intersection sweep lazily: the check stops at the first
    /// boundary the intersection would produce, the result set is never
    /// materialized.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        Sweep::new(&self.runs, &other.runs, |l, r| l && r)
            .next()
            .is_none()
    }

    /// True iff every element of `self` is in `other`.
    ///
    /// Equivalent to `self.intersection(other) == *self`, checked as an
    /// empty difference on the lazy sweep.
    pub fn is_subset(&self, other: &Self) -> bool {
        Sweep::new(&self.runs, &other.runs, |l, r| l && !r)
            .next()
            .is_none()
    }

    /// True iff every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// True iff `self` is a subset of `other` and the sets differ.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self != other
    }

    /// True iff `self` is a superset of `other` and the sets differ.
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_subset(self) && self != other
    }

    /// True iff the set holds no element.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    // Size and aggregation ####################################################

    /// Total number of integers in the set.
    pub fn cardinality(&self) -> u64 {
        self.runs.iter().map(ClosedInterval::len).sum()
    }

    /// Number of disjoint contiguous runs.
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// True iff the elements form at most one contiguous run.
    pub fn is_contiguous(&self) -> bool {
        self.runs.len() <= 1
    }

    /// Convex hull: the single run spanning the extremes of `self`, or the
    /// empty set if `self` is empty.
    pub fn aggregate(&self) -> Self {
        match (self.runs.first(), self.runs.last()) {
            (Some(first), Some(last)) => {
                ClosedInterval::new_unchecked(first.inf(), last.sup()).into()
            }
            _ => Self::new(),
        }
    }

    /// Smallest element, failing with [`Error::EmptySet`] on an empty set.
    pub fn min(&self) -> Result<u32, Error> {
        self.runs.first().map(|run| run.inf()).ok_or(Error::EmptySet)
    }

    /// Largest element, failing with [`Error::EmptySet`] on an empty set.
    pub fn max(&self) -> Result<u32, Error> {
        self.runs.last().map(|run| run.sup()).ok_or(Error::EmptySet)
    }

    // Membership and indexing #################################################

    /// Whether `x` is an element of the set.
    ///
    /// Binary search over the sorted runs, `O(log run_count)`.
    pub fn contains(&self, x: u32) -> bool {
        self.runs
            .binary_search_by(|run| {
                if run.sup() < x {
                    Ordering::Less
                } else if run.inf() > x {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Returns the `index`-th smallest element without expanding any run.
    ///
    /// Negative indices count from the end, `-1` being the largest element.
    /// Fails with [`Error::IndexOutOfRange`] when `index` falls outside
    /// `[-cardinality, cardinality - 1]`.
    pub fn index(&self, index: i64) -> Result<u32, Error> {
        if index >= 0 {
            let mut rest = index as u64;
            for run in &self.runs {
                if rest < run.len() {
                    return Ok(run.inf() + rest as u32);
                }
                rest -= run.len();
            }
        } else {
            let mut rest = index;
            for run in self.runs.iter().rev() {
                if rest >= -(run.len() as i64) {
                    return Ok((i64::from(run.sup()) + 1 + rest) as u32);
                }
                rest += run.len() as i64;
            }
        }
        Err(Error::IndexOutOfRange {
            index,
            cardinality: self.cardinality(),
        })
    }

    /// Always fails with [`Error::Unsupported`].
    ///
    /// Removing one element from the middle of a run would split the run in
    /// two, and split semantics are deliberately left unspecified. Use
    /// [`IntervalSet::difference`] to remove a known set of elements.
    pub fn remove_index(&mut self, _index: i64) -> Result<(), Error> {
        Err(Error::Unsupported)
    }

    // Iteration ###############################################################

    /// Iterator over the canonical runs in increasing order.
    pub fn runs(&self) -> std::slice::Iter<'_, ClosedInterval> {
        self.runs.iter()
    }

    /// Lazy iterator over every element in increasing order.
    ///
    /// Reverse with [`Iterator::rev`] to walk in decreasing order. Each
    /// call starts a fresh pass.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            runs: self.runs.iter(),
            front: None,
            back: None,
        }
    }

    // Text format #############################################################

    /// Renders the canonical format with caller-selected separators:
    /// `insep` between the bounds of a run, `outsep` between runs.
    pub fn to_string_with(&self, insep: &str, outsep: &str) -> String {
        let runs: Vec<String> = self.runs.iter().map(|run| run.to_string_with(insep)).collect();
        runs.join(outsep)
    }

    /// Parses the canonical format with caller-selected separators.
    ///
    /// The empty string parses to the empty set. Parsing is strict: every
    /// token split off on `outsep` must yield one or two integer fields on
    /// `insep`, in increasing order, otherwise the parse fails with
    /// [`Error::Parse`] carrying the offending token.
    pub fn from_str_with(text: &str, insep: &str, outsep: &str) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(Self::new());
        }
        text.split(outsep)
            .map(|token| parse_run(token, insep))
            .collect()
    }
}

fn parse_run(token: &str, insep: &str) -> Result<ClosedInterval, Error> {
    let bound =
        |field: &str| field.parse::<u32>().map_err(|_| Error::Parse(token.to_string()));
    match token.split_once(insep) {
        // A second split would leave a non-integer tail in `sup`, so three
        // or more fields are rejected here as well.
        Some((inf, sup)) => ClosedInterval::new(bound(inf)?, bound(sup)?)
            .map_err(|_| Error::Parse(token.to_string())),
        None => Ok(ClosedInterval::singleton(bound(token)?)),
    }
}

/// Parses the canonical format with the default separators, `-` between
/// bounds and a single space between runs.
impl FromStr for IntervalSet {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        Self::from_str_with(text, "-", " ")
    }
}

/// Renders the canonical format with the default separators. The empty set
/// renders as the empty string.
impl fmt::Display for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, run) in self.runs.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{run}")?;
        }
        Ok(())
    }
}

// Conversions #################################################################

impl From<ClosedInterval> for IntervalSet {
    fn from(run: ClosedInterval) -> Self {
        Self {
            runs: smallvec::smallvec![run],
        }
    }
}

impl From<u32> for IntervalSet {
    fn from(x: u32) -> Self {
        ClosedInterval::singleton(x).into()
    }
}

impl TryFrom<(u32, u32)> for IntervalSet {
    type Error = Error;

    fn try_from(bounds: (u32, u32)) -> Result<Self, Error> {
        ClosedInterval::try_from(bounds).map(Self::from)
    }
}

/// Folds arbitrary, possibly overlapping or touching intervals into
/// canonical form: sort by lower bound, then coalesce every run that
/// overlaps or touches its predecessor.
impl FromIterator<ClosedInterval> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = ClosedInterval>>(iter: I) -> Self {
        let mut sorted: Vec<ClosedInterval> = iter.into_iter().collect();
        sorted.sort_unstable_by_key(ClosedInterval::inf);
        let mut runs = Runs::new();
        for run in sorted {
            match runs.last_mut() {
                Some(last) if u64::from(run.inf()) <= u64::from(last.sup()) + 1 => {
                    if run.sup() > last.sup() {
                        *last = ClosedInterval::new_unchecked(last.inf(), run.sup());
                    }
                }
                _ => runs.push(run),
            }
        }
        Self::from_runs(runs)
    }
}

impl FromIterator<u32> for IntervalSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter().map(ClosedInterval::singleton).collect()
    }
}

impl Extend<ClosedInterval> for IntervalSet {
    fn extend<I: IntoIterator<Item = ClosedInterval>>(&mut self, iter: I) {
        let other: IntervalSet = iter.into_iter().collect();
        self.update(&other);
    }
}

impl Extend<u32> for IntervalSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(ClosedInterval::singleton));
    }
}

// Operator sugar ##############################################################

impl BitOr for &IntervalSet {
    type Output = IntervalSet;

    fn bitor(self, other: Self) -> IntervalSet {
        self.union(other)
    }
}

impl BitAnd for &IntervalSet {
    type Output = IntervalSet;

    fn bitand(self, other: Self) -> IntervalSet {
        self.intersection(other)
    }
}

impl Sub for &IntervalSet {
    type Output = IntervalSet;

    fn sub(self, other: Self) -> IntervalSet {
        self.difference(other)
    }
}

impl BitXor for &IntervalSet {
    type Output = IntervalSet;

    fn bitxor(self, other: Self) -> IntervalSet {
        self.symmetric_difference(other)
    }
}

impl BitOrAssign<&IntervalSet> for IntervalSet {
    fn bitor_assign(&mut self, other: &IntervalSet) {
        self.update(other);
    }
}

impl BitAndAssign<&IntervalSet> for IntervalSet {
    fn bitand_assign(&mut self, other: &IntervalSet) {
        self.intersection_update(other);
    }
}

impl SubAssign<&IntervalSet> for IntervalSet {
    fn sub_assign(&mut self, other: &IntervalSet) {
        self.difference_update(other);
    }
}

impl BitXorAssign<&IntervalSet> for IntervalSet {
    fn bitxor_assign(&mut self, other: &IntervalSet) {
        self.symmetric_difference_update(other);
    }
}

// Element iteration ###########################################################

/// Lazy element iterator over an [`IntervalSet`], in increasing order.
///
/// Walks the run list and expands each run on demand; double-ended, so
/// `rev()` walks in decreasing order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    runs: std::slice::Iter<'a, ClosedInterval>,
    /// Unconsumed part of the frontmost run, as remaining `[cur, sup]`.
    front: Option<(u32, u32)>,
    /// Unconsumed part of the backmost run, as remaining `[inf, cur]`.
    back: Option<(u32, u32)>,
}

impl Iterator for Iter<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (cur, sup) = match self.front.take() {
            Some(part) => part,
            None => match self.runs.next() {
                Some(run) => (run.inf(), run.sup()),
                None => self.back.take()?,
            },
        };
        if cur < sup {
            self.front = Some((cur + 1, sup));
        }
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let part = |part: Option<(u32, u32)>| {
            part.map_or(0, |(lo, hi)| u64::from(hi) - u64::from(lo) + 1)
        };
        let total = self.runs.clone().map(ClosedInterval::len).sum::<u64>()
            + part(self.front)
            + part(self.back);
        match usize::try_from(total) {
            Ok(exact) => (exact, Some(exact)),
            // More elements than usize can count (32-bit targets only).
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<u32> {
        let (inf, cur) = match self.back.take() {
            Some(part) => part,
            None => match self.runs.next_back() {
                Some(run) => (run.inf(), run.sup()),
                None => self.front.take()?,
            },
        };
        if inf < cur {
            self.back = Some((inf, cur - 1));
        }
        Some(cur)
    }
}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = u32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

// Serialization ###############################################################

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntervalSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Input runs are re-normalized on the way in, so no serialized
        // form can break the canonical-form invariants.
        let runs: Vec<ClosedInterval> = serde::Deserialize::deserialize(deserializer)?;
        Ok(runs.into_iter().collect())
    }
}

// Proptest ####################################################################

/// Generates interval sets from random `(inf, width)` pairs.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl Strategy<Value = IntervalSet> {
    prop::collection::vec((0u32..10_000, 0u32..100), 0..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(inf, width)| ClosedInterval::new_unchecked(inf, inf + width))
            .collect()
    })
}

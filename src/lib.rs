// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Closed-interval set algebra over non-negative integers.
//!
//! An [`IntervalSet`] represents a set of discrete resource indices
//! (processors, blocks, lanes) as a sorted list of disjoint closed
//! intervals ([`ClosedInterval`]), always coalesced into maximal
//! contiguous runs. Operations cost time proportional to the number of
//! runs, not the number of integers, so a set like `0-1023 2048-4095`
//! stays two runs wide no matter how many indices it covers.
//!
//! The crate provides:
//! - the full set algebra: union, intersection, difference and symmetric
//!   difference, each in non-mutating, in-place and operator
//!   (`| & - ^`) form, all driven by one predicate-specialized boundary
//!   sweep;
//! - relations: equality, disjointness, (proper) subset and superset;
//! - queries: membership by binary search, positional indexing without
//!   expansion, cardinality, run count, contiguity, convex hull,
//!   extrema;
//! - lazy double-ended element iteration;
//! - a canonical textual format (`"1-3 5"`) with strict parsing and a
//!   round-trip guarantee.
//!
//! # Example
//!
//! Tracking free processors in a scheduler:
//!
//! ```
//! use interval_set::IntervalSet;
//!
//! let mut free: IntervalSet = "0-3 8-15".parse()?;
//! let job: IntervalSet = "2-9".parse()?;
//!
//! assert_eq!(free.intersection(&job).to_string(), "2-3 8-9");
//! assert!(!free.is_superset(&job));
//!
//! free.difference_update(&job);
//! assert_eq!(free.to_string(), "0-1 10-15");
//! assert_eq!(free.cardinality(), 8);
//! # Ok::<(), interval_set::Error>(())
//! ```
//!
//! # Optional features
//!
//! * `serde`: serialization of sets and intervals; deserialization
//!   re-normalizes its input, so it cannot produce a non-canonical set.
//! * `proptest`: exports [`proptest_strategy`] for downstream property
//!   tests.

#![warn(missing_docs)]

pub mod error;
pub mod interval;
mod merge;
pub mod set;

pub use crate::error::Error;
pub use crate::interval::ClosedInterval;
#[cfg(feature = "proptest")]
pub use crate::set::proptest_strategy;
pub use crate::set::{IntervalSet, Iter};

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Handling interval-set errors.

use thiserror::Error;

/// Errors that may occur while building or querying interval sets.
///
/// Every error is reported synchronously at the offending call; invalid
/// input is never clamped or silently dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The interval bounds are reversed.
    #[error("invalid interval bounds: {inf} > {sup}")]
    InvalidRange {
        /// Requested lower bound.
        inf: u32,
        /// Requested upper bound.
        sup: u32,
    },

    /// A token of the textual format does not describe an interval.
    #[error("invalid interval format, offending token: {0:?}")]
    Parse(String),

    /// The set holds no element to report.
    #[error("empty interval set")]
    EmptySet,

    /// The positional index falls outside the set.
    #[error("index {index} out of range for a set of {cardinality} elements")]
    IndexOutOfRange {
        /// Requested position (negative counts from the end).
        index: i64,
        /// Number of elements in the set.
        cardinality: u64,
    },

    /// Removing a single element would split a run in two; split semantics
    /// are deliberately left unspecified.
    #[error("element removal by index is not supported")]
    Unsupported,
}

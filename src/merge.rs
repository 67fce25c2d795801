// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Generic two-input sweep over interval boundary events.
//!
//! Every binary set operation (union, intersection, difference, symmetric
//! difference) is a specialization of one merge: both inputs are flattened
//! into ascending streams of half-open boundary events, the streams are
//! swept together, and a caller-supplied `keep(in_left, in_right)` predicate
//! decides which regions belong in the output.

use crate::interval::ClosedInterval;

/// Coordinate strictly greater than any real boundary, which is at most
/// `u32::MAX as u64 + 1`.
const SENTINEL: u64 = u64::MAX;

/// Boundary event: `(is_end, coordinate)`.
type Event = (bool, u64);

/// Flattens a canonical run slice into ascending boundary events: each run
/// `[inf, sup]` yields a start event at `inf` and an end event at `sup + 1`.
///
/// The closed-to-half-open conversion happens here (and is undone in
/// [`Sweep::pair_runs`]) so that the sweep compares plain integers when two
/// runs touch, instead of special-casing inclusive upper bounds.
struct Flatten<'a> {
    runs: std::slice::Iter<'a, ClosedInterval>,
    end: Option<u64>,
}

impl<'a> Flatten<'a> {
    fn new(runs: &'a [ClosedInterval]) -> Self {
        Self {
            runs: runs.iter(),
            end: None,
        }
    }
}

impl Iterator for Flatten<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if let Some(end) = self.end.take() {
            return Some((true, end));
        }
        self.runs.next().map(|run| {
            self.end = Some(u64::from(run.sup()) + 1);
            (false, u64::from(run.inf()))
        })
    }
}

/// Lazy ascending stream of the output boundaries of a merge.
///
/// Boundaries alternate (open, close): pairing the produced coordinates two
/// at a time rebuilds the result runs. The stream is lazy on purpose, so
/// emptiness checks (`is_disjoint`, subset relations) stop at the first
/// boundary without materializing a result set.
pub(crate) struct Sweep<'a, F> {
    left: Flatten<'a>,
    right: Flatten<'a>,
    lhead: Event,
    rhead: Event,
    /// Whether the previously emitted boundary opened an output run.
    endbound: bool,
    keep: F,
}

impl<'a, F> Sweep<'a, F>
where
    F: Fn(bool, bool) -> bool,
{
    pub(crate) fn new(
        left: &'a [ClosedInterval],
        right: &'a [ClosedInterval],
        keep: F,
    ) -> Self {
        let mut left = Flatten::new(left);
        let mut right = Flatten::new(right);
        let lhead = left.next().unwrap_or((false, SENTINEL));
        let rhead = right.next().unwrap_or((false, SENTINEL));
        Self {
            left,
            right,
            lhead,
            rhead,
            endbound: false,
            keep,
        }
    }

    /// Drains the stream, pairing boundaries back into closed runs.
    ///
    /// The close coordinate of each pair is a half-open upper bound, hence
    /// the `- 1`.
    pub(crate) fn pair_runs(mut self) -> impl Iterator<Item = ClosedInterval> + 'a
    where
        F: 'a,
    {
        std::iter::from_fn(move || {
            let open = self.next()?;
            let close = self.next().expect("sweep boundaries come in pairs");
            Some(ClosedInterval::new_unchecked(
                open as u32,
                (close - 1) as u32,
            ))
        })
    }
}

impl<F> Iterator for Sweep<'_, F>
where
    F: Fn(bool, bool) -> bool,
{
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let (lend, lhead) = self.lhead;
            let (rend, rhead) = self.rhead;
            let head = lhead.min(rhead);
            if head == SENTINEL {
                return None;
            }
            // A side is inside the region starting at `head` when we sit
            // exactly on one of its start events, or when its next event
            // further right is an end event.
            let in_left = (head < lhead) == lend;
            let in_right = (head < rhead) == rend;
            let emit = (self.keep)(in_left, in_right) != self.endbound;
            // All events sharing this coordinate are consumed before the
            // next predicate evaluation.
            if head == lhead {
                self.lhead = self.left.next().unwrap_or((false, SENTINEL));
            }
            if head == rhead {
                self.rhead = self.right.next().unwrap_or((false, SENTINEL));
            }
            if emit {
                self.endbound = !self.endbound;
                return Some(head);
            }
        }
    }
}

//! Greedy row assignment (interval graph colouring by start time).

use super::overlap::overlaps;
use crate::models::Interval;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// How the free row for the next booking is found.
///
/// Both strategies process bookings in the same order and open the same
/// number of rows; they can differ in which existing row a booking lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PackingStrategy {
    /// Scan rows from index 0 and take the first without a conflict. O(n²).
    #[default]
    FirstFit,
    /// Keep only each row's latest end in a min-heap. O(n log n).
    EarliestEnd,
}

impl PackingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackingStrategy::FirstFit => "first-fit",
            PackingStrategy::EarliestEnd => "earliest-end",
        }
    }
}

/// Row chosen for one input interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Index into the slice given to [`assign_rows`].
    pub index: usize,
    pub row: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAssignment {
    /// One entry per input interval, in processing order.
    pub placements: Vec<Placement>,
    pub row_count: usize,
}

impl RowAssignment {
    /// Row of the input interval at `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.placements
            .iter()
            .find(|p| p.index == index)
            .map(|p| p.row)
    }
}

/// Processing order: start ascending, shorter first on equal starts,
/// input order for full ties.
pub fn sort_order(intervals: &[Interval]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&i| (intervals[i].start(), intervals[i].duration()));
    order
}

/// Pack intervals into rows so that no two intervals sharing a row overlap
/// (with `buffer_minutes`). The number of rows equals the largest number of
/// buffer-extended intervals that overlap at one instant.
pub fn assign_rows(
    intervals: &[Interval],
    buffer_minutes: u32,
    strategy: PackingStrategy,
) -> RowAssignment {
    let order = sort_order(intervals);

    match strategy {
        PackingStrategy::FirstFit => first_fit(intervals, &order, buffer_minutes),
        PackingStrategy::EarliestEnd => earliest_end(intervals, &order, buffer_minutes),
    }
}

fn first_fit(intervals: &[Interval], order: &[usize], buffer_minutes: u32) -> RowAssignment {
    let mut rows: Vec<Vec<Interval>> = Vec::new();
    let mut placements = Vec::with_capacity(order.len());

    for &index in order {
        let candidate = &intervals[index];

        let free_row = rows.iter().position(|row| {
            row.iter()
                .all(|placed| !overlaps(placed, candidate, buffer_minutes))
        });

        let row = match free_row {
            Some(r) => r,
            None => {
                rows.push(Vec::new());
                rows.len() - 1
            }
        };

        rows[row].push(*candidate);
        placements.push(Placement { index, row });
    }

    RowAssignment {
        placements,
        row_count: rows.len(),
    }
}

fn earliest_end(intervals: &[Interval], order: &[usize], buffer_minutes: u32) -> RowAssignment {
    // (latest end in the row, row index); ties resolve to the lower row
    let mut row_ends: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();
    let mut placements = Vec::with_capacity(order.len());
    let mut row_count = 0;

    for &index in order {
        let candidate = &intervals[index];

        // Starts are non-decreasing, so a row is free exactly when its latest
        // end plus the buffer does not pass the candidate's start.
        let row = match row_ends.peek() {
            Some(&Reverse((end, row)))
                if end.saturating_add(buffer_minutes) <= candidate.start() =>
            {
                row_ends.pop();
                row
            }
            _ => {
                row_count += 1;
                row_count - 1
            }
        };

        row_ends.push(Reverse((candidate.end(), row)));
        placements.push(Placement { index, row });
    }

    RowAssignment {
        placements,
        row_count,
    }
}

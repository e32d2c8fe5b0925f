//! First-fit column packing for the daily view.
//!
//! Events are bucketed by the row they start in and processed bucket by
//! bucket in ascending row order. Each column remembers where its last event
//! ends; an event goes into the lowest column that is already free at its
//! starting row, or opens a new column. Processing in start order makes the
//! column count equal to the largest number of events sharing a row.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::event::Event;
use crate::grid::RowSpan;

/// An event placed on a row span in a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnPlacement<'a> {
    pub span: RowSpan,
    pub column: usize,
    pub event: &'a Event,
}

/// Pack events into columns so that events sharing a column never share a row.
///
/// `span_of` maps an event to the rows it covers; its start row is the bucket
/// key. Placements come out ordered by bucket, then by `(start, end)`.
pub fn pack_columns<'a, F>(events: &[&'a Event], span_of: F) -> Vec<ColumnPlacement<'a>>
where
    F: Fn(&Event) -> RowSpan,
{
    let mut buckets: BTreeMap<u32, Vec<(&'a Event, RowSpan)>> = BTreeMap::new();
    for &event in events {
        let span = span_of(event);
        buckets.entry(span.start).or_default().push((event, span));
    }

    // Exclusive end row of the last event in each column
    let mut column_ends: Vec<u32> = Vec::new();
    let mut placements = Vec::with_capacity(events.len());

    for (_, mut bucket) in buckets {
        bucket.sort_by(|(a, _), (b, _)| a.chronological_cmp(b));

        for (event, span) in bucket {
            let column = match column_ends.iter().position(|&end| end <= span.start) {
                Some(free) => {
                    column_ends[free] = span.end;
                    free
                }
                None => {
                    column_ends.push(span.end);
                    column_ends.len() - 1
                }
            };
            placements.push(ColumnPlacement {
                span,
                column,
                event,
            });
        }
    }

    placements
}

/// Number of columns used by a packing.
pub fn column_count(placements: &[ColumnPlacement<'_>]) -> usize {
    placements
        .iter()
        .map(|p| p.column + 1)
        .max()
        .unwrap_or(0)
}

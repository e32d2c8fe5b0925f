//! Events left out of a layout, and why.

use serde::Serialize;

use crate::error::EventError;

/// Reason an input event has no placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// The event itself is invalid
    Malformed { error: EventError },
    /// The event does not fall on the days covered by the view
    OutsideDateRange,
    /// The event starts or ends outside the visible rows
    OutsideTimeWindow,
    /// The event falls on a weekday the view does not show
    ExcludedWeekday,
}

/// An excluded event, identified by its position in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedEvent {
    pub index: usize,
    #[serde(flatten)]
    pub reason: ExclusionReason,
}

/// Exclusions collected while computing a layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    excluded: Vec<ExcludedEvent>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn exclude(&mut self, index: usize, reason: ExclusionReason) {
        match &reason {
            ExclusionReason::Malformed { error } => {
                tracing::warn!(index, %error, "excluding malformed event from layout");
            }
            other => {
                tracing::debug!(index, reason = ?other, "excluding event from layout");
            }
        }
        self.excluded.push(ExcludedEvent { index, reason });
    }

    pub fn excluded(&self) -> &[ExcludedEvent] {
        &self.excluded
    }

    /// Excluded events that were malformed.
    pub fn malformed(&self) -> impl Iterator<Item = &ExcludedEvent> {
        self.excluded
            .iter()
            .filter(|e| matches!(e.reason, ExclusionReason::Malformed { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    pub fn len(&self) -> usize {
        self.excluded.len()
    }
}

//! Depth counter and award detection
//!
//! Awards fire on an exact landing: a tap that makes `depth == threshold`
//! emits that award. A step that jumps over a threshold emits nothing. Taps
//! only ever step by one, so no award is missed today; if taps ever step by
//! more, skipped thresholds stay silent on purpose.

use crate::awards::{Award, AwardCatalog};

/// One-shot signal that the latest tap landed exactly on an award threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardEvent {
    pub award: Award,
    /// Depth at which it was earned (== award.threshold)
    pub depth: u64,
}

/// Result of a single tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapOutcome {
    /// Depth after the tap
    pub depth: u64,
    /// Set when this tap landed on a threshold
    pub award: Option<AwardEvent>,
    /// Every tap asks for visual feedback
    pub feedback_requested: bool,
}

/// The depth counter plus its pending award signal
#[derive(Debug, Clone, Default)]
pub struct DepthCounter {
    depth: u64,
    pending: Option<AwardEvent>,
}

impl DepthCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a counter at `depth` with nothing pending
    pub fn with_depth(depth: u64) -> Self {
        Self { depth, pending: None }
    }

    pub fn depth(&self) -> u64 {
        self.depth
    }

    /// Increment by one and check the catalog for an exact threshold match.
    ///
    /// A matching award replaces any unconsumed pending event.
    pub fn tap(&mut self, catalog: &AwardCatalog) -> TapOutcome {
        self.depth = self.depth.saturating_add(1);

        let award = catalog.at_threshold(self.depth).map(|award| AwardEvent {
            award: award.clone(),
            depth: self.depth,
        });
        if let Some(event) = &award {
            log::info!(
                "Award earned: {} {} at depth {}",
                event.award.symbol,
                event.award.name,
                event.depth
            );
            self.pending = Some(event.clone());
        }

        TapOutcome {
            depth: self.depth,
            award,
            feedback_requested: true,
        }
    }

    /// Back to zero, dropping any pending award
    pub fn reset(&mut self) {
        self.depth = 0;
        self.pending = None;
    }

    /// Pending award, left in place
    pub fn pending_award(&self) -> Option<&AwardEvent> {
        self.pending.as_ref()
    }

    /// Consume the pending award
    pub fn take_award_event(&mut self) -> Option<AwardEvent> {
        self.pending.take()
    }
}

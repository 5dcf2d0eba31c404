//! Read-only projections for the presentation layer
//!
//! Nothing here mutates game state; views are rebuilt from the current depth.

use crate::awards::{self, Award, AwardCatalog};
use crate::sim::GameState;

/// Counter, progress bar and award badge data
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub depth: u64,
    /// `None` once every award is earned
    pub next_threshold: Option<u64>,
    /// Progress toward `next_threshold`, in [0, 1]
    pub progress: f32,
    pub earned: usize,
    pub total: usize,
    /// Most recent award earned, if any
    pub latest_award: Option<Award>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self::new(state.depth(), state.catalog())
    }

    pub fn new(depth: u64, catalog: &AwardCatalog) -> Self {
        let next_threshold = awards::next_threshold(depth, catalog);
        let earned = awards::earned_count(depth, catalog);
        Self {
            depth,
            next_threshold,
            progress: awards::progress_fraction(depth, next_threshold, catalog),
            earned,
            total: catalog.len(),
            latest_award: earned
                .checked_sub(1)
                .and_then(|i| catalog.all().get(i))
                .cloned(),
        }
    }

    /// Every award earned
    pub fn is_deepest(&self) -> bool {
        self.next_threshold.is_none()
    }

    /// Caption under the progress bar
    pub fn caption(&self) -> String {
        match self.next_threshold {
            Some(next) => format!("Next award at {} ({} to go)", next, next - self.depth),
            None => "Deepest depth reached".to_string(),
        }
    }

    /// Badge text, e.g. "3/7"
    pub fn badge(&self) -> String {
        format!("{}/{}", self.earned, self.total)
    }
}

/// One row of the awards list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardRow {
    pub award: Award,
    pub earned: bool,
}

/// All awards in threshold order with earned flags
pub fn award_rows(catalog: &AwardCatalog, depth: u64) -> Vec<AwardRow> {
    catalog
        .all()
        .iter()
        .map(|award| AwardRow {
            award: award.clone(),
            earned: award.threshold <= depth,
        })
        .collect()
}

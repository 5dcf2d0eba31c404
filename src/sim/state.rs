//! Game state and core simulation types
//!
//! The counter, the pending award and the live particle set form the only
//! mutable state. Everything here is owned by `GameState` and mutated through
//! its methods.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::counter::{AwardEvent, DepthCounter, TapOutcome};
use super::particles::{ParticleSprite, ParticleSystem};
use crate::awards::{self, AwardCatalog};
use crate::tuning::BurstTuning;

/// Default live particle cap (Medium quality)
pub const DEFAULT_MAX_PARTICLES: usize = 500;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducible bursts
    seed: u64,
    catalog: AwardCatalog,
    tuning: BurstTuning,
    /// Burst scale factor (floored at 0.5 when spawning)
    burst_scale: f32,
    counter: DepthCounter,
    particles: ParticleSystem,
    rng: Pcg32,
}

impl GameState {
    /// Fresh state at depth 0 with the built-in tiers
    pub fn new(seed: u64) -> Self {
        Self::with_catalog(seed, AwardCatalog::depth_tiers())
    }

    pub fn with_catalog(seed: u64, catalog: AwardCatalog) -> Self {
        Self {
            seed,
            catalog,
            tuning: BurstTuning::default(),
            burst_scale: 1.0,
            counter: DepthCounter::new(),
            particles: ParticleSystem::new(DEFAULT_MAX_PARTICLES),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Replace the default burst profiles
    pub fn with_tuning(mut self, tuning: BurstTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn catalog(&self) -> &AwardCatalog {
        &self.catalog
    }

    pub fn tuning(&self) -> &BurstTuning {
        &self.tuning
    }

    pub fn burst_scale(&self) -> f32 {
        self.burst_scale
    }

    /// Scale applied to burst speed and radius (floored at 0.5 when spawning)
    pub fn set_burst_scale(&mut self, scale: f32) {
        self.burst_scale = scale;
    }

    /// Restore a persisted depth (no award fires for it)
    pub fn restore_depth(&mut self, depth: u64) {
        self.counter = DepthCounter::with_depth(depth);
    }

    pub fn depth(&self) -> u64 {
        self.counter.depth()
    }

    /// Increment the counter; the caller decides whether to spawn a burst
    pub fn tap(&mut self) -> TapOutcome {
        self.counter.tap(&self.catalog)
    }

    /// Depth back to 0, pending award cleared. Live particles keep fading out.
    pub fn reset(&mut self) {
        self.counter.reset();
    }

    /// Spawn a burst at `now` with the state's seeded RNG
    pub fn spawn_burst(&mut self, now: f64) -> usize {
        self.particles
            .spawn_burst(&mut self.rng, &self.tuning, self.burst_scale, now)
    }

    /// Cull and render particles for the frame at `now`
    pub fn advance_particles(&mut self, now: f64) -> Vec<ParticleSprite> {
        self.particles.advance_and_cull(now)
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn set_max_particles(&mut self, max: usize) {
        self.particles.set_max_particles(max);
    }

    pub fn pending_award(&self) -> Option<&AwardEvent> {
        self.counter.pending_award()
    }

    pub fn take_award_event(&mut self) -> Option<AwardEvent> {
        self.counter.take_award_event()
    }

    pub fn next_threshold(&self) -> Option<u64> {
        awards::next_threshold(self.depth(), &self.catalog)
    }

    pub fn progress(&self) -> f32 {
        awards::progress_fraction(self.depth(), self.next_threshold(), &self.catalog)
    }

    pub fn earned_count(&self) -> usize {
        awards::earned_count(self.depth(), &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(1);
        assert_eq!(state.depth(), 0);
        assert_eq!(state.next_threshold(), Some(10));
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.earned_count(), 0);
        assert!(state.particles().is_empty());
    }

    #[test]
    fn test_restore_depth() {
        let mut state = GameState::new(1);
        state.restore_depth(1000);
        assert_eq!(state.next_threshold(), None);
        assert_eq!(state.earned_count(), 7);
        assert!(state.pending_award().is_none());
    }

    #[test]
    fn test_reset_keeps_particles() {
        let mut state = GameState::new(5);
        state.tap();
        state.spawn_burst(0.0);
        state.reset();
        assert_eq!(state.depth(), 0);
        assert_eq!(state.particles().len(), 26);
    }

    #[test]
    fn test_with_tuning() {
        let mut tuning = BurstTuning::default();
        tuning.spark.count = 0;
        let mut state = GameState::new(3).with_tuning(tuning);
        assert_eq!(state.tuning().burst_size(), 16);
        assert_eq!(state.spawn_burst(0.0), 16);
        assert_eq!(state.seed(), 3);
        assert_eq!(state.catalog().len(), 7);
    }

    #[test]
    fn test_seeded_bursts_match() {
        let mut a = GameState::new(77);
        let mut b = GameState::new(77);
        a.spawn_burst(0.0);
        b.spawn_burst(0.0);
        assert_eq!(a.particles().particles(), b.particles().particles());
    }
}

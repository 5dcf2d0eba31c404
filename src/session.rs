//! A play session: game state bound to settings and a persistent store
//!
//! Only the depth is written to the store. Settings live for the session.
//!
//! The session is the single writer of the game state. The presentation layer
//! forwards taps, resets and frame timestamps here and only reads the results.

use crate::awards::AwardCatalog;
use crate::persistence::{self, KeyValueStore};
use crate::settings::Settings;
use crate::sim::{AwardEvent, Frame, GameState, ParticleSprite, TickInput, tick};
use crate::ui::{AwardRow, Hud};

/// Haptic pulse requested by a tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Haptic {
    /// Light tick on a plain tap
    Tap,
    /// Success pulse when an award is earned
    Award,
}

/// Cosmetic feedback the presentation layer should play for a tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub depth: u64,
    /// Award landed on by this tap
    pub award: Option<AwardEvent>,
    /// Particles spawned (0 when bursts are off)
    pub spawned: usize,
    pub haptic: Option<Haptic>,
    /// Spin the dig icon
    pub spin: bool,
}

pub struct Session<S: KeyValueStore> {
    state: GameState,
    settings: Settings,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session with the built-in award tiers
    pub fn open(store: S, seed: u64) -> Self {
        Self::open_with_catalog(store, seed, AwardCatalog::depth_tiers())
    }

    /// Open a session with a custom award catalog
    pub fn open_with_catalog(store: S, seed: u64, catalog: AwardCatalog) -> Self {
        Self::open_with_state(store, GameState::with_catalog(seed, catalog))
    }

    /// Open a session around a prepared state, restoring depth from `store`.
    ///
    /// Settings start at their defaults. An unreadable depth falls back to 0.
    pub fn open_with_state(store: S, mut state: GameState) -> Self {
        let settings = Settings::default();
        state.set_max_particles(settings.max_particles());

        match persistence::load_depth(&store) {
            Ok(Some(depth)) => {
                log::info!("Restored depth {}", depth);
                state.restore_depth(depth);
            }
            Ok(None) => log::info!("No saved depth, starting fresh"),
            Err(e) => log::warn!("Saved depth unreadable, starting at 0: {}", e),
        }

        Self {
            state,
            settings,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn depth(&self) -> u64 {
        self.state.depth()
    }

    /// Replace settings (not persisted)
    pub fn set_settings(&mut self, settings: Settings) {
        self.state.set_max_particles(settings.max_particles());
        self.settings = settings;
    }

    /// Change settings in place (not persisted)
    pub fn update_settings(&mut self, f: impl FnOnce(&mut Settings)) {
        let mut settings = self.settings.clone();
        f(&mut settings);
        self.set_settings(settings);
    }

    /// Size the bursts to the tappable control (points)
    pub fn set_control_size(&mut self, size: f32) {
        self.state.set_burst_scale(crate::scale_for_control(size));
    }

    /// Handle one tap at `now`
    pub fn tap(&mut self, now: f64) -> Feedback {
        let outcome = self.state.tap();

        let spawned = if outcome.feedback_requested && self.settings.effective_particles() {
            self.state.spawn_burst(now)
        } else {
            0
        };

        let haptic = self.settings.haptics.then(|| {
            if outcome.award.is_some() {
                Haptic::Award
            } else {
                Haptic::Tap
            }
        });

        self.persist_depth();

        Feedback {
            depth: outcome.depth,
            award: outcome.award,
            spawned,
            haptic,
            spin: outcome.feedback_requested && self.settings.effective_icon_spin(),
        }
    }

    /// Depth back to 0 (persisted)
    pub fn reset(&mut self) {
        self.state.reset();
        log::info!("Depth reset");
        self.persist_depth();
    }

    /// Particle sprites for the frame at `now`
    pub fn frame(&mut self, now: f64) -> Vec<ParticleSprite> {
        self.state.advance_particles(now)
    }

    /// Apply batched input and advance one frame
    pub fn step(&mut self, input: &TickInput, now: f64) -> Frame {
        let input = TickInput {
            suppress_bursts: input.suppress_bursts || !self.settings.effective_particles(),
            ..input.clone()
        };
        let frame = tick(&mut self.state, &input, now);
        if input.reset || input.taps > 0 {
            self.persist_depth();
        }
        frame
    }

    /// Consume the pending award (e.g. to show a dialog once)
    pub fn take_award_event(&mut self) -> Option<AwardEvent> {
        self.state.take_award_event()
    }

    pub fn pending_award(&self) -> Option<&AwardEvent> {
        self.state.pending_award()
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    pub fn awards(&self) -> Vec<AwardRow> {
        crate::ui::award_rows(self.state.catalog(), self.state.depth())
    }

    fn persist_depth(&mut self) {
        if let Err(e) = persistence::save_depth(&mut self.store, self.state.depth()) {
            log::warn!("Failed to save depth {}: {}", self.state.depth(), e);
        }
    }
}

//! Frame-driven simulation step
//!
//! Input gathered since the previous frame is applied in full before the
//! frame's particle pass, so a tap is always visible in the frame that
//! follows it.

use super::counter::AwardEvent;
use super::particles::ParticleSprite;
use super::state::GameState;

/// Input gathered since the last frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Taps received (each one increments depth by one)
    pub taps: u32,
    /// Reset requested (applied before taps)
    pub reset: bool,
    /// Skip particle bursts for these taps (particles off, reduced motion)
    pub suppress_bursts: bool,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub depth: u64,
    /// Awards landed on during this step, in tap order
    pub awards: Vec<AwardEvent>,
    /// Particles spawned during this step
    pub spawned: usize,
    /// Live particles after culling
    pub sprites: Vec<ParticleSprite>,
}

/// Apply input, then advance and cull particles at `now`
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> Frame {
    let mut frame = Frame::default();

    if input.reset {
        state.reset();
        log::info!("Depth reset");
    }

    for _ in 0..input.taps {
        let outcome = state.tap();
        if let Some(event) = outcome.award {
            frame.awards.push(event);
        }
        if outcome.feedback_requested && !input.suppress_bursts {
            frame.spawned += state.spawn_burst(now);
        }
    }

    frame.depth = state.depth();
    frame.sprites = state.advance_particles(now);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_taps_scenario() {
        let mut state = GameState::new(12345);
        let input = TickInput {
            taps: 10,
            ..Default::default()
        };
        let frame = tick(&mut state, &input, 0.0);

        assert_eq!(frame.depth, 10);
        assert_eq!(frame.awards.len(), 1);
        assert_eq!(frame.awards[0].award.threshold, 10);
        assert_eq!(state.earned_count(), 1);
        assert_eq!(state.next_threshold(), Some(50));
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_tap_visible_same_frame() {
        let mut state = GameState::new(1);
        let input = TickInput {
            taps: 1,
            ..Default::default()
        };
        let frame = tick(&mut state, &input, 2.0);
        assert_eq!(frame.spawned, 26);
        assert_eq!(frame.sprites.len(), 26);
    }

    #[test]
    fn test_suppressed_bursts() {
        let mut state = GameState::new(1);
        let input = TickInput {
            taps: 3,
            suppress_bursts: true,
            ..Default::default()
        };
        let frame = tick(&mut state, &input, 0.0);
        assert_eq!(frame.depth, 3);
        assert_eq!(frame.spawned, 0);
        assert!(frame.sprites.is_empty());
    }

    #[test]
    fn test_reset_before_taps() {
        let mut state = GameState::new(1);
        state.restore_depth(40);
        let input = TickInput {
            taps: 2,
            reset: true,
            suppress_bursts: true,
        };
        let frame = tick(&mut state, &input, 0.0);
        assert_eq!(frame.depth, 2);
    }

    #[test]
    fn test_empty_tick_culls() {
        let mut state = GameState::new(8);
        state.spawn_burst(0.0);
        let frame = tick(&mut state, &TickInput::default(), 5.0);
        assert!(frame.awards.is_empty());
        assert!(frame.sprites.is_empty());
        assert!(state.particles().is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let input = TickInput {
            taps: 2,
            ..Default::default()
        };

        for now in [0.0, 0.016, 0.033] {
            let a = tick(&mut state1, &input, now);
            let b = tick(&mut state2, &input, now);
            assert_eq!(a.sprites, b.sprites);
        }
        assert_eq!(state1.depth(), state2.depth());
    }
}

//! Browser facade
//!
//! The JS front end owns the render loop and calls `tap`, `reset` and `frame`
//! with `performance.now() / 1000`. Haptics and dialogs stay on the JS side.

use wasm_bindgen::prelude::*;

use super::storage::WebStore;
use crate::session::{Haptic, Session};
use crate::settings::QualityPreset;
use crate::sim::ParticleKind;

/// Floats per particle in `frame` output: x, y, radius, opacity, kind
pub const SPRITE_STRIDE: usize = 5;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Depth Clicker starting...");
}

#[wasm_bindgen]
pub struct WebClicker {
    session: Session<WebStore>,
    last_haptic: Option<Haptic>,
}

#[wasm_bindgen]
impl WebClicker {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64) -> WebClicker {
        let session = Session::open(WebStore::detect(), seed as u64);
        log::info!("Session opened at depth {}", session.depth());
        WebClicker {
            session,
            last_haptic: None,
        }
    }

    /// Handle a tap; returns "<symbol> <name>" when an award was earned
    pub fn tap(&mut self, now: f64) -> Option<String> {
        let feedback = self.session.tap(now);
        self.last_haptic = feedback.haptic;
        // The dialog is shown from the return value, so consume the event here
        self.session.take_award_event();
        feedback
            .award
            .map(|e| format!("{} {}", e.award.symbol, e.award.name))
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn set_control_size(&mut self, size: f32) {
        self.session.set_control_size(size);
    }

    pub fn set_particles(&mut self, enabled: bool) {
        self.session.update_settings(|s| s.particles = enabled);
    }

    pub fn set_icon_spin(&mut self, enabled: bool) {
        self.session.update_settings(|s| s.icon_spin = enabled);
    }

    pub fn set_haptics(&mut self, enabled: bool) {
        self.session.update_settings(|s| s.haptics = enabled);
    }

    /// Usually fed from `prefers-reduced-motion`
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.session.update_settings(|s| s.reduced_motion = enabled);
    }

    /// "low", "medium" or "high"; returns false for anything else
    pub fn set_quality(&mut self, name: &str) -> bool {
        match name.parse::<QualityPreset>() {
            Ok(quality) => {
                self.session.update_settings(|s| s.quality = quality);
                true
            }
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    /// Flattened sprites, `SPRITE_STRIDE` floats each (kind: 0 dust, 1 spark)
    pub fn frame(&mut self, now: f64) -> Vec<f32> {
        let sprites = self.session.frame(now);
        let mut out = Vec::with_capacity(sprites.len() * SPRITE_STRIDE);
        for s in sprites {
            let kind = match s.kind {
                ParticleKind::Dust => 0.0,
                ParticleKind::Spark => 1.0,
            };
            out.extend_from_slice(&[s.offset.x, s.offset.y, s.radius, s.opacity, kind]);
        }
        out
    }

    /// "tap", "award" or empty for the last tap
    pub fn haptic(&self) -> String {
        match self.last_haptic {
            Some(Haptic::Tap) => "tap".to_string(),
            Some(Haptic::Award) => "award".to_string(),
            None => String::new(),
        }
    }

    pub fn depth(&self) -> f64 {
        self.session.depth() as f64
    }

    pub fn progress(&self) -> f32 {
        self.session.hud().progress
    }

    pub fn caption(&self) -> String {
        self.session.hud().caption()
    }

    pub fn badge(&self) -> String {
        self.session.hud().badge()
    }

    /// Awards list as JSON: `[{name, symbol, threshold, earned}]`
    pub fn awards_json(&self) -> String {
        let rows: Vec<serde_json::Value> = self
            .session
            .awards()
            .into_iter()
            .map(|row| {
                serde_json::json!({
                    "name": row.award.name,
                    "symbol": row.award.symbol,
                    "threshold": row.award.threshold,
                    "earned": row.earned,
                })
            })
            .collect();
        serde_json::Value::Array(rows).to_string()
    }
}

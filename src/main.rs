//! Depth Clicker entry point
//!
//! The native build has no GUI: it replays a scripted tap session at 60 Hz
//! against a file-backed save, logging awards and the HUD as it goes.
//!
//! Usage: `depth-clicker [TAPS] [SAVE_PATH] [QUALITY]` (pass `reset` as TAPS to clear the save)
//!
//! `DEPTH_CLICKER_TUNING` may point at a JSON file of burst profiles.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use depth_clicker::persistence::{FileStore, MemoryStore};
    use depth_clicker::session::Session;
    use depth_clicker::settings::{QualityPreset, Settings};
    use depth_clicker::sim::GameState;
    use depth_clicker::tuning::BurstTuning;

    env_logger::init();
    log::info!("Depth Clicker (native) starting...");

    let mut args = std::env::args().skip(1);
    let taps_arg = args.next().unwrap_or_else(|| "25".to_string());
    let save_path = args
        .next()
        .or_else(|| std::env::var("DEPTH_CLICKER_SAVE").ok())
        .unwrap_or_else(|| "depth-clicker.json".to_string());
    let quality = match args.next().map(|q| q.parse::<QualityPreset>()) {
        Some(Ok(quality)) => quality,
        Some(Err(e)) => {
            log::error!("{}", e);
            return;
        }
        None => QualityPreset::default(),
    };
    let settings = Settings::from_preset(quality);

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Session seed: {}", seed);

    let mut state = GameState::new(seed);
    if let Ok(path) = std::env::var("DEPTH_CLICKER_TUNING") {
        let tuning = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| BurstTuning::from_json(&json).map_err(|e| e.to_string()));
        match tuning {
            Ok(tuning) => {
                log::info!("Burst tuning loaded from {}", path);
                state = state.with_tuning(tuning);
            }
            Err(e) => log::warn!("Ignoring tuning file {}: {}", path, e),
        }
    }

    match FileStore::open(&save_path) {
        Ok(store) => {
            log::info!("Saving to {}", store.path().display());
            run(Session::open_with_state(store, state), settings, &taps_arg);
        }
        Err(e) => {
            log::error!("Cannot open {}: {} (progress will not be saved)", save_path, e);
            run(Session::open_with_state(MemoryStore::new(), state), settings, &taps_arg);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run<S: depth_clicker::persistence::KeyValueStore>(
    mut session: depth_clicker::Session<S>,
    settings: depth_clicker::Settings,
    taps_arg: &str,
) {
    use depth_clicker::sim::TickInput;

    /// Frame length at 60 Hz
    const FRAME_DT: f64 = 1.0 / 60.0;
    /// Frames between scripted taps
    const FRAMES_PER_TAP: u32 = 12;

    log::info!("Quality: {}", settings.quality.as_str());
    session.set_settings(settings);

    if taps_arg == "reset" {
        session.reset();
        println!("Depth reset to 0");
        return;
    }
    let taps: u32 = match taps_arg.parse() {
        Ok(n) => n,
        Err(_) => {
            log::error!("TAPS must be a number or 'reset', got '{}'", taps_arg);
            return;
        }
    };

    let hud = session.hud();
    println!("Starting at depth {} ({})", hud.depth, hud.caption());

    let mut now = 0.0;
    let mut peak_particles = 0;
    for _ in 0..taps {
        let frame = session.step(
            &TickInput {
                taps: 1,
                ..Default::default()
            },
            now,
        );
        for event in &frame.awards {
            println!(
                "{} Award earned: {} (depth {})",
                event.award.symbol, event.award.name, event.depth
            );
        }
        session.take_award_event();

        for _ in 0..FRAMES_PER_TAP {
            now += FRAME_DT;
            peak_particles = peak_particles.max(session.frame(now).len());
        }
    }

    // Let the last burst fade out
    while !session.frame(now).is_empty() {
        now += FRAME_DT;
    }

    let hud = session.hud();
    println!(
        "Depth {} | awards {} | progress {:.0}% | {}",
        hud.depth,
        hud.badge(),
        hud.progress * 100.0,
        hud.caption()
    );
    println!("Peak live particles: {}", peak_particles);

    for row in session.awards() {
        let mark = if row.earned { row.award.symbol.as_str() } else { "🔒" };
        println!("  {} {:<14} {:>5}", mark, row.award.name, row.award.threshold);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

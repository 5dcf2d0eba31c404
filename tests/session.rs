//! End-to-end tap sessions through the public API

use depth_clicker::persistence::{self, KeyValueStore, MemoryStore};
use depth_clicker::sim::{GameState, ParticleKind, TickInput};
use depth_clicker::tuning::BurstTuning;
use depth_clicker::{AwardCatalog, Haptic, Session};

#[test]
fn ten_taps_earn_first_award() {
    let mut session = Session::open(MemoryStore::new(), 12345);
    let mut awards = Vec::new();
    for i in 0..10 {
        let feedback = session.tap(i as f64 * 0.1);
        awards.extend(feedback.award);
    }

    assert_eq!(session.depth(), 10);
    assert_eq!(awards.len(), 1);
    assert_eq!(awards[0].award.threshold, 10);

    let hud = session.hud();
    assert_eq!(hud.earned, 1);
    assert_eq!(hud.next_threshold, Some(50));
    assert_eq!(hud.progress, 0.0);

    // Pending award is consumed exactly once
    assert_eq!(session.take_award_event().map(|e| e.depth), Some(10));
    assert!(session.take_award_event().is_none());
}

#[test]
fn max_depth_is_terminal() {
    let mut store = MemoryStore::new();
    persistence::save_depth(&mut store, 999).unwrap();
    let mut session = Session::open(store, 1);

    let feedback = session.tap(0.0);
    assert_eq!(feedback.award.map(|e| e.award.name), Some("Core".to_string()));
    assert_eq!(feedback.haptic, Some(Haptic::Award));

    let hud = session.hud();
    assert!(hud.is_deepest());
    assert_eq!(hud.next_threshold, None);
    assert_eq!(hud.badge(), "7/7");

    // Beyond the last tier nothing else fires
    assert!(session.tap(0.1).award.is_none());
}

#[test]
fn reset_clears_depth_and_award() {
    let mut store = MemoryStore::new();
    persistence::save_depth(&mut store, 49).unwrap();
    let mut session = Session::open(store, 1);
    session.tap(0.0);
    assert!(session.pending_award().is_some());

    session.reset();
    session.reset();
    assert_eq!(session.depth(), 0);
    assert!(session.pending_award().is_none());
    assert_eq!(persistence::load_depth(session.store()).unwrap(), Some(0));
}

#[test]
fn depth_survives_reopen() {
    let mut session = Session::open(MemoryStore::new(), 1);
    session.step(
        &TickInput {
            taps: 12,
            ..Default::default()
        },
        0.0,
    );
    let store = session.store().clone();
    assert_eq!(store.get("depth").unwrap().as_deref(), Some("12"));

    let reopened = Session::open(store, 2);
    assert_eq!(reopened.depth(), 12);
    // Restoring never re-fires an award
    assert!(reopened.pending_award().is_none());
}

#[test]
fn burst_fades_out_within_a_second() {
    let mut session = Session::open(MemoryStore::new(), 77);
    session.tap(0.0);

    let sprites = session.frame(0.0);
    assert_eq!(sprites.len(), 26);
    assert_eq!(sprites.iter().filter(|s| s.kind == ParticleKind::Dust).count(), 16);

    let mut now = 0.0;
    while now < 1.0 {
        for s in session.frame(now) {
            assert!(s.opacity > 0.0 && s.opacity <= 0.9);
            assert!(s.radius >= 0.5);
        }
        now += 1.0 / 60.0;
    }
    assert!(session.frame(1.0).is_empty());
}

#[test]
fn custom_catalog_in_any_order() {
    let catalog = AwardCatalog::from_json(
        r#"[{"name":"Two","symbol":"2","threshold":2},{"name":"One","symbol":"1","threshold":1}]"#,
    )
    .unwrap();
    let mut session = Session::open_with_catalog(MemoryStore::new(), 5, catalog);
    assert_eq!(session.tap(0.0).award.map(|e| e.award.name), Some("One".to_string()));
    assert_eq!(session.tap(0.0).award.map(|e| e.award.name), Some("Two".to_string()));
    assert!(session.hud().is_deepest());

    let rows = session.awards();
    assert!(rows.iter().all(|r| r.earned));
}

#[test]
fn tuning_override_shapes_bursts() {
    let tuning = BurstTuning::from_json(
        r#"{
            "dust": {"count": 3, "lifetime": {"min": 0.5, "max": 0.5}, "angle": {"min": 0.0, "max": 1.0},
                     "speed": {"min": 10.0, "max": 10.0}, "start_radius": {"min": 2.0, "max": 2.0}},
            "spark": {"count": 0, "lifetime": {"min": 0.5, "max": 0.5}, "angle": {"min": 0.0, "max": 1.0},
                      "speed": {"min": 10.0, "max": 10.0}, "start_radius": {"min": 2.0, "max": 2.0}}
        }"#,
    )
    .unwrap();
    let mut store = MemoryStore::new();
    persistence::save_depth(&mut store, 4).unwrap();

    let state = GameState::new(9).with_tuning(tuning);
    let mut session = Session::open_with_state(store, state);
    assert_eq!(session.depth(), 4);

    session.tap(0.0);
    let sprites = session.frame(0.0);
    assert_eq!(sprites.len(), 3);
    assert!(sprites.iter().all(|s| s.kind == ParticleKind::Dust));
    assert!(session.frame(0.5).is_empty());
}

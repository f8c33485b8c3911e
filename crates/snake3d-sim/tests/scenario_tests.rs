//! End-to-end scenarios driven through the public engine API.

use glam::DVec3;

use snake3d_core::config::GameConfig;
use snake3d_core::enums::{GamePhase, Heading, MovementKey};
use snake3d_core::events::GameEvent;
use snake3d_core::input::KeyState;
use snake3d_core::render::RecordingSink;
use snake3d_sim::{SimConfig, SimulationEngine};

const EPS: f64 = 1e-9;

fn fast_snake() -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        seed: 42,
        game: GameConfig {
            snake_speed: Some(5.0),
            lag_interval: 0.3,
            apple_spawn_chance: 0.0,
            ..Default::default()
        },
    })
    .unwrap()
}

fn assert_near(actual: DVec3, expected: DVec3) {
    assert!(
        actual.distance(expected) < EPS,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn straight_run_through_one_lag_interval() {
    let mut engine = fast_snake();
    let start = engine.snapshot();
    assert_eq!(start.heading, Heading::Top);
    assert_eq!(start.length, 4);

    let snap = engine.frame(0.1, &KeyState::none()).unwrap();
    assert_near(snap.parts[0], DVec3::new(0.0, 0.0, -0.5));
    assert_near(snap.parts[3], DVec3::new(0.0, 0.0, 2.5));

    let snap = engine.frame(0.1, &KeyState::none()).unwrap();
    assert_near(snap.parts[0], DVec3::new(0.0, 0.0, -1.0));
    let head_before_step = snap.parts[0];

    // Third frame crosses the lag interval: the chain snaps, then moves on.
    let snap = engine.frame(0.1, &KeyState::none()).unwrap();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.parts[1], head_before_step.round());
    assert_near(snap.parts[0], DVec3::new(0.0, 0.0, -1.5));
    assert_near(snap.parts[2], DVec3::new(0.0, 0.0, 1.0));
    assert_near(snap.parts[3], DVec3::new(0.0, 0.0, 1.5));
    assert_eq!(snap.time.frame, 3);
}

#[test]
fn square_loop_ends_in_self_collision() {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: 1,
        game: GameConfig {
            initial_length: 6,
            apple_spawn_chance: 0.0,
            ..Default::default()
        },
    })
    .unwrap();

    // Turn every step: left, down, right, up. A six-part snake bites itself
    // once it closes the square.
    let turns = [
        MovementKey::Left,
        MovementKey::Back,
        MovementKey::Right,
        MovementKey::Forward,
    ];
    let mut lost = None;
    for frame in 0..60 {
        // 0.1 s frames commit a turn on every third frame.
        let keys = KeyState::only(turns[(frame / 3) % turns.len()]);
        let snap = engine.frame(0.1, &keys).unwrap();
        if snap.is_lost() {
            lost = Some(snap);
            break;
        }
    }

    let snap = lost.expect("snake circling in a tight square should collide");
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::SnakeLost { length: 6, .. })));
    assert_eq!(engine.phase(), GamePhase::Lost);
}

#[test]
fn config_file_round_trip_drives_the_engine() {
    let json = r#"{ "board_half_width": 8.0, "board_half_height": 4.0, "initial_heading": "Right" }"#;
    let game = GameConfig::from_json(json).unwrap();
    let mut engine = SimulationEngine::new(SimConfig { seed: 3, game }).unwrap();

    let snap = engine.frame(0.1, &KeyState::none()).unwrap();
    assert_eq!(snap.heading, Heading::Right);
    assert!(snap.parts[0].x > 0.0);

    let mut sink = RecordingSink::new();
    engine.render(&mut sink);
    let frame = sink.last_frame().unwrap();
    assert_eq!(frame.draws[0].scale.x, 16.0);
    assert_eq!(frame.draws[0].scale.z, 8.0);
}

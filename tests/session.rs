//! Whole-session runs through the headless platform

use std::path::Path;

use flappy_duo::platform::{HeadlessPlatform, InputEvent, Key};
use flappy_duo::{GameLoop, RoundController, ScoreLedger, SessionSummary, Settings};

fn settings(dir: &Path, autopilot: bool) -> Settings {
    Settings {
        ledger_path: dir.join("highscores.txt"),
        autopilot,
        seed: Some(2024),
        ..Default::default()
    }
}

fn run_session(settings: Settings, frames: u64) -> (SessionSummary, HeadlessPlatform) {
    let mut platform = HeadlessPlatform::new(settings.tick_dt()).with_max_frames(Some(frames));
    let seed = settings.seed.unwrap_or_default();
    let mut game = GameLoop::new(RoundController::new(settings, seed), true);
    let summary = game.run(&mut platform);
    (summary, platform)
}

fn read_ledger(path: &Path) -> ScoreLedger {
    let mut ledger = ScoreLedger::new(path);
    ledger.reload_or_empty();
    ledger
}

#[test]
fn autopilot_session_records_every_round() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings(dir.path(), true);
    let ledger_path = settings.ledger_path.clone();

    let (summary, platform) = run_session(settings, 3_000);
    assert_eq!(summary.frames, 3_000);
    assert_eq!(summary.ticks, 3_000);
    assert_eq!(platform.frames(), 3_000);
    assert_eq!(platform.last_round(), summary.rounds_finished + 1);
    // One tick per frame, so every score was on screen at some point
    assert_eq!(platform.best_seen(), summary.best_score.unwrap_or(0));

    // Two birds, zero scores included: two lines per finished round
    let ledger = read_ledger(&ledger_path);
    assert_eq!(ledger.len(), 2 * summary.rounds_finished as usize);
    assert!(
        ledger
            .entries()
            .iter()
            .all(|e| e.name == "player1" || e.name == "player2")
    );
    // The round still running at the end isn't in the ledger yet
    assert!(ledger.best() <= summary.best_score);
}

#[test]
fn same_seed_same_session() {
    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();

    let (a, _) = run_session(settings(dir_a.path(), true), 2_000);
    let (b, _) = run_session(settings(dir_b.path(), true), 2_000);
    assert_eq!(a, b);
    assert_eq!(
        read_ledger(&dir_a.path().join("highscores.txt")).entries(),
        read_ledger(&dir_b.path().join("highscores.txt")).entries()
    );
}

#[test]
fn ledger_survives_between_sessions() {
    let dir = tempfile::tempdir().unwrap();

    let (first, _) = run_session(settings(dir.path(), false), 300);
    assert!(first.rounds_finished > 0);
    let after_first = read_ledger(&dir.path().join("highscores.txt")).len();

    let (second, _) = run_session(settings(dir.path(), false), 300);
    let after_second = read_ledger(&dir.path().join("highscores.txt")).len();
    assert_eq!(
        after_second,
        after_first + 2 * second.rounds_finished as usize
    );
}

#[test]
fn tapped_jump_keys_keep_birds_in_the_air() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings {
        // The one pipe that spawns never moves
        spawn_interval_ticks: 1_000_000,
        scroll_speed: 0.0,
        ..settings(dir.path(), false)
    };

    // A tap every 39 ticks exactly cancels the fall in between
    let script = (0..200).map(|i| {
        if i % 39 == 0 {
            vec![InputEvent::KeyDown(Key::Up), InputEvent::KeyDown(Key::W)]
        } else {
            Vec::new()
        }
    });
    let mut platform = HeadlessPlatform::new(settings.tick_dt())
        .with_script(script)
        .with_max_frames(Some(200));
    let mut game = GameLoop::new(RoundController::new(settings, 1), false);
    let summary = game.run(&mut platform);

    assert_eq!(summary.rounds_finished, 0);
    assert!(
        game.controller()
            .state()
            .actors
            .iter()
            .all(|a| a.pos.y >= 200.0 && a.pos.y <= 300.0)
    );
}

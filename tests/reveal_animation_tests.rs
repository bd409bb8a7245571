use approx::assert_relative_eq;
use dotbar_rs::animation::{
    DEFAULT_REVEAL_DURATION_MS, REVEAL_SKIP_THRESHOLD_MS, RevealAnimation, RevealConfig,
    RevealPhase, RevealTick,
};

#[test]
fn zero_delay_starts_terminal_with_full_progress() {
    let mut reveal = RevealAnimation::new(RevealConfig::new(0));
    assert_eq!(reveal.phase(), RevealPhase::Done);
    assert_eq!(reveal.progress(), 1.0);
    assert!(!reveal.is_animating());

    // No tick ever fires.
    for _ in 0..10 {
        assert_eq!(reveal.advance(16), RevealTick::Idle);
    }
    assert_eq!(reveal.progress(), 1.0);
}

#[test]
fn delay_at_the_skip_threshold_also_skips() {
    let reveal = RevealAnimation::new(RevealConfig::new(REVEAL_SKIP_THRESHOLD_MS));
    assert_eq!(reveal.phase(), RevealPhase::Done);
    assert_eq!(reveal.progress(), 1.0);
}

#[test]
fn delayed_reveal_waits_then_runs_linearly_to_done() {
    let mut reveal = RevealAnimation::new(RevealConfig::new(1500));
    assert_eq!(reveal.phase(), RevealPhase::Pending);
    assert_eq!(reveal.progress(), 0.0);

    // Pending for the full 1500 ms delay.
    assert_eq!(reveal.advance(1000), RevealTick::Idle);
    assert_eq!(reveal.phase(), RevealPhase::Pending);
    assert_eq!(reveal.progress(), 0.0);

    assert_eq!(reveal.advance(500), RevealTick::RedrawNeeded);
    assert_eq!(reveal.phase(), RevealPhase::Running);
    assert_eq!(reveal.progress(), 0.0);

    // Linear over the default 2000 ms duration, no easing.
    assert_eq!(reveal.advance(500), RevealTick::RedrawNeeded);
    assert_relative_eq!(reveal.progress(), 0.25);

    assert_eq!(reveal.advance(500), RevealTick::RedrawNeeded);
    assert_relative_eq!(reveal.progress(), 0.5);

    assert_eq!(reveal.advance(DEFAULT_REVEAL_DURATION_MS / 2), RevealTick::Completed);
    assert_eq!(reveal.phase(), RevealPhase::Done);
    assert_eq!(reveal.progress(), 1.0);

    assert_eq!(reveal.advance(500), RevealTick::Idle);
}

#[test]
fn progress_is_monotone_and_clamped_across_uneven_ticks() {
    let mut reveal = RevealAnimation::new(RevealConfig::new(100).with_duration_ms(1000));
    let mut last = reveal.progress();

    for delta in [30, 70, 1, 499, 123, 456, 789, 10_000] {
        reveal.advance(delta);
        let progress = reveal.progress();
        assert!((0.0..=1.0).contains(&progress));
        assert!(progress >= last);
        last = progress;
    }
    assert_eq!(reveal.phase(), RevealPhase::Done);
}

#[test]
fn cancel_while_pending_never_starts_the_run() {
    let mut reveal = RevealAnimation::new(RevealConfig::new(1500));
    reveal.advance(1000);
    reveal.cancel();

    assert_eq!(reveal.advance(100_000), RevealTick::Idle);
    assert_eq!(reveal.progress(), 0.0);
}

#[test]
fn cancel_while_running_freezes_progress() {
    let mut reveal = RevealAnimation::new(RevealConfig::new(1500));
    reveal.advance(1500);
    reveal.advance(1000);
    let frozen = reveal.progress();
    assert!(frozen > 0.0 && frozen < 1.0);

    reveal.cancel();
    assert_eq!(reveal.advance(100_000), RevealTick::Idle);
    assert_eq!(reveal.progress(), frozen);
}

#[test]
fn restart_replays_the_machine_from_construction_state() {
    let mut reveal = RevealAnimation::new(RevealConfig::new(200).with_duration_ms(400));
    reveal.advance(200);
    reveal.advance(200);
    assert!(reveal.progress() > 0.0);

    reveal.restart();
    assert_eq!(reveal.phase(), RevealPhase::Pending);
    assert_eq!(reveal.progress(), 0.0);
}

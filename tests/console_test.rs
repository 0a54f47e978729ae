/// Integration tests for the operator console

use hexapod_idle::clock::Clock;
use hexapod_idle::console::Console;
use hexapod_idle::testing::{ManualClock, Motion, RecordingActuation};
use hexapod_idle::units::Seconds;
use hexapod_idle::{Animation, Catalog, Gait, IdleScheduler, SeededRandom, Timestamp};
use std::sync::mpsc::channel;
use std::time::Duration;

fn console(clock: &ManualClock) -> Console<RecordingActuation, &ManualClock, SeededRandom> {
    Console::new(IdleScheduler::new(
        Catalog::reference(),
        Some(RecordingActuation::new()),
        clock,
        SeededRandom::from_seed(5),
    ))
}

#[test]
fn test_every_command_counts_as_activity() {
    let clock = ManualClock::new();
    let mut console = console(&clock);
    for line in ["status", "moonwalk", "timeout 0", "idle on", "reset"] {
        clock.advance(Duration::from_secs(3));
        assert!(console.dispatch(line).is_some());
        assert_eq!(console.scheduler().last_activity(), clock.now(), "{}", line);
    }
}

#[test]
fn test_blank_lines_are_ignored() {
    let clock = ManualClock::new();
    let mut console = console(&clock);
    clock.advance(Duration::from_secs(3));
    assert_eq!(console.dispatch("   "), None);
    assert_eq!(console.scheduler().last_activity(), Timestamp::ORIGIN);
}

#[test]
fn test_idle_switch_and_timeout() {
    let clock = ManualClock::new();
    let mut console = console(&clock);
    assert_eq!(console.dispatch("idle off").as_deref(), Some("Idle animations DISABLED"));
    assert!(!console.scheduler().is_enabled());
    assert_eq!(console.dispatch("IDLE ON").as_deref(), Some("Idle animations ENABLED"));
    assert!(console.scheduler().is_enabled());

    assert_eq!(console.dispatch("timeout 4").as_deref(), Some("Idle timeout set to 4s"));
    assert_eq!(console.scheduler().idle_threshold(), Seconds(4));
    let reply = console.dispatch("timeout 0").unwrap_or_default();
    assert!(reply.starts_with("Invalid timeout value"));
    assert_eq!(console.scheduler().idle_threshold(), Seconds(4));
}

#[test]
fn test_direct_play_stays_out_of_idle_cycle() {
    let clock = ManualClock::new();
    let mut console = console(&clock);
    assert_eq!(console.dispatch("yawn").as_deref(), Some("Played Yawn"));
    assert_eq!(clock.slept(), Duration::from_millis(600));
    let scheduler = console.scheduler();
    assert_eq!(scheduler.last_played(), None);
    assert_eq!(scheduler.last_activity(), clock.now());
    let motions = scheduler.actuation().expect("attached").motions();
    assert_eq!(motions.last(), Some(&Motion::Neutral));
}

#[test]
fn test_maneuver() {
    let clock = ManualClock::new();
    let mut console = console(&clock);
    let reply = console.dispatch("deflr").unwrap_or_default();
    assert_eq!(reply, "Walked DefaultLeftRight");
    let steps: Vec<Motion> = console
        .scheduler()
        .actuation()
        .expect("attached")
        .motions()
        .iter()
        .copied()
        .filter(|motion| matches!(motion, Motion::Step(_)))
        .collect();
    assert_eq!(
        steps,
        vec![
            Motion::Step(Gait::CrawlLeft),
            Motion::Step(Gait::CrawlLeft),
            Motion::Step(Gait::CrawlRight),
            Motion::Step(Gait::CrawlRight),
        ]
    );
}

#[test]
fn test_reset_and_status() {
    let clock = ManualClock::new();
    let mut console = console(&clock);
    assert_eq!(console.dispatch("reset").as_deref(), Some("Back to neutral"));
    let neutral = console.scheduler().actuation().map(RecordingActuation::neutral_count);
    assert_eq!(neutral, Some(1));

    console.scheduler_mut().set_timeout_seconds(1);
    clock.advance(Duration::from_secs(2));
    let now = clock.now();
    let played = console.scheduler_mut().tick(now).expect("idle");
    let name = Animation::from_id(played).map(|a| a.to_string()).unwrap_or_default();
    let status = console.dispatch("status").unwrap_or_default();
    assert!(status.starts_with("idle on, threshold "), "{}", status);
    assert!(status.contains(&name), "{}", status);
}

#[test]
fn test_unknown_command_reply() {
    let clock = ManualClock::new();
    let mut console = console(&clock);
    let reply = console.dispatch("jump100").unwrap_or_default();
    assert_eq!(reply, "Unknown command: jump100\nType 'help' for commands");
    assert!(console.dispatch("help").unwrap_or_default().contains("Walking: deffb"));
}

#[test]
fn test_idling_continues_after_input_closes() {
    let clock = ManualClock::new();
    let mut console = console(&clock);
    let (lines_tx, lines_rx) = channel();
    lines_tx.send("timeout 1".to_string()).expect("receiver alive");
    lines_tx.send("".to_string()).expect("receiver alive");

    let mut replies = Vec::new();
    assert!(console.drain(&lines_rx, |reply| replies.push(reply)));
    assert_eq!(replies, vec!["Idle timeout set to 1s".to_string()]);

    drop(lines_tx);
    assert!(!console.drain(&lines_rx, |reply| replies.push(reply)));
    assert_eq!(replies.len(), 1);

    clock.advance(Duration::from_secs(1));
    let played = console.tick().expect("idle without an operator");
    assert_eq!(console.scheduler().last_played(), Some(played));
    assert_eq!(console.scheduler().last_activity(), clock.now());
    assert_eq!(console.tick(), None);
}

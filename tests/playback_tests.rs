// Integration tests for replaying traces

use std::time::{Duration, Instant};

use algotty::playback::{PlaybackError, Player, Speed, Timeline};
use algotty::sorting::{generate_sorting_trace, Algorithm};
use algotty::traversal::{generate_traversal_trace, Graph, TraversalMode};

#[test]
fn test_seek_across_a_sorting_trace() {
    let steps = generate_sorting_trace(&[5, 3, 8, 1, 9], Algorithm::Bubble);
    let total = steps.len();
    let mut timeline = Timeline::new(steps);

    assert_eq!(timeline.step_backward(), Err(PlaybackError::AtStart));
    timeline.jump_to_end();
    assert!(timeline.current().unwrap().is_fully_sorted_marker());
    assert_eq!(timeline.step_forward(), Err(PlaybackError::AtEnd));

    timeline.seek(1).unwrap();
    assert_eq!(timeline.current().unwrap().swap_indices, vec![0, 1]);
    assert_eq!(
        timeline.seek(total),
        Err(PlaybackError::OutOfRange { index: total, len: total })
    );
    assert_eq!(timeline.position(), 1);
}

#[test]
fn test_stepping_back_and_forth_is_repeatable() {
    let steps = generate_sorting_trace(&[4, 1, 3, 2], Algorithm::Quick);
    let mut timeline = Timeline::new(steps);

    timeline.step_forward_by(3);
    let ahead = timeline.current().cloned();
    timeline.step_backward().unwrap();
    timeline.step_forward().unwrap();
    assert_eq!(timeline.current().cloned(), ahead);
}

#[test]
fn test_player_runs_traversal_to_completion() {
    let graph = Graph::default_graph();
    let trace = generate_traversal_trace(&graph, TraversalMode::Bfs).unwrap();
    let mut player = Player::new(trace.steps, Speed::new(100));
    let delay = Speed::new(100).delay();

    let start = Instant::now();
    player.play(start);
    assert!(!player.tick(start));

    let mut now = start;
    let mut advances = 0;
    while player.is_playing() {
        now += delay;
        if player.tick(now) {
            advances += 1;
        }
    }

    assert_eq!(advances, 7);
    assert!(player.timeline.is_at_end());
    assert_eq!(player.timeline.current().map(Vec::len), Some(8));
}

#[test]
fn test_play_at_end_restarts() {
    let steps = generate_sorting_trace(&[2, 1], Algorithm::Insertion);
    let mut player = Player::new(steps, Speed::default());
    player.timeline.jump_to_end();

    player.play(Instant::now());
    assert!(player.is_playing());
    assert!(player.timeline.is_at_start());
}

#[test]
fn test_speed_change_affects_only_future_delay() {
    let steps = generate_sorting_trace(&[3, 2, 1], Algorithm::Selection);
    let mut player = Player::new(steps, Speed::new(1));
    let start = Instant::now();
    player.play(start);

    player.set_speed(Speed::new(100));
    assert!(player.tick(start + Duration::from_millis(100)));
    assert_eq!(player.timeline.position(), 1);

    player.pause();
    assert!(!player.tick(start + Duration::from_secs(5)));
    assert_eq!(player.timeline.position(), 1);
}

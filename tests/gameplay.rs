//! Whole-session behaviour through the public API

use canvas_breakout::sim::{FixedDirection, GamePhase, LevelOverflow};
use canvas_breakout::{FrameEvent, FrameInput, GameConfig, GameSimulation};
use glam::Vec2;

/// Drop the ball onto the centre of the first remaining brick and step once
fn hit_next_brick<R: canvas_breakout::sim::DirectionSource>(
    sim: &mut GameSimulation<R>,
) -> canvas_breakout::FrameResult {
    let brick = *sim.bricks().iter().next().expect("a brick to hit");
    sim.ball_mut().pos = brick.pos + brick.size / 2.0;
    sim.advance_frame(FrameInput::default())
}

/// Put the ball just above the floor, well away from the paddle, falling
fn miss_paddle<R: canvas_breakout::sim::DirectionSource>(
    sim: &mut GameSimulation<R>,
) -> canvas_breakout::FrameResult {
    let paddle_x = sim.paddle().pos.x;
    let x = if paddle_x > 200.0 { 40.0 } else { 440.0 };
    sim.ball_mut().pos = Vec2::new(x, 300.0);
    sim.ball_mut().vel = Vec2::new(2.0, 3.0);
    sim.advance_frame(FrameInput::default())
}

#[test]
fn clearing_every_level_wins() {
    let mut sim = GameSimulation::with_source(GameConfig::default(), FixedDirection::RIGHT);
    let mut advances = 0;
    let mut frames = 0;

    let last = loop {
        let result = hit_next_brick(&mut sim);
        frames += 1;
        assert!(result.destroyed.is_some());
        match result.event {
            FrameEvent::LevelAdvanced => {
                advances += 1;
                assert_eq!(result.bricks_remaining, 15);
                assert_eq!(result.level, advances);
            }
            FrameEvent::GameWon => break result,
            FrameEvent::None => {}
            other => panic!("unexpected event {:?}", other),
        }
        assert!(frames < 1000);
    };

    assert_eq!(advances, 5);
    assert_eq!(last.score, 90);
    assert_eq!(last.level, 5);
    assert_eq!(last.lives, 3);
    assert_eq!(sim.state().phase, GamePhase::Won);
}

#[test]
fn clamp_policy_plays_past_the_table() {
    let config = GameConfig {
        overflow: LevelOverflow::Clamp,
        ..Default::default()
    };
    let mut sim = GameSimulation::with_source(config, FixedDirection::LEFT);

    while sim.state().level < 8 {
        let result = hit_next_brick(&mut sim);
        assert!(!result.event.is_terminal());
    }

    assert_eq!(sim.state().phase, GamePhase::Playing);
    assert_eq!(sim.state().score, 8 * 15);
    assert_eq!(sim.level_params().color, "#27296d");
    // Level 8 is three past the table: 4.5 + 3 * 0.5
    assert_eq!(sim.ball().vel, Vec2::new(-6.0, -6.0));
    assert_eq!(sim.bricks().len(), 15);
}

#[test]
fn losing_every_life_ends_the_game() {
    let mut sim = GameSimulation::new(GameConfig::default(), 7);

    assert_eq!(miss_paddle(&mut sim).event, FrameEvent::LifeLost);
    assert_eq!(sim.state().lives, 2);
    assert_eq!(miss_paddle(&mut sim).event, FrameEvent::LifeLost);
    assert_eq!(sim.state().lives, 1);

    let over = miss_paddle(&mut sim);
    assert_eq!(over.event, FrameEvent::GameOver);
    assert_eq!(over.lives, 0);

    let frozen = sim.current_frame();
    for _ in 0..10 {
        let result = sim.advance_frame(FrameInput {
            left_held: true,
            right_held: false,
        });
        assert_eq!(result, frozen);
    }
}

#[test]
fn life_lost_keeps_level_and_bricks() {
    let mut sim = GameSimulation::with_source(GameConfig::default(), FixedDirection::RIGHT);
    sim.start_level(3);
    hit_next_brick(&mut sim);
    hit_next_brick(&mut sim);

    let result = miss_paddle(&mut sim);
    assert_eq!(result.event, FrameEvent::LifeLost);
    assert_eq!(result.level, 3);
    assert_eq!(result.bricks_remaining, 13);
    assert_eq!(result.score, 2);
    // Level 3 start: paddle raised by 30
    assert_eq!(result.ball.pos, Vec2::new(240.0, 266.0));
    assert_eq!(result.paddle.pos, Vec2::new(195.0, 276.0));
}

#[test]
fn custom_grid_from_json() {
    let config = GameConfig::from_json(r#"{ "brick_rows": 2, "brick_columns": 3 }"#)
        .expect("valid config");
    let mut sim = GameSimulation::with_source(config, FixedDirection::RIGHT);
    assert_eq!(sim.bricks().len(), 6);

    let mut result = sim.current_frame();
    while result.event != FrameEvent::LevelAdvanced {
        result = hit_next_brick(&mut sim);
    }
    assert_eq!(result.score, 6);
    assert_eq!(result.bricks_remaining, 6);
}

#[test]
fn autopilot_session_keeps_invariants() {
    let mut sim = GameSimulation::new(GameConfig::default(), 2024);
    let mut prev = sim.current_frame();

    for _ in 0..20_000 {
        let center = prev.paddle.pos.x + prev.paddle.size.x / 2.0;
        let input = FrameInput {
            left_held: prev.ball.pos.x < center - 4.0,
            right_held: prev.ball.pos.x > center + 4.0,
        };
        let result = sim.advance_frame(input);

        assert!(result.score >= prev.score);
        assert!(result.lives <= prev.lives);
        assert!(result.paddle.pos.x >= 0.0 && result.paddle.pos.x <= 390.0);
        match result.event {
            FrameEvent::LevelAdvanced => {
                assert_eq!(prev.bricks_remaining, 1);
                assert_eq!(result.bricks_remaining, 15);
                assert_eq!(result.level, prev.level + 1);
            }
            _ => {
                let destroyed = usize::from(result.destroyed.is_some());
                assert_eq!(result.bricks_remaining + destroyed, prev.bricks_remaining);
            }
        }

        if result.event.is_terminal() {
            break;
        }
        prev = result;
    }
}

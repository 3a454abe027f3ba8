//! Per-frame simulation step
//!
//! Core game loop that advances the simulation one frame at a time. The host
//! owns scheduling; this module only mutates state and reports what happened.

use rand_pcg::Pcg32;

use super::collision::{exits_horizontally, hits_ceiling, within_span};
use super::levels::{LevelOverflow, LevelParams, StartPose, paddle_threshold};
use super::rng::{self, DirectionSource};
use super::state::{Ball, Brick, BrickGrid, GamePhase, GameState, Paddle};
use crate::config::{ConfigError, GameConfig};

/// Held-key snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left_held: bool,
    pub right_held: bool,
}

/// What a frame did to the session, for host side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameEvent {
    /// Ordinary frame
    #[default]
    None,
    /// Ball missed the paddle; ball and paddle were reset
    LifeLost,
    /// Grid cleared; the next level was set up
    LevelAdvanced,
    /// Last life lost (terminal)
    GameOver,
    /// Last level cleared (terminal)
    GameWon,
}

impl FrameEvent {
    pub fn is_terminal(self) -> bool {
        matches!(self, FrameEvent::GameOver | FrameEvent::GameWon)
    }
}

/// Outcome of one frame, enough for a renderer to redraw
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub event: FrameEvent,
    pub ball: Ball,
    pub paddle: Paddle,
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub bricks_remaining: usize,
    /// Brick destroyed this frame, if any
    pub destroyed: Option<Brick>,
    /// The paddle returned the ball this frame
    pub paddle_bounce: bool,
}

/// Owns the whole game: ball, paddle, bricks and bookkeeping
#[derive(Debug, Clone)]
pub struct GameSimulation<R: DirectionSource = Pcg32> {
    config: GameConfig,
    state: GameState,
    ball: Ball,
    paddle: Paddle,
    bricks: BrickGrid,
    directions: R,
}

impl GameSimulation<Pcg32> {
    /// New session with a seeded launch-direction source
    ///
    /// `config` must pass [`GameConfig::validate`]; an empty level table
    /// panics. Use [`GameSimulation::try_new`] for untrusted configs.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_source(config, rng::seeded(seed))
    }

    /// Validate `config`, then start a seeded session
    pub fn try_new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::try_with_source(config, rng::seeded(seed))
    }
}

impl<R: DirectionSource> GameSimulation<R> {
    /// Validate `config`, then start a session drawing from `directions`
    pub fn try_with_source(config: GameConfig, directions: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_source(config, directions))
    }

    /// New session drawing launch directions from `directions`
    ///
    /// Same precondition as [`GameSimulation::new`].
    pub fn with_source(config: GameConfig, directions: R) -> Self {
        let pose = StartPose::for_level(&config, 0);
        let mut sim = Self {
            state: GameState::new(config.starting_lives),
            ball: Ball::launch(&pose, config.ball_radius, 1.0),
            paddle: Paddle::new(&pose, &config),
            bricks: BrickGrid::default(),
            config,
            directions,
        };
        sim.start_level(0);
        sim
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.bricks
    }

    /// Parameters of the level being played
    pub fn level_params(&self) -> &LevelParams {
        self.config.level_params(self.state.level)
    }

    /// Mutable session state (for testing)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Mutable ball (for testing)
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    /// Mutable paddle (for testing)
    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    /// Replace the brick grid (for testing)
    pub fn set_bricks(&mut self, bricks: BrickGrid) {
        self.bricks = bricks;
    }

    /// Re-centre ball and paddle for the current level with a fresh launch
    /// direction. Score, lives and bricks are left alone.
    pub fn reset_level(&mut self) {
        let pose = StartPose::for_level(&self.config, self.state.level);
        let direction = self.directions.next_direction();
        self.ball = Ball::launch(&pose, self.config.ball_radius, direction);
        self.paddle = Paddle::new(&pose, &self.config);
    }

    /// Fill the grid for `level` and reset ball and paddle
    pub fn start_level(&mut self, level: u32) {
        self.state.level = level;
        self.bricks = BrickGrid::generate(&self.config);
        self.reset_level();
        log::info!(
            "Level {} started ({} bricks, speed {})",
            level + 1,
            self.bricks.len(),
            self.config.ball_speed(level)
        );
    }

    /// Advance the simulation by one frame
    ///
    /// Order: paddle, bricks, level clear, walls, ceiling/paddle/floor,
    /// integration. A new level's fresh ball runs through the remaining steps
    /// in the same frame. A lost life or the end of the game skips
    /// integration. Terminal sessions are not mutated.
    pub fn advance_frame(&mut self, input: FrameInput) -> FrameResult {
        if self.state.phase.is_terminal() {
            return self.current_frame();
        }

        let width = self.config.canvas_width;

        // Right is checked first; left only applies when right does not
        let step = self.config.paddle_step();
        if input.right_held && self.paddle.right() < width {
            self.paddle.shift(step, width);
        } else if input.left_held && self.paddle.left() > 0.0 {
            self.paddle.shift(-step, width);
        }

        // At most one brick per frame
        let destroyed = self
            .bricks
            .first_hit(self.ball.pos, self.ball.radius)
            .map(|index| self.bricks.remove(index));
        if let Some(brick) = destroyed {
            self.ball.vel.y = -self.ball.vel.y;
            self.state.score += 1;
            log::debug!(
                "Brick ({}, {}) destroyed, score {}",
                brick.column,
                brick.row,
                self.state.score
            );
        }

        let mut event = FrameEvent::None;
        if self.bricks.is_empty() {
            if !self.advance_level() {
                return self.snapshot(FrameEvent::GameWon, destroyed, false);
            }
            event = FrameEvent::LevelAdvanced;
        }

        let radius = self.ball.radius;
        let next = self.ball.projected();

        if exits_horizontally(next.x, radius, width) {
            self.ball.vel.x = -self.ball.vel.x;
        }

        let mut paddle_bounce = false;
        if hits_ceiling(next.y, radius) {
            self.ball.vel.y = -self.ball.vel.y;
        } else if next.y > paddle_threshold(&self.config, self.state.level) {
            if within_span(self.ball.pos.x, self.paddle.left(), self.paddle.size.x) {
                self.ball.vel.y = -self.ball.vel.y;
                paddle_bounce = true;
            } else {
                return self.lose_life(destroyed);
            }
        }

        self.ball.pos += self.ball.vel;

        self.snapshot(event, destroyed, paddle_bounce)
    }

    /// Move on to the next level. Returns false when the game is won instead.
    fn advance_level(&mut self) -> bool {
        let next_level = self.state.level + 1;
        let past_table = next_level as usize >= self.config.levels.len();

        if past_table && self.config.overflow == LevelOverflow::Win {
            self.state.phase = GamePhase::Won;
            log::info!("All {} levels cleared, score {}", next_level, self.state.score);
            return false;
        }

        self.start_level(next_level);
        true
    }

    fn lose_life(&mut self, destroyed: Option<Brick>) -> FrameResult {
        self.state.lives = self.state.lives.saturating_sub(1);

        if self.state.lives == 0 {
            self.state.phase = GamePhase::GameOver;
            log::info!(
                "Game over on level {}, score {}",
                self.state.level + 1,
                self.state.score
            );
            return self.snapshot(FrameEvent::GameOver, destroyed, false);
        }

        log::info!("Life lost, {} remaining", self.state.lives);
        self.reset_level();
        self.snapshot(FrameEvent::LifeLost, destroyed, false)
    }

    /// Current state without advancing, e.g. for the first draw
    pub fn current_frame(&self) -> FrameResult {
        let event = match self.state.phase {
            GamePhase::Playing => FrameEvent::None,
            GamePhase::GameOver => FrameEvent::GameOver,
            GamePhase::Won => FrameEvent::GameWon,
        };
        self.snapshot(event, None, false)
    }

    fn snapshot(
        &self,
        event: FrameEvent,
        destroyed: Option<Brick>,
        paddle_bounce: bool,
    ) -> FrameResult {
        FrameResult {
            event,
            ball: self.ball,
            paddle: self.paddle,
            score: self.state.score,
            lives: self.state.lives,
            level: self.state.level,
            bricks_remaining: self.bricks.len(),
            destroyed,
            paddle_bounce,
        }
    }
}

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use super::{
    action::Direction,
    config::WorldConfig,
    error::WorldError,
    grid::Grid,
    state::{CollisionType, GameStatus, Snake},
};

/// Headings tried, in order, when laying out the starting snake
const START_HEADINGS: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

/// What a call to [`World::advance_tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running; nothing changed
    Idle,
    /// The snake moved one cell
    Moved,
    /// The snake ate the reward and grew
    Grew,
    /// The snake filled the grid
    Won,
    /// The snake crashed
    Lost(CollisionType),
}

/// A single game: the grid, the snake on it, and the reward it is after.
///
/// Reward placement draws from a seeded ChaCha stream. It is reproducible
/// for a given seed and is not suitable for anything needing
/// cryptographic randomness.
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    snake: Snake,
    initial_snake: Snake,
    reward: Option<usize>,
    status: GameStatus,
    ticks: u64,
    rng: ChaCha8Rng,
}

impl World {
    /// Create a world with a one-cell snake and the default seed
    pub fn new(width: usize, start_index: usize) -> Result<Self, WorldError> {
        Self::with_length(width, start_index, 1)
    }

    pub fn with_length(
        width: usize,
        start_index: usize,
        start_length: usize,
    ) -> Result<Self, WorldError> {
        Self::from_config(&WorldConfig {
            width,
            start_index,
            start_length,
            ..Default::default()
        })
    }

    pub fn from_config(config: &WorldConfig) -> Result<Self, WorldError> {
        config.validate()?;
        let grid = Grid::new(config.width)?;

        let snake = Self::lay_out_snake(&grid, config.start_index, config.start_length);
        if snake.len() < config.start_length {
            tracing::debug!(
                requested = config.start_length,
                length = snake.len(),
                "start length shortened to fit"
            );
        }

        let mut world = Self {
            grid,
            initial_snake: snake.clone(),
            snake,
            reward: None,
            status: GameStatus::NotStarted,
            ticks: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
        };
        world.reward = world.place_reward();

        tracing::debug!(
            width = config.width,
            head = world.snake.head(),
            heading = ?world.snake.heading(),
            length = world.snake.len(),
            reward = ?world.reward,
            "world created"
        );

        Ok(world)
    }

    /// The first heading whose straight body fits at full length, or else
    /// the longest straight body any heading allows (at least the head)
    fn lay_out_snake(grid: &Grid, start_index: usize, length: usize) -> Snake {
        let mut best = Snake::laid_out(grid, start_index, START_HEADINGS[0], length);

        for &heading in &START_HEADINGS[1..] {
            if best.len() == length {
                break;
            }
            let candidate = Snake::laid_out(grid, start_index, heading, length);
            if candidate.len() > best.len() {
                best = candidate;
            }
        }

        best
    }

    /// Put the starting snake back and draw a fresh reward.
    ///
    /// The random stream carries on, so the new reward usually lands
    /// somewhere else than in the previous game.
    pub fn reset(&mut self) {
        self.snake = self.initial_snake.clone();
        self.status = GameStatus::NotStarted;
        self.ticks = 0;
        self.reward = self.place_reward();
    }

    /// Begin play. Has no effect once the game has started.
    pub fn start_game(&mut self) {
        if self.status == GameStatus::NotStarted {
            self.status = GameStatus::Played;
            tracing::info!("game started");
        }
    }

    /// Request a heading for the next tick.
    ///
    /// Reversing onto the neck is ignored, as is any request once the
    /// game is over. The last accepted request before a tick wins.
    pub fn change_heading(&mut self, direction: Direction) {
        if self.status.is_terminal() {
            return;
        }

        if !self.snake.steer(direction) {
            tracing::debug!(
                ?direction,
                heading = ?self.snake.heading(),
                "ignored reversal"
            );
        }
    }

    /// Advance the game by one step
    pub fn advance_tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Played {
            return TickOutcome::Idle;
        }

        self.ticks += 1;

        let heading = self.snake.pending_heading();
        let Some(next) = self.grid.neighbor(self.snake.head(), heading) else {
            return self.lose(CollisionType::Wall);
        };

        if self.snake.hits_body(next) {
            return self.lose(CollisionType::SelfCollision);
        }

        if self.reward == Some(next) {
            self.snake.advance(next, true);
            self.reward = self.place_reward();

            if self.reward.is_none() {
                return self.finish(GameStatus::Won, TickOutcome::Won);
            }
            return TickOutcome::Grew;
        }

        self.snake.advance(next, false);
        TickOutcome::Moved
    }

    fn lose(&mut self, collision: CollisionType) -> TickOutcome {
        tracing::debug!(?collision, head = self.snake.head(), "collision");
        self.finish(GameStatus::Lost, TickOutcome::Lost(collision))
    }

    fn finish(&mut self, status: GameStatus, outcome: TickOutcome) -> TickOutcome {
        self.status = status;
        self.reward = None;
        tracing::info!(
            ?status,
            ticks = self.ticks,
            length = self.snake.len(),
            "game over"
        );
        outcome
    }

    /// Draw a free cell uniformly, or `None` if the snake covers the grid
    fn place_reward(&mut self) -> Option<usize> {
        let mut occupied = vec![false; self.grid.size()];
        for &cell in self.snake.cells() {
            occupied[cell] = true;
        }

        let free: Vec<usize> = (0..self.grid.size()).filter(|&c| !occupied[c]).collect();
        let cell = free.choose(&mut self.rng).copied();

        tracing::debug!(reward = ?cell, free = free.len(), "placed reward");
        cell
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn head_index(&self) -> usize {
        self.snake.head()
    }

    /// Snake cells, head first
    pub fn body_indices(&self) -> &[usize] {
        self.snake.cells()
    }

    pub fn body_length(&self) -> usize {
        self.snake.len()
    }

    /// The reward cell; absent once the game is over
    pub fn reward_index(&self) -> Option<usize> {
        self.reward
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn status_info(&self) -> String {
        self.status.to_string()
    }

    /// Heading of the last move made
    pub fn heading(&self) -> Direction {
        self.snake.heading()
    }

    /// Heading the next tick will use
    pub fn pending_heading(&self) -> Direction {
        self.snake.pending_heading()
    }

    /// Ticks processed while playing
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

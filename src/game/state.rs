use std::fmt;

use serde::{Deserialize, Serialize};

use super::{action::Direction, grid::Grid};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Cell indices, with head at index 0
    body: Vec<usize>,
    /// Direction of the last committed move
    heading: Direction,
    /// Direction the next tick will move in
    pending: Direction,
}

impl Snake {
    /// Lay out a snake of exactly `length` cells extending backward from `head`.
    ///
    /// Returns `None` when a segment would fall off the grid.
    pub fn new(grid: &Grid, head: usize, heading: Direction, length: usize) -> Option<Self> {
        if length == 0 || !grid.contains(head) {
            return None;
        }

        let snake = Self::laid_out(grid, head, heading, length);
        (snake.len() == length).then_some(snake)
    }

    /// Lay out up to `max_length` cells extending backward from `head`,
    /// stopping at the edge of the grid. `head` must be on the grid.
    pub fn laid_out(grid: &Grid, head: usize, heading: Direction, max_length: usize) -> Self {
        let mut body = vec![head];

        while body.len() < max_length {
            match grid.neighbor(body[body.len() - 1], heading.opposite()) {
                Some(cell) => body.push(cell),
                None => break,
            }
        }

        Self {
            body,
            heading,
            pending: heading,
        }
    }

    /// Get the head position
    pub fn head(&self) -> usize {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> usize {
        self.body[self.body.len() - 1]
    }

    /// All segments, head first
    pub fn cells(&self) -> &[usize] {
        &self.body
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn pending_heading(&self) -> Direction {
        self.pending
    }

    /// Queue a heading for the next move.
    ///
    /// A snake with a neck cannot turn back onto it; such requests are
    /// dropped and `false` is returned.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.body.len() >= 2 && self.heading.is_opposite(direction) {
            return false;
        }
        self.pending = direction;
        true
    }

    /// Whether any segment occupies `cell`
    pub fn occupies(&self, cell: usize) -> bool {
        self.body.contains(&cell)
    }

    /// Whether moving the head to `cell` hits the body.
    ///
    /// The tail is left out since it moves off its cell on the same tick.
    pub fn hits_body(&self, cell: usize) -> bool {
        self.body[..self.body.len() - 1].contains(&cell)
    }

    /// Move the head to `new_head` and commit the pending heading,
    /// keeping the tail if `grow` is true
    pub fn advance(&mut self, new_head: usize, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }

        self.heading = self.pending;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check whether the snake has no segments
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Played,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::NotStarted => "Press start to play",
            GameStatus::Played => "You're playing!",
            GameStatus::Won => "You won!",
            GameStatus::Lost => "You lost!",
        };
        f.write_str(text)
    }
}

use anyhow::{Context, Result, bail};

use crate::game::{Direction, TickOutcome, World, WorldConfig};

/// Parse a move script such as `"rrdl"`: one direction per tick,
/// `.` keeps the current heading
pub fn parse_moves(script: &str) -> Result<Vec<Option<Direction>>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'u' => Ok(Some(Direction::Up)),
            'd' => Ok(Some(Direction::Down)),
            'l' => Ok(Some(Direction::Left)),
            'r' => Ok(Some(Direction::Right)),
            '.' => Ok(None),
            other => bail!("invalid move '{other}', expected one of u, d, l, r, ."),
        })
        .collect()
}

/// Runs a game without a terminal, feeding a scripted move list
pub struct HeadlessMode {
    world: World,
    moves: Vec<Option<Direction>>,
    max_ticks: u64,
}

impl HeadlessMode {
    pub fn new(
        config: &WorldConfig,
        moves: Vec<Option<Direction>>,
        max_ticks: u64,
    ) -> Result<Self> {
        let world = World::from_config(config).context("Failed to create world")?;
        Ok(Self {
            world,
            moves,
            max_ticks,
        })
    }

    /// Play until the game ends or the tick limit is reached
    pub fn run(&mut self) -> &World {
        self.world.start_game();

        for tick in 0..self.max_ticks {
            if let Some(Some(direction)) = self.moves.get(tick as usize) {
                self.world.change_heading(*direction);
            }

            let outcome = self.world.advance_tick();
            tracing::info!(
                tick = self.world.tick_count(),
                ?outcome,
                head = self.world.head_index(),
                length = self.world.body_length(),
                reward = ?self.world.reward_index(),
                "tick"
            );

            if matches!(outcome, TickOutcome::Won | TickOutcome::Lost(_)) {
                break;
            }
        }

        &self.world
    }
}

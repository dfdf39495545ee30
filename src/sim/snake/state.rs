//! Snake entities and the movement grid

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::sim::GameEvent;
use crate::sim::input::Direction;
use crate::tuning::SnakeTuning;

/// Segments a fresh snake starts with, all stacked on the start cell
pub const INITIAL_SEGMENTS: usize = 3;

/// Square movement grid laid over the surface; positions are cell centers
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub size: Vec2,
    pub cell: f32,
}

impl Grid {
    pub fn new(size: Vec2, cell: f32) -> Self {
        Self { size, cell }
    }

    pub fn cols(&self) -> u32 {
        (self.size.x / self.cell).floor() as u32
    }

    pub fn rows(&self) -> u32 {
        (self.size.y / self.cell).floor() as u32
    }

    pub fn cell_center(&self, col: u32, row: u32) -> Vec2 {
        let half = self.cell / 2.0;
        Vec2::new(col as f32 * self.cell + half, row as f32 * self.cell + half)
    }

    /// Cell just up-left of the surface center
    pub fn start_cell(&self) -> Vec2 {
        self.cell_center(
            (self.cols() / 2).saturating_sub(1),
            (self.rows() / 2).saturating_sub(1),
        )
    }

    /// Center of the last whole cell in each axis
    pub fn last_cell(&self) -> Vec2 {
        self.cell_center(
            self.cols().saturating_sub(1),
            self.rows().saturating_sub(1),
        )
    }

    /// Toroidal wrap: leaving past the last whole cell re-enters on the far
    /// side. A partial strip at the right or bottom edge is never entered.
    pub fn wrap(&self, mut pos: Vec2) -> Vec2 {
        let offset = self.cell / 2.0;
        let last = self.last_cell();
        if pos.x > last.x {
            pos.x = offset;
        }
        if pos.y > last.y {
            pos.y = offset;
        }
        if pos.x < offset {
            pos.x = last.x;
        }
        if pos.y < offset {
            pos.y = last.y;
        }
        pos
    }
}

/// The snake: head first, truncated to `target_length` after every move
#[derive(Debug, Clone)]
pub struct Snake {
    segments: Vec<Vec2>,
    target_length: usize,
    grid: Grid,
}

impl Snake {
    pub fn new(start: Vec2, grid: Grid, target_length: usize) -> Self {
        Self {
            segments: vec![start; INITIAL_SEGMENTS.min(target_length)],
            target_length,
            grid,
        }
    }

    pub fn head(&self) -> Vec2 {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Vec2] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Move the head one cell, wrapping at the edges
    pub fn step(&mut self, direction: Direction) {
        let next = self.head() + direction.step() * self.grid.cell;
        self.move_to(self.grid.wrap(next));
    }

    fn move_to(&mut self, pos: Vec2) {
        self.segments.insert(0, pos);
        self.segments.truncate(self.target_length);
    }

    /// Grow toward a longer target; the body fills in over the next moves
    pub fn eat(&mut self, food: &Food) {
        self.target_length = self.target_length.saturating_add(food.value as usize);
    }

    pub fn occupies(&self, pos: Vec2) -> bool {
        self.segments.contains(&pos)
    }

    /// Head sits on one of the trailing segments
    pub fn bites_itself(&self) -> bool {
        let (head, body) = match self.segments.split_first() {
            Some(split) => split,
            None => return false,
        };
        body.contains(head)
    }
}

/// A food item
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub pos: Vec2,
    pub value: u32,
    /// Value was multiplied at spawn time
    pub special: bool,
    faded: bool,
}

impl Food {
    pub fn new(pos: Vec2, value: u32) -> Self {
        Self {
            pos,
            value,
            special: false,
            faded: false,
        }
    }

    pub fn special(pos: Vec2, value: u32) -> Self {
        Self {
            special: true,
            ..Self::new(pos, value)
        }
    }

    /// Lose one point per tick while above `fade_limit`
    pub fn update(&mut self, fade_limit: u32) {
        if self.value > fade_limit {
            self.value -= 1;
            if self.value == fade_limit {
                self.faded = true;
            }
        }
    }

    /// Decayed all the way down to the fade limit
    pub fn is_faded(&self) -> bool {
        self.faded
    }
}

/// Complete Snake round state
#[derive(Debug, Clone)]
pub struct SnakeState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Vec<Food>,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Buffered input, applied at the start of the next tick
    pub requested: Direction,
    pub tuning: SnakeTuning,
    pub game_over: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) spawn_countdown: u32,
    pub(crate) rng: Pcg32,
}

impl SnakeState {
    pub fn new(size: Vec2, tuning: &SnakeTuning, seed: u64) -> Self {
        let grid = Grid::new(size, tuning.cell_size);
        Self {
            snake: Snake::new(grid.start_cell(), grid, tuning.initial_length),
            grid,
            food: Vec::new(),
            direction: Direction::Right,
            requested: Direction::Right,
            tuning: tuning.clone(),
            game_over: false,
            time_ticks: 0,
            events: Vec::new(),
            spawn_countdown: tuning.food_spawn_interval,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Buffer a turn unless it reverses the applied direction.
    /// Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.requested = direction;
        true
    }

    /// Final score is the number of body segments
    pub fn score(&self) -> usize {
        self.snake.len()
    }
}

/// Cell taken by the snake or by a food item
pub fn is_occupied(snake: &Snake, food: &[Food], pos: Vec2) -> bool {
    snake.occupies(pos) || food.iter().any(|f| f.pos == pos)
}

//! Food spawning
//!
//! Spawn cadence is a tick countdown that only runs while below the food cap.
//! Positions come from rejection sampling over grid cells; when every retry
//! lands on something the spawn is skipped until the next cycle.

use glam::Vec2;
use rand::Rng;

use super::state::{Food, Grid, SnakeState, is_occupied};

/// Pick a random free cell center, or `None` after `retries` misses
pub fn random_free_cell<R, F>(rng: &mut R, grid: &Grid, retries: u32, is_occupied: F) -> Option<Vec2>
where
    R: Rng,
    F: Fn(Vec2) -> bool,
{
    let (cols, rows) = (grid.cols(), grid.rows());
    if cols == 0 || rows == 0 {
        return None;
    }

    for _ in 0..retries {
        let pos = grid.cell_center(rng.random_range(0..cols), rng.random_range(0..rows));
        if !is_occupied(pos) {
            return Some(pos);
        }
    }
    None
}

/// Run the spawn countdown for one tick, spawning at most one food item.
/// Returns true if a food item was added.
pub fn update_spawner(state: &mut SnakeState) -> bool {
    if state.food.len() >= state.tuning.max_food_count {
        return false;
    }
    if state.spawn_countdown > 0 {
        state.spawn_countdown -= 1;
        return false;
    }

    state.spawn_countdown = state.tuning.food_spawn_interval;
    spawn_food(state)
}

/// Attempt to place one food item
pub fn spawn_food(state: &mut SnakeState) -> bool {
    let tuning = &state.tuning;
    let value = state
        .rng
        .random_range(tuning.food_value_min..=tuning.food_value_max);
    let special = state.rng.random_bool(tuning.special_food_chance);

    let snake = &state.snake;
    let food = &state.food;
    let pos = random_free_cell(&mut state.rng, &state.grid, tuning.max_spawn_retries, |pos| {
        is_occupied(snake, food, pos)
    });

    let Some(pos) = pos else {
        log::debug!(
            "No free cell after {} tries, skipping food spawn",
            tuning.max_spawn_retries
        );
        return false;
    };

    let item = if special {
        Food::special(pos, value.saturating_mul(tuning.special_food_multiplier))
    } else {
        Food::new(pos, value)
    };
    state.food.push(item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::SnakeTuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_saturated_grid_yields_nothing() {
        let grid = Grid::new(Vec2::new(60.0, 60.0), 20.0);
        let mut rng = Pcg32::seed_from_u64(9);
        let attempts = std::cell::Cell::new(0);

        let pos = random_free_cell(&mut rng, &grid, 10, |_| {
            attempts.set(attempts.get() + 1);
            true
        });

        assert_eq!(pos, None);
        assert_eq!(attempts.get(), 10);
    }

    #[test]
    fn test_saturated_by_snake_and_food_skips_spawn() {
        let tuning = SnakeTuning {
            max_food_count: 20,
            ..Default::default()
        };
        let mut state = SnakeState::new(Vec2::new(60.0, 60.0), &tuning, 4);
        // The snake covers its start cell; food covers the other eight
        let start = state.snake.head();
        for col in 0..3 {
            for row in 0..3 {
                let pos = state.grid.cell_center(col, row);
                if pos != start {
                    state.food.push(Food::new(pos, 1));
                }
            }
        }

        assert!(!spawn_food(&mut state));
        assert_eq!(state.food.len(), 8);
    }

    #[test]
    fn test_free_cells_are_grid_centers_inside_surface() {
        let grid = Grid::new(Vec2::new(800.0, 600.0), 20.0);
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..500 {
            let pos = random_free_cell(&mut rng, &grid, 1, |_| false).unwrap();
            assert!(pos.x > 0.0 && pos.x < 800.0);
            assert!(pos.y > 0.0 && pos.y < 600.0);
            assert_eq!((pos.x - 10.0) % 20.0, 0.0);
            assert_eq!((pos.y - 10.0) % 20.0, 0.0);
        }
    }

    #[test]
    fn test_countdown_spawns_every_interval_plus_one_ticks() {
        let mut state = SnakeState::new(Vec2::new(800.0, 600.0), &SnakeTuning::default(), 11);
        for _ in 0..15 {
            assert!(!update_spawner(&mut state));
        }
        assert!(update_spawner(&mut state));
        assert_eq!(state.food.len(), 1);
        for _ in 0..15 {
            assert!(!update_spawner(&mut state));
        }
        assert!(update_spawner(&mut state));
        assert_eq!(state.food.len(), 2);
    }

    #[test]
    fn test_cap_pauses_countdown() {
        let tuning = SnakeTuning {
            max_food_count: 1,
            food_spawn_interval: 0,
            ..Default::default()
        };
        let mut state = SnakeState::new(Vec2::new(800.0, 600.0), &tuning, 11);
        assert!(update_spawner(&mut state));
        for _ in 0..50 {
            assert!(!update_spawner(&mut state));
        }
        assert_eq!(state.food.len(), 1);
    }

    #[test]
    fn test_special_food_multiplies_value() {
        let tuning = SnakeTuning {
            special_food_chance: 1.0,
            food_value_min: 4,
            food_value_max: 4,
            ..Default::default()
        };
        let mut state = SnakeState::new(Vec2::new(800.0, 600.0), &tuning, 3);
        assert!(spawn_food(&mut state));
        assert_eq!(state.food[0].value, 40);
        assert!(state.food[0].special);
    }

    #[test]
    fn test_huge_multiplier_saturates() {
        let tuning = SnakeTuning {
            special_food_chance: 1.0,
            special_food_multiplier: u32::MAX,
            ..Default::default()
        };
        let mut state = SnakeState::new(Vec2::new(800.0, 600.0), &tuning, 3);
        assert!(spawn_food(&mut state));
        assert_eq!(state.food[0].value, u32::MAX);
    }

    #[test]
    fn test_regular_food_in_value_range() {
        let tuning = SnakeTuning {
            special_food_chance: 0.0,
            max_food_count: 100,
            ..Default::default()
        };
        let mut state = SnakeState::new(Vec2::new(800.0, 600.0), &tuning, 3);
        for _ in 0..50 {
            spawn_food(&mut state);
        }
        assert!(!state.food.is_empty());
        assert!(state.food.iter().all(|f| (1..=9).contains(&f.value) && !f.special));
    }
}

//! Fixed-rate Snake simulation tick
//!
//! A tick is split in two so the controller can draw between movement and
//! collision resolution.

use super::spawn::update_spawner;
use super::state::SnakeState;
use crate::sim::{GameEvent, GameResult};

/// First half of a tick: apply the buffered direction, move, and update food
pub fn advance(state: &mut SnakeState) {
    if state.game_over {
        return;
    }

    state.time_ticks += 1;

    state.direction = state.requested;
    state.snake.step(state.direction);

    update_spawner(state);
    let fade_limit = state.tuning.food_fade_limit;
    for food in &mut state.food {
        food.update(fade_limit);
    }
    if state.tuning.remove_decayed_food {
        state.food.retain(|food| !food.is_faded());
    }
}

/// Second half of a tick: self-collision, then food under the head.
/// Returns the final result if the snake bit itself.
pub fn resolve_collisions(state: &mut SnakeState) -> Option<GameResult> {
    if state.game_over {
        return None;
    }

    let mut result = None;
    if state.snake.bites_itself() {
        let score = state.score();
        log::info!("Snake bit itself after {} ticks, score {}", state.time_ticks, score);
        state.game_over = true;
        result = Some(GameResult::Score(score));
    }

    let head = state.snake.head();
    if let Some(index) = state.food.iter().position(|food| food.pos == head) {
        let food = state.food.remove(index);
        state.snake.eat(&food);
        state.events.push(GameEvent::FoodEaten { value: food.value });
    }

    if let Some(result) = result {
        state.events.push(GameEvent::GameOver(result));
    }
    result
}

/// Full tick without an intermediate draw
pub fn tick(state: &mut SnakeState) -> Option<GameResult> {
    advance(state);
    resolve_collisions(state)
}

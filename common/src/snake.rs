use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Color, Direction, Food, Position, INITIAL_SNAKE_LENGTH};

/// Stable handle for a snake, assigned by the field. Indices into the snake
/// list shift when snakes die, ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnakeId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub id: SnakeId,
    /// Head at the front, tail at the back. Never empty.
    pub body: VecDeque<Position>,
    pub direction: Direction,
    pub color: Color,
}

impl Snake {
    /// Spawn with the head at `start` and the body extending downward,
    /// moving up.
    pub fn new(id: SnakeId, start: Position, color: Color, width: u16, height: u16) -> Self {
        let mut body = VecDeque::with_capacity(INITIAL_SNAKE_LENGTH);
        let mut cell = start;
        for _ in 0..INITIAL_SNAKE_LENGTH {
            body.push_back(cell);
            cell = cell.step(Direction::Down, width, height);
        }
        Snake {
            id,
            body,
            direction: Direction::Up,
            color,
        }
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should not be empty")
    }

    pub fn tail(&self) -> Position {
        *self.body.back().expect("Snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Request a direction change. The turn is dropped silently when the cell
    /// it would move the head into is the neck segment, so a snake can never
    /// reverse straight into itself. Calls between ticks overwrite each
    /// other; the last accepted turn wins.
    pub fn turn(&mut self, direction: Direction, width: u16, height: u16) {
        let ahead = self.head().step(direction, width, height);
        if self.body.get(1) != Some(&ahead) {
            self.direction = direction;
        }
    }

    /// Move one cell along the current direction: the tail cell is evicted
    /// and the wrapped `head + direction` becomes the new head. Length is
    /// unchanged; growth is applied separately by the field.
    pub fn advance(&mut self, width: u16, height: u16) {
        let new_head = self.head().step(self.direction, width, height);
        self.body.pop_back();
        self.body.push_front(new_head);
    }

    /// Lengthen by `n` segments by duplicating the tail cell. The duplicates
    /// unwind one per tick as the tail is evicted, so the body reaches its
    /// full footprint over the following `n` steps rather than instantly.
    pub fn grow(&mut self, n: usize) {
        let tail = self.tail();
        for _ in 0..n {
            self.body.push_back(tail);
        }
    }

    /// Head intersects a non-head segment of the own body.
    pub fn collides_self(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Head intersects any segment of `other`, including other's head.
    pub fn collides_snake(&self, other: &Snake) -> bool {
        let head = self.head();
        other.body.iter().any(|&cell| cell == head)
    }

    pub fn collides_food(&self, food: &Food) -> bool {
        self.head() == food.position
    }
}

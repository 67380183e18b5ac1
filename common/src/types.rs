use serde::{Deserialize, Serialize};

use crate::util::PseudoRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Neighboring cell one step in `direction`, wrapping at the field edges.
    pub fn step(self, direction: Direction, width: u16, height: u16) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x as i32 + dx).rem_euclid(width as i32) as u16,
            y: (self.y as i32 + dy).rem_euclid(height as i32) as u16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Unit movement vector, y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

/// Display-only RGB color. Has no effect on the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Bright random color, each channel in 128..=255.
    pub fn random(rng: &mut PseudoRandom) -> Self {
        Self {
            r: 128 + (rng.next_u32() % 128) as u8,
            g: 128 + (rng.next_u32() % 128) as u8,
            b: 128 + (rng.next_u32() % 128) as u8,
        }
    }
}

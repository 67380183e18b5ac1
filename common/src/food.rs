use serde::{Deserialize, Serialize};

use crate::{Color, Position};

/// A single collectible at a grid cell. Consumed the moment a snake's head
/// lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
    pub color: Color,
}

impl Food {
    pub fn new(position: Position, color: Color) -> Self {
        Self { position, color }
    }
}

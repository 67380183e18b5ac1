use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::{
    Color, Direction, Food, Position, PseudoRandom, Snake, SnakeId, FOOD_SPAWN_MAX_ATTEMPTS,
    GROWTH_PER_FOOD,
};

/// What happened during one `Field::step`, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldEvent {
    FoodSpawned { position: Position },
    FoodEaten { snake_id: SnakeId, position: Position },
    SnakeDied { snake_id: SnakeId },
}

/// Toroidal grid owning the live snakes and foods. All mutation happens
/// through `step`, `turn` and the spawn methods; the collections are never
/// touched concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    width: u16,
    height: u16,
    snakes: Vec<Snake>,
    foods: Vec<Food>,
    rng: PseudoRandom,
    next_snake_id: u32,
}

impl Field {
    /// Clock-seeded field. Games are not reproducible across runs; tests
    /// should use `new_with_seed`.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Self::with_rng(width, height, PseudoRandom::from_clock())
    }

    pub fn new_with_seed(width: u16, height: u16, seed: u64) -> Result<Self> {
        Self::with_rng(width, height, PseudoRandom::new(seed))
    }

    fn with_rng(width: u16, height: u16, rng: PseudoRandom) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "field dimensions must be positive, got {}x{}",
            width,
            height
        );
        Ok(Field {
            width,
            height,
            snakes: Vec::new(),
            foods: Vec::new(),
            rng,
            next_snake_id: 0,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn snake(&self, snake_id: SnakeId) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == snake_id)
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Spawn a snake with its head at `start` (field center when `None`)
    /// and a random color unless one is given.
    pub fn add_snake(&mut self, start: Option<Position>, color: Option<Color>) -> SnakeId {
        let id = SnakeId(self.next_snake_id);
        self.next_snake_id += 1;
        let start = start.unwrap_or_else(|| self.center());
        let color = color.unwrap_or_else(|| Color::random(&mut self.rng));
        self.snakes
            .push(Snake::new(id, start, color, self.width, self.height));
        id
    }

    /// Place a food directly, bypassing replenishment.
    pub fn add_food(&mut self, position: Position, color: Option<Color>) {
        let color = color.unwrap_or_else(|| Color::random(&mut self.rng));
        self.foods.push(Food::new(position, color));
    }

    /// Route a direction change to a snake. Unknown ids are ignored; the
    /// player's snake may have died a tick ago while they kept typing.
    pub fn turn(&mut self, snake_id: SnakeId, direction: Direction) {
        let (width, height) = (self.width, self.height);
        if let Some(snake) = self.snakes.iter_mut().find(|s| s.id == snake_id) {
            snake.turn(direction, width, height);
        }
    }

    /// Advance the world by one tick: replenish food, move every snake that
    /// was alive at the start of the tick, then resolve collisions. Snakes
    /// marked dead are filtered out once at the end, so removal is
    /// idempotent and iteration never skips an entry.
    pub fn step(&mut self) -> Vec<FieldEvent> {
        let mut events = Vec::new();

        self.replenish_food(&mut events);

        let mut dead: Vec<SnakeId> = Vec::new();

        // Movement over a snapshot of the ids present at tick start.
        let ids: Vec<SnakeId> = self.snakes.iter().map(|s| s.id).collect();
        for id in ids {
            let Some(idx) = self.snakes.iter().position(|s| s.id == id) else {
                continue;
            };
            self.snakes[idx].advance(self.width, self.height);
            if self.snakes[idx].collides_self() {
                dead.push(id);
                events.push(FieldEvent::SnakeDied { snake_id: id });
                continue;
            }
            // First food under the new head wins, in insertion order. At
            // most one per snake per tick even if a cell holds several.
            let head = self.snakes[idx].head();
            if let Some(food_idx) = self.foods.iter().position(|f| f.position == head) {
                let food = self.foods.remove(food_idx);
                self.snakes[idx].grow(GROWTH_PER_FOOD);
                events.push(FieldEvent::FoodEaten {
                    snake_id: id,
                    position: food.position,
                });
            }
        }

        // Pairwise collisions among the survivors, evaluated against a fixed
        // snapshot before any removal applies. Head-to-head crashes remove
        // both snakes, and chains of three or more resolve from the same
        // snapshot regardless of enumeration order.
        let mut crashed: Vec<SnakeId> = Vec::new();
        for a in &self.snakes {
            if dead.contains(&a.id) {
                continue;
            }
            for b in &self.snakes {
                if a.id == b.id || dead.contains(&b.id) {
                    continue;
                }
                if a.collides_snake(b) {
                    crashed.push(a.id);
                    events.push(FieldEvent::SnakeDied { snake_id: a.id });
                    break;
                }
            }
        }
        dead.extend(crashed);

        self.snakes.retain(|s| !dead.contains(&s.id));
        events
    }

    /// Keep at least one more food than there are snakes. Candidate cells
    /// under a snake's head are rejected; heads only, so food may appear
    /// under a body segment and sit there until the tail clears the cell.
    fn replenish_food(&mut self, events: &mut Vec<FieldEvent>) {
        while self.foods.len() < self.snakes.len() + 1 {
            match self.sample_food_cell() {
                Some(position) => {
                    let color = Color::random(&mut self.rng);
                    self.foods.push(Food::new(position, color));
                    events.push(FieldEvent::FoodSpawned { position });
                }
                None => {
                    log::warn!(
                        "no free cell for food after {} attempts, skipping replenishment this tick",
                        FOOD_SPAWN_MAX_ATTEMPTS
                    );
                    break;
                }
            }
        }
    }

    fn sample_food_cell(&mut self) -> Option<Position> {
        for _ in 0..FOOD_SPAWN_MAX_ATTEMPTS {
            let position = Position::new(
                self.rng.next_below(self.width as u32) as u16,
                self.rng.next_below(self.height as u32) as u16,
            );
            if !self.snakes.iter().any(|s| s.head() == position) {
                return Some(position);
            }
        }
        None
    }

    /// JSON snapshot of the whole field state, for debugging.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

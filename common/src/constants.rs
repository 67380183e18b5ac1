/// Body length of a freshly spawned snake
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Segments gained per food eaten
pub const GROWTH_PER_FOOD: usize = 3;

/// Default tick interval in milliseconds for game loops
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Retry cap when sampling a free cell during food replenishment
pub const FOOD_SPAWN_MAX_ATTEMPTS: u32 = 1024;

use common::Direction;
use crossterm::event::KeyCode;

/// Static key-to-direction lookup for one player. Keys with no binding map
/// to nothing and are ignored by the caller.
#[derive(Debug, Clone, Copy)]
pub struct ControlScheme {
    bindings: [(KeyCode, Direction); 4],
}

impl ControlScheme {
    pub fn wasd() -> Self {
        Self {
            bindings: [
                (KeyCode::Char('a'), Direction::Left),
                (KeyCode::Char('w'), Direction::Up),
                (KeyCode::Char('d'), Direction::Right),
                (KeyCode::Char('s'), Direction::Down),
            ],
        }
    }

    pub fn arrows() -> Self {
        Self {
            bindings: [
                (KeyCode::Left, Direction::Left),
                (KeyCode::Up, Direction::Up),
                (KeyCode::Right, Direction::Right),
                (KeyCode::Down, Direction::Down),
            ],
        }
    }

    pub fn direction_for(&self, key: KeyCode) -> Option<Direction> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, direction)| *direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wasd_bindings() {
        let scheme = ControlScheme::wasd();
        assert_eq!(
            scheme.direction_for(KeyCode::Char('w')),
            Some(Direction::Up)
        );
        assert_eq!(
            scheme.direction_for(KeyCode::Char('a')),
            Some(Direction::Left)
        );
        assert_eq!(scheme.direction_for(KeyCode::Up), None);
    }

    #[test]
    fn test_arrow_bindings() {
        let scheme = ControlScheme::arrows();
        assert_eq!(scheme.direction_for(KeyCode::Down), Some(Direction::Down));
        assert_eq!(scheme.direction_for(KeyCode::Char('s')), None);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        for scheme in [ControlScheme::wasd(), ControlScheme::arrows()] {
            assert_eq!(scheme.direction_for(KeyCode::Char('x')), None);
            assert_eq!(scheme.direction_for(KeyCode::Esc), None);
        }
    }
}

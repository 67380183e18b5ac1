use common::Field;

use super::traits::Drawable;
use super::types::{CharDimensions, CharGrid};

pub struct FieldRenderer {
    char_dims: CharDimensions,
}

impl FieldRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }

    /// Foods first, snakes on top.
    pub fn render(&self, field: &Field) -> CharGrid {
        let mut canvas = CharGrid::new(
            field.width() as usize,
            field.height() as usize,
            self.char_dims,
        );
        for food in field.foods() {
            food.draw(&mut canvas);
        }
        for snake in field.snakes() {
            snake.draw(&mut canvas);
        }
        canvas
    }
}

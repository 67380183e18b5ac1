use common::{Food, Snake};

use super::types::CharGrid;

/// Read-only projection of a simulation entity onto the character canvas.
pub trait Drawable {
    fn draw(&self, canvas: &mut CharGrid);
}

impl Drawable for Snake {
    fn draw(&self, canvas: &mut CharGrid) {
        // Tail first so the head ends up on top of any overlapping segment.
        for (i, segment) in self.body.iter().enumerate().rev() {
            let ch = if i == 0 { '█' } else { '▓' };
            canvas.set_logical_point(segment.x as usize, segment.y as usize, ch, self.color);
        }
    }
}

impl Drawable for Food {
    fn draw(&self, canvas: &mut CharGrid) {
        canvas.set_logical_point(self.position.x as usize, self.position.y as usize, '●', self.color);
    }
}

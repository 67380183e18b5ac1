use common::Color;
use ratatui::style::{Color as TermColor, Style};
use ratatui::text::{Line, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    ch: char,
    color: Option<Color>,
}

/// Character canvas over the logical grid. Each logical cell maps to a
/// `CharDimensions` block of physical characters (2x1 compensates for
/// terminal cells being roughly twice as tall as wide).
pub struct CharGrid {
    cells: Vec<Vec<Cell>>,
    logical_width: usize,
    logical_height: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(logical_width: usize, logical_height: usize, char_dims: CharDimensions) -> Self {
        let physical_width = logical_width * char_dims.horizontal;
        let physical_height = logical_height * char_dims.vertical;
        let cells = vec![
            vec![
                Cell {
                    ch: ' ',
                    color: None
                };
                physical_width
            ];
            physical_height
        ];
        Self {
            cells,
            logical_width,
            logical_height,
            char_dims,
        }
    }

    /// Fill the physical block backing one logical grid cell.
    pub fn set_logical_point(&mut self, x: usize, y: usize, ch: char, color: Color) {
        let start_x = x * self.char_dims.horizontal;
        let start_y = y * self.char_dims.vertical;

        for dy in 0..self.char_dims.vertical {
            for dx in 0..self.char_dims.horizontal {
                if let Some(cell) = self
                    .cells
                    .get_mut(start_y + dy)
                    .and_then(|row| row.get_mut(start_x + dx))
                {
                    *cell = Cell {
                        ch,
                        color: Some(color),
                    };
                }
            }
        }
    }

    pub fn physical_width(&self) -> usize {
        self.logical_width * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.logical_height * self.char_dims.vertical
    }

    /// Plain characters, colors dropped.
    pub fn into_lines(self) -> Vec<Vec<char>> {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.ch).collect())
            .collect()
    }

    pub fn into_styled_lines(self) -> Vec<Line<'static>> {
        self.cells
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| {
                        let style = match cell.color {
                            Some(c) => Style::default().fg(TermColor::Rgb(c.r, c.g, c.b)),
                            None => Style::default(),
                        };
                        Span::styled(cell.ch.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

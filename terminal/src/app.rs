use anyhow::Result;
use common::{Field, Position, SnakeId, DEFAULT_TICK_INTERVAL_MS};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

use crate::controls::ControlScheme;
use crate::render::field::FieldRenderer;
use crate::render::types::CharDimensions;

const FIELD_WIDTH: u16 = 40;
const FIELD_HEIGHT: u16 = 40;

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    Restart,
}

pub struct Player {
    pub name: &'static str,
    pub snake_id: SnakeId,
    pub controls: ControlScheme,
}

pub struct App {
    field: Field,
    players: Vec<Player>,
    tick_interval: Duration,
    tick_accumulator: Duration,
    ticks: u64,
    paused: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let (field, players) = Self::setup()?;
        Ok(Self {
            field,
            players,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            tick_accumulator: Duration::ZERO,
            ticks: 0,
            paused: false,
        })
    }

    /// Fresh field with the two local players flanking the center.
    fn setup() -> Result<(Field, Vec<Player>)> {
        let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT)?;
        let center = field.center();
        let one = field.add_snake(Some(Position::new(center.x - 5, center.y)), None);
        let two = field.add_snake(Some(Position::new(center.x + 5, center.y)), None);
        let players = vec![
            Player {
                name: "P1 (WASD)",
                snake_id: one,
                controls: ControlScheme::wasd(),
            },
            Player {
                name: "P2 (Arrows)",
                snake_id: two,
                controls: ControlScheme::arrows(),
            },
        ];
        Ok((field, players))
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Game over is an observation on the field, not simulation state.
    pub fn game_over(&self) -> bool {
        self.field.snakes().is_empty()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Some(AppCommand::Quit),
            KeyCode::Char('r') if self.game_over() => return Some(AppCommand::Restart),
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
                return None;
            }
            _ => {}
        }
        for player in &self.players {
            if let Some(direction) = player.controls.direction_for(key.code) {
                self.field.turn(player.snake_id, direction);
            }
        }
        None
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            AppCommand::Restart => self.reset()?,
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        let (field, players) = Self::setup()?;
        self.field = field;
        self.players = players;
        self.tick_accumulator = Duration::ZERO;
        self.ticks = 0;
        self.paused = false;
        Ok(())
    }

    pub fn update(&mut self, dt: Duration) {
        if self.paused || self.game_over() {
            return;
        }
        self.tick_accumulator += dt;
        while self.tick_accumulator >= self.tick_interval {
            self.tick_accumulator -= self.tick_interval;
            let events = self.field.step();
            self.ticks += 1;
            for event in &events {
                tracing::debug!(tick = self.ticks, ?event, "field event");
            }
            if self.game_over() {
                tracing::info!(tick = self.ticks, "all snakes dead");
                break;
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .margin(1)
            .constraints([
                Constraint::Min(20),   // Field
                Constraint::Length(5), // Status
                Constraint::Length(3), // Controls help
            ])
            .split(frame.area());

        self.render_field(frame, chunks[0]);
        frame.render_widget(self.render_status(), chunks[1]);
        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_field(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Torusnake").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let renderer = FieldRenderer::new(CharDimensions::new(2, 1));
        let grid = renderer.render(&self.field);
        let grid_width = grid.physical_width() as u16;
        let grid_height = grid.physical_height() as u16;

        // Center the field inside the block.
        let x_offset = inner.width.saturating_sub(grid_width) / 2;
        let y_offset = inner.height.saturating_sub(grid_height) / 2;

        let mut lines: Vec<Line> = Vec::new();
        for _ in 0..y_offset {
            lines.push(Line::from(""));
        }
        let pad = " ".repeat(x_offset as usize);
        for line in grid.into_styled_lines() {
            let mut spans = vec![Span::raw(pad.clone())];
            spans.extend(line.spans);
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_status(&self) -> Paragraph {
        let mut lines = Vec::new();
        lines.push(Line::from(format!(
            "Tick: {} | Snakes alive: {}",
            self.ticks,
            self.field.snakes().len()
        )));

        let mut spans = Vec::new();
        for player in &self.players {
            let (label, style) = match self.field.snake(player.snake_id) {
                Some(snake) => (
                    format!("{}: {}  ", player.name, snake.len()),
                    Style::default().fg(TermColor::Rgb(
                        snake.color.r,
                        snake.color.g,
                        snake.color.b,
                    )),
                ),
                None => (
                    format!("{}: dead  ", player.name),
                    Style::default().fg(TermColor::DarkGray),
                ),
            };
            spans.push(Span::styled(label, style));
        }
        lines.push(Line::from(spans));

        if self.game_over() {
            lines.push(Line::from(Span::styled(
                "Game over, press r to restart",
                Style::default()
                    .fg(TermColor::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
        } else if self.paused {
            lines.push(Line::from(Span::styled(
                "Paused",
                Style::default().fg(TermColor::Yellow),
            )));
        }

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL))
    }

    fn render_controls(&self) -> Paragraph {
        Paragraph::new(Line::from(
            "WASD / Arrows: steer | Space: pause | q: quit",
        ))
        .style(Style::default().fg(TermColor::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
    }
}

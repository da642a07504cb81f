//! Playfield rasterization
//!
//! Maps cabinet pixel coordinates onto a grid of terminal cells.

use ratatui::style::{Color, Modifier, Style};

use crate::consts::*;
use crate::sim::{Hole, Snapshot};

/// Topmost cabinet y shown (just above the highest hole)
const VIEW_TOP: f32 = 110.0;
/// Bottommost cabinet y shown (the pickup position)
const VIEW_BOTTOM: f32 = RIGHT_NUT_SETUP_HEIGHT + 10.0;

const BACKGROUND: Color = Color::Rgb(204, 102, 0);
const HOLE: Color = Color::Rgb(0, 0, 0);
const TARGET: Color = Color::Rgb(255, 255, 204);
const SILVER: Color = Color::Rgb(224, 224, 224);

pub type Cell = (char, Style);

/// Cell-space projection of the playfield
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Column for cabinet x, if visible
    pub fn col(&self, x: f32) -> Option<usize> {
        let t = (x - LEFT_LIMIT) / (RIGHT_LIMIT - LEFT_LIMIT);
        to_cell(t, self.width)
    }

    /// Row for cabinet y, if visible
    pub fn row(&self, y: f32) -> Option<usize> {
        let t = (y - VIEW_TOP) / (VIEW_BOTTOM - VIEW_TOP);
        to_cell(t, self.height)
    }

    /// Cabinet x at the center of column `col`
    pub fn x_at(&self, col: usize) -> f32 {
        LEFT_LIMIT + (col as f32 + 0.5) / self.width as f32 * (RIGHT_LIMIT - LEFT_LIMIT)
    }
}

fn to_cell(t: f32, cells: usize) -> Option<usize> {
    if !(0.0..=1.0).contains(&t) || cells == 0 {
        return None;
    }
    Some(((t * cells as f32) as usize).min(cells - 1))
}

/// Draw one frame of the playfield
pub fn rasterize(snapshot: &Snapshot, width: usize, height: usize) -> Vec<Vec<Cell>> {
    let view = Viewport::new(width, height);
    let bg = Style::default().bg(BACKGROUND);
    let mut grid = vec![vec![(' ', bg); width]; height];

    let mut put = |x: f32, y: f32, cell: Cell| {
        if let (Some(col), Some(row)) = (view.col(x), view.row(y)) {
            grid[row][col] = cell;
        }
    };

    for hole in &snapshot.holes {
        put(hole.center.x, hole.center.y, hole_cell(hole, bg));
    }

    if snapshot.goal_flash_on {
        let target = snapshot.target_goal;
        put(
            target.center.x,
            target.center.y,
            ('◉', bg.fg(TARGET).add_modifier(Modifier::BOLD)),
        );
    }

    for col in 0..width {
        let y = snapshot.lever.height_at(view.x_at(col));
        if let Some(row) = view.row(y) {
            grid[row][col] = ('━', bg.fg(SILVER));
        }
    }

    if snapshot.ball.in_play {
        if let (Some(col), Some(row)) = (view.col(snapshot.ball.pos.x), view.row(snapshot.ball.pos.y)) {
            grid[row][col] = ('●', bg.fg(SILVER).add_modifier(Modifier::BOLD));
        }
    }

    grid
}

fn hole_cell(hole: &Hole, bg: Style) -> Cell {
    // Bigger decoys get a heavier glyph
    let ch = if hole.radius >= 12.0 { '●' } else { '•' };
    (ch, bg.fg(HOLE))
}

mod button;

pub use button::{Button, ButtonAction};

use crate::config::SimulationConfig;

pub const BUTTON_HEIGHT: f32 = 30.0;
pub const PADDING: f32 = 20.0;

/// Counter lines at the top of the panel
pub const STATUS_LINES: usize = 4;

pub const LEGEND_FONT_SIZE: u16 = 12;
pub const LEGEND_LINE_HEIGHT: f32 = 14.0;

/// Screen geometry: the world on the left, the control panel on the right.
///
/// Derived once from the config. Only the visible cells are on screen; the
/// margin exists in the grid but is never drawn or clickable.
///
/// The panel is laid out top-down: counters, buttons, the game-over notice,
/// then the key legend. The window grows taller than the world when the
/// panel needs the room.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub columns: usize,
    pub rows: usize,
    pub panel_width: f32,
    pub font_size: u16,
    /// Number of legend lines drawn under the buttons
    pub legend_lines: usize,
}

impl Layout {
    pub fn from_config(config: &SimulationConfig, legend_lines: usize) -> Self {
        Self {
            cell_size: config.display.cell_size,
            columns: config.world.width,
            rows: config.world.height,
            panel_width: config.display.panel_width,
            font_size: config.display.font_size,
            legend_lines,
        }
    }

    pub fn world_width(&self) -> f32 {
        self.columns as f32 * self.cell_size
    }

    pub fn world_height(&self) -> f32 {
        self.rows as f32 * self.cell_size
    }

    /// Get the X position where the panel starts
    pub fn panel_x(&self) -> f32 {
        self.world_width()
    }

    fn line_height(&self) -> f32 {
        f32::from(self.font_size) + PADDING / 2.0
    }

    fn button_height(&self) -> f32 {
        BUTTON_HEIGHT.max(f32::from(self.font_size) + 10.0)
    }

    /// Baseline of counter line `index`
    pub fn status_line_y(&self, index: usize) -> f32 {
        PADDING + f32::from(self.font_size) + index as f32 * self.line_height()
    }

    fn buttons_top(&self) -> f32 {
        PADDING + STATUS_LINES as f32 * self.line_height() + PADDING
    }

    fn buttons_bottom(&self) -> f32 {
        self.buttons_top() + 3.0 * self.button_height() + 2.0 * PADDING
    }

    /// Baseline of the game-over notice
    pub fn notice_y(&self) -> f32 {
        self.buttons_bottom() + PADDING + f32::from(self.font_size)
    }

    fn legend_top(&self) -> f32 {
        self.notice_y() + PADDING
    }

    /// Baseline of legend line `index`
    pub fn legend_line_y(&self, index: usize) -> f32 {
        self.legend_top() + (index + 1) as f32 * LEGEND_LINE_HEIGHT
    }

    /// Height the panel content needs
    pub fn panel_height(&self) -> f32 {
        self.legend_top() + self.legend_lines as f32 * LEGEND_LINE_HEIGHT + PADDING
    }

    pub fn window_size(&self) -> (f32, f32) {
        (
            self.world_width() + self.panel_width,
            self.world_height().max(self.panel_height()),
        )
    }

    /// Map a screen position to the visible cell under it
    pub fn cell_at(&self, pos: (f32, f32)) -> Option<(i32, i32)> {
        let (x, y) = pos;
        if x < 0.0 || y < 0.0 || x >= self.world_width() || y >= self.world_height() {
            return None;
        }
        let row = (y / self.cell_size) as i32;
        let col = (x / self.cell_size) as i32;
        Some((row, col))
    }

    /// Top-left pixel of a visible cell
    pub fn cell_origin(&self, row: i32, col: i32) -> (f32, f32) {
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// Run, Pause and Reset stacked and centred in the panel below the counters
    pub fn buttons(&self) -> Vec<Button> {
        let width = self.panel_width / 2.5;
        let x = self.panel_x() + (self.panel_width - width) / 2.0;
        let top = self.buttons_top();
        let height = self.button_height();

        [
            ("Run", ButtonAction::Run),
            ("Pause", ButtonAction::Pause),
            ("Reset", ButtonAction::Reset),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (text, action))| {
            Button::new(x, top + i as f32 * (height + PADDING), width, height, text, action)
        })
        .collect()
    }
}

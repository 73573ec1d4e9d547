use macroquad::prelude::*;

use crate::application::{Phase, Session};
use crate::input::{CONTROL_HELP, pattern_key_label};
use crate::ui::{Button, LEGEND_FONT_SIZE, Layout, PADDING, STATUS_LINES};

const ALIVE_COLOR: Color = WHITE;
const PANEL_BORDER: Color = WHITE;
const LEGEND_COLOR: Color = GRAY;

/// Text shown once the population has died out
pub const GAME_OVER_TEXT: &str = "Generation died!";

/// Status lines for the panel, top to bottom
pub fn status_lines(session: &Session) -> [String; STATUS_LINES] {
    let controller = session.controller();
    [
        format!("Generation: {}", controller.generation()),
        format!("Population: {}", controller.population()),
        format!("Status: {}", controller.phase().label()),
        format!("Tick: {} ms", session.scheduler().interval().as_millis()),
    ]
}

/// Notice under the buttons, if any
pub fn notice_text(session: &Session) -> Option<&'static str> {
    (session.controller().phase() == Phase::Finished).then_some(GAME_OVER_TEXT)
}

/// Key help followed by one entry per preset: key and name, then its description
pub fn legend_lines(session: &Session) -> Vec<String> {
    let presets = session
        .patterns()
        .iter()
        .enumerate()
        .filter_map(|(index, pattern)| {
            let key = pattern_key_label(index)?;
            Some([
                format!("{key}  {}", pattern.name),
                format!("  {}", pattern.description),
            ])
        })
        .flatten();

    CONTROL_HELP
        .iter()
        .map(|line| (*line).to_owned())
        .chain(presets)
        .collect()
}

/// Draw the live cells of the visible area
pub fn draw_world(session: &Session, layout: &Layout) {
    let grid = session.controller().grid();
    grid.iter_alive()
        .filter(|&(row, col)| grid.is_visible(row, col))
        .for_each(|(row, col)| {
            let (x, y) = layout.cell_origin(row, col);
            draw_rectangle(x, y, layout.cell_size, layout.cell_size, ALIVE_COLOR);
        });
}

/// Draw the control panel: counters, buttons, the game-over notice and the key legend
pub fn draw_panel(session: &Session, layout: &Layout, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = layout.panel_x();
    let (_, height) = layout.window_size();
    let font_size = f32::from(layout.font_size);

    draw_rectangle(px, 0.0, layout.panel_width, height, BLACK);
    draw_rectangle_lines(px, 0.0, layout.panel_width, height, 1.0, PANEL_BORDER);

    status_lines(session)
        .iter()
        .enumerate()
        .for_each(|(i, line)| { draw_text(line, px + PADDING, layout.status_line_y(i), font_size, WHITE); });

    buttons.iter().for_each(|btn| btn.draw(mouse_pos, layout.font_size));

    if let Some(notice) = notice_text(session) {
        let size = measure_text(notice, None, layout.font_size, 1.0);
        let x = px + (layout.panel_width - size.width) / 2.0;
        draw_text(notice, x, layout.notice_y(), font_size, WHITE);
    }

    legend_lines(session)
        .iter()
        .take(layout.legend_lines)
        .enumerate()
        .for_each(|(i, line)| {
            let y = layout.legend_line_y(i);
            draw_text(line, px + PADDING / 2.0, y, f32::from(LEGEND_FONT_SIZE), LEGEND_COLOR);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Command;
    use crate::config::SimulationConfig;

    #[test]
    fn test_status_lines_track_session() {
        let mut session = Session::new(&SimulationConfig::default());
        session.handle(Command::ToggleCell { row: 0, col: 0 });
        session.handle(Command::ToggleCell { row: 0, col: 1 });
        let lines = status_lines(&session);
        assert_eq!(lines[0], "Generation: 0");
        assert_eq!(lines[1], "Population: 2");
        assert_eq!(lines[2], "Status: Setup");
        assert_eq!(lines[3], "Tick: 100 ms");
    }

    #[test]
    fn test_notice_only_after_extinction() {
        let mut session = Session::new(&SimulationConfig::default());
        session.handle(Command::ToggleCell { row: 5, col: 5 });
        assert_eq!(notice_text(&session), None);

        session.handle(Command::Start);
        assert_eq!(notice_text(&session), None);
        session.update(std::time::Duration::from_millis(100));

        assert!(session.controller().is_finished());
        assert_eq!(notice_text(&session), Some(GAME_OVER_TEXT));
        assert_eq!(status_lines(&session)[2], "Status: Finished");

        session.handle(Command::Reset);
        assert_eq!(notice_text(&session), None);
    }

    #[test]
    fn test_legend_lists_every_preset_with_its_key() {
        let session = Session::new(&SimulationConfig::default());
        let lines = legend_lines(&session);
        assert_eq!(lines.len(), CONTROL_HELP.len() + 2 * session.patterns().len());
        assert!(lines.contains(&"1  Glider".to_owned()));
        assert!(lines.contains(&"0  Block".to_owned()));
        assert!(lines.contains(&"  Still life".to_owned()));
    }

    #[test]
    fn test_legend_fits_in_window() {
        let config = SimulationConfig::parse("world: { width: 10, height: 10 }\n").unwrap();
        let session = Session::new(&config);
        let count = legend_lines(&session).len();
        let layout = Layout::from_config(&config, count);
        assert!(layout.legend_line_y(count - 1) < layout.window_size().1);
    }
}

use macroquad::prelude::*;

use crate::application::{Command, Phase};
use crate::ui::{Button, ButtonAction, Layout};

/// Number keys mapped to the pattern presets, in preset order
pub const PATTERN_KEYS: [(KeyCode, char); 10] = [
    (KeyCode::Key1, '1'),
    (KeyCode::Key2, '2'),
    (KeyCode::Key3, '3'),
    (KeyCode::Key4, '4'),
    (KeyCode::Key5, '5'),
    (KeyCode::Key6, '6'),
    (KeyCode::Key7, '7'),
    (KeyCode::Key8, '8'),
    (KeyCode::Key9, '9'),
    (KeyCode::Key0, '0'),
];

/// Key help shown in the panel legend
pub const CONTROL_HELP: [&str; 6] = [
    "Click: toggle cell",
    "Enter: run   Space: run/pause",
    "C: reset   R: random",
    "Up/Down: faster/slower",
    "0-9: stamp pattern at cursor",
    "Patterns:",
];

/// Label of the key that stamps preset `index`
pub fn pattern_key_label(index: usize) -> Option<char> {
    PATTERN_KEYS.get(index).map(|&(_, label)| label)
}

/// Translate a button press into a command
pub const fn button_command(action: ButtonAction) -> Command {
    match action {
        ButtonAction::Run => Command::Start,
        ButtonAction::Pause => Command::Pause,
        ButtonAction::Reset => Command::Reset,
    }
}

/// Space toggles playback: pause while running, otherwise try to start
pub const fn play_pause_command(phase: Phase) -> Command {
    match phase {
        Phase::Running => Command::Pause,
        _ => Command::Start,
    }
}

/// Gather this frame's commands from mouse and keyboard.
/// Validity is left to the controller; input only translates.
pub fn collect_commands(layout: &Layout, buttons: &[Button], phase: Phase) -> Vec<Command> {
    let mouse_pos = mouse_position();
    let mut commands = Vec::new();

    // Clicks complete on mouse-up
    if is_mouse_button_released(MouseButton::Left) {
        if let Some((row, col)) = layout.cell_at(mouse_pos) {
            commands.push(Command::ToggleCell { row, col });
        }
    }
    commands.extend(
        buttons
            .iter()
            .filter(|btn| btn.is_clicked(mouse_pos))
            .map(|btn| button_command(btn.action())),
    );

    let keys: [(KeyCode, Command); 6] = [
        (KeyCode::Enter, Command::Start),
        (KeyCode::Space, play_pause_command(phase)),
        (KeyCode::C, Command::Reset),
        (KeyCode::R, Command::Randomize),
        (KeyCode::Up, Command::SpeedUp),
        (KeyCode::Down, Command::SlowDown),
    ];
    commands.extend(
        keys.iter()
            .filter(|(key, _)| is_key_pressed(*key))
            .map(|(_, command)| *command),
    );

    if let Some((row, col)) = layout.cell_at(mouse_pos) {
        commands.extend(
            PATTERN_KEYS
                .iter()
                .enumerate()
                .filter(|(_, (key, _))| is_key_pressed(*key))
                .map(|(index, _)| Command::PlacePattern { index, row, col }),
        );
    }

    commands
}

/// Discrete requests the presentation layer sends to the simulation.
///
/// Commands carry no validity of their own; the controller decides per
/// phase whether they take effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip one cell (setup and after extinction only)
    ToggleCell { row: i32, col: i32 },
    /// Begin or resume playback
    Start,
    Pause,
    /// Discard the world and return to setup
    Reset,
    /// Seed the visible area at random
    Randomize,
    /// Stamp preset `index` centred on `(row, col)`
    PlacePattern { index: usize, row: i32, col: i32 },
    SpeedUp,
    SlowDown,
}

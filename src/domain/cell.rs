/// CellState is the fundamental unit of the Game of Life world.
/// Each cell is either Dead or Alive, with no other metadata.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub const fn toggle(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(CellState::Alive.evolve(0), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(1), CellState::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(CellState::Alive.evolve(2), CellState::Alive);
        assert_eq!(CellState::Alive.evolve(3), CellState::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(CellState::Alive.evolve(n), CellState::Dead);
        }
    }

    #[test]
    fn test_reproduction_needs_exactly_three() {
        assert_eq!(CellState::Dead.evolve(3), CellState::Alive);
        assert_eq!(CellState::Dead.evolve(2), CellState::Dead);
        assert_eq!(CellState::Dead.evolve(4), CellState::Dead);
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(CellState::Dead.toggle(), CellState::Alive);
        assert_eq!(CellState::Alive.toggle(), CellState::Dead);
        assert_eq!(CellState::default(), CellState::Dead);
    }
}

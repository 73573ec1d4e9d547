use super::{CellState, Grid};

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(i32, i32)>, // (row, col) of alive cells relative to the top-left
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let height = cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r as usize + 1);
        let width = cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c as usize + 1);
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at `(row, col)`.
    /// Cells falling outside the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: i32, col: i32) {
        for &(dr, dc) in &self.cells {
            grid.set(row + dr, col + dc, CellState::Alive);
        }
    }

    /// Top-left anchor that centres the pattern on `(row, col)`
    pub fn centered_at(&self, row: i32, col: i32) -> (i32, i32) {
        (row - self.height as i32 / 2, col - self.width as i32 / 2)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let arm = [2, 3, 4, 8, 9, 10];
        let bar = [0, 5, 7, 12];
        let mut cells = Vec::with_capacity(48);
        for &edge in &bar {
            for &along in &arm {
                // Horizontal bars on rows 0/5/7/12, vertical bars on the same columns
                cells.push((edge, along));
                cells.push((along, edge));
            }
        }
        Pattern::new("Pulsar", "Oscillator (period 3)", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0),
                (4, 1), (5, 1),

                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),

                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),

                // Right square
                (2, 34), (3, 34),
                (2, 35), (3, 35),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamped(pattern: &Pattern, size: usize) -> Grid {
        let mut grid = Grid::new(size, size, 4);
        pattern.place_on(&mut grid, 2, 2);
        grid
    }

    #[test]
    fn test_bounding_box() {
        let gun = presets::glider_gun();
        assert_eq!((gun.height, gun.width), (9, 36));
        let pulsar = presets::pulsar();
        assert_eq!((pulsar.height, pulsar.width), (13, 13));
        assert_eq!(pulsar.cells.len(), 48);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_place_on_offsets_cells() {
        let grid = stamped(&presets::block(), 8);
        assert_eq!(grid.count_alive(), 4);
        assert_eq!(grid.get(3, 3), CellState::Alive);
        assert_eq!(grid.get(1, 1), CellState::Dead);
    }

    #[test]
    fn test_place_on_drops_out_of_bounds() {
        let mut grid = Grid::new(2, 2, 0);
        presets::block().place_on(&mut grid, 1, 1);
        assert_eq!(grid.count_alive(), 1);
    }

    #[test]
    fn test_centered_at() {
        let glider = presets::glider();
        assert_eq!(glider.centered_at(10, 10), (9, 9));
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let pulsar = presets::pulsar();
        let mut grid = stamped(&pulsar, 17);
        let start: Vec<_> = grid.iter_alive().collect();
        grid.advance();
        assert_ne!(grid.iter_alive().collect::<Vec<_>>(), start);
        grid.advance();
        grid.advance();
        assert_eq!(grid.iter_alive().collect::<Vec<_>>(), start);
    }

    #[test]
    fn test_lwss_keeps_population_after_period() {
        let mut grid = stamped(&presets::lwss(), 20);
        for _ in 0..4 {
            grid.advance();
        }
        assert_eq!(grid.count_alive(), 9);
    }
}

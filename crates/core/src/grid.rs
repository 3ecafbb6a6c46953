//! Grid module - the 5x5 particle field
//!
//! Each cell is empty or holds one particle kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom), both in 0..5.

use arrayvec::ArrayVec;

use crate::types::{Cell, Position, CELL_COUNT, GRID_SIZE};

const SIDE: usize = GRID_SIZE as usize;

/// The particle grid - 5 columns x 5 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * GRID_SIZE + x)
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Build a grid from rows (`rows[y][x]`)
    pub fn from_rows(rows: [[Cell; SIDE]; SIDE]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            grid.cells[y * SIDE..(y + 1) * SIDE].copy_from_slice(row);
        }
        grid
    }

    /// Copy out as rows (`rows[y][x]`)
    pub fn to_rows(&self) -> [[Cell; SIDE]; SIDE] {
        let mut rows = [[None; SIDE]; SIDE];
        for (y, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * SIDE..(y + 1) * SIDE]);
        }
        rows
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Exchange two cells unconditionally (either may be empty).
    ///
    /// Never changes the multiset of particles, only where they sit.
    pub fn swap(&mut self, a: Position, b: Position) {
        self.cells.swap(a.index(), b.index());
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn empty_count(&self) -> usize {
        CELL_COUNT - self.occupied_count()
    }

    /// Occupied-cell count per kind, indexed by [`crate::types::ParticleKind::index`]
    pub fn counts(&self) -> [u32; 3] {
        let mut counts = [0u32; 3];
        for kind in self.cells.iter().flatten() {
            counts[kind.index()] += 1;
        }
        counts
    }

    /// All occupied positions in row-major order
    pub fn occupied_positions(&self) -> ArrayVec<Position, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_some())
            .filter_map(|(i, _)| Position::from_index(i))
            .collect()
    }

    /// First empty cell scanning row-major from `start`, wrapping around
    pub fn first_free_from(&self, start: usize) -> Option<Position> {
        (0..CELL_COUNT)
            .map(|offset| (start + offset) % CELL_COUNT)
            .find(|&i| self.cells[i].is_none())
            .and_then(Position::from_index)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParticleKind;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_grid_flat_array() {
        let mut grid = Grid::new();

        grid.set(pos(0, 0), Some(ParticleKind::Electron));
        grid.set(pos(3, 2), Some(ParticleKind::Neutron));

        assert_eq!(grid.get(pos(0, 0)), Some(ParticleKind::Electron));
        assert_eq!(grid.get(pos(3, 2)), Some(ParticleKind::Neutron));

        // Verify internal array
        assert_eq!(grid.cells[0], Some(ParticleKind::Electron));
        assert_eq!(grid.cells[2 * 5 + 3], Some(ParticleKind::Neutron));
    }

    #[test]
    fn test_swap_with_empty_moves_particle() {
        let mut grid = Grid::new();
        grid.set(pos(1, 1), Some(ParticleKind::Proton));

        grid.swap(pos(1, 1), pos(1, 2));

        assert_eq!(grid.get(pos(1, 1)), None);
        assert_eq!(grid.get(pos(1, 2)), Some(ParticleKind::Proton));
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_counts_by_kind() {
        let mut grid = Grid::new();
        grid.set(pos(0, 0), Some(ParticleKind::Electron));
        grid.set(pos(1, 0), Some(ParticleKind::Electron));
        grid.set(pos(4, 4), Some(ParticleKind::Neutron));

        assert_eq!(grid.counts(), [2, 0, 1]);
        assert_eq!(grid.empty_count(), 22);
    }

    #[test]
    fn test_first_free_wraps_around() {
        let mut grid = Grid::new();
        for i in 20..CELL_COUNT {
            grid.set(Position::from_index(i).unwrap(), Some(ParticleKind::Proton));
        }

        assert_eq!(grid.first_free_from(22), Some(pos(0, 0)));
        assert_eq!(grid.first_free_from(3), Some(pos(3, 0)));
    }

    #[test]
    fn test_first_free_on_full_grid() {
        let grid = Grid::from_rows([[Some(ParticleKind::Neutron); SIDE]; SIDE]);
        assert_eq!(grid.first_free_from(0), None);
    }

    #[test]
    fn test_rows_roundtrip() {
        let mut rows = [[None; SIDE]; SIDE];
        rows[1][3] = Some(ParticleKind::Electron);
        rows[4][0] = Some(ParticleKind::Proton);

        let grid = Grid::from_rows(rows);
        assert_eq!(grid.get(pos(3, 1)), Some(ParticleKind::Electron));
        assert_eq!(grid.to_rows(), rows);
        assert_eq!(
            grid.occupied_positions().as_slice(),
            &[pos(3, 1), pos(0, 4)]
        );
    }
}

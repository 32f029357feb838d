#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Validated board parameters: a `size x size` board holding `mines` mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Fails with [`GameError::InvalidConfiguration`] unless `size > 0` and
    /// `0 < mines < size * size`.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 || mines == 0 || mines >= mult(size, size) {
            return Err(GameError::InvalidConfiguration { size, mines });
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// Where the mines are on a square board.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn new_unchecked(mine_mask: Array2<bool>, mine_count: CellCount) -> Self {
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout from a square mask, checking it against the same rules as
    /// [`GameConfig::new`].
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let invalid = GameError::InvalidConfiguration {
            size: rows.try_into().unwrap_or(Coord::MAX),
            mines: mine_count.try_into().unwrap_or(CellCount::MAX),
        };

        if rows != cols {
            return Err(invalid);
        }
        let size: Coord = rows.try_into().map_err(|_| invalid)?;
        let mine_count: CellCount = mine_count.try_into().map_err(|_| invalid)?;
        GameConfig::new(size, mine_count)?;

        Ok(Self::new_unchecked(mine_mask, mine_count))
    }

    /// Builds a layout with mines at exactly the given `(y, x)` positions.
    ///
    /// Duplicate positions count once.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(square_dim(size));

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::OutOfBounds(coords.0, coords.1));
            }
            mine_mask[nd_index(coords)] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord {
        // only square masks get through the constructors
        self.mine_mask.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8, always fits
        NeighborIter::new(coords, self.size())
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[nd_index(coords)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Board-level status, derived from the `game_over` and `won` flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_out_of_range_mine_counts() {
        assert_eq!(
            GameConfig::new(3, 0),
            Err(GameError::InvalidConfiguration { size: 3, mines: 0 })
        );
        assert_eq!(
            GameConfig::new(3, 9),
            Err(GameError::InvalidConfiguration { size: 3, mines: 9 })
        );
        assert_eq!(
            GameConfig::new(0, 1),
            Err(GameError::InvalidConfiguration { size: 0, mines: 1 })
        );
    }

    #[test]
    fn config_accepts_everything_in_range() {
        let config = GameConfig::new(3, 8).unwrap();

        assert_eq!(config.total_cells(), 9);
        assert_eq!(config.safe_cells(), 1);
        assert!(GameConfig::new(10, 15).is_ok());
        assert!(GameConfig::new(Coord::MAX, 1).is_ok());
    }

    #[test]
    fn layout_from_coords_rejects_out_of_bounds() {
        assert_eq!(
            MineLayout::from_mine_coords(3, &[(0, 3)]),
            Err(GameError::OutOfBounds(0, 3))
        );
    }

    #[test]
    fn layout_from_coords_rejects_empty_and_full_boards() {
        assert!(matches!(
            MineLayout::from_mine_coords(2, &[]),
            Err(GameError::InvalidConfiguration { mines: 0, .. })
        ));
        assert!(matches!(
            MineLayout::from_mine_coords(1, &[(0, 0)]),
            Err(GameError::InvalidConfiguration { mines: 1, .. })
        ));
    }

    #[test]
    fn layout_from_mask_rejects_non_square_masks() {
        let mut mask: Array2<bool> = Array2::default([2, 3]);
        mask[[0, 0]] = true;

        assert!(matches!(
            MineLayout::from_mine_mask(mask),
            Err(GameError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn duplicate_coords_count_once() {
        let layout = MineLayout::from_mine_coords(3, &[(1, 1), (1, 1)]).unwrap();

        assert_eq!(layout.mine_count(), 1);
        assert_eq!(layout.game_config(), GameConfig::new(3, 1).unwrap());
    }

    #[test]
    fn adjacent_counts_match_single_corner_mine() {
        let layout = MineLayout::from_mine_coords(3, &[(0, 0)]).unwrap();

        assert_eq!(layout.adjacent_mine_count((1, 1)), 1);
        assert_eq!(layout.adjacent_mine_count((0, 1)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 2)), 0);
    }

    #[test]
    fn only_state_changing_outcomes_report_updates() {
        let mut board = Board::from_layout(MineLayout::from_mine_coords(3, &[(0, 0)]).unwrap());

        assert!(board.toggle_flag((0, 0)).unwrap().has_update());
        assert!(!board.reveal((0, 0)).unwrap().has_update());
        assert!(board.reveal((0, 1)).unwrap().has_update());
        assert!(!board.toggle_flag((0, 1)).unwrap().has_update());
        assert!(!board.status().is_finished());

        assert!(board.reveal((2, 2)).unwrap().has_update());
        assert_eq!(board.status(), GameStatus::Won);
        assert!(board.status().is_finished());
        assert!(!board.reveal((1, 1)).unwrap().has_update());
    }
}

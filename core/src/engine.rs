use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Game state for one square board: cell grid plus the `game_over` and `won` flags.
///
/// Every coordinate-taking method checks its `(y, x)` argument and reports
/// [`GameError::OutOfBounds`] without touching the board. After the game is over, `reveal` and
/// `toggle_flag` are no-ops until the board is replaced.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
    game_over: bool,
    won: bool,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Validates the parameters and places mines randomly from `seed`.
    pub fn new(size: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        let config = GameConfig::new(size, mines)?;
        Ok(Self::generate(config, RandomLayoutGenerator::new(seed)))
    }

    pub fn generate(config: GameConfig, generator: impl LayoutGenerator) -> Self {
        Self::from_layout(generator.generate(config))
    }

    /// Builds a fresh board over a fixed layout, precomputing every neighbor count.
    pub fn from_layout(layout: MineLayout) -> Self {
        let size = layout.size();
        let cells = Array2::from_shape_fn(square_dim(size), |(y, x)| {
            // indices come from a board whose side fits in a Coord
            let coords = (y as Coord, x as Coord);
            let is_mine = layout.contains_mine(coords);
            Cell {
                is_mine,
                adjacent_mines: if is_mine {
                    0
                } else {
                    layout.adjacent_mine_count(coords)
                },
                state: CellState::Hidden,
            }
        });

        Self {
            cells,
            mine_count: layout.mine_count(),
            revealed_count: 0,
            flagged_count: 0,
            game_over: false,
            won: false,
            triggered_mine: None,
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn height(&self) -> Coord {
        self.size()
    }

    pub fn width(&self) -> Coord {
        self.size()
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.game_config().safe_cells()
    }

    /// Number of non-mine cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags; negative when the player placed more flags than there are mines.
    pub fn mines_left(&self) -> isize {
        (self.mine_count as isize) - (self.flagged_count as isize)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.won) {
            (false, _) => GameStatus::Playing,
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
        }
    }

    /// The mine whose reveal lost the game, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds(coords.0, coords.1))
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[nd_index(coords)])
    }

    /// All cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| ((y as Coord, x as Coord), cell))
    }

    /// Hidden `<->` Flagged. Revealed cells are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        if self.game_over {
            return Ok(NoChange);
        }

        let cell = &mut self.cells[nd_index(coords)];
        Ok(match cell.state {
            Hidden => {
                cell.state = Flagged;
                self.flagged_count += 1;
                Changed
            }
            Flagged => {
                cell.state = Hidden;
                self.flagged_count -= 1;
                Changed
            }
            Revealed => NoChange,
        })
    }

    /// Reveals a hidden cell.
    ///
    /// A mine ends the game as a loss. A zero cell opens its whole zero region plus the
    /// numbered border around it; flagged cells are skipped and stop the cascade. Revealed
    /// and flagged targets are no-ops.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        if self.game_over || !self.cells[nd_index(coords)].is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = &mut self.cells[nd_index(coords)];
        cell.state = CellState::Revealed;
        if cell.is_mine {
            log::debug!("Mine hit at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.game_over = true;
            return Ok(RevealOutcome::HitMine);
        }
        self.revealed_count += 1;

        if cell.adjacent_mines == 0 {
            let opened = self.flood_reveal(coords);
            log::trace!("Cascade from {:?} opened {} more cells", coords, opened);
        }

        if self.revealed_count == self.safe_cell_count() {
            log::debug!("Board cleared");
            self.won = true;
            self.game_over = true;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Opens the neighborhood of an already revealed zero cell, returning how many cells it
    /// revealed. Only hidden cells are queued and every cell is revealed at most once, so the
    /// walk is bounded by the board area.
    fn flood_reveal(&mut self, origin: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit: VecDeque<Coord2> = self.hidden_neighbors(origin).collect();

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.cells[nd_index(coords)];
            if !cell.is_hidden() {
                continue;
            }

            // zero cells never border a mine, so nothing queued here is one
            debug_assert!(!cell.is_mine);
            cell.state = CellState::Revealed;
            self.revealed_count += 1;
            opened += 1;

            if cell.adjacent_mines == 0 {
                to_visit.extend(self.hidden_neighbors(coords));
            }
        }

        opened
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        NeighborIter::new(coords, self.size())
            .filter(|&pos| self.cells[nd_index(pos)].is_hidden())
    }
}

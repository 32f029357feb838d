use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board size is zero, or the mine count is not strictly between zero and the cell count.
    #[error("Invalid configuration: {mines} mines on a {size}x{size} board")]
    InvalidConfiguration { size: Coord, mines: CellCount },
    /// Coordinates `(y, x)` fall outside the board.
    #[error("Coordinates ({0}, {1}) are out of bounds")]
    OutOfBounds(Coord, Coord),
}

pub type Result<T> = core::result::Result<T, GameError>;

//! One game on the board screen: the engine board plus the player's cursor.

use saper_core::{Board, Coord2, GameConfig, RandomLayoutGenerator};

use crate::input::Action;
use crate::menu::Preset;
use crate::seed::SeedSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionControl {
    Stay,
    BackToMenu,
}

#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    cursor: Coord2,
}

impl Session {
    /// Starts a game; an invalid preset is refused and no game is started.
    pub fn start(preset: Preset, seed: u64) -> saper_core::Result<Self> {
        let config = preset.config()?;
        Ok(Self::with_board(Self::new_board(config, seed)))
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            cursor: (0, 0),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn apply(&mut self, action: Action, seeds: &mut SeedSource) -> SessionControl {
        let finished = self.board.status().is_finished();
        match action {
            Action::Back => return SessionControl::BackToMenu,
            Action::Restart if finished => self.restart(seeds.next_seed()),
            // finished boards only take restart and back
            _ if finished => {}
            Action::MoveUp => self.cursor.0 = self.cursor.0.saturating_sub(1),
            Action::MoveDown => self.cursor.0 = self.clamped(self.cursor.0.saturating_add(1)),
            Action::MoveLeft => self.cursor.1 = self.cursor.1.saturating_sub(1),
            Action::MoveRight => self.cursor.1 = self.clamped(self.cursor.1.saturating_add(1)),
            Action::Confirm => match self.board.reveal(self.cursor) {
                Ok(outcome) if outcome.has_update() => {
                    log::debug!("reveal {:?}: {:?}", self.cursor, outcome)
                }
                Ok(_) => log::trace!("reveal {:?}: nothing to do", self.cursor),
                Err(err) => log::warn!("reveal rejected: {}", err),
            },
            Action::Flag => match self.board.toggle_flag(self.cursor) {
                Ok(outcome) if outcome.has_update() => {
                    log::debug!("flag {:?}: {:?}", self.cursor, outcome)
                }
                Ok(_) => log::trace!("flag {:?}: nothing to do", self.cursor),
                Err(err) => log::warn!("flag rejected: {}", err),
            },
            Action::Restart => {}
        }
        SessionControl::Stay
    }

    fn restart(&mut self, seed: u64) {
        let config = self.board.game_config();
        log::info!("Restarting {}x{} board", config.size(), config.size());
        self.board = Self::new_board(config, seed);
        self.cursor = (0, 0);
    }

    fn new_board(config: GameConfig, seed: u64) -> Board {
        Board::generate(config, RandomLayoutGenerator::new(seed))
    }

    fn clamped(&self, axis: u8) -> u8 {
        axis.min(self.board.size() - 1)
    }
}

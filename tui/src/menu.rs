//! Board size selection screen.

use saper_core::{CellCount, Coord, GameConfig};

use crate::input::Action;

/// A board size offered by the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Preset {
    pub size: Coord,
    pub mines: CellCount,
}

impl Preset {
    pub const fn new(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn config(self) -> saper_core::Result<GameConfig> {
        GameConfig::new(self.size, self.mines)
    }
}

pub const PRESETS: [Preset; 3] = [
    Preset::new(6, 6),
    Preset::new(8, 12),
    Preset::new(10, 15),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    Stay,
    Start(Preset),
    Quit,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn presets(&self) -> &'static [Preset] {
        &PRESETS
    }

    pub fn apply(&mut self, action: Action) -> MenuOutcome {
        let count = PRESETS.len();
        match action {
            Action::MoveUp => {
                self.selected = (self.selected + count - 1) % count;
                MenuOutcome::Stay
            }
            Action::MoveDown => {
                self.selected = (self.selected + 1) % count;
                MenuOutcome::Stay
            }
            Action::Confirm => MenuOutcome::Start(PRESETS[self.selected]),
            Action::Back => MenuOutcome::Quit,
            _ => MenuOutcome::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid_configs() {
        for preset in PRESETS {
            assert!(preset.config().is_ok(), "{preset:?}");
        }
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut menu = MenuState::default();

        assert_eq!(menu.apply(Action::MoveUp), MenuOutcome::Stay);
        assert_eq!(menu.selected(), 2);
        menu.apply(Action::MoveDown);
        assert_eq!(menu.selected(), 0);
        menu.apply(Action::MoveDown);
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn confirm_starts_selected_preset() {
        let mut menu = MenuState::default();
        menu.apply(Action::MoveDown);

        assert_eq!(menu.apply(Action::Confirm), MenuOutcome::Start(Preset::new(8, 12)));
    }

    #[test]
    fn back_quits_and_other_keys_stay() {
        let mut menu = MenuState::default();

        assert_eq!(menu.apply(Action::Flag), MenuOutcome::Stay);
        assert_eq!(menu.apply(Action::MoveLeft), MenuOutcome::Stay);
        assert_eq!(menu.apply(Action::Back), MenuOutcome::Quit);
    }
}

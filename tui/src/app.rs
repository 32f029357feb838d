//! Screen state machine: the menu picks a preset, the game screen plays it.

use crossterm::event::KeyEvent;

use crate::input::{self, Action};
use crate::menu::{MenuOutcome, MenuState};
use crate::seed::SeedSource;
use crate::session::{Session, SessionControl};
use crate::term::{FrameBuffer, Viewport, view};

pub enum Screen {
    Menu(MenuState),
    Playing(Session),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

pub struct App {
    screen: Screen,
    seeds: SeedSource,
}

impl App {
    pub fn new(seeds: SeedSource) -> Self {
        Self {
            screen: Screen::Menu(MenuState::default()),
            seeds,
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if input::is_force_quit(key) {
            return Control::Exit;
        }
        match input::map_key(key) {
            Some(action) => self.apply(action),
            None => Control::Continue,
        }
    }

    pub fn apply(&mut self, action: Action) -> Control {
        let next = match &mut self.screen {
            Screen::Menu(menu) => match menu.apply(action) {
                MenuOutcome::Stay => None,
                MenuOutcome::Quit => return Control::Exit,
                MenuOutcome::Start(preset) => {
                    let seed = self.seeds.next_seed();
                    match Session::start(preset, seed) {
                        Ok(session) => {
                            log::info!("Starting {:?} with seed {}", preset, seed);
                            Some(Screen::Playing(session))
                        }
                        Err(err) => {
                            log::error!("Cannot start {:?}: {}", preset, err);
                            None
                        }
                    }
                }
            },
            Screen::Playing(session) => match session.apply(action, &mut self.seeds) {
                SessionControl::Stay => None,
                SessionControl::BackToMenu => Some(Screen::Menu(MenuState::default())),
            },
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
        Control::Continue
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match &self.screen {
            Screen::Menu(menu) => view::render_menu(menu, viewport, fb),
            Screen::Playing(session) => view::render_game(session, viewport, fb),
        }
    }
}
